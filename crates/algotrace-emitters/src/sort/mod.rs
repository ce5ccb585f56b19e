//! Comparison sorts over integer arrays.

mod bubble;
mod selection;

use algotrace_core::limits::ensure_len;
use algotrace_core::{AlgorithmInput, Limits, SortDetail, TraceError};

pub use bubble::BubbleSort;
pub use selection::SelectionSort;

/// Validates array input against the length cap and returns a working copy.
pub(crate) fn validate_array(values: &[i64], limits: &Limits) -> Result<Vec<i64>, TraceError> {
    ensure_len("values", values.len(), limits.max_array_len)?;
    Ok(values.to_vec())
}

pub(crate) fn default_array_input() -> AlgorithmInput {
    AlgorithmInput::array(vec![64, 25, 12, 22, 11, 90, 34])
}

/// Running counters every sort narrates alongside its steps.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Tally {
    pub comparisons: usize,
    pub swaps: usize,
}

impl Tally {
    pub fn detail(&self) -> SortDetail {
        SortDetail {
            comparisons: self.comparisons,
            swaps: self.swaps,
            ..Default::default()
        }
    }
}
