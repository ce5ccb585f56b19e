//! Input size caps enforced at validation time.
//!
//! Caps keep every trace short enough to run instantly and to replay for a
//! human audience. They are configuration, not correctness constraints: an
//! emitter built with larger limits produces a longer but equally valid trace.

use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// Validation caps shared by all emitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum number of elements in array input. Default: 12.
    pub max_array_len: usize,
    /// Maximum number of nodes in graph input. Default: 12.
    pub max_graph_nodes: usize,
    /// Maximum number of edges in graph input: adjacency entries for
    /// unweighted graphs, listed edges for weighted ones. Default: 40.
    pub max_graph_edges: usize,
    /// Largest accepted numeric operand (GCD operands, edge weights,
    /// knapsack values). Default: 1000.
    pub max_operand: u64,
    /// Largest accepted sieve bound. Default: 100.
    pub max_sieve_limit: u64,
    /// Maximum number of knapsack items. Default: 8.
    pub max_knapsack_items: usize,
    /// Maximum knapsack capacity. Default: 20.
    pub max_knapsack_capacity: usize,
    /// Maximum number of heap operations after the initial build. Default: 12.
    pub max_heap_operations: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_array_len: 12,
            max_graph_nodes: 12,
            max_graph_edges: 40,
            max_operand: 1000,
            max_sieve_limit: 100,
            max_knapsack_items: 8,
            max_knapsack_capacity: 20,
            max_heap_operations: 12,
        }
    }
}

/// Fails with [`TraceError::TooLarge`] when `len > max`.
pub fn ensure_len(field: &str, len: usize, max: usize) -> Result<(), TraceError> {
    if len > max {
        return Err(TraceError::TooLarge {
            field: field.to_string(),
            len,
            max,
        });
    }
    Ok(())
}

/// Fails with [`TraceError::OutOfRange`] unless `min <= value <= max`, and
/// returns the value as `u64` otherwise. `min` must be non-negative.
pub fn ensure_range(field: &str, value: i64, min: u64, max: u64) -> Result<u64, TraceError> {
    let max_i = i64::try_from(max).unwrap_or(i64::MAX);
    let min_i = i64::try_from(min).unwrap_or(i64::MAX);
    if value < min_i || value > max_i {
        return Err(TraceError::OutOfRange {
            field: field.to_string(),
            value,
            min: min_i,
            max: max_i,
        });
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_caps() {
        let limits = Limits::default();
        assert_eq!(limits.max_array_len, 12);
        assert_eq!(limits.max_graph_edges, 40);
        assert_eq!(limits.max_operand, 1000);
    }

    #[test]
    fn ensure_len_accepts_exact_cap() {
        assert!(ensure_len("values", 12, 12).is_ok());
        let err = ensure_len("values", 13, 12).unwrap_err();
        assert_eq!(err.to_string(), "values has 13 entries, the maximum is 12");
    }

    #[test]
    fn ensure_range_rejects_negative() {
        assert_eq!(ensure_range("a", 0, 0, 1000).unwrap(), 0);
        assert_eq!(ensure_range("a", 1000, 0, 1000).unwrap(), 1000);
        assert!(matches!(
            ensure_range("a", -1, 0, 1000),
            Err(TraceError::OutOfRange { value: -1, .. })
        ));
        assert!(ensure_range("weight", 0, 1, 1000).is_err());
    }

    proptest! {
        #[test]
        fn ensure_range_accepts_exactly_the_interval(value in -2000i64..2000) {
            let accepted = ensure_range("operand", value, 0, 1000).is_ok();
            prop_assert_eq!(accepted, (0..=1000).contains(&value));
        }

        #[test]
        fn ensure_len_accepts_up_to_the_cap(len in 0usize..64, max in 0usize..32) {
            prop_assert_eq!(ensure_len("values", len, max).is_ok(), len <= max);
        }
    }
}
