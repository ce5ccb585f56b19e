//! Selection sort.
//!
//! Each pass scans the entire unsorted remainder, so the number of
//! `comparison` steps is always n(n-1)/2. When the current position already
//! holds the minimum the pass ends with a `no_swap` step instead of a `swap`.

use std::time::Instant;

use algotrace_core::{
    Algorithm, AlgorithmDescriptor, AlgorithmInput, AlgorithmResult, Category, Difficulty,
    InputKind, Limits, OperationTag, Outcome, SortDetail, StepDraft, StepRecorder, TraceError,
};

use super::{default_array_input, validate_array, Tally};
use crate::{complete, rejected};

static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "selection-sort",
    name: "Selection Sort",
    category: Category::Sorting,
    difficulty: Difficulty::Beginner,
    time_complexity: "O(n^2)",
    space_complexity: "O(1)",
    input: InputKind::Array,
};

const EXPLANATION: &str = "Selection sort grows a sorted prefix one element at a time. \
For each position it scans the whole unsorted remainder to find the smallest value \
and swaps it into place. It always performs n(n-1)/2 comparisons regardless of the \
input order but at most n-1 swaps, which makes it useful when writes are expensive.";

/// Traced selection sort.
#[derive(Debug, Clone, Default)]
pub struct SelectionSort {
    limits: Limits,
}

impl SelectionSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        SelectionSort { limits }
    }
}

impl Algorithm for SelectionSort {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn execute(&self, input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
        let started = Instant::now();
        let AlgorithmInput::Array { values } = input else {
            return Err(rejected(&DESCRIPTOR, DESCRIPTOR.mismatch(input)));
        };
        let mut values =
            validate_array(values, &self.limits).map_err(|e| rejected(&DESCRIPTOR, e))?;

        let n = values.len();
        let mut tally = Tally::default();
        let mut recorder = StepRecorder::new();
        recorder.record(
            &values,
            StepDraft::new(
                OperationTag::Init,
                format!("Start selection sort on {n} element(s)"),
            )
            .detail(tally.detail()),
        );

        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            recorder.record(
                &values,
                StepDraft::new(
                    OperationTag::Select,
                    format!(
                        "Pass {}: assume position {i} (value {}) holds the minimum",
                        i + 1,
                        values[i]
                    ),
                )
                .highlight([i])
                .detail(SortDetail {
                    pass: Some(i + 1),
                    i: Some(i),
                    min_index: Some(min),
                    ..tally.detail()
                }),
            );

            for j in i + 1..n {
                tally.comparisons += 1;
                recorder.record(
                    &values,
                    StepDraft::new(
                        OperationTag::Comparison,
                        format!(
                            "Compare value {} at position {j} with the current minimum {} at position {min}",
                            values[j], values[min]
                        ),
                    )
                    .highlight([i])
                    .compare([j, min])
                    .detail(SortDetail {
                        pass: Some(i + 1),
                        i: Some(i),
                        j: Some(j),
                        min_index: Some(min),
                        ..tally.detail()
                    }),
                );
                if values[j] < values[min] {
                    min = j;
                    recorder.record(
                        &values,
                        StepDraft::new(
                            OperationTag::Update,
                            format!("New minimum {} found at position {j}", values[j]),
                        )
                        .highlight([j])
                        .detail(SortDetail {
                            pass: Some(i + 1),
                            i: Some(i),
                            j: Some(j),
                            min_index: Some(min),
                            ..tally.detail()
                        }),
                    );
                }
            }

            if min != i {
                values.swap(i, min);
                tally.swaps += 1;
                recorder.record(
                    &values,
                    StepDraft::new(
                        OperationTag::Swap,
                        format!(
                            "Swap positions {i} and {min}; {} is now in its final place",
                            values[i]
                        ),
                    )
                    .highlight([i, min])
                    .detail(SortDetail {
                        pass: Some(i + 1),
                        i: Some(i),
                        min_index: Some(min),
                        ..tally.detail()
                    }),
                );
            } else {
                recorder.record(
                    &values,
                    StepDraft::new(
                        OperationTag::NoSwap,
                        format!(
                            "Position {i} already holds the minimum {}; no swap needed",
                            values[i]
                        ),
                    )
                    .highlight([i])
                    .detail(SortDetail {
                        pass: Some(i + 1),
                        i: Some(i),
                        min_index: Some(min),
                        ..tally.detail()
                    }),
                );
            }
        }

        recorder.record(
            &values,
            StepDraft::new(
                OperationTag::Complete,
                format!(
                    "Array sorted with {} comparison(s) and {} swap(s)",
                    tally.comparisons, tally.swaps
                ),
            )
            .secondary(0..n)
            .detail(tally.detail()),
        );

        Ok(complete(&DESCRIPTOR, Outcome::Sorted(values), recorder, started))
    }

    fn default_input(&self) -> AlgorithmInput {
        default_array_input()
    }

    fn explanation(&self) -> &'static str {
        EXPLANATION
    }
}
