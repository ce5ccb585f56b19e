//! Bubble sort with early exit.
//!
//! Pass `p` compares adjacent pairs over the unsorted prefix `0..n-p`. A pass
//! that swaps nothing proves the array sorted and ends the run with a
//! `no_swap` step; otherwise the pass closes with a `mark` step for the
//! position that just settled.

use std::time::Instant;

use algotrace_core::{
    Algorithm, AlgorithmDescriptor, AlgorithmInput, AlgorithmResult, Category, Difficulty,
    InputKind, Limits, OperationTag, Outcome, SortDetail, StepDraft, StepRecorder, TraceError,
};

use super::{default_array_input, validate_array, Tally};
use crate::{complete, rejected};

static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "bubble-sort",
    name: "Bubble Sort",
    category: Category::Sorting,
    difficulty: Difficulty::Beginner,
    time_complexity: "O(n^2)",
    space_complexity: "O(1)",
    input: InputKind::Array,
};

const EXPLANATION: &str = "Bubble sort walks the array comparing neighbours and swaps \
any pair that is out of order, so after each pass the largest remaining value has \
bubbled to the end of the unsorted part. A pass that makes no swaps means every \
neighbouring pair is already in order, and the sort stops early. Already sorted input \
therefore finishes after a single pass of n-1 comparisons.";

/// Traced bubble sort.
#[derive(Debug, Clone, Default)]
pub struct BubbleSort {
    limits: Limits,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        BubbleSort { limits }
    }
}

impl Algorithm for BubbleSort {
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
                format!("Start bubble sort on {n} element(s)"),
            )
            .detail(tally.detail()),
        );

        for pass in 0..n.saturating_sub(1) {
            let end = n - pass - 1;
            let mut swapped = false;

            for j in 0..end {
                tally.comparisons += 1;
                let detail = SortDetail {
                    pass: Some(pass + 1),
                    j: Some(j),
                    ..tally.detail()
                };
                recorder.record(
                    &values,
                    StepDraft::new(
                        OperationTag::Comparison,
                        format!(
                            "Compare {} at position {j} with {} at position {}",
                            values[j],
                            values[j + 1],
                            j + 1
                        ),
                    )
                    .compare([j, j + 1])
                    .secondary(end + 1..n)
                    .detail(detail),
                );

                if values[j] > values[j + 1] {
                    values.swap(j, j + 1);
                    tally.swaps += 1;
                    swapped = true;
                    recorder.record(
                        &values,
                        StepDraft::new(
                            OperationTag::Swap,
                            format!(
                                "{} > {}: swap positions {j} and {}",
                                values[j + 1],
                                values[j],
                                j + 1
                            ),
                        )
                        .highlight([j, j + 1])
                        .secondary(end + 1..n)
                        .detail(SortDetail {
                            pass: Some(pass + 1),
                            j: Some(j),
                            ..tally.detail()
                        }),
                    );
                }
            }

            if !swapped {
                recorder.record(
                    &values,
                    StepDraft::new(
                        OperationTag::NoSwap,
                        format!(
                            "Pass {} made no swaps; the array is already sorted",
                            pass + 1
                        ),
                    )
                    .secondary(0..n)
                    .detail(SortDetail {
                        pass: Some(pass + 1),
                        ..tally.detail()
                    }),
                );
                break;
            }

            recorder.record(
                &values,
                StepDraft::new(
                    OperationTag::Mark,
                    format!(
                        "End of pass {}: {} is in its final place at position {end}",
                        pass + 1,
                        values[end]
                    ),
                )
                .highlight([end])
                .secondary(end..n)
                .detail(SortDetail {
                    pass: Some(pass + 1),
                    ..tally.detail()
                }),
            );
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_default_input() {
        let sort = BubbleSort::new();
        let result = sort.execute(&sort.default_input()).unwrap();
        assert_eq!(
            result.result,
            Outcome::Sorted(vec![11, 12, 22, 25, 34, 64, 90])
        );
        assert_eq!(result.summary.swaps, result.count(OperationTag::Swap));
    }

    #[test]
    fn sorted_input_exits_after_one_pass() {
        let result = BubbleSort::new()
            .execute(&AlgorithmInput::array(vec![1, 2, 3, 4, 5]))
            .unwrap();
        assert_eq!(result.summary.comparisons, 4);
        assert_eq!(result.summary.swaps, 0);
        assert_eq!(result.count(OperationTag::NoSwap), 1);
        assert_eq!(result.count(OperationTag::Mark), 0);
    }

    #[test]
    fn reversed_input_swaps_every_pair() {
        let result = BubbleSort::new()
            .execute(&AlgorithmInput::array(vec![4, 3, 2, 1]))
            .unwrap();
        assert_eq!(result.result, Outcome::Sorted(vec![1, 2, 3, 4]));
        assert_eq!(result.summary.comparisons, 6);
        assert_eq!(result.summary.swaps, 6);
        assert_eq!(result.count(OperationTag::Mark), 3);
    }

    #[test]
    fn equal_elements_are_not_swapped() {
        let result = BubbleSort::new()
            .execute(&AlgorithmInput::array(vec![3, 3, 3]))
            .unwrap();
        assert_eq!(result.summary.swaps, 0);
        assert_eq!(result.result, Outcome::Sorted(vec![3, 3, 3]));
    }

    #[test]
    fn wrong_input_shape() {
        let err = BubbleSort::new()
            .execute(&AlgorithmInput::Pair { a: 1, b: 2 })
            .unwrap_err();
        assert!(matches!(err, TraceError::InputMismatch { .. }));
    }
}
