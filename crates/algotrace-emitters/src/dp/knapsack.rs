//! 0/1 knapsack over a `(items + 1) x (capacity + 1)` value table.
//!
//! Row `i` holds the best value achievable with the first `i` items at each
//! capacity. Cells where the item does not fit copy the row above with a
//! `reject` step; other cells compare skipping against taking the item and
//! record an `update` when taking is strictly better. Backtracking walks the
//! rows bottom-up, one `backtrack` step per item.

use std::time::Instant;

use algotrace_core::input::KnapsackInput;
use algotrace_core::limits::{ensure_len, ensure_range};
use algotrace_core::{
    Algorithm, AlgorithmDescriptor, AlgorithmInput, AlgorithmResult, Capture, Category,
    Difficulty, DpDetail, InputKind, Limits, OperationTag, Outcome, Snapshot, StepDraft,
    StepRecorder, TraceError,
};

use crate::{complete, rejected};

static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "knapsack",
    name: "0/1 Knapsack",
    category: Category::DynamicProgramming,
    difficulty: Difficulty::Advanced,
    time_complexity: "O(n * W)",
    space_complexity: "O(n * W)",
    input: InputKind::Knapsack,
};

const EXPLANATION: &str = "The 0/1 knapsack problem picks a subset of items, each \
with a weight and a value, so that the total weight stays within the capacity and \
the total value is as large as possible. Each item can be taken at most once. The \
table has one row per item and one column per capacity; a cell holds the best value \
using only the items up to that row. Each cell chooses the better of skipping the \
item (the cell above) or taking it (the cell above, shifted left by the item's \
weight, plus its value). Walking back up the finished table reveals which items were \
taken.";

/// Traced 0/1 knapsack.
#[derive(Debug, Clone, Default)]
pub struct Knapsack {
    limits: Limits,
}

impl Knapsack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Knapsack { limits }
    }

    fn validate(&self, input: &KnapsackInput) -> Result<(), TraceError> {
        let limits = &self.limits;
        ensure_len("weights", input.weights.len(), limits.max_knapsack_items)?;
        if input.weights.len() != input.values.len() {
            return Err(TraceError::Malformed {
                reason: format!(
                    "{} weights but {} values; every item needs both",
                    input.weights.len(),
                    input.values.len()
                ),
            });
        }
        ensure_range(
            "capacity",
            as_i64(input.capacity),
            0,
            limits.max_knapsack_capacity as u64,
        )?;
        for (i, (&weight, &value)) in input.weights.iter().zip(&input.values).enumerate() {
            ensure_range(&format!("weights[{i}]"), as_i64(weight), 1, limits.max_operand)?;
            ensure_range(
                &format!("values[{i}]"),
                i64::try_from(value).unwrap_or(i64::MAX),
                0,
                limits.max_operand,
            )?;
        }
        Ok(())
    }
}

fn as_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// The DP table; row 0 is the empty item set.
struct Grid(Vec<Vec<u64>>);

impl Capture for Grid {
    fn capture(&self) -> Snapshot {
        Snapshot::Table(self.0.clone())
    }
}

impl Algorithm for Knapsack {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn execute(&self, input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
        let started = Instant::now();
        let AlgorithmInput::Knapsack(items) = input else {
            return Err(rejected(&DESCRIPTOR, DESCRIPTOR.mismatch(input)));
        };
        self.validate(items).map_err(|e| rejected(&DESCRIPTOR, e))?;

        let n = items.weights.len();
        let capacity = items.capacity;
        let mut grid = Grid(vec![vec![0; capacity + 1]; n + 1]);
        let mut recorder = StepRecorder::new();
        recorder.record(
            &grid,
            StepDraft::new(
                OperationTag::Init,
                format!(
                    "Build a {} x {} table; with no items every capacity is worth 0",
                    n + 1,
                    capacity + 1
                ),
            )
            .detail(DpDetail {
                capacity: Some(capacity),
                ..Default::default()
            }),
        );

        for i in 1..=n {
            let weight = items.weights[i - 1];
            let value = items.values[i - 1];
            for w in 1..=capacity {
                let skip = grid.0[i - 1][w];
                if weight > w {
                    grid.0[i][w] = skip;
                    recorder.record(
                        &grid,
                        StepDraft::new(
                            OperationTag::Reject,
                            format!(
                                "Item {} (weight {weight}) does not fit in capacity {w}; carry down {skip}",
                                i - 1
                            ),
                        )
                        .highlight([(i, w)])
                        .compare([(i - 1, w)])
                        .detail(DpDetail {
                            i: Some(i - 1),
                            capacity: Some(w),
                            best: Some(skip),
                            ..Default::default()
                        }),
                    );
                    continue;
                }

                let take = grid.0[i - 1][w - weight] + value;
                recorder.record(
                    &grid,
                    StepDraft::new(
                        OperationTag::Comparison,
                        format!(
                            "Capacity {w}: skip item {} for {skip}, or take it for {} + {value} = {take}",
                            i - 1,
                            grid.0[i - 1][w - weight]
                        ),
                    )
                    .highlight([(i, w)])
                    .compare([(i - 1, w), (i - 1, w - weight)])
                    .detail(DpDetail {
                        i: Some(i - 1),
                        capacity: Some(w),
                        candidate: Some(take),
                        best: Some(skip),
                        ..Default::default()
                    }),
                );

                if take > skip {
                    grid.0[i][w] = take;
                    recorder.record(
                        &grid,
                        StepDraft::new(
                            OperationTag::Update,
                            format!(
                                "Take item {}: best value at capacity {w} is now {take}",
                                i - 1
                            ),
                        )
                        .highlight([(i, w)])
                        .secondary([(i - 1, w - weight)])
                        .detail(DpDetail {
                            i: Some(i - 1),
                            capacity: Some(w),
                            best: Some(take),
                            ..Default::default()
                        }),
                    );
                } else {
                    grid.0[i][w] = skip;
                    recorder.record(
                        &grid,
                        StepDraft::new(
                            OperationTag::Reject,
                            format!(
                                "Skip item {}: {take} is no better than {skip} at capacity {w}",
                                i - 1
                            ),
                        )
                        .highlight([(i, w)])
                        .secondary([(i - 1, w)])
                        .detail(DpDetail {
                            i: Some(i - 1),
                            capacity: Some(w),
                            candidate: Some(take),
                            best: Some(skip),
                            ..Default::default()
                        }),
                    );
                }
            }
        }

        let best_value = grid.0[n][capacity];
        let mut chosen = Vec::new();
        let mut w = capacity;
        for i in (1..=n).rev() {
            let taken = grid.0[i][w] != grid.0[i - 1][w];
            let description = if taken {
                format!(
                    "Cell ({i}, {w}) differs from the row above, so item {} was taken",
                    i - 1
                )
            } else {
                format!(
                    "Cell ({i}, {w}) equals the row above, so item {} was skipped",
                    i - 1
                )
            };
            recorder.record(
                &grid,
                StepDraft::new(OperationTag::Backtrack, description)
                    .highlight([(i, w)])
                    .detail(DpDetail {
                        i: Some(i - 1),
                        capacity: Some(w),
                        best: Some(grid.0[i][w]),
                        ..Default::default()
                    }),
            );
            if taken {
                chosen.push(i - 1);
                w -= items.weights[i - 1];
            }
        }
        chosen.reverse();

        let listed: Vec<String> = chosen.iter().map(|i| i.to_string()).collect();
        recorder.record(
            &grid,
            StepDraft::new(
                OperationTag::Complete,
                format!(
                    "Best value {best_value} using item(s) [{}]",
                    listed.join(", ")
                ),
            )
            .highlight([(n, capacity)])
            .detail(DpDetail {
                capacity: Some(capacity),
                best: Some(best_value),
                ..Default::default()
            }),
        );

        let outcome = Outcome::Knapsack {
            best_value,
            items: chosen,
        };
        Ok(complete(&DESCRIPTOR, outcome, recorder, started))
    }

    fn default_input(&self) -> AlgorithmInput {
        AlgorithmInput::Knapsack(KnapsackInput {
            weights: vec![1, 3, 4, 5],
            values: vec![1, 4, 5, 7],
            capacity: 7,
        })
    }

    fn explanation(&self) -> &'static str {
        EXPLANATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(weights: Vec<usize>, values: Vec<u64>, capacity: usize) -> AlgorithmInput {
        AlgorithmInput::Knapsack(KnapsackInput {
            weights,
            values,
            capacity,
        })
    }

    #[test]
    fn default_input_picks_middle_items() {
        let knapsack = Knapsack::new();
        let result = knapsack.execute(&knapsack.default_input()).unwrap();
        assert_eq!(
            result.result,
            Outcome::Knapsack {
                best_value: 9,
                items: vec![1, 2],
            }
        );
        assert_eq!(result.count(OperationTag::Backtrack), 4);
        match result.final_step().unwrap().snapshot() {
            Snapshot::Table(rows) => {
                assert_eq!(rows.len(), 5);
                assert_eq!(rows[4][7], 9);
            }
            other => panic!("unexpected snapshot {:?}", other),
        }
    }

    #[test]
    fn every_cell_gets_a_verdict() {
        let result = Knapsack::new()
            .execute(&items(vec![2, 3], vec![3, 4], 5))
            .unwrap();
        // 2 items x 5 capacities, each ending in exactly one update or reject.
        assert_eq!(
            result.count(OperationTag::Update) + result.count(OperationTag::Reject),
            10
        );
        assert_eq!(
            result.result,
            Outcome::Knapsack {
                best_value: 7,
                items: vec![0, 1],
            }
        );
    }

    #[test]
    fn zero_capacity_takes_nothing() {
        let result = Knapsack::new()
            .execute(&items(vec![1], vec![5], 0))
            .unwrap();
        assert_eq!(
            result.result,
            Outcome::Knapsack {
                best_value: 0,
                items: vec![],
            }
        );
    }

    #[test]
    fn mismatched_lengths_are_malformed() {
        let err = Knapsack::new()
            .execute(&items(vec![1, 2], vec![5], 4))
            .unwrap_err();
        assert!(matches!(err, TraceError::Malformed { .. }));
    }

    #[test]
    fn caps_are_enforced() {
        let knapsack = Knapsack::new();
        assert!(matches!(
            knapsack.execute(&items(vec![1; 9], vec![1; 9], 5)),
            Err(TraceError::TooLarge { .. })
        ));
        assert!(matches!(
            knapsack.execute(&items(vec![1], vec![1], 21)),
            Err(TraceError::OutOfRange { .. })
        ));
        assert!(matches!(
            knapsack.execute(&items(vec![0], vec![1], 5)),
            Err(TraceError::OutOfRange { .. })
        ));
    }
}
