//! Longest strictly increasing subsequence, O(n^2) DP.
//!
//! `lengths[i]` is the length of the longest increasing subsequence ending at
//! `i` and `predecessors[i]` the previous element of that subsequence. Every
//! pair `(j, i)` with `j < i` is one `comparison` step followed by either an
//! `update` (strictly better length through `j`) or a `reject`. Equal lengths
//! keep the earlier predecessor.

use std::time::Instant;

use algotrace_core::snapshot::SequenceTable;
use algotrace_core::{
    Algorithm, AlgorithmDescriptor, AlgorithmInput, AlgorithmResult, Category, Difficulty,
    DpDetail, InputKind, Limits, OperationTag, Outcome, StepDraft, StepRecorder, TraceError,
};

use crate::sort::validate_array;
use crate::{complete, rejected};

static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "lis",
    name: "Longest Increasing Subsequence",
    category: Category::DynamicProgramming,
    difficulty: Difficulty::Intermediate,
    time_complexity: "O(n^2)",
    space_complexity: "O(n)",
    input: InputKind::Array,
};

const EXPLANATION: &str = "The longest increasing subsequence problem asks for the \
longest run of elements, not necessarily adjacent, whose values strictly increase. \
The DP table stores, for every position, the length of the best subsequence that \
ends there. Each position looks back at every earlier smaller value and extends the \
best of those subsequences by one, remembering which element it extended. The answer \
ends at the position with the largest length and is rebuilt by following those \
remembered links backwards.";

/// Traced LIS over integer arrays.
#[derive(Debug, Clone, Default)]
pub struct LongestIncreasingSubsequence {
    limits: Limits,
}

impl LongestIncreasingSubsequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        LongestIncreasingSubsequence { limits }
    }
}

fn length(table: &SequenceTable, index: usize) -> u64 {
    table.lengths[index] as u64
}

impl Algorithm for LongestIncreasingSubsequence {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn execute(&self, input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
        let started = Instant::now();
        let AlgorithmInput::Array { values } = input else {
            return Err(rejected(&DESCRIPTOR, DESCRIPTOR.mismatch(input)));
        };
        let values = validate_array(values, &self.limits).map_err(|e| rejected(&DESCRIPTOR, e))?;

        let n = values.len();
        let mut table = SequenceTable {
            values,
            lengths: vec![1; n],
            predecessors: vec![None; n],
        };
        let mut recorder = StepRecorder::new();
        recorder.record(
            &table,
            StepDraft::new(
                OperationTag::Init,
                format!("Every one of the {n} element(s) starts as a subsequence of length 1"),
            ),
        );

        for i in 1..n {
            for j in 0..i {
                recorder.record(
                    &table,
                    StepDraft::new(
                        OperationTag::Comparison,
                        format!(
                            "Can {} at position {i} extend the subsequence ending at {} (position {j}, length {})?",
                            table.values[i], table.values[j], table.lengths[j]
                        ),
                    )
                    .highlight([i])
                    .compare([j])
                    .detail(DpDetail {
                        i: Some(i),
                        j: Some(j),
                        candidate: Some(length(&table, j) + 1),
                        best: Some(length(&table, i)),
                        ..Default::default()
                    }),
                );

                let extends = table.values[j] < table.values[i];
                if extends && table.lengths[j] + 1 > table.lengths[i] {
                    let previous = table.lengths[i];
                    table.lengths[i] = table.lengths[j] + 1;
                    table.predecessors[i] = Some(j);
                    recorder.record(
                        &table,
                        StepDraft::new(
                            OperationTag::Update,
                            format!(
                                "{} < {}: length at position {i} grows from {previous} to {}",
                                table.values[j], table.values[i], table.lengths[i]
                            ),
                        )
                        .highlight([i])
                        .secondary([j])
                        .detail(DpDetail {
                            i: Some(i),
                            j: Some(j),
                            best: Some(length(&table, i)),
                            ..Default::default()
                        }),
                    );
                } else {
                    let reason = if extends {
                        format!(
                            "extending through position {j} gives {}, no better than {}",
                            table.lengths[j] + 1,
                            table.lengths[i]
                        )
                    } else {
                        format!("{} is not less than {}", table.values[j], table.values[i])
                    };
                    recorder.record(
                        &table,
                        StepDraft::new(
                            OperationTag::Reject,
                            format!("Keep length {} at position {i}: {reason}", table.lengths[i]),
                        )
                        .highlight([i])
                        .compare([j])
                        .detail(DpDetail {
                            i: Some(i),
                            j: Some(j),
                            best: Some(length(&table, i)),
                            ..Default::default()
                        }),
                    );
                }
            }
        }

        let mut subsequence = Vec::new();
        // Lowest index among the maximal lengths.
        let end = (0..n).fold(None, |best: Option<usize>, k| match best {
            Some(b) if table.lengths[b] >= table.lengths[k] => Some(b),
            _ => Some(k),
        });
        if let Some(end) = end {
            recorder.record(
                &table,
                StepDraft::new(
                    OperationTag::Select,
                    format!(
                        "The longest subsequence has length {} and ends at position {end} (value {})",
                        table.lengths[end], table.values[end]
                    ),
                )
                .highlight([end])
                .detail(DpDetail {
                    i: Some(end),
                    best: Some(length(&table, end)),
                    ..Default::default()
                }),
            );

            let mut chain = vec![end];
            let mut cursor = end;
            while let Some(prev) = table.predecessors[cursor] {
                chain.push(prev);
                recorder.record(
                    &table,
                    StepDraft::new(
                        OperationTag::Backtrack,
                        format!(
                            "Follow the link from position {cursor} back to position {prev} (value {})",
                            table.values[prev]
                        ),
                    )
                    .highlight([prev])
                    .secondary(chain.iter().copied())
                    .detail(DpDetail {
                        i: Some(cursor),
                        j: Some(prev),
                        ..Default::default()
                    }),
                );
                cursor = prev;
            }
            chain.reverse();
            subsequence = chain.iter().map(|&k| table.values[k]).collect();
        }

        let rendered: Vec<String> = subsequence.iter().map(|v| v.to_string()).collect();
        recorder.record(
            &table,
            StepDraft::new(
                OperationTag::Complete,
                format!(
                    "Longest increasing subsequence has length {}: [{}]",
                    subsequence.len(),
                    rendered.join(", ")
                ),
            )
            .detail(DpDetail {
                best: Some(subsequence.len() as u64),
                ..Default::default()
            }),
        );

        Ok(complete(
            &DESCRIPTOR,
            Outcome::Subsequence(subsequence),
            recorder,
            started,
        ))
    }

    fn default_input(&self) -> AlgorithmInput {
        AlgorithmInput::array(vec![10, 22, 9, 33, 21, 50, 41, 60])
    }

    fn explanation(&self) -> &'static str {
        EXPLANATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::Snapshot;

    #[test]
    fn classic_sequence() {
        let lis = LongestIncreasingSubsequence::new();
        let result = lis.execute(&lis.default_input()).unwrap();
        assert_eq!(result.result, Outcome::Subsequence(vec![10, 22, 33, 50, 60]));
        // 8 elements: 28 pairs, each a comparison plus a verdict.
        assert_eq!(result.summary.comparisons, 28);
        assert_eq!(
            result.count(OperationTag::Update) + result.count(OperationTag::Reject),
            28
        );
        assert_eq!(result.count(OperationTag::Backtrack), 4);
    }

    #[test]
    fn equal_lengths_keep_first_predecessor() {
        // 21 can extend 10 (length 2) or 9 (length 2); 10 comes first.
        let result = LongestIncreasingSubsequence::new()
            .execute(&AlgorithmInput::array(vec![10, 9, 21]))
            .unwrap();
        assert_eq!(result.result, Outcome::Subsequence(vec![10, 21]));
        match result.final_step().unwrap().snapshot() {
            Snapshot::Sequence(table) => {
                assert_eq!(table.lengths, vec![1, 1, 2]);
                assert_eq!(table.predecessors, vec![None, None, Some(0)]);
            }
            other => panic!("unexpected snapshot {:?}", other),
        }
    }

    #[test]
    fn equal_values_are_not_increasing() {
        let result = LongestIncreasingSubsequence::new()
            .execute(&AlgorithmInput::array(vec![5, 5, 5]))
            .unwrap();
        assert_eq!(result.result, Outcome::Subsequence(vec![5]));
        assert_eq!(result.count(OperationTag::Update), 0);
    }

    #[test]
    fn empty_input_has_minimal_trace() {
        let result = LongestIncreasingSubsequence::new()
            .execute(&AlgorithmInput::array(vec![]))
            .unwrap();
        assert_eq!(result.result, Outcome::Subsequence(vec![]));
        assert_eq!(result.steps.len(), 2);
    }

    #[test]
    fn lowest_end_index_wins_ties() {
        // Both [1, 3] and [1, 2] have length 2; the one ending first is kept.
        let result = LongestIncreasingSubsequence::new()
            .execute(&AlgorithmInput::array(vec![1, 3, 2]))
            .unwrap();
        assert_eq!(result.result, Outcome::Subsequence(vec![1, 3]));
    }
}
