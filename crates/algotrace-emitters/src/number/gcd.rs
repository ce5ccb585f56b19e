//! Euclidean greatest common divisor.
//!
//! Operands are normalized so the larger one is the dividend. Each `divide`
//! step is recorded after the pair has advanced to `(divisor, remainder)`, so
//! its snapshot shows the next division to perform. A zero divisor is the
//! base case: `gcd(a, 0) = a` is a single `base_case` step and nothing else.

use std::time::Instant;

use algotrace_core::limits::ensure_range;
use algotrace_core::{
    Algorithm, AlgorithmDescriptor, AlgorithmInput, AlgorithmResult, Capture, Category,
    Difficulty, InputKind, Limits, NumberDetail, OperationTag, Outcome, Snapshot, StepDraft,
    StepRecorder, TraceError,
};

use crate::{complete, rejected};

static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "gcd",
    name: "Euclidean GCD",
    category: Category::NumberTheory,
    difficulty: Difficulty::Beginner,
    time_complexity: "O(log min(a, b))",
    space_complexity: "O(1)",
    input: InputKind::Pair,
};

const EXPLANATION: &str = "Euclid's algorithm rests on one fact: the greatest common \
divisor of a and b is the same as that of b and a mod b. Dividing the larger number \
by the smaller and keeping only the remainder shrinks the pair quickly, and once the \
remainder reaches zero the last non-zero divisor is the answer. If one operand is \
already zero the other one is the answer immediately.";

/// Traced Euclidean GCD.
#[derive(Debug, Clone, Default)]
pub struct EuclideanGcd {
    limits: Limits,
}

impl EuclideanGcd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        EuclideanGcd { limits }
    }

    fn validate(&self, a: i64, b: i64) -> Result<(u64, u64), TraceError> {
        let a = ensure_range("a", a, 0, self.limits.max_operand)?;
        let b = ensure_range("b", b, 0, self.limits.max_operand)?;
        Ok((a.max(b), a.min(b)))
    }
}

struct Operands {
    dividend: u64,
    divisor: u64,
}

impl Capture for Operands {
    fn capture(&self) -> Snapshot {
        Snapshot::Operands {
            dividend: self.dividend,
            divisor: self.divisor,
        }
    }
}

impl Algorithm for EuclideanGcd {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn execute(&self, input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
        let started = Instant::now();
        let AlgorithmInput::Pair { a, b } = *input else {
            return Err(rejected(&DESCRIPTOR, DESCRIPTOR.mismatch(input)));
        };
        let (dividend, divisor) = self.validate(a, b).map_err(|e| rejected(&DESCRIPTOR, e))?;

        let mut pair = Operands { dividend, divisor };
        let mut recorder = StepRecorder::new();

        if divisor == 0 {
            recorder.record(
                &pair,
                StepDraft::new(
                    OperationTag::BaseCase,
                    format!("gcd({dividend}, 0) = {dividend}: the divisor is zero"),
                )
                .detail(NumberDetail {
                    dividend: Some(dividend),
                    divisor: Some(0),
                    result: Some(dividend),
                    ..Default::default()
                }),
            );
            return Ok(complete(
                &DESCRIPTOR,
                Outcome::Number(dividend),
                recorder,
                started,
            ));
        }

        let swapped = if (dividend, divisor) != (a as u64, b as u64) {
            " (operands swapped so the larger comes first)"
        } else {
            ""
        };
        recorder.record(
            &pair,
            StepDraft::new(
                OperationTag::Init,
                format!("Compute gcd({dividend}, {divisor}){swapped}"),
            )
            .detail(NumberDetail {
                dividend: Some(dividend),
                divisor: Some(divisor),
                ..Default::default()
            }),
        );

        while pair.divisor != 0 {
            let (a, b) = (pair.dividend, pair.divisor);
            let quotient = a / b;
            let remainder = a % b;
            pair = Operands {
                dividend: b,
                divisor: remainder,
            };
            recorder.record(
                &pair,
                StepDraft::new(
                    OperationTag::Divide,
                    format!(
                        "{a} = {quotient} x {b} + {remainder}; continue with gcd({b}, {remainder})"
                    ),
                )
                .detail(NumberDetail {
                    dividend: Some(a),
                    divisor: Some(b),
                    quotient: Some(quotient),
                    remainder: Some(remainder),
                    ..Default::default()
                }),
            );
        }

        let result = pair.dividend;
        recorder.record(
            &pair,
            StepDraft::new(
                OperationTag::Complete,
                format!("The remainder is zero, so gcd({dividend}, {divisor}) = {result}"),
            )
            .detail(NumberDetail {
                result: Some(result),
                ..Default::default()
            }),
        );

        Ok(complete(&DESCRIPTOR, Outcome::Number(result), recorder, started))
    }

    fn default_input(&self) -> AlgorithmInput {
        AlgorithmInput::Pair { a: 48, b: 18 }
    }

    fn explanation(&self) -> &'static str {
        EXPLANATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::StepDetail;

    #[test]
    fn forty_eight_and_eighteen() {
        let gcd = EuclideanGcd::new();
        let result = gcd.execute(&gcd.default_input()).unwrap();
        assert_eq!(result.result, Outcome::Number(6));
        assert_eq!(result.count(OperationTag::Divide), 3);
        match result.final_step().unwrap().variables() {
            StepDetail::Number(detail) => assert_eq!(detail.result, Some(6)),
            other => panic!("unexpected detail {:?}", other),
        }
    }

    #[test]
    fn zero_divisor_is_one_base_case_step() {
        let result = EuclideanGcd::new()
            .execute(&AlgorithmInput::Pair { a: 15, b: 0 })
            .unwrap();
        assert_eq!(result.result, Outcome::Number(15));
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].tag(), OperationTag::BaseCase);
    }

    #[test]
    fn operands_are_normalized() {
        let result = EuclideanGcd::new()
            .execute(&AlgorithmInput::Pair { a: 18, b: 48 })
            .unwrap();
        assert_eq!(result.result, Outcome::Number(6));
        assert_eq!(
            result.steps[0].snapshot(),
            &Snapshot::Operands {
                dividend: 48,
                divisor: 18
            }
        );
        // Zero first is also the base case once normalized.
        let zero_first = EuclideanGcd::new()
            .execute(&AlgorithmInput::Pair { a: 0, b: 9 })
            .unwrap();
        assert_eq!(zero_first.steps.len(), 1);
        assert_eq!(zero_first.result, Outcome::Number(9));
    }

    #[test]
    fn each_divide_snapshot_shows_the_next_pair() {
        let result = EuclideanGcd::new()
            .execute(&AlgorithmInput::Pair { a: 48, b: 18 })
            .unwrap();
        let pairs: Vec<&Snapshot> = result
            .steps
            .iter()
            .filter(|s| s.tag() == OperationTag::Divide)
            .map(|s| s.snapshot())
            .collect();
        assert_eq!(
            pairs,
            vec![
                &Snapshot::Operands { dividend: 18, divisor: 12 },
                &Snapshot::Operands { dividend: 12, divisor: 6 },
                &Snapshot::Operands { dividend: 6, divisor: 0 },
            ]
        );
    }

    #[test]
    fn operands_out_of_range() {
        let gcd = EuclideanGcd::new();
        assert!(matches!(
            gcd.execute(&AlgorithmInput::Pair { a: -4, b: 2 }),
            Err(TraceError::OutOfRange { .. })
        ));
        assert!(matches!(
            gcd.execute(&AlgorithmInput::Pair { a: 4, b: 1001 }),
            Err(TraceError::OutOfRange { .. })
        ));
    }
}
