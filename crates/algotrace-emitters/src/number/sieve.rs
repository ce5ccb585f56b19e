//! Sieve of Eratosthenes.
//!
//! The snapshot is the candidate flag array indexed by number. For every
//! prime `p` with `p * p <= n` a `select` step is followed by one `mark` step
//! per multiple that is crossed out for the first time, starting at `p * p`.

use std::time::Instant;

use algotrace_core::limits::ensure_range;
use algotrace_core::{
    Algorithm, AlgorithmDescriptor, AlgorithmInput, AlgorithmResult, Capture, Category,
    Difficulty, InputKind, Limits, NumberDetail, OperationTag, Outcome, Snapshot, StepDraft,
    StepRecorder, TraceError,
};

use crate::{complete, rejected};

static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "sieve",
    name: "Sieve of Eratosthenes",
    category: Category::NumberTheory,
    difficulty: Difficulty::Beginner,
    time_complexity: "O(n log log n)",
    space_complexity: "O(n)",
    input: InputKind::Limit,
};

const EXPLANATION: &str = "The sieve of Eratosthenes finds every prime up to n by \
elimination. Starting from 2, each number that has not been crossed out is prime, \
and all of its multiples are crossed out because they have it as a factor. Crossing \
out can start at p squared since smaller multiples already have a smaller prime \
factor, and the sieve can stop once p squared exceeds n. Whatever is left standing \
is prime.";

/// Traced sieve of Eratosthenes.
#[derive(Debug, Clone, Default)]
pub struct SieveOfEratosthenes {
    limits: Limits,
}

impl SieveOfEratosthenes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        SieveOfEratosthenes { limits }
    }
}

/// `flags[k]` is true while `k` is still a prime candidate.
struct Flags(Vec<bool>);

impl Capture for Flags {
    fn capture(&self) -> Snapshot {
        Snapshot::Sieve(self.0.clone())
    }
}

impl Algorithm for SieveOfEratosthenes {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn execute(&self, input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
        let started = Instant::now();
        let AlgorithmInput::Limit { n } = *input else {
            return Err(rejected(&DESCRIPTOR, DESCRIPTOR.mismatch(input)));
        };
        let limit = ensure_range("n", n, 0, self.limits.max_sieve_limit)
            .map_err(|e| rejected(&DESCRIPTOR, e))? as usize;

        let mut flags = Flags((0..=limit).map(|k| k >= 2).collect());
        let mut recorder = StepRecorder::new();
        recorder.record(
            &flags,
            StepDraft::new(
                OperationTag::Init,
                format!("Mark every number from 2 to {limit} as a prime candidate"),
            ),
        );

        let mut p = 2;
        while p * p <= limit {
            if flags.0[p] {
                recorder.record(
                    &flags,
                    StepDraft::new(
                        OperationTag::Select,
                        format!(
                            "{p} is prime; cross out its multiples from {} to {limit}",
                            p * p
                        ),
                    )
                    .highlight([p])
                    .detail(NumberDetail {
                        prime: Some(p as u64),
                        ..Default::default()
                    }),
                );
                for multiple in (p * p..=limit).step_by(p) {
                    if !flags.0[multiple] {
                        continue;
                    }
                    flags.0[multiple] = false;
                    recorder.record(
                        &flags,
                        StepDraft::new(
                            OperationTag::Mark,
                            format!("Cross out {multiple} = {p} x {}", multiple / p),
                        )
                        .highlight([multiple])
                        .secondary([p])
                        .detail(NumberDetail {
                            prime: Some(p as u64),
                            ..Default::default()
                        }),
                    );
                }
            }
            p += 1;
        }

        let primes: Vec<u64> = flags
            .0
            .iter()
            .enumerate()
            .filter(|(_, &candidate)| candidate)
            .map(|(k, _)| k as u64)
            .collect();
        recorder.record(
            &flags,
            StepDraft::new(
                OperationTag::Complete,
                format!("Found {} prime(s) up to {limit}", primes.len()),
            )
            .secondary(primes.iter().map(|&k| k as usize)),
        );

        Ok(complete(&DESCRIPTOR, Outcome::Primes(primes), recorder, started))
    }

    fn default_input(&self) -> AlgorithmInput {
        AlgorithmInput::Limit { n: 30 }
    }

    fn explanation(&self) -> &'static str {
        EXPLANATION
    }
}
