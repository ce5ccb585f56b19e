//! Result aggregation.
//!
//! [`AlgorithmResult::aggregate`] turns a finished [`StepRecorder`] and the
//! final answer into the value returned from `execute`. Summary counters are
//! computed by counting operation tags in the trace itself, so the summary
//! always agrees with the steps it describes.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;
use crate::playback::{Playback, PlaybackConfig, VisualKind};
use crate::recorder::StepRecorder;
use crate::step::{OperationTag, StepRecord};

/// The final answer of an execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// The input array in sorted order.
    Sorted(Vec<i64>),
    /// Graph traversal order, and the path to the target when one was
    /// requested and reached.
    Traversal {
        order: Vec<String>,
        path: Option<Vec<String>>,
    },
    /// Single-source shortest paths; `None` distance means unreachable.
    ShortestPaths {
        distances: Vec<Option<u64>>,
        previous: Vec<Option<usize>>,
        path: Option<Vec<usize>>,
    },
    /// A longest strictly increasing subsequence.
    Subsequence(Vec<i64>),
    /// Best knapsack value and the chosen item indices in ascending order.
    Knapsack { best_value: u64, items: Vec<usize> },
    /// Final heap storage and the value returned by each extract operation.
    Heap {
        items: Vec<i64>,
        extracted: Vec<Option<i64>>,
    },
    /// A single number.
    Number(u64),
    /// Prime numbers in ascending order.
    Primes(Vec<u64>),
}

/// Counters derived from a trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub steps: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub time_elapsed_ms: f64,
}

impl Summary {
    /// Reduces `steps` into counters.
    pub fn from_steps(steps: &[StepRecord], time_elapsed_ms: f64) -> Self {
        let count = |tag: OperationTag| steps.iter().filter(|s| s.tag() == tag).count();
        Summary {
            steps: steps.len(),
            comparisons: count(OperationTag::Comparison),
            swaps: count(OperationTag::Swap),
            time_elapsed_ms,
        }
    }
}

/// Everything an `execute` call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub success: bool,
    pub result: Outcome,
    pub steps: Vec<StepRecord>,
    pub summary: Summary,
}

impl AlgorithmResult {
    /// Packages a finished trace. `started` is when `execute` began.
    pub fn aggregate(result: Outcome, recorder: StepRecorder, started: Instant) -> Self {
        let steps = recorder.finish();
        let elapsed = started.elapsed().as_secs_f64() * 1000.0;
        let summary = Summary::from_steps(&steps, elapsed);
        AlgorithmResult {
            success: true,
            result,
            steps,
            summary,
        }
    }

    pub fn final_step(&self) -> Option<&StepRecord> {
        self.steps.last()
    }

    /// Number of steps carrying `tag`.
    pub fn count(&self, tag: OperationTag) -> usize {
        self.steps.iter().filter(|s| s.tag() == tag).count()
    }

    /// Borrows the trace for a player.
    pub fn playback(&self, speed: f64, kind: VisualKind) -> Result<Playback<'_>, TraceError> {
        Ok(Playback {
            config: PlaybackConfig::new(speed, kind)?,
            steps: &self.steps,
        })
    }
}
