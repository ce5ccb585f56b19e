//! Traced algorithm implementations.
//!
//! Every emitter implements [`Algorithm`](algotrace_core::Algorithm): it
//! validates its input, runs to completion on function-local working state,
//! and narrates each meaningful transition through a
//! [`StepRecorder`](algotrace_core::StepRecorder). Emitters hold nothing but
//! their [`Limits`](algotrace_core::Limits), so one instance can serve any
//! number of runs.
//!
//! # Families
//!
//! - [`graph`]: breadth-first search, depth-first search, Dijkstra.
//! - [`sort`]: selection sort, bubble sort.
//! - [`dp`]: longest increasing subsequence, 0/1 knapsack.
//! - [`heap`]: binary heap build, insert, and extract.
//! - [`number`]: Euclidean GCD, sieve of Eratosthenes.
//!
//! [`Catalog`] registers all of them by id.

pub mod catalog;
pub mod dp;
pub mod graph;
pub mod heap;
pub mod number;
pub mod sample;
pub mod sort;

use std::time::Instant;

use algotrace_core::{AlgorithmDescriptor, AlgorithmResult, Outcome, StepRecorder, TraceError};

pub use catalog::Catalog;
pub use dp::{Knapsack, LongestIncreasingSubsequence};
pub use graph::{BreadthFirstSearch, DepthFirstSearch, Dijkstra};
pub use heap::BinaryHeap;
pub use number::{EuclideanGcd, SieveOfEratosthenes};
pub use sort::{BubbleSort, SelectionSort};

/// Logs a validation failure and passes the error through.
pub(crate) fn rejected(descriptor: &AlgorithmDescriptor, error: TraceError) -> TraceError {
    tracing::warn!(algorithm = descriptor.id, kind = ?error.kind(), %error, "input rejected");
    error
}

/// Aggregates a finished trace and logs its shape.
pub(crate) fn complete(
    descriptor: &AlgorithmDescriptor,
    outcome: Outcome,
    recorder: StepRecorder,
    started: Instant,
) -> AlgorithmResult {
    let result = AlgorithmResult::aggregate(outcome, recorder, started);
    tracing::debug!(
        algorithm = descriptor.id,
        steps = result.summary.steps,
        comparisons = result.summary.comparisons,
        swaps = result.summary.swaps,
        "trace recorded"
    );
    result
}
