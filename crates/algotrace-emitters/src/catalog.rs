//! Lookup of every emitter by id.

use std::fmt;

use algotrace_core::{
    Algorithm, AlgorithmDescriptor, AlgorithmInput, AlgorithmResult, Limits, TraceError,
};

use crate::{
    BinaryHeap, BreadthFirstSearch, BubbleSort, DepthFirstSearch, Dijkstra, EuclideanGcd, Knapsack,
    LongestIncreasingSubsequence, SelectionSort, SieveOfEratosthenes,
};

/// Registry of all traced algorithms, in presentation order.
pub struct Catalog {
    algorithms: Vec<Box<dyn Algorithm>>,
}

impl Catalog {
    /// Catalog with default [`Limits`].
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Catalog whose emitters all validate against `limits`.
    pub fn with_limits(limits: Limits) -> Self {
        let algorithms: Vec<Box<dyn Algorithm>> = vec![
            Box::new(BreadthFirstSearch::with_limits(limits)),
            Box::new(DepthFirstSearch::with_limits(limits)),
            Box::new(Dijkstra::with_limits(limits)),
            Box::new(SelectionSort::with_limits(limits)),
            Box::new(BubbleSort::with_limits(limits)),
            Box::new(LongestIncreasingSubsequence::with_limits(limits)),
            Box::new(Knapsack::with_limits(limits)),
            Box::new(BinaryHeap::with_limits(limits)),
            Box::new(EuclideanGcd::with_limits(limits)),
            Box::new(SieveOfEratosthenes::with_limits(limits)),
        ];
        Catalog { algorithms }
    }

    /// Looks up an algorithm by descriptor id.
    pub fn get(&self, id: &str) -> Option<&dyn Algorithm> {
        self.algorithms
            .iter()
            .find(|a| a.descriptor().id == id)
            .map(|a| &**a)
    }

    /// All algorithms in presentation order.
    pub fn all(&self) -> impl Iterator<Item = &dyn Algorithm> {
        self.algorithms.iter().map(|a| &**a)
    }

    pub fn descriptors(&self) -> Vec<&'static AlgorithmDescriptor> {
        self.all().map(|a| a.descriptor()).collect()
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    /// Executes the algorithm registered under `id`.
    pub fn run(&self, id: &str, input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
        let Some(algorithm) = self.get(id) else {
            tracing::warn!(id, "unknown algorithm");
            return Err(TraceError::UnknownAlgorithm { id: id.to_string() });
        };
        tracing::debug!(algorithm = id, input = %input.kind(), "executing");
        algorithm.execute(input)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.all().map(|a| a.descriptor().id))
            .finish()
    }
}
