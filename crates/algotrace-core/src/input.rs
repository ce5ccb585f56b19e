//! Structured algorithm input.
//!
//! [`AlgorithmInput`] is a tagged variant per input shape rather than a bag of
//! optional fields, so an algorithm receives exactly the fields it needs and a
//! shape mismatch is a single, explicit error. The JSON form carries a `kind`
//! discriminator:
//!
//! ```json
//! { "kind": "graph", "adjacency": { "0": ["1"], "1": [] }, "start": "0" }
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// Discriminator for the shape of an [`AlgorithmInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Array,
    Graph,
    WeightedGraph,
    Pair,
    Heap,
    Knapsack,
    Limit,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Array => "array",
            InputKind::Graph => "graph",
            InputKind::WeightedGraph => "weighted_graph",
            InputKind::Pair => "pair",
            InputKind::Heap => "heap",
            InputKind::Knapsack => "knapsack",
            InputKind::Limit => "limit",
        };
        f.write_str(name)
    }
}

/// Input to a single [`Algorithm::execute`](crate::Algorithm::execute) call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmInput {
    /// A list of integers (sorts, LIS).
    Array { values: Vec<i64> },
    /// An unweighted graph given as an ordered adjacency map.
    Graph(GraphInput),
    /// A weighted graph over nodes `0..nodes`.
    WeightedGraph(WeightedGraphInput),
    /// Two integer operands.
    Pair { a: i64, b: i64 },
    /// Initial heap contents plus a sequence of priority-queue operations.
    Heap(HeapInput),
    /// Items for a 0/1 knapsack.
    Knapsack(KnapsackInput),
    /// A single upper bound.
    Limit { n: i64 },
}

impl AlgorithmInput {
    /// Returns the shape discriminator of this input.
    pub fn kind(&self) -> InputKind {
        match self {
            AlgorithmInput::Array { .. } => InputKind::Array,
            AlgorithmInput::Graph(_) => InputKind::Graph,
            AlgorithmInput::WeightedGraph(_) => InputKind::WeightedGraph,
            AlgorithmInput::Pair { .. } => InputKind::Pair,
            AlgorithmInput::Heap(_) => InputKind::Heap,
            AlgorithmInput::Knapsack(_) => InputKind::Knapsack,
            AlgorithmInput::Limit { .. } => InputKind::Limit,
        }
    }

    /// Decodes an input from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, TraceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convenience constructor for array input.
    pub fn array(values: Vec<i64>) -> Self {
        AlgorithmInput::Array { values }
    }
}

/// Unweighted graph input. Node ids are strings; key order of `adjacency`
/// is the node order, and each list's order is the neighbour visiting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInput {
    pub adjacency: IndexMap<String, Vec<String>>,
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// One weighted edge between numbered nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

/// Weighted graph input over nodes `0..nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedGraphInput {
    pub nodes: usize,
    pub edges: Vec<WeightedEdge>,
    /// Undirected edges are traversable both ways.
    #[serde(default)]
    pub directed: bool,
    pub start: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<usize>,
}

/// Heap ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeapKind {
    Max,
    Min,
}

impl HeapKind {
    /// Returns true when `a` belongs above `b` in a heap of this kind.
    pub fn outranks(self, a: i64, b: i64) -> bool {
        match self {
            HeapKind::Max => a > b,
            HeapKind::Min => a < b,
        }
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapKind::Max => f.write_str("max-heap"),
            HeapKind::Min => f.write_str("min-heap"),
        }
    }
}

/// A priority-queue operation applied after the initial heap is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum HeapOperation {
    Insert { value: i64 },
    Extract,
}

/// Heap input: `initial` is heapified bottom-up, then `operations` run in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapInput {
    pub heap: HeapKind,
    #[serde(default)]
    pub initial: Vec<i64>,
    #[serde(default)]
    pub operations: Vec<HeapOperation>,
}

/// 0/1 knapsack input; `weights[i]` and `values[i]` describe item `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackInput {
    pub weights: Vec<usize>,
    pub values: Vec<u64>,
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_input_preserves_key_order() {
        let input = AlgorithmInput::from_json(
            r#"{"kind":"graph","adjacency":{"b":["a"],"a":[],"c":["b"]},"start":"b"}"#,
        )
        .unwrap();
        match input {
            AlgorithmInput::Graph(graph) => {
                let keys: Vec<&str> = graph.adjacency.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["b", "a", "c"]);
                assert_eq!(graph.target, None);
            }
            other => panic!("expected graph input, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_array_element_is_malformed() {
        let err = AlgorithmInput::from_json(r#"{"kind":"array","values":[1,"two",3]}"#)
            .unwrap_err();
        assert!(matches!(err, TraceError::Malformed { .. }));
    }

    #[test]
    fn heap_operations_decode() {
        let input = AlgorithmInput::from_json(
            r#"{"kind":"heap","heap":"min","operations":[{"op":"insert","value":4},{"op":"extract"}]}"#,
        )
        .unwrap();
        assert_eq!(input.kind(), InputKind::Heap);
        match input {
            AlgorithmInput::Heap(heap) => {
                assert!(heap.initial.is_empty());
                assert_eq!(
                    heap.operations,
                    vec![HeapOperation::Insert { value: 4 }, HeapOperation::Extract]
                );
            }
            other => panic!("expected heap input, got {:?}", other),
        }
    }

    #[test]
    fn heap_kind_ordering() {
        assert!(HeapKind::Max.outranks(5, 3));
        assert!(!HeapKind::Max.outranks(3, 3));
        assert!(HeapKind::Min.outranks(3, 5));
    }

    #[test]
    fn serde_roundtrip_pair() {
        let input = AlgorithmInput::Pair { a: 48, b: 18 };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"kind":"pair","a":48,"b":18}"#);
        assert_eq!(AlgorithmInput::from_json(&json).unwrap(), input);
    }
}
