//! Owned snapshots of the structure an algorithm is working on.
//!
//! A [`Snapshot`] is always a deep copy taken at the moment a step is
//! recorded. Later mutation of an emitter's working state cannot reach into a
//! snapshot that has already been appended to the trace.

use serde::{Deserialize, Serialize};

/// The primary data structure of an algorithm at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Snapshot {
    /// A flat array: sort working array or heap storage.
    Array(Vec<i64>),
    /// A graph with its traversal state.
    Graph(GraphView),
    /// A one-dimensional DP table over an input sequence.
    Sequence(SequenceTable),
    /// A two-dimensional DP table, row-major.
    Table(Vec<Vec<u64>>),
    /// Euclidean division operands.
    Operands { dividend: u64, divisor: u64 },
    /// Sieve candidate flags indexed by number; `true` means not yet crossed out.
    Sieve(Vec<bool>),
}

/// One edge of a [`GraphView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
}

/// Graph structure plus traversal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphView {
    /// Node ids in graph order.
    pub nodes: Vec<String>,
    /// Edges in input order.
    pub edges: Vec<EdgeView>,
    /// Nodes in the order they were visited (or settled).
    pub visited: Vec<String>,
    /// Pending nodes: queue front first, or stack bottom first.
    pub frontier: Vec<String>,
    /// Tentative distances indexed like `nodes`, when the algorithm tracks them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distances: Option<Vec<Option<u64>>>,
}

/// LIS-style DP state: input values with per-position lengths and
/// predecessor links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceTable {
    pub values: Vec<i64>,
    pub lengths: Vec<usize>,
    pub predecessors: Vec<Option<usize>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_snapshot_json_shape() {
        let json = serde_json::to_string(&Snapshot::Array(vec![3, 1])).unwrap();
        assert_eq!(json, r#"{"type":"array","data":[3,1]}"#);
    }

    #[test]
    fn operands_snapshot_json_shape() {
        let snap = Snapshot::Operands {
            dividend: 18,
            divisor: 12,
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert_eq!(json, r#"{"type":"operands","data":{"dividend":18,"divisor":12}}"#);
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
