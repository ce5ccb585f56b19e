//! Per-category diagnostic variables attached to each step.
//!
//! Each algorithm family narrates different internal state. Rather than an
//! untyped key/value map, [`StepDetail`] is a tagged union with one variant
//! per category; every field is optional so an emitter fills in only what is
//! meaningful at that step.

use serde::{Deserialize, Serialize};

/// Diagnostic variables for one step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum StepDetail {
    #[default]
    None,
    Graph(GraphDetail),
    Sort(SortDetail),
    Dp(DpDetail),
    Heap(HeapDetail),
    Number(NumberDetail),
}

/// Graph search and shortest-path variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor: Option<String>,
    pub frontier_len: usize,
    pub visited_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_distance: Option<u64>,
}

/// Comparison-sort variables. `comparisons` and `swaps` are running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub j: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_index: Option<usize>,
    pub comparisons: usize,
    pub swaps: usize,
}

/// Dynamic-programming variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub j: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best: Option<u64>,
}

/// Binary-heap variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<usize>,
    pub size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted: Option<i64>,
}

/// Number-theory variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divisor: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotient: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remainder: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prime: Option<u64>,
}

impl From<GraphDetail> for StepDetail {
    fn from(detail: GraphDetail) -> Self {
        StepDetail::Graph(detail)
    }
}

impl From<SortDetail> for StepDetail {
    fn from(detail: SortDetail) -> Self {
        StepDetail::Sort(detail)
    }
}

impl From<DpDetail> for StepDetail {
    fn from(detail: DpDetail) -> Self {
        StepDetail::Dp(detail)
    }
}

impl From<HeapDetail> for StepDetail {
    fn from(detail: HeapDetail) -> Self {
        StepDetail::Heap(detail)
    }
}

impl From<NumberDetail> for StepDetail {
    fn from(detail: NumberDetail) -> Self {
        StepDetail::Number(detail)
    }
}
