//! The step record vocabulary shared by every algorithm.
//!
//! A [`StepRecord`] is one immutable frame of a trace. Emitters never build
//! records directly: they describe a step with a [`StepDraft`] and hand it to
//! a [`StepRecorder`](crate::StepRecorder), which assigns the id and takes the
//! snapshot. Records expose read-only accessors only.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::detail::StepDetail;
use crate::id::StepId;
use crate::snapshot::Snapshot;

/// Something a player should emphasise: an array index, a table cell, or a
/// graph node id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Marker {
    Index(usize),
    Cell { row: usize, col: usize },
    Node(String),
}

impl From<usize> for Marker {
    fn from(index: usize) -> Self {
        Marker::Index(index)
    }
}

impl From<(usize, usize)> for Marker {
    fn from((row, col): (usize, usize)) -> Self {
        Marker::Cell { row, col }
    }
}

impl From<&str> for Marker {
    fn from(node: &str) -> Self {
        Marker::Node(node.to_string())
    }
}

impl From<String> for Marker {
    fn from(node: String) -> Self {
        Marker::Node(node)
    }
}

impl From<&String> for Marker {
    fn from(node: &String) -> Self {
        Marker::Node(node.clone())
    }
}

/// Marker list; most steps emphasise at most a handful of positions.
pub type Markers = SmallVec<[Marker; 4]>;

/// Categorical label of a step, for filtering and aggregation without
/// parsing the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationTag {
    Init,
    Comparison,
    Swap,
    NoSwap,
    Select,
    Update,
    Reject,
    Enqueue,
    Dequeue,
    Push,
    Pop,
    Visit,
    Discover,
    Relax,
    Backtrack,
    Insert,
    Extract,
    Heapify,
    Divide,
    BaseCase,
    Mark,
    Complete,
}

impl OperationTag {
    /// Returns the snake_case name used in serialized traces.
    pub fn as_str(self) -> &'static str {
        match self {
            OperationTag::Init => "init",
            OperationTag::Comparison => "comparison",
            OperationTag::Swap => "swap",
            OperationTag::NoSwap => "no_swap",
            OperationTag::Select => "select",
            OperationTag::Update => "update",
            OperationTag::Reject => "reject",
            OperationTag::Enqueue => "enqueue",
            OperationTag::Dequeue => "dequeue",
            OperationTag::Push => "push",
            OperationTag::Pop => "pop",
            OperationTag::Visit => "visit",
            OperationTag::Discover => "discover",
            OperationTag::Relax => "relax",
            OperationTag::Backtrack => "backtrack",
            OperationTag::Insert => "insert",
            OperationTag::Extract => "extract",
            OperationTag::Heapify => "heapify",
            OperationTag::Divide => "divide",
            OperationTag::BaseCase => "base_case",
            OperationTag::Mark => "mark",
            OperationTag::Complete => "complete",
        }
    }
}

impl fmt::Display for OperationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable snapshot of algorithm state plus narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    id: StepId,
    description: String,
    snapshot: Snapshot,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    highlighted: Markers,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    compared: Markers,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    secondary: Markers,
    tag: OperationTag,
    variables: StepDetail,
}

impl StepRecord {
    pub(crate) fn from_draft(id: StepId, snapshot: Snapshot, draft: StepDraft) -> Self {
        StepRecord {
            id,
            description: draft.description,
            snapshot,
            highlighted: draft.highlighted,
            compared: draft.compared,
            secondary: draft.secondary,
            tag: draft.tag,
            variables: draft.variables,
        }
    }

    pub fn id(&self) -> StepId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Positions currently being examined.
    pub fn highlighted(&self) -> &[Marker] {
        &self.highlighted
    }

    /// Positions being compared against each other.
    pub fn compared(&self) -> &[Marker] {
        &self.compared
    }

    /// Auxiliary emphasis, e.g. newly discovered nodes.
    pub fn secondary(&self) -> &[Marker] {
        &self.secondary
    }

    pub fn tag(&self) -> OperationTag {
        self.tag
    }

    pub fn variables(&self) -> &StepDetail {
        &self.variables
    }
}

/// A step under construction: everything except the id and snapshot.
#[derive(Debug, Clone)]
#[must_use = "a draft does nothing until it is passed to StepRecorder::record"]
pub struct StepDraft {
    tag: OperationTag,
    description: String,
    highlighted: Markers,
    compared: Markers,
    secondary: Markers,
    variables: StepDetail,
}

impl StepDraft {
    pub fn new(tag: OperationTag, description: impl Into<String>) -> Self {
        StepDraft {
            tag,
            description: description.into(),
            highlighted: SmallVec::new(),
            compared: SmallVec::new(),
            secondary: SmallVec::new(),
            variables: StepDetail::None,
        }
    }

    pub fn highlight<M: Into<Marker>>(mut self, markers: impl IntoIterator<Item = M>) -> Self {
        self.highlighted.extend(markers.into_iter().map(Into::into));
        self
    }

    pub fn compare<M: Into<Marker>>(mut self, markers: impl IntoIterator<Item = M>) -> Self {
        self.compared.extend(markers.into_iter().map(Into::into));
        self
    }

    pub fn secondary<M: Into<Marker>>(mut self, markers: impl IntoIterator<Item = M>) -> Self {
        self.secondary.extend(markers.into_iter().map(Into::into));
        self
    }

    pub fn detail(mut self, detail: impl Into<StepDetail>) -> Self {
        self.variables = detail.into();
        self
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_serialize_untagged() {
        let markers = vec![
            Marker::from(3usize),
            Marker::from((1usize, 2usize)),
            Marker::from("a"),
        ];
        let json = serde_json::to_string(&markers).unwrap();
        assert_eq!(json, r#"[3,{"row":1,"col":2},"a"]"#);
        let back: Vec<Marker> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, markers);
    }

    #[test]
    fn tag_names_match_serde() {
        for tag in [
            OperationTag::Init,
            OperationTag::NoSwap,
            OperationTag::BaseCase,
            OperationTag::Complete,
        ] {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
        }
    }

    #[test]
    fn empty_marker_lists_are_omitted() {
        let record = StepRecord::from_draft(
            StepId(0),
            Snapshot::Array(vec![]),
            StepDraft::new(OperationTag::Init, "start"),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("highlighted").is_none());
        assert_eq!(json["tag"], "init");
        assert_eq!(json["id"], 0);
    }
}
