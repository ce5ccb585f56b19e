//! Graph search and shortest paths.
//!
//! BFS and DFS share the [`Walk`] working state: a frontier (queue or
//! stack), a seen set, the visit order, and predecessor links for path
//! reconstruction. Dijkstra keeps its own distance table.

mod bfs;
mod dfs;
mod dijkstra;

use std::collections::VecDeque;

use indexmap::IndexMap;
use petgraph::graph::NodeIndex;

use algotrace_core::graph::LabeledGraph;
use algotrace_core::input::GraphInput;
use algotrace_core::{AlgorithmInput, Capture, GraphDetail, Limits, Snapshot, TraceError};

pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use dijkstra::Dijkstra;

/// A validated unweighted search problem.
pub(crate) struct Prepared {
    pub graph: LabeledGraph,
    pub start: NodeIndex,
    pub target: Option<NodeIndex>,
}

pub(crate) fn prepare(input: &GraphInput, limits: &Limits) -> Result<Prepared, TraceError> {
    if input.start.is_empty() {
        return Err(TraceError::MissingField {
            field: "start".into(),
        });
    }
    let graph = LabeledGraph::from_adjacency(&input.adjacency, limits)?;
    let start = graph.resolve(&input.start, "start")?;
    let target = input
        .target
        .as_deref()
        .map(|t| graph.resolve(t, "target"))
        .transpose()?;
    Ok(Prepared {
        graph,
        start,
        target,
    })
}

/// Working state of one BFS or DFS run.
pub(crate) struct Walk<'g> {
    pub graph: &'g LabeledGraph,
    pub frontier: VecDeque<NodeIndex>,
    pub seen: Vec<bool>,
    pub order: Vec<NodeIndex>,
    pub parent: Vec<Option<NodeIndex>>,
}

impl<'g> Walk<'g> {
    pub fn new(graph: &'g LabeledGraph) -> Self {
        let n = graph.node_count();
        Walk {
            graph,
            frontier: VecDeque::new(),
            seen: vec![false; n],
            order: Vec::new(),
            parent: vec![None; n],
        }
    }

    pub fn detail(&self, current: Option<NodeIndex>) -> GraphDetail {
        GraphDetail {
            current: current.map(|n| self.graph.label(n).to_string()),
            frontier_len: self.frontier.len(),
            visited_count: self.order.len(),
            ..Default::default()
        }
    }

    /// Node ids from the search root to `target` along predecessor links.
    pub fn path_to(&self, target: NodeIndex) -> Vec<String> {
        let mut path = vec![target];
        let mut cursor = target;
        while let Some(prev) = self.parent[cursor.index()] {
            path.push(prev);
            cursor = prev;
        }
        path.reverse();
        self.graph.labels(&path)
    }
}

impl Capture for Walk<'_> {
    fn capture(&self) -> Snapshot {
        Snapshot::Graph(self.graph.view(&self.order, &self.frontier))
    }
}

/// Closing narration shared by BFS and DFS.
pub(crate) fn closing_description(
    name: &str,
    prepared: &Prepared,
    order_len: usize,
    path: Option<&[String]>,
) -> String {
    let graph = &prepared.graph;
    match (prepared.target, path) {
        (Some(target), Some(path)) => format!(
            "Reached target '{}' after {} visit(s); path {}",
            graph.label(target),
            order_len,
            path.join(" -> ")
        ),
        (Some(target), None) => format!(
            "{name} finished: target '{}' is unreachable from '{}'",
            graph.label(target),
            graph.label(prepared.start)
        ),
        (None, _) => format!(
            "{name} complete: visited {} of {} node(s)",
            order_len,
            graph.node_count()
        ),
    }
}

/// Sample unweighted graph used by BFS and DFS.
pub(crate) fn default_graph_input() -> AlgorithmInput {
    let adjacency: IndexMap<String, Vec<String>> = [
        ("A", &["B", "C"][..]),
        ("B", &["D", "E"][..]),
        ("C", &["F"][..]),
        ("D", &[][..]),
        ("E", &["F"][..]),
        ("F", &[][..]),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
    .collect();
    AlgorithmInput::Graph(GraphInput {
        adjacency,
        start: "A".into(),
        target: None,
    })
}
