//! Dijkstra's single-source shortest paths.
//!
//! Each round selects the unsettled node with the smallest tentative
//! distance, ties broken by the lowest node index, and relaxes its outgoing
//! edges. A `relax` step is recorded only when the candidate distance is
//! strictly smaller than the current one. The run ends when every remaining
//! node is unreachable.

use std::time::Instant;

use algotrace_core::graph::WeightedGraph;
use algotrace_core::input::{WeightedEdge, WeightedGraphInput};
use algotrace_core::{
    Algorithm, AlgorithmDescriptor, AlgorithmInput, AlgorithmResult, Capture, Category,
    Difficulty, GraphDetail, InputKind, Limits, Marker, OperationTag, Outcome, Snapshot,
    StepDraft, StepRecorder, TraceError,
};

use crate::{complete, rejected};

static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "dijkstra",
    name: "Dijkstra's Shortest Paths",
    category: Category::Graph,
    difficulty: Difficulty::Intermediate,
    time_complexity: "O(V^2 + E)",
    space_complexity: "O(V)",
    input: InputKind::WeightedGraph,
};

const EXPLANATION: &str = "Dijkstra's algorithm finds the shortest distance from a \
start node to every other node when all edge weights are positive. Every node begins \
with an infinite tentative distance except the start, which is 0. Each round the \
unsettled node with the smallest tentative distance is settled, since no shorter \
route to it can exist, and each of its edges is relaxed: if going through it gives a \
neighbour a strictly shorter distance, that distance and the predecessor link are \
updated. Following predecessor links backwards from any node yields its shortest path.";

/// Traced Dijkstra over a positively weighted graph.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    limits: Limits,
}

impl Dijkstra {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Dijkstra { limits }
    }

    fn validate(
        &self,
        input: &WeightedGraphInput,
    ) -> Result<(WeightedGraph, usize, Option<usize>), TraceError> {
        let graph = WeightedGraph::from_input(input, &self.limits)?;
        let start = graph.check_node(input.start, "start")?;
        let target = input
            .target
            .map(|t| graph.check_node(t, "target"))
            .transpose()?;
        Ok((graph, start, target))
    }
}

/// Working state of one run.
struct Distances<'g> {
    graph: &'g WeightedGraph,
    dist: Vec<Option<u64>>,
    previous: Vec<Option<usize>>,
    settled: Vec<bool>,
    order: Vec<usize>,
}

impl Distances<'_> {
    fn pending(&self) -> Vec<usize> {
        (0..self.dist.len())
            .filter(|&v| !self.settled[v] && self.dist[v].is_some())
            .collect()
    }

    /// Unsettled node with minimal tentative distance; lowest index on ties.
    fn closest_unsettled(&self) -> Option<(u64, usize)> {
        (0..self.dist.len())
            .filter(|&v| !self.settled[v])
            .filter_map(|v| self.dist[v].map(|d| (d, v)))
            .min()
    }

    fn detail(&self, current: usize) -> GraphDetail {
        GraphDetail {
            current: Some(current.to_string()),
            frontier_len: self.pending().len(),
            visited_count: self.order.len(),
            distance: self.dist[current],
            ..Default::default()
        }
    }

    fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.dist[target]?;
        let mut path = vec![target];
        let mut cursor = target;
        while let Some(prev) = self.previous[cursor] {
            path.push(prev);
            cursor = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Graph markers name nodes by their label, as in [`WeightedGraph::view`].
fn node(n: usize) -> Marker {
    Marker::Node(n.to_string())
}

impl Capture for Distances<'_> {
    fn capture(&self) -> Snapshot {
        Snapshot::Graph(self.graph.view(&self.order, &self.pending(), &self.dist))
    }
}

impl Algorithm for Dijkstra {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn execute(&self, input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
        let started = Instant::now();
        let AlgorithmInput::WeightedGraph(graph_input) = input else {
            return Err(rejected(&DESCRIPTOR, DESCRIPTOR.mismatch(input)));
        };
        let (graph, start, target) = self
            .validate(graph_input)
            .map_err(|e| rejected(&DESCRIPTOR, e))?;

        let n = graph.node_count();
        let mut state = Distances {
            graph: &graph,
            dist: vec![None; n],
            previous: vec![None; n],
            settled: vec![false; n],
            order: Vec::new(),
        };
        let mut recorder = StepRecorder::new();

        state.dist[start] = Some(0);
        recorder.record(
            &state,
            StepDraft::new(
                OperationTag::Init,
                format!(
                    "Set the distance of start node {start} to 0 and every other node to infinity"
                ),
            )
            .highlight([node(start)])
            .detail(state.detail(start)),
        );

        while let Some((d, u)) = state.closest_unsettled() {
            state.settled[u] = true;
            state.order.push(u);
            recorder.record(
                &state,
                StepDraft::new(
                    OperationTag::Select,
                    format!("Settle node {u}: it has the smallest tentative distance, {d}"),
                )
                .highlight([node(u)])
                .detail(state.detail(u)),
            );

            for (v, weight) in graph.neighbors(u) {
                if state.settled[v] {
                    continue;
                }
                let candidate = d + weight;
                let current = state.dist[v];
                if current.is_some_and(|cur| candidate >= cur) {
                    continue;
                }
                state.dist[v] = Some(candidate);
                state.previous[v] = Some(u);
                let was = current.map_or_else(|| "infinity".to_string(), |c| c.to_string());
                recorder.record(
                    &state,
                    StepDraft::new(
                        OperationTag::Relax,
                        format!(
                            "Relax edge {u} -> {v} (weight {weight}): distance of {v} improves from {was} to {candidate}"
                        ),
                    )
                    .highlight([node(u)])
                    .compare([node(v)])
                    .detail(GraphDetail {
                        neighbor: Some(v.to_string()),
                        distance: Some(candidate),
                        previous_distance: current,
                        ..state.detail(u)
                    }),
                );
            }
        }

        let unreachable = state.dist.iter().filter(|d| d.is_none()).count();
        let path = target.and_then(|t| state.path_to(t));
        let description = match (target, &path) {
            (Some(t), Some(path)) => format!(
                "All reachable nodes settled; shortest path to {t} is {} with length {}",
                path.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" -> "),
                state.dist[t].unwrap_or_default()
            ),
            (Some(t), None) => format!("All reachable nodes settled; node {t} is unreachable"),
            (None, _) => format!(
                "All reachable nodes settled; {unreachable} node(s) unreachable from {start}"
            ),
        };
        recorder.record(
            &state,
            StepDraft::new(OperationTag::Complete, description).detail(GraphDetail {
                visited_count: state.order.len(),
                ..Default::default()
            }),
        );

        let outcome = Outcome::ShortestPaths {
            distances: state.dist,
            previous: state.previous,
            path,
        };
        Ok(complete(&DESCRIPTOR, outcome, recorder, started))
    }

    fn default_input(&self) -> AlgorithmInput {
        let edge = |from, to, weight| WeightedEdge { from, to, weight };
        AlgorithmInput::WeightedGraph(WeightedGraphInput {
            nodes: 5,
            edges: vec![
                edge(0, 1, 4),
                edge(0, 2, 1),
                edge(2, 1, 2),
                edge(1, 3, 1),
                edge(2, 3, 5),
                edge(3, 4, 3),
            ],
            directed: false,
            start: 0,
            target: Some(4),
        })
    }

    fn explanation(&self) -> &'static str {
        EXPLANATION
    }
}
