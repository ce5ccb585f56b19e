//! Breadth-first search.
//!
//! Per dequeued node the trace carries a `dequeue` step, a `visit` step, and,
//! when the node has unseen neighbours, a `discover` batch step followed by
//! an `enqueue` step. Neighbours are examined in adjacency-list order and
//! already-seen neighbours are skipped without a step of their own.

use std::time::Instant;

use algotrace_core::{
    Algorithm, AlgorithmDescriptor, AlgorithmInput, AlgorithmResult, Category, Difficulty,
    InputKind, Limits, OperationTag, Outcome, StepDraft, StepRecorder, TraceError,
};

use super::{closing_description, default_graph_input, prepare, Prepared, Walk};
use crate::{complete, rejected};

static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "bfs",
    name: "Breadth-First Search",
    category: Category::Graph,
    difficulty: Difficulty::Beginner,
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
    input: InputKind::Graph,
};

const EXPLANATION: &str = "Breadth-first search explores a graph level by level. \
It starts by enqueueing the start node. Each round it dequeues the oldest node, \
visits it, and enqueues every neighbour that has not been seen yet, so nodes are \
visited in order of their distance (in edges) from the start. With a target node \
the search stops as soon as the target is visited, and the predecessor links give \
a path with the fewest edges.";

/// Traced breadth-first search over an unweighted graph.
#[derive(Debug, Clone, Default)]
pub struct BreadthFirstSearch {
    limits: Limits,
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        BreadthFirstSearch { limits }
    }
}

impl Algorithm for BreadthFirstSearch {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DESCRIPTOR
    }

    fn execute(&self, input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
        let started = Instant::now();
        let AlgorithmInput::Graph(graph_input) = input else {
            return Err(rejected(&DESCRIPTOR, DESCRIPTOR.mismatch(input)));
        };
        let prepared = prepare(graph_input, &self.limits).map_err(|e| rejected(&DESCRIPTOR, e))?;

        let (outcome, recorder) = search(&prepared);
        Ok(complete(&DESCRIPTOR, outcome, recorder, started))
    }

    fn default_input(&self) -> AlgorithmInput {
        default_graph_input()
    }

    fn explanation(&self) -> &'static str {
        EXPLANATION
    }
}

fn search(prepared: &Prepared) -> (Outcome, StepRecorder) {
    let graph = &prepared.graph;
    let start = prepared.start;
    let mut walk = Walk::new(graph);
    let mut recorder = StepRecorder::new();

    walk.seen[start.index()] = true;
    walk.frontier.push_back(start);
    recorder.record(
        &walk,
        StepDraft::new(
            OperationTag::Init,
            format!(
                "Start breadth-first search at node '{}' and enqueue it",
                graph.label(start)
            ),
        )
        .highlight([graph.label(start)])
        .detail(walk.detail(Some(start))),
    );

    let mut reached = false;
    while let Some(node) = walk.frontier.pop_front() {
        let label = graph.label(node);
        recorder.record(
            &walk,
            StepDraft::new(OperationTag::Dequeue, format!("Dequeue node '{label}'"))
                .highlight([label])
                .detail(walk.detail(Some(node))),
        );

        walk.order.push(node);
        recorder.record(
            &walk,
            StepDraft::new(
                OperationTag::Visit,
                format!("Visit node '{label}' (visit #{})", walk.order.len()),
            )
            .highlight([label])
            .detail(walk.detail(Some(node))),
        );

        if prepared.target == Some(node) {
            reached = true;
            break;
        }

        let mut discovered = Vec::new();
        for neighbor in graph.neighbors(node) {
            if !walk.seen[neighbor.index()] {
                walk.seen[neighbor.index()] = true;
                walk.parent[neighbor.index()] = Some(node);
                discovered.push(neighbor);
            }
        }
        if discovered.is_empty() {
            continue;
        }

        let names = graph.labels(&discovered);
        recorder.record(
            &walk,
            StepDraft::new(
                OperationTag::Discover,
                format!(
                    "Discovered {} new neighbour(s) of '{label}': {}",
                    names.len(),
                    names.join(", ")
                ),
            )
            .highlight([label])
            .secondary(&names)
            .detail(walk.detail(Some(node))),
        );

        walk.frontier.extend(discovered.iter().copied());
        recorder.record(
            &walk,
            StepDraft::new(
                OperationTag::Enqueue,
                format!(
                    "Enqueue {}; queue is now [{}]",
                    names.join(", "),
                    graph.labels(&walk.frontier).join(", ")
                ),
            )
            .secondary(&names)
            .detail(walk.detail(Some(node))),
        );
    }

    let order = graph.labels(&walk.order);
    let path = match prepared.target {
        Some(target) if reached => Some(walk.path_to(target)),
        _ => None,
    };
    recorder.record(
        &walk,
        StepDraft::new(
            OperationTag::Complete,
            closing_description("Breadth-first search", prepared, order.len(), path.as_deref()),
        )
        .detail(walk.detail(None)),
    );

    (Outcome::Traversal { order, path }, recorder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::diamond_input;
    use algotrace_core::Snapshot;

    fn run(target: Option<&str>) -> AlgorithmResult {
        BreadthFirstSearch::new()
            .execute(&AlgorithmInput::Graph(diamond_input(target)))
            .unwrap()
    }

    #[test]
    fn visits_level_by_level() {
        let result = run(None);
        assert_eq!(
            result.result,
            Outcome::Traversal {
                order: vec!["0".into(), "1".into(), "2".into(), "3".into()],
                path: None,
            }
        );
        let last = result.final_step().unwrap();
        assert_eq!(last.tag(), OperationTag::Complete);
        assert!(last.highlighted().is_empty());
        match last.snapshot() {
            Snapshot::Graph(view) => {
                assert_eq!(view.visited, vec!["0", "1", "2", "3"]);
                assert!(view.frontier.is_empty());
            }
            other => panic!("expected graph snapshot, got {:?}", other),
        }
    }

    #[test]
    fn one_dequeue_and_visit_per_node() {
        let result = run(None);
        assert_eq!(result.count(OperationTag::Dequeue), 4);
        assert_eq!(result.count(OperationTag::Visit), 4);
        // Only "0" and "1" discover anything.
        assert_eq!(result.count(OperationTag::Discover), 2);
        assert_eq!(result.count(OperationTag::Enqueue), 2);
    }

    #[test]
    fn stops_at_target_with_path() {
        let result = run(Some("3"));
        match result.result {
            Outcome::Traversal { order, path } => {
                assert_eq!(order, vec!["0", "1", "2", "3"]);
                assert_eq!(path, Some(vec!["0".into(), "1".into(), "3".into()]));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn unreachable_target_has_no_path() {
        let result = run(Some("0"));
        // Start is the target: one visit, path of length one.
        assert_eq!(
            result.result,
            Outcome::Traversal {
                order: vec!["0".into()],
                path: Some(vec!["0".into()]),
            }
        );

        let mut input = diamond_input(Some("0"));
        input.start = "2".into();
        let result = BreadthFirstSearch::new()
            .execute(&AlgorithmInput::Graph(input))
            .unwrap();
        assert_eq!(
            result.result,
            Outcome::Traversal {
                order: vec!["2".into()],
                path: None,
            }
        );
        assert!(result
            .final_step()
            .unwrap()
            .description()
            .contains("unreachable"));
    }

    #[test]
    fn wrong_input_kind_is_rejected() {
        let err = BreadthFirstSearch::new()
            .execute(&AlgorithmInput::array(vec![1, 2, 3]))
            .unwrap_err();
        assert!(matches!(
            err,
            TraceError::InputMismatch {
                expected: InputKind::Graph,
                found: InputKind::Array,
                ..
            }
        ));
    }
}
