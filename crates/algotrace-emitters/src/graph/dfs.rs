//! Depth-first search with an explicit stack.
//!
//! Nodes are marked visited when popped. Unvisited neighbours are pushed in
//! reverse adjacency order so the first listed neighbour is explored first,
//! which reproduces the visit order of the recursive formulation. Stale stack
//! entries for nodes visited in the meantime are dropped without a step.

use std::time::Instant;

use algotrace_core::{
    Algorithm, AlgorithmDescriptor, AlgorithmInput, AlgorithmResult, Category, Difficulty,
    InputKind, Limits, OperationTag, Outcome, StepDraft, StepRecorder, TraceError,
};

use super::{closing_description, default_graph_input, prepare, Prepared, Walk};
use crate::{complete, rejected};

static DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "dfs",
    name: "Depth-First Search",
    category: Category::Graph,
    difficulty: Difficulty::Beginner,
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
    input: InputKind::Graph,
};

const EXPLANATION: &str = "Depth-first search follows one branch as deep as it can \
before backing up. The start node is pushed onto a stack; each round the top node \
is popped and visited, and its unvisited neighbours are pushed so that the first \
neighbour ends up on top. The search therefore dives into the first neighbour's \
subtree completely before moving on to the next one.";

/// Traced iterative depth-first search.
#[derive(Debug, Clone, Default)]
pub struct DepthFirstSearch {
    limits: Limits,
}

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        DepthFirstSearch { limits }
    }
}

impl Algorithm for DepthFirstSearch {
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

    walk.frontier.push_back(start);
    recorder.record(
        &walk,
        StepDraft::new(
            OperationTag::Init,
            format!(
                "Start depth-first search at node '{}' and push it onto the stack",
                graph.label(start)
            ),
        )
        .highlight([graph.label(start)])
        .detail(walk.detail(Some(start))),
    );

    let mut reached = false;
    while let Some(node) = walk.frontier.pop_back() {
        if walk.seen[node.index()] {
            continue;
        }
        let label = graph.label(node);
        recorder.record(
            &walk,
            StepDraft::new(OperationTag::Pop, format!("Pop node '{label}' from the stack"))
                .highlight([label])
                .detail(walk.detail(Some(node))),
        );

        walk.seen[node.index()] = true;
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

        let mut fresh = Vec::new();
        for neighbor in graph.neighbors(node) {
            if !walk.seen[neighbor.index()] && !fresh.contains(&neighbor) {
                walk.parent[neighbor.index()] = Some(node);
                fresh.push(neighbor);
            }
        }
        if fresh.is_empty() {
            continue;
        }

        let names = graph.labels(&fresh);
        recorder.record(
            &walk,
            StepDraft::new(
                OperationTag::Discover,
                format!(
                    "Discovered {} unvisited neighbour(s) of '{label}': {}",
                    names.len(),
                    names.join(", ")
                ),
            )
            .highlight([label])
            .secondary(&names)
            .detail(walk.detail(Some(node))),
        );

        walk.frontier.extend(fresh.iter().rev().copied());
        recorder.record(
            &walk,
            StepDraft::new(
                OperationTag::Push,
                format!(
                    "Push {} onto the stack; '{}' is on top",
                    names.join(", "),
                    names[0]
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
            closing_description("Depth-first search", prepared, order.len(), path.as_deref()),
        )
        .detail(walk.detail(None)),
    );

    (Outcome::Traversal { order, path }, recorder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::diamond_input;

    #[test]
    fn dives_before_backtracking() {
        let result = DepthFirstSearch::new()
            .execute(&AlgorithmInput::Graph(diamond_input(None)))
            .unwrap();
        assert_eq!(
            result.result,
            Outcome::Traversal {
                order: vec!["0".into(), "1".into(), "3".into(), "2".into()],
                path: None,
            }
        );
        assert_eq!(result.count(OperationTag::Pop), 4);
        assert!(result.final_step().unwrap().highlighted().is_empty());
    }

    #[test]
    fn cycles_do_not_revisit() {
        let mut input = diamond_input(Some("2"));
        input.adjacency.insert("3".into(), vec!["0".into(), "2".into()]);
        let result = DepthFirstSearch::new()
            .execute(&AlgorithmInput::Graph(input))
            .unwrap();
        match result.result {
            Outcome::Traversal { order, path } => {
                assert_eq!(order, vec!["0", "1", "3", "2"]);
                assert_eq!(path, Some(vec!["0".into(), "1".into(), "3".into(), "2".into()]));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn default_input_is_valid() {
        let dfs = DepthFirstSearch::new();
        let result = dfs.execute(&dfs.default_input()).unwrap();
        assert_eq!(
            result.result,
            Outcome::Traversal {
                order: ["A", "B", "D", "E", "F", "C"].map(String::from).to_vec(),
                path: None,
            }
        );
    }
}
