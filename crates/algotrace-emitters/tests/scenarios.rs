//! End-to-end scenarios and cross-algorithm contract checks.
//!
//! Inputs are given in their JSON form where practical so the tests also
//! exercise the input decoding a CLI caller goes through.

use algotrace_core::{
    Algorithm, AlgorithmInput, AlgorithmResult, ErrorKind, Marker, OperationTag, Outcome, Snapshot,
    StepDetail, TraceError, VisualKind,
};
use algotrace_emitters::{
    BreadthFirstSearch, Catalog, Dijkstra, EuclideanGcd, LongestIncreasingSubsequence,
    SelectionSort,
};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn input(json: &str) -> AlgorithmInput {
    AlgorithmInput::from_json(json).expect("test input should decode")
}

fn tags(result: &AlgorithmResult) -> Vec<OperationTag> {
    result.steps.iter().map(|s| s.tag()).collect()
}

fn assert_ids_contiguous(result: &AlgorithmResult) {
    for (expected, step) in result.steps.iter().enumerate() {
        assert_eq!(step.id().index(), expected);
    }
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn bfs_visits_level_by_level() {
    let result = BreadthFirstSearch::new()
        .execute(&input(
            r#"{"kind":"graph","adjacency":{"0":["1","2"],"1":["3"],"2":[],"3":[]},"start":"0"}"#,
        ))
        .unwrap();

    let visits: Vec<&[Marker]> = result
        .steps
        .iter()
        .filter(|s| s.tag() == OperationTag::Visit)
        .map(|s| s.highlighted())
        .collect();
    let expected: Vec<Marker> = ["0", "1", "2", "3"].into_iter().map(Marker::from).collect();
    assert_eq!(visits.len(), 4);
    for (visit, node) in visits.iter().zip(&expected) {
        assert_eq!(visit, &std::slice::from_ref(node));
    }

    let last = result.final_step().unwrap();
    assert_eq!(last.tag(), OperationTag::Complete);
    assert!(last.highlighted().is_empty());
    assert_eq!(
        result.result,
        Outcome::Traversal {
            order: vec!["0".into(), "1".into(), "2".into(), "3".into()],
            path: None,
        }
    );
    assert_ids_contiguous(&result);
}

#[test]
fn lis_classic_sequence() {
    let result = LongestIncreasingSubsequence::new()
        .execute(&input(r#"{"kind":"array","values":[10,22,9,33,21,50,41,60]}"#))
        .unwrap();
    assert_eq!(result.result, Outcome::Subsequence(vec![10, 22, 33, 50, 60]));
}

#[test]
fn selection_sort_scenario() {
    let result = SelectionSort::new()
        .execute(&AlgorithmInput::array(vec![64, 25, 12, 22, 11]))
        .unwrap();
    assert_eq!(result.result, Outcome::Sorted(vec![11, 12, 22, 25, 64]));
    assert!(result.summary.swaps <= 4);
    assert_eq!(result.summary.steps, result.steps.len());
}

#[test]
fn gcd_of_48_and_18() {
    let result = EuclideanGcd::new()
        .execute(&input(r#"{"kind":"pair","a":48,"b":18}"#))
        .unwrap();
    assert_eq!(result.count(OperationTag::Divide), 3);
    assert_eq!(result.result, Outcome::Number(6));
    match result.final_step().unwrap().variables() {
        StepDetail::Number(detail) => assert_eq!(detail.result, Some(6)),
        other => panic!("unexpected detail {:?}", other),
    }
}

#[test]
fn gcd_with_zero_is_a_single_base_case() {
    let result = EuclideanGcd::new()
        .execute(&AlgorithmInput::Pair { a: 15, b: 0 })
        .unwrap();
    assert_eq!(tags(&result), vec![OperationTag::BaseCase]);
    assert_eq!(result.result, Outcome::Number(15));
}

#[test]
fn dijkstra_settles_in_non_decreasing_distance_order() {
    let dijkstra = Dijkstra::new();
    let result = dijkstra.execute(&dijkstra.default_input()).unwrap();
    let Outcome::ShortestPaths { distances, .. } = &result.result else {
        panic!("unexpected outcome {:?}", result.result);
    };
    assert_eq!(distances[0], Some(0));
    assert!(distances[1..].iter().all(|d| d.is_some_and(|d| d > 0)));

    let settled: Vec<u64> = result
        .steps
        .iter()
        .filter(|s| s.tag() == OperationTag::Select)
        .map(|s| match s.variables() {
            StepDetail::Graph(detail) => detail.distance.unwrap(),
            other => panic!("unexpected detail {:?}", other),
        })
        .collect();
    assert_eq!(settled.len(), 5);
    assert!(settled.windows(2).all(|w| w[0] <= w[1]));
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[test]
fn every_algorithm_is_deterministic() {
    let catalog = Catalog::new();
    for algorithm in catalog.all() {
        let input = algorithm.default_input();
        let first = algorithm.execute(&input).unwrap();
        let second = algorithm.execute(&input).unwrap();
        assert_eq!(first.steps, second.steps, "{}", algorithm.descriptor().id);
        assert_eq!(first.result, second.result);
        assert_ids_contiguous(&first);
    }
}

#[test]
fn every_trace_starts_and_ends_properly() {
    let catalog = Catalog::new();
    for algorithm in catalog.all() {
        let result = algorithm.execute(&algorithm.default_input()).unwrap();
        let id = algorithm.descriptor().id;
        assert_eq!(result.steps[0].tag(), OperationTag::Init, "{id}");
        assert_eq!(
            result.final_step().unwrap().tag(),
            OperationTag::Complete,
            "{id}"
        );
        assert!(result.steps.iter().all(|s| !s.description().is_empty()));
    }
}

#[test]
fn summary_matches_trace() {
    let catalog = Catalog::new();
    for algorithm in catalog.all() {
        let result = algorithm.execute(&algorithm.default_input()).unwrap();
        assert_eq!(result.summary.steps, result.steps.len());
        assert_eq!(
            result.summary.comparisons,
            result.count(OperationTag::Comparison)
        );
        assert_eq!(result.summary.swaps, result.count(OperationTag::Swap));
        assert!(result.summary.time_elapsed_ms >= 0.0);
    }
}

#[test]
fn wrong_input_shape_fails_before_any_step() {
    let catalog = Catalog::new();
    let pair = AlgorithmInput::Pair { a: 1, b: 2 };
    for algorithm in catalog.all() {
        if algorithm.descriptor().input == pair.kind() {
            continue;
        }
        let err = algorithm.execute(&pair).unwrap_err();
        assert!(matches!(err, TraceError::InputMismatch { .. }));
        assert_eq!(err.kind(), ErrorKind::Shape);
    }
}

#[test]
fn unknown_graph_references_are_shape_errors() {
    let bfs = BreadthFirstSearch::new();
    let missing_start = bfs
        .execute(&input(
            r#"{"kind":"graph","adjacency":{"a":["b"],"b":[]},"start":"z"}"#,
        ))
        .unwrap_err();
    assert!(matches!(missing_start, TraceError::UnknownNode { .. }));

    let dangling = bfs
        .execute(&input(
            r#"{"kind":"graph","adjacency":{"a":["q"]},"start":"a"}"#,
        ))
        .unwrap_err();
    assert_eq!(dangling.kind(), ErrorKind::Shape);
}

#[test]
fn oversized_edge_lists_fail_before_any_step() {
    let fan = ["\"b\""; 41].join(",");
    let err = BreadthFirstSearch::new()
        .execute(&input(&format!(
            r#"{{"kind":"graph","adjacency":{{"a":[{fan}],"b":[]}},"start":"a"}}"#
        )))
        .unwrap_err();
    assert!(matches!(err, TraceError::TooLarge { len: 41, max: 40, .. }));
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn degenerate_inputs_give_minimal_traces() {
    let catalog = Catalog::new();
    let cases = [
        ("selection-sort", AlgorithmInput::array(vec![])),
        ("bubble-sort", AlgorithmInput::array(vec![42])),
        ("lis", AlgorithmInput::array(vec![])),
        ("sieve", AlgorithmInput::Limit { n: 1 }),
        (
            "bfs",
            input(r#"{"kind":"graph","adjacency":{"solo":[]},"start":"solo"}"#),
        ),
    ];
    for (id, case) in cases {
        let result = catalog.run(id, &case).unwrap();
        assert!(result.success, "{id}");
        assert!(result.steps.len() >= 2, "{id}");
    }
}

#[test]
fn snapshots_match_visual_kind() {
    let catalog = Catalog::new();
    for algorithm in catalog.all() {
        let descriptor = algorithm.descriptor();
        let result = algorithm.execute(&algorithm.default_input()).unwrap();
        let playback = result
            .playback(1.0, descriptor.category.visual_kind())
            .unwrap();
        assert_eq!(playback.steps.len(), result.steps.len());
        for step in &result.steps {
            let consistent = match (descriptor.category.visual_kind(), step.snapshot()) {
                (VisualKind::Array, Snapshot::Array(_)) => true,
                (VisualKind::Graph, Snapshot::Graph(_)) => true,
                (VisualKind::Table, Snapshot::Sequence(_) | Snapshot::Table(_)) => true,
                (VisualKind::Number, Snapshot::Operands { .. } | Snapshot::Sieve(_)) => true,
                _ => false,
            };
            assert!(consistent, "{} produced {:?}", descriptor.id, step.snapshot());
        }
    }
}

#[test]
fn results_serialize_to_json() {
    let catalog = Catalog::new();
    let result = catalog
        .run("gcd", &AlgorithmInput::Pair { a: 48, b: 18 })
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["result"]["type"], "number");
    assert_eq!(json["result"]["value"], 6);
    assert_eq!(json["steps"][0]["tag"], "init");
    assert_eq!(json["steps"][0]["snapshot"]["type"], "operands");
    assert_eq!(json["steps"][1]["variables"]["category"], "number");
}
