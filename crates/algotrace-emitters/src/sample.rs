//! Seeded random inputs.
//!
//! [`random_input`] produces an input of the requested kind that passes
//! validation under the given [`Limits`]. The same seed always yields the
//! same input, which keeps CLI runs and property tests reproducible. Graph
//! kinds always have at least one node, so they need `max_graph_nodes >= 1`.

use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use algotrace_core::input::{
    GraphInput, HeapInput, HeapKind, HeapOperation, KnapsackInput, WeightedEdge,
    WeightedGraphInput,
};
use algotrace_core::{AlgorithmInput, InputKind, Limits};

/// Largest array value or edge weight a sample will contain, independent of
/// the configured caps, so generated traces stay readable.
const VALUE_CEILING: u64 = 99;
const WEIGHT_CEILING: u64 = 20;
const NODE_CEILING: usize = 8;

/// Uniform draw from `lo..=hi`, collapsing to `lo` when the range is empty.
fn draw<R: Rng>(rng: &mut R, lo: u64, hi: u64) -> u64 {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

fn draw_len<R: Rng>(rng: &mut R, lo: usize, hi: usize) -> usize {
    draw(rng, lo as u64, hi as u64) as usize
}

/// A length in `1..=cap`, or 0 when the cap is 0.
fn draw_nonempty_len<R: Rng>(rng: &mut R, cap: usize) -> usize {
    draw_len(rng, 1.min(cap), cap)
}

fn draw_value<R: Rng>(rng: &mut R, ceiling: u64) -> i64 {
    draw(rng, 0, ceiling) as i64
}

/// Generates a valid input of `kind` from `seed`.
pub fn random_input(kind: InputKind, limits: &Limits, seed: u64) -> AlgorithmInput {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    match kind {
        InputKind::Array => {
            let len = draw_nonempty_len(&mut rng, limits.max_array_len);
            let values = (0..len)
                .map(|_| draw_value(&mut rng, VALUE_CEILING))
                .collect();
            AlgorithmInput::array(values)
        }
        InputKind::Graph => AlgorithmInput::Graph(random_graph(&mut rng, limits)),
        InputKind::WeightedGraph => {
            AlgorithmInput::WeightedGraph(random_weighted_graph(&mut rng, limits))
        }
        InputKind::Pair => AlgorithmInput::Pair {
            a: draw(&mut rng, 0, limits.max_operand) as i64,
            b: draw(&mut rng, 0, limits.max_operand) as i64,
        },
        InputKind::Heap => {
            let heap = if rng.gen_bool(0.5) {
                HeapKind::Max
            } else {
                HeapKind::Min
            };
            let initial = (0..draw_len(&mut rng, 0, limits.max_array_len))
                .map(|_| draw_value(&mut rng, VALUE_CEILING))
                .collect();
            let operations = (0..draw_len(&mut rng, 0, limits.max_heap_operations))
                .map(|_| {
                    if rng.gen_bool(0.6) {
                        HeapOperation::Insert {
                            value: draw_value(&mut rng, VALUE_CEILING),
                        }
                    } else {
                        HeapOperation::Extract
                    }
                })
                .collect();
            AlgorithmInput::Heap(HeapInput {
                heap,
                initial,
                operations,
            })
        }
        InputKind::Knapsack => {
            let capacity = draw_nonempty_len(&mut rng, limits.max_knapsack_capacity);
            let items = draw_nonempty_len(&mut rng, limits.max_knapsack_items);
            let max_weight = (capacity as u64).min(limits.max_operand).max(1);
            let weights = (0..items)
                .map(|_| draw(&mut rng, 1, max_weight) as usize)
                .collect();
            let values = (0..items)
                .map(|_| draw(&mut rng, 1, limits.max_operand.min(VALUE_CEILING)))
                .collect();
            AlgorithmInput::Knapsack(KnapsackInput {
                weights,
                values,
                capacity,
            })
        }
        InputKind::Limit => AlgorithmInput::Limit {
            n: draw(&mut rng, 0, limits.max_sieve_limit) as i64,
        },
    }
}

fn random_graph(rng: &mut ChaCha8Rng, limits: &Limits) -> GraphInput {
    let nodes = draw_len(rng, 1, limits.max_graph_nodes.min(NODE_CEILING));
    let mut adjacency = IndexMap::with_capacity(nodes);
    let mut budget = limits.max_graph_edges;
    for from in 0..nodes {
        let mut neighbors = Vec::new();
        for to in 0..nodes {
            if budget > 0 && to != from && rng.gen_bool(0.35) {
                neighbors.push(to.to_string());
                budget -= 1;
            }
        }
        adjacency.insert(from.to_string(), neighbors);
    }
    GraphInput {
        adjacency,
        start: "0".to_string(),
        target: None,
    }
}

fn random_weighted_graph(rng: &mut ChaCha8Rng, limits: &Limits) -> WeightedGraphInput {
    let nodes = draw_len(rng, 1, limits.max_graph_nodes.min(NODE_CEILING));
    let max_weight = limits.max_operand.min(WEIGHT_CEILING).max(1);
    let mut edges = Vec::new();
    for from in 0..nodes {
        for to in from + 1..nodes {
            if edges.len() < limits.max_graph_edges && rng.gen_bool(0.4) {
                edges.push(WeightedEdge {
                    from,
                    to,
                    weight: draw(rng, 1, max_weight),
                });
            }
        }
    }
    WeightedGraphInput {
        nodes,
        edges,
        directed: false,
        start: 0,
        target: Some(nodes - 1),
    }
}
