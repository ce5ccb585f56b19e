//! Validated graph models backing the graph emitters.
//!
//! Both models wrap a petgraph [`DiGraph`]. Construction is where shape and
//! range validation happens: every referenced node must exist and the node
//! and edge counts must respect the configured caps. Neighbour iteration follows input
//! order (petgraph itself yields outgoing edges newest first, so neighbours
//! are re-sorted by edge index).

use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::error::TraceError;
use crate::input::{WeightedEdge, WeightedGraphInput};
use crate::limits::{ensure_len, ensure_range, Limits};
use crate::snapshot::{EdgeView, GraphView};

// ---------------------------------------------------------------------------
// Unweighted graph with string node ids
// ---------------------------------------------------------------------------

/// A directed graph whose nodes carry string ids.
#[derive(Debug, Clone)]
pub struct LabeledGraph {
    graph: DiGraph<String, ()>,
    index: IndexMap<String, NodeIndex>,
}

impl LabeledGraph {
    /// Builds a graph from an ordered adjacency map.
    ///
    /// Node order is key order. A neighbour that is not itself a key is an
    /// [`TraceError::UnknownNode`] error.
    pub fn from_adjacency(
        adjacency: &IndexMap<String, Vec<String>>,
        limits: &Limits,
    ) -> Result<Self, TraceError> {
        ensure_len("adjacency", adjacency.len(), limits.max_graph_nodes)?;
        let edge_count = adjacency.values().map(Vec::len).sum();
        ensure_len("adjacency edges", edge_count, limits.max_graph_edges)?;

        let mut graph = DiGraph::with_capacity(adjacency.len(), edge_count);
        let mut index = IndexMap::with_capacity(adjacency.len());
        for id in adjacency.keys() {
            index.insert(id.clone(), graph.add_node(id.clone()));
        }

        for (id, neighbors) in adjacency {
            let from = index[id.as_str()];
            for neighbor in neighbors {
                let to = index
                    .get(neighbor.as_str())
                    .copied()
                    .ok_or_else(|| TraceError::UnknownNode {
                        node: neighbor.clone(),
                        context: format!("the adjacency list of '{id}'"),
                    })?;
                graph.add_edge(from, to, ());
            }
        }

        Ok(LabeledGraph { graph, index })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Looks up a node id, failing with [`TraceError::UnknownNode`].
    pub fn resolve(&self, id: &str, context: &str) -> Result<NodeIndex, TraceError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| TraceError::UnknownNode {
                node: id.to_string(),
                context: context.to_string(),
            })
    }

    pub fn label(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    /// Labels for a sequence of nodes.
    pub fn labels<'a>(&self, nodes: impl IntoIterator<Item = &'a NodeIndex>) -> Vec<String> {
        nodes
            .into_iter()
            .map(|n| self.label(*n).to_string())
            .collect()
    }

    /// Outgoing neighbours in adjacency-list order, duplicates included.
    pub fn neighbors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self
            .graph
            .edges(node)
            .map(|e| (e.id().index(), e.target()))
            .collect();
        edges.sort_unstable_by_key(|(id, _)| *id);
        edges.into_iter().map(|(_, target)| target).collect()
    }

    /// Snapshot view with the given traversal state.
    pub fn view<'a>(
        &self,
        visited: &[NodeIndex],
        frontier: impl IntoIterator<Item = &'a NodeIndex>,
    ) -> GraphView {
        let edges = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(from, to)| EdgeView {
                from: self.label(from).to_string(),
                to: self.label(to).to_string(),
                weight: None,
            })
            .collect();
        GraphView {
            nodes: self.index.keys().cloned().collect(),
            edges,
            visited: self.labels(visited),
            frontier: self.labels(frontier),
            distances: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Weighted graph over numbered nodes
// ---------------------------------------------------------------------------

/// A weighted graph over nodes `0..n`. Undirected input is stored as a pair
/// of opposite directed edges.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    graph: DiGraph<usize, u64>,
    edges: Vec<WeightedEdge>,
}

impl WeightedGraph {
    /// Validates and builds a weighted graph. Edge weights must lie in
    /// `1..=limits.max_operand`.
    pub fn from_input(input: &WeightedGraphInput, limits: &Limits) -> Result<Self, TraceError> {
        ensure_range(
            "nodes",
            i64::try_from(input.nodes).unwrap_or(i64::MAX),
            1,
            limits.max_graph_nodes as u64,
        )?;
        ensure_len("edges", input.edges.len(), limits.max_graph_edges)?;

        let mut graph = DiGraph::with_capacity(input.nodes, input.edges.len() * 2);
        for n in 0..input.nodes {
            graph.add_node(n);
        }

        for (i, edge) in input.edges.iter().enumerate() {
            for endpoint in [edge.from, edge.to] {
                if endpoint >= input.nodes {
                    return Err(TraceError::UnknownNode {
                        node: endpoint.to_string(),
                        context: format!("edge {i}"),
                    });
                }
            }
            ensure_range(
                "edge weight",
                i64::try_from(edge.weight).unwrap_or(i64::MAX),
                1,
                limits.max_operand,
            )?;

            let (from, to) = (NodeIndex::new(edge.from), NodeIndex::new(edge.to));
            graph.add_edge(from, to, edge.weight);
            if !input.directed && edge.from != edge.to {
                graph.add_edge(to, from, edge.weight);
            }
        }

        Ok(WeightedGraph {
            graph,
            edges: input.edges.clone(),
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Fails with [`TraceError::UnknownNode`] unless `node < node_count()`.
    pub fn check_node(&self, node: usize, context: &str) -> Result<usize, TraceError> {
        if node >= self.node_count() {
            return Err(TraceError::UnknownNode {
                node: node.to_string(),
                context: context.to_string(),
            });
        }
        Ok(node)
    }

    /// Outgoing `(neighbour, weight)` pairs in input order.
    pub fn neighbors(&self, node: usize) -> Vec<(usize, u64)> {
        let mut edges: Vec<_> = self
            .graph
            .edges(NodeIndex::new(node))
            .map(|e| (e.id().index(), e.target().index(), *e.weight()))
            .collect();
        edges.sort_unstable_by_key(|(id, _, _)| *id);
        edges.into_iter().map(|(_, to, w)| (to, w)).collect()
    }

    /// Snapshot view with settled nodes, pending nodes, and distances.
    pub fn view(
        &self,
        settled: &[usize],
        pending: &[usize],
        distances: &[Option<u64>],
    ) -> GraphView {
        let label = |n: &usize| n.to_string();
        GraphView {
            nodes: (0..self.node_count()).map(|n| label(&n)).collect(),
            edges: self
                .edges
                .iter()
                .map(|e| EdgeView {
                    from: label(&e.from),
                    to: label(&e.to),
                    weight: Some(e.weight),
                })
                .collect(),
            visited: settled.iter().map(label).collect(),
            frontier: pending.iter().map(label).collect(),
            distances: Some(distances.to_vec()),
        }
    }
}
