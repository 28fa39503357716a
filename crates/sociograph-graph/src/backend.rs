//! Adjacency projection over a built graph, backed by petgraph.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::{Vertex, VertexId};

/// Directed adjacency view of a [`Graph`].
///
/// Edges whose endpoints are unresolved, or reference a vertex ID that was
/// never built, are left out of the projection; `skipped_edges` counts them.
pub struct GraphBackend {
    graph: DiGraph<Vertex, f64>,
    node_index: HashMap<VertexId, NodeIndex>,
    skipped_edges: usize,
}

impl GraphBackend {
    /// Project a built graph into an adjacency structure.
    pub fn from_graph(source: &Graph) -> Self {
        let mut graph = DiGraph::new();
        let mut node_index = HashMap::new();

        for vertex in source.vertices().iter() {
            let idx = graph.add_node(vertex.clone());
            node_index.insert(vertex.id, idx);
        }

        let mut skipped_edges = 0;
        for edge in source.edges().iter() {
            let endpoints = match (edge.source, edge.target) {
                (Some(s), Some(t)) => node_index.get(&s).zip(node_index.get(&t)),
                _ => None,
            };
            match endpoints {
                Some((&s, &t)) => {
                    graph.add_edge(s, t, edge.weight);
                }
                None => skipped_edges += 1,
            }
        }

        Self {
            graph,
            node_index,
            skipped_edges,
        }
    }

    /// Get projection statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            skipped_edges: self.skipped_edges,
        }
    }

    /// Outgoing neighbor IDs of a vertex.
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        match self.node_index.get(&id) {
            Some(&idx) => self
                .graph
                .neighbors_directed(idx, Direction::Outgoing)
                .map(|n| self.graph[n].id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Total degree (in + out) of a vertex.
    pub fn degree(&self, id: VertexId) -> usize {
        match self.node_index.get(&id) {
            Some(&idx) => {
                self.graph.neighbors_directed(idx, Direction::Outgoing).count()
                    + self.graph.neighbors_directed(idx, Direction::Incoming).count()
            }
            None => 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub skipped_edges: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EdgeParams, VertexParams};

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        graph.communities_mut().build();
        for (id, label) in [(0, "a"), (1, "b"), (2, "c")] {
            graph.vertices_mut().build(VertexParams {
                id,
                label: label.into(),
                community_id: 0,
            });
        }
        graph.edges_mut().build(EdgeParams {
            source: Some(0),
            target: Some(1),
            weight: 1.0,
            created_at: None,
        });
        graph.edges_mut().build(EdgeParams {
            source: Some(1),
            target: Some(2),
            weight: 2.0,
            created_at: None,
        });
        graph
    }

    #[test]
    fn test_projection_stats() {
        let backend = GraphBackend::from_graph(&sample_graph());
        let stats = backend.stats();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.skipped_edges, 0);
    }

    #[test]
    fn test_unresolved_edges_skipped() {
        let mut graph = sample_graph();
        graph.edges_mut().build(EdgeParams {
            source: None,
            target: Some(2),
            weight: 0.0,
            created_at: None,
        });
        // endpoint 99 was never built
        graph.edges_mut().build(EdgeParams {
            source: Some(0),
            target: Some(99),
            weight: 0.0,
            created_at: None,
        });

        let backend = GraphBackend::from_graph(&graph);
        let stats = backend.stats();
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.skipped_edges, 2);
    }

    #[test]
    fn test_neighbors_and_degree() {
        let backend = GraphBackend::from_graph(&sample_graph());
        assert_eq!(backend.neighbors(0), vec![1]);
        assert_eq!(backend.neighbors(2), Vec::<VertexId>::new());
        assert_eq!(backend.degree(1), 2);
        assert_eq!(backend.degree(42), 0);
    }
}
