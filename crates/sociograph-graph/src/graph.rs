//! The graph container and its append-only collections.

use serde::{Deserialize, Serialize};

use crate::types::{
    Community, CommunityId, Edge, EdgeParams, EdgeSchema, Vertex, VertexParams,
};

/// An in-memory graph owning three append-only collections.
///
/// Entities are created during one import pass and never mutated or deleted
/// afterward. The serde representation of a `Graph` is also the dump format
/// consumed by the import fast path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    vertices: VertexCollection,
    edges: EdgeCollection,
    communities: CommunityCollection,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph whose edge type carries a non-default set of optional fields.
    pub fn with_edge_schema(schema: EdgeSchema) -> Self {
        Self {
            edges: EdgeCollection {
                items: Vec::new(),
                schema,
            },
            ..Self::default()
        }
    }

    pub fn vertices(&self) -> &VertexCollection {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut VertexCollection {
        &mut self.vertices
    }

    pub fn edges(&self) -> &EdgeCollection {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut EdgeCollection {
        &mut self.edges
    }

    pub fn communities(&self) -> &CommunityCollection {
        &self.communities
    }

    pub fn communities_mut(&mut self) -> &mut CommunityCollection {
        &mut self.communities
    }

    pub fn edge_schema(&self) -> EdgeSchema {
        self.edges.schema
    }
}

/// Append-only vertex collection. Vertex IDs are caller-assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexCollection {
    items: Vec<Vertex>,
}

impl VertexCollection {
    /// Build a vertex from params and append it.
    pub fn build(&mut self, params: VertexParams) -> &Vertex {
        let index = self.items.len();
        self.items.push(Vertex {
            id: params.id,
            label: params.label,
            community_id: params.community_id,
        });
        &self.items[index]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Vertex> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.items
    }
}

/// Append-only edge collection.
///
/// Edges with unresolved endpoints (`source`/`target` of `None`) are stored
/// untouched; nothing here validates endpoint existence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeCollection {
    items: Vec<Edge>,
    #[serde(default)]
    schema: EdgeSchema,
}

impl EdgeCollection {
    /// Build an edge from params and append it.
    pub fn build(&mut self, params: EdgeParams) -> &Edge {
        let index = self.items.len();
        self.items.push(Edge {
            source: params.source,
            target: params.target,
            weight: params.weight,
            created_at: params.created_at,
        });
        &self.items[index]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Edge> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.items
    }
}

/// Append-only community collection. IDs are assigned sequentially from 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommunityCollection {
    items: Vec<Community>,
}

impl CommunityCollection {
    /// Build the next community and append it.
    pub fn build(&mut self) -> &Community {
        let index = self.items.len();
        self.items.push(Community {
            id: index as CommunityId,
        });
        &self.items[index]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Community> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Community> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        assert!(graph.vertices().is_empty());
        assert!(graph.edges().is_empty());
        assert!(graph.communities().is_empty());
    }

    #[test]
    fn test_community_ids_sequential() {
        let mut graph = Graph::new();
        assert_eq!(graph.communities_mut().build().id, 0);
        assert_eq!(graph.communities_mut().build().id, 1);
        assert_eq!(graph.communities_mut().build().id, 2);
        assert_eq!(graph.communities().len(), 3);
    }

    #[test]
    fn test_vertex_build_keeps_caller_id() {
        let mut graph = Graph::new();
        let vertex = graph.vertices_mut().build(VertexParams {
            id: 7,
            label: "alice".into(),
            community_id: 0,
        });
        assert_eq!(vertex.id, 7);
        assert_eq!(vertex.label, "alice");
    }

    #[test]
    fn test_edge_with_unresolved_endpoints() {
        let mut graph = Graph::new();
        let edge = graph.edges_mut().build(EdgeParams {
            source: None,
            target: Some(3),
            weight: 1.5,
            created_at: None,
        });
        assert_eq!(edge.source, None);
        assert_eq!(edge.target, Some(3));
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn test_edge_schema_default_and_override() {
        assert!(Graph::new().edge_schema().has_created_at());
        let graph = Graph::with_edge_schema(EdgeSchema { created_at: false });
        assert!(!graph.edge_schema().has_created_at());
    }
}
