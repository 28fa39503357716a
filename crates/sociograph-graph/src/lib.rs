//! Sociograph Graph — in-memory graph model with append-only collections.

pub mod backend;
pub mod graph;
pub mod types;

pub use backend::{GraphBackend, GraphStats};
pub use graph::{CommunityCollection, EdgeCollection, Graph, VertexCollection};
pub use types::{
    Community, CommunityId, Edge, EdgeParams, EdgeSchema, Vertex, VertexId, VertexParams,
};
