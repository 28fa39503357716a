//! Data types for vertices, edges, and communities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dense, zero-based internal vertex identifier.
pub type VertexId = u64;

/// Dense, zero-based community identifier.
pub type CommunityId = u64;

/// A vertex in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub label: String,
    pub community_id: CommunityId,
}

/// An edge in the graph.
///
/// `source` and `target` may be `None`: an edge is allowed to reference a
/// vertex that was never built (its record was absent or filtered out
/// upstream). The graph stores such edges as-is; consumers that need a fully
/// resolved topology use [`crate::GraphBackend`], which skips them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: Option<VertexId>,
    pub target: Option<VertexId>,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A community grouping vertices. Created lazily on first reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub id: CommunityId,
}

/// Parameters for building a vertex. The `id` is caller-assigned.
#[derive(Debug, Clone, Default)]
pub struct VertexParams {
    pub id: VertexId,
    pub label: String,
    pub community_id: CommunityId,
}

/// Parameters for building an edge.
#[derive(Debug, Clone, Default)]
pub struct EdgeParams {
    pub source: Option<VertexId>,
    pub target: Option<VertexId>,
    pub weight: f64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Declares which optional fields the edge type carries.
///
/// Builders query this once before their edge loop instead of probing each
/// record; an edge built into a graph whose schema omits a field never
/// carries that field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSchema {
    pub created_at: bool,
}

impl EdgeSchema {
    pub fn has_created_at(&self) -> bool {
        self.created_at
    }
}

impl Default for EdgeSchema {
    fn default() -> Self {
        Self { created_at: true }
    }
}
