//! External-to-internal identifier remapping.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde_json::Value;
use sociograph_graph::{CommunityId, Graph, VertexId};

/// Hashable key derived from an external identifier.
///
/// External IDs are arbitrary JSON scalars. Integers and strings keep their
/// own variants so `1` and `"1"` stay distinct; non-integer numbers and
/// composite values key by their canonical string form. A missing field keys
/// as `Null`, so every record lacking the field shares one slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExternalId {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl ExternalId {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Null,
            Some(Value::Bool(b)) => Self::Bool(*b),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Text(n.to_string()),
            },
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(other) => Self::Text(other.to_string()),
        }
    }
}

/// Assigns dense, insertion-ordered internal IDs to external vertex and
/// community identifiers on first sight.
///
/// Both maps are populated lazily during a single ingestion pass; they never
/// shrink and never reassign an existing key.
#[derive(Debug, Default)]
pub struct IdRemapper {
    vertex_ids: HashMap<ExternalId, VertexId>,
    community_ids: HashMap<ExternalId, CommunityId>,
}

impl IdRemapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Internal ID for an external vertex identifier, assigning the next
    /// dense ID (starting at 0) on first sight.
    pub fn vertex_id(&mut self, external: Option<&Value>) -> VertexId {
        let next = self.vertex_ids.len() as VertexId;
        *self
            .vertex_ids
            .entry(ExternalId::from_value(external))
            .or_insert(next)
    }

    /// Non-assigning lookup for the edge phase. Never-seen identifiers yield
    /// `None`.
    pub fn lookup_vertex(&self, external: Option<&Value>) -> Option<VertexId> {
        self.vertex_ids.get(&ExternalId::from_value(external)).copied()
    }

    /// Community ID for an external community identifier, building a new
    /// community on the graph on first sight.
    pub fn community_id(&mut self, external: Option<&Value>, graph: &mut Graph) -> CommunityId {
        match self.community_ids.entry(ExternalId::from_value(external)) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = graph.communities_mut().build().id;
                *entry.insert(id)
            }
        }
    }

    /// Number of distinct vertex identifiers seen.
    pub fn vertex_count(&self) -> usize {
        self.vertex_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dense_first_appearance_order() {
        let mut remapper = IdRemapper::new();
        let ids = [json!("x"), json!("y"), json!("x"), json!("z"), json!("y")];
        let assigned: Vec<VertexId> = ids.iter().map(|v| remapper.vertex_id(Some(v))).collect();
        assert_eq!(assigned, vec![0, 1, 0, 2, 1]);
        assert_eq!(remapper.vertex_count(), 3);
    }

    #[test]
    fn test_scalar_types_stay_distinct() {
        let mut remapper = IdRemapper::new();
        let a = remapper.vertex_id(Some(&json!(1)));
        let b = remapper.vertex_id(Some(&json!("1")));
        let c = remapper.vertex_id(Some(&json!(1.5)));
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(c, 2);
    }

    #[test]
    fn test_missing_and_null_share_a_slot() {
        let mut remapper = IdRemapper::new();
        let a = remapper.vertex_id(None);
        let b = remapper.vertex_id(Some(&Value::Null));
        assert_eq!(a, b);
        assert_eq!(remapper.vertex_count(), 1);
    }

    #[test]
    fn test_lookup_does_not_assign() {
        let mut remapper = IdRemapper::new();
        assert_eq!(remapper.lookup_vertex(Some(&json!("ghost"))), None);
        assert_eq!(remapper.vertex_count(), 0);
        let id = remapper.vertex_id(Some(&json!("ghost")));
        assert_eq!(remapper.lookup_vertex(Some(&json!("ghost"))), Some(id));
    }

    #[test]
    fn test_community_sharing() {
        let mut remapper = IdRemapper::new();
        let mut graph = Graph::new();
        let a = remapper.community_id(Some(&json!(10)), &mut graph);
        let b = remapper.community_id(Some(&json!(20)), &mut graph);
        let c = remapper.community_id(Some(&json!(10)), &mut graph);
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(graph.communities().len(), 2);
    }
}
