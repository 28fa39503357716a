//! Format registry: maps format tags to builder strategies.

use std::collections::HashMap;
use std::io::Read;

use sociograph_core::Result;
use sociograph_graph::Graph;

use crate::idg_json;
use crate::importer::ImportOptions;

/// The record streams handed to a builder strategy. Either may be absent, in
/// which case the strategy skips the corresponding phase.
pub struct RecordStreams {
    pub vertices: Option<Box<dyn Read>>,
    pub edges: Option<Box<dyn Read>>,
}

/// A builder strategy: consumes the record streams and populates the graph.
pub type BuildFn = Box<dyn Fn(Graph, RecordStreams, &ImportOptions) -> Result<Graph> + Send + Sync>;

/// Registry of builder strategies, populated at initialization.
///
/// Resolution is two-tier: a tag `x` matches a strategy registered as
/// `graph_from_x` first, then one registered as plain `x`. Built-in handlers
/// take the long form, leaving the short form free for ad hoc strategies.
pub struct FormatRegistry {
    builders: HashMap<String, BuildFn>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// A registry with the built-in strategies registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("graph_from_idg_json", idg_json::build_graph_from_idg_json);
        registry
    }

    /// Register a strategy under a name. A later registration under the same
    /// name replaces the earlier one.
    pub fn register<F>(&mut self, name: impl Into<String>, builder: F)
    where
        F: Fn(Graph, RecordStreams, &ImportOptions) -> Result<Graph> + Send + Sync + 'static,
    {
        self.builders.insert(name.into(), Box::new(builder));
    }

    /// Resolve a format tag to a strategy, trying `graph_from_<tag>` before
    /// the bare tag.
    pub fn resolve(&self, tag: &str) -> Option<&BuildFn> {
        self.builders
            .get(&format!("graph_from_{tag}"))
            .or_else(|| self.builders.get(tag))
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_resolves() {
        let registry = FormatRegistry::with_builtins();
        assert!(registry.resolve("idg_json").is_some());
    }

    #[test]
    fn test_unknown_tag_misses() {
        let registry = FormatRegistry::with_builtins();
        assert!(registry.resolve("nonexistent").is_none());
    }

    #[test]
    fn test_short_name_registration() {
        let mut registry = FormatRegistry::new();
        registry.register("edgelist", |graph, _streams, _options| Ok(graph));
        assert!(registry.resolve("edgelist").is_some());
    }

    #[test]
    fn test_long_form_wins_over_short() {
        let mut registry = FormatRegistry::new();
        registry.register("x", |graph, _streams, _options| Ok(graph));
        registry.register("graph_from_x", |mut graph, _streams, _options| {
            graph.communities_mut().build();
            Ok(graph)
        });

        let builder = registry.resolve("x").unwrap();
        let graph = builder(
            Graph::new(),
            RecordStreams {
                vertices: None,
                edges: None,
            },
            &ImportOptions::default(),
        )
        .unwrap();
        assert_eq!(graph.communities().len(), 1);
    }
}
