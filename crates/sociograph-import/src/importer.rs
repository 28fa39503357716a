//! Import entry points: path-resolving `load` and stream-consuming `build`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use sociograph_core::{Error, Result};
use sociograph_graph::Graph;

use crate::dump;
use crate::registry::{FormatRegistry, RecordStreams};

/// Reserved format tag for the dump fast path.
pub const DUMP_FORMAT: &str = "dump";

/// Import options recognized by the entry points and builder strategies.
///
/// `start_edge_number` and `end_edge_number` arrive as arbitrary JSON scalars
/// and are coerced leniently (see [`crate::window::EdgeWindow`]).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportOptions {
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub start_edge_number: Option<Value>,
    #[serde(default)]
    pub end_edge_number: Option<Value>,
}

/// A byte source for one import document: a filesystem path, resolved by
/// [`Importer::load`], or an already-open reader.
pub enum Input {
    Path(PathBuf),
    Reader(Box<dyn Read>),
}

impl Input {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn reader(reader: impl Read + 'static) -> Self {
        Self::Reader(Box::new(reader))
    }

    fn into_reader(self) -> Result<Box<dyn Read>> {
        match self {
            Self::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            Self::Reader(reader) => Ok(reader),
        }
    }
}

/// Configuration for [`Importer::load`]. Path inputs are opened before
/// delegation to [`Importer::build`].
#[derive(Default)]
pub struct ImportConfig {
    pub vertices: Option<Input>,
    pub edges: Option<Input>,
    pub path: Option<Input>,
    pub options: ImportOptions,
}

/// A build request with already-open streams.
///
/// `graph` is the target the resolved strategy populates; the default is a
/// fresh empty graph, and callers needing a non-default edge schema supply
/// one built with `Graph::with_edge_schema`.
pub struct BuildRequest {
    pub graph: Graph,
    pub vertices: Option<Box<dyn Read>>,
    pub edges: Option<Box<dyn Read>>,
    pub path: Option<Box<dyn Read>>,
    pub options: ImportOptions,
}

impl Default for BuildRequest {
    fn default() -> Self {
        Self {
            graph: Graph::new(),
            vertices: None,
            edges: None,
            path: None,
            options: ImportOptions::default(),
        }
    }
}

/// Imports graphs from record documents or dumps.
pub struct Importer {
    registry: FormatRegistry,
}

impl Importer {
    /// An importer with the built-in format strategies.
    pub fn new() -> Self {
        Self {
            registry: FormatRegistry::with_builtins(),
        }
    }

    /// An importer over a caller-assembled registry.
    pub fn with_registry(registry: FormatRegistry) -> Self {
        Self { registry }
    }

    /// Mutable access to the registry, for ad hoc strategy registration.
    pub fn registry_mut(&mut self) -> &mut FormatRegistry {
        &mut self.registry
    }

    /// Resolve path inputs to open streams, then build.
    pub fn load(&self, config: ImportConfig) -> Result<Graph> {
        self.build(BuildRequest {
            graph: Graph::new(),
            vertices: config.vertices.map(Input::into_reader).transpose()?,
            edges: config.edges.map(Input::into_reader).transpose()?,
            path: config.path.map(Input::into_reader).transpose()?,
            options: config.options,
        })
    }

    /// Build a graph from already-open streams.
    ///
    /// The reserved `"dump"` format bypasses every builder and loads the
    /// `path` input directly. Any other tag resolves through the registry;
    /// a miss is fatal and builds nothing.
    pub fn build(&self, request: BuildRequest) -> Result<Graph> {
        let BuildRequest {
            graph,
            vertices,
            edges,
            path,
            options,
        } = request;

        if options.format == DUMP_FORMAT {
            let reader =
                path.ok_or_else(|| Error::DumpLoad("no dump input supplied".to_string()))?;
            return dump::load_from_dump(reader);
        }

        let builder = self
            .registry
            .resolve(&options.format)
            .ok_or_else(|| Error::UnknownFormat(options.format.clone()))?;
        builder(graph, RecordStreams { vertices, edges }, &options)
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}
