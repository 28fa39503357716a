//! Sociograph Import — builds an in-memory graph from external record documents.
//!
//! The pipeline: a format tag selects a builder strategy from a registry (or
//! the dump fast path), the strategy decodes `{"result": [...]}` record
//! documents, remaps external identifiers to dense internal ones, and issues
//! build calls against a [`sociograph_graph::Graph`].

pub mod coerce;
pub mod dump;
pub mod idg_json;
pub mod importer;
pub mod record;
pub mod registry;
pub mod remap;
pub mod window;

pub use importer::{BuildRequest, ImportConfig, ImportOptions, Importer, Input};
pub use registry::{FormatRegistry, RecordStreams};
