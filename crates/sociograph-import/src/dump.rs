//! Dump fast path: load a previously serialized graph without rebuilding it.

use std::io::{Read, Write};

use sociograph_core::{Error, Result};
use sociograph_graph::Graph;

/// Deserialize a previously dumped graph.
///
/// Bypasses remapping and record building entirely; the dump payload is the
/// serde representation of [`Graph`] and is opaque to callers. Any decode
/// failure is fatal.
pub fn load_from_dump<R: Read>(reader: R) -> Result<Graph> {
    serde_json::from_reader(reader).map_err(|e| Error::DumpLoad(e.to_string()))
}

/// Serialize a graph as a dump, suitable for [`load_from_dump`].
pub fn write_dump<W: Write>(writer: W, graph: &Graph) -> Result<()> {
    Ok(serde_json::to_writer(writer, graph)?)
}
