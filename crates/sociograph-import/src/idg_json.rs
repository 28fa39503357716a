//! Builder strategy for the idg_json record format.
//!
//! Two linear phases: vertex records are remapped to dense internal IDs and
//! grouped into communities, then edge records are ingested through the edge
//! range window. Each document is decoded fully into memory before iteration
//! begins, so input size is bounded by available memory rather than streamed.

use chrono::Utc;
use tracing::info;

use sociograph_core::Result;
use sociograph_graph::{EdgeParams, Graph, VertexParams};

use crate::coerce;
use crate::importer::ImportOptions;
use crate::record::RecordDocument;
use crate::registry::RecordStreams;
use crate::remap::IdRemapper;
use crate::window::EdgeWindow;

const PROGRESS_INTERVAL: usize = 10_000;

fn now() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Build a graph from idg_json vertex and edge record documents.
///
/// Vertex records consume `rid` (external vertex ID), `c_id` (external
/// community ID), and `screen_name` (label). Edge records consume `weight`,
/// `in`, `out`, and optionally `created_at` when the graph's edge schema
/// declares it. Edge endpoints that were never seen in the vertex phase are
/// stored unresolved, not rejected.
pub fn build_graph_from_idg_json(
    mut graph: Graph,
    streams: RecordStreams,
    options: &ImportOptions,
) -> Result<Graph> {
    let mut remapper = IdRemapper::new();
    let verbose = options.verbose;

    if verbose {
        info!("loading vertices ... {}", now());
    }
    if let Some(reader) = streams.vertices {
        if verbose {
            info!("decoding vertex document ... {}", now());
        }
        let document = RecordDocument::from_reader(reader)?;
        if verbose {
            info!("decoded {} vertex records ... {}", document.result.len(), now());
        }
        for (i, record) in document.result.iter().enumerate() {
            let id = remapper.vertex_id(record.get("rid"));
            let community_id = remapper.community_id(record.get("c_id"), &mut graph);
            graph.vertices_mut().build(VertexParams {
                id,
                label: coerce::display_string(record.get("screen_name")),
                community_id,
            });
            if verbose && i % PROGRESS_INTERVAL == 0 {
                info!(".................... {} {}", now(), i);
            }
        }
    }

    if verbose {
        info!("loading edges ...... {}", now());
    }
    if let Some(reader) = streams.edges {
        let window = EdgeWindow::from_options(options);
        let document = RecordDocument::from_reader(reader)?;
        let with_created_at = graph.edge_schema().has_created_at();
        for (i, record) in document.result.iter().enumerate() {
            if window.skip(i) {
                continue;
            }
            if window.done(i) {
                break;
            }
            let created_at =
                with_created_at.then(|| coerce::timestamp(record.get("created_at")));
            graph.edges_mut().build(EdgeParams {
                weight: coerce::float(record.get("weight")),
                source: remapper.lookup_vertex(record.get("in")),
                target: remapper.lookup_vertex(record.get("out")),
                created_at,
            });
        }
    }

    if verbose {
        info!("loaded               {}", now());
    }

    Ok(graph)
}
