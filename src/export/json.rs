//! JSON export implementation.
//!
//! Exports equivalence classes in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use crate::graph::GraphKind;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable equivalence class for JSON output.
#[derive(Serialize)]
struct JsonClass {
    key: String,
    in_degree: usize,
    out_degree: usize,
    hash: u64,
    size: usize,
    vertices: Vec<String>,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    vertices: usize,
    edges: usize,
    classes: usize,
    singleton_classes: usize,
    largest_class: usize,
}

/// Graph info for JSON output.
#[derive(Serialize)]
struct JsonGraph {
    name: String,
    kind: GraphKind,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport {
    graph: JsonGraph,
    summary: JsonSummary,
    classes: Vec<JsonClass>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let classes: Vec<JsonClass> = data
            .classes
            .iter()
            .map(|c| JsonClass {
                key: c.key(),
                in_degree: c.degrees.in_degree,
                out_degree: c.degrees.out_degree,
                hash: c.hash,
                size: c.len(),
                vertices: c.vertices.clone(),
            })
            .collect();

        let export = JsonExport {
            graph: JsonGraph {
                name: data.graph_name.clone(),
                kind: data.kind,
            },
            summary: JsonSummary {
                vertices: data.vertex_count,
                edges: data.edge_count,
                classes: data.classes.len(),
                singleton_classes: data.singleton_count(),
                largest_class: data.largest_class_size(),
            },
            classes,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
