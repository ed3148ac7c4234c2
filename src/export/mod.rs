//! Export functionality for equivalence-class reports.
//!
//! This module provides exporters for writing the degree equivalence
//! classes of a graph in various formats: JSON, CSV, and Markdown.

pub mod csv;
pub mod json;
pub mod markdown;

use crate::graph::{DegreePair, DegreeResult, GraphKind, LabeledGraph};
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - spreadsheet-friendly
    Csv,
    /// Markdown format - documentation/reporting
    #[default]
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// One degree equivalence class, resolved to vertex labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSummary {
    /// Degree pair shared by every member
    pub degrees: DegreePair,
    /// Equivalence hash of the class
    pub hash: u64,
    /// Member labels
    pub vertices: Vec<String>,
}

impl ClassSummary {
    /// Canonical `"<in>-<out>"` key of the class.
    pub fn key(&self) -> String {
        self.degrees.key()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True for a class with no members (should not happen).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Data container for export operations.
#[derive(Debug, Clone)]
pub struct ExportData {
    /// Graph display name
    pub graph_name: String,
    /// Directed or undirected
    pub kind: GraphKind,
    /// Number of vertices
    pub vertex_count: usize,
    /// Number of edges
    pub edge_count: usize,
    /// Equivalence classes, smallest first
    pub classes: Vec<ClassSummary>,
}

impl ExportData {
    /// Computes the degree classes of `graph` and collects them for export.
    pub fn from_graph(graph_name: impl Into<String>, graph: &LabeledGraph) -> DegreeResult<Self> {
        let context = graph.context();
        let mut classes = Vec::new();

        for set in graph.equivalence_classes()? {
            classes.push(ClassSummary {
                degrees: context.in_out_degrees(*set.representative())?,
                hash: set.hash(),
                vertices: graph.class_labels(&set),
            });
        }

        Ok(Self {
            graph_name: graph_name.into(),
            kind: graph.kind(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            classes,
        })
    }

    /// Number of vertices whose degree pair is unique in the graph.
    ///
    /// Each of these has at most one possible image under an isomorphism.
    pub fn singleton_count(&self) -> usize {
        self.classes.iter().filter(|c| c.len() == 1).count()
    }

    /// Size of the largest class, or 0 for an empty graph.
    pub fn largest_class_size(&self) -> usize {
        self.classes.iter().map(ClassSummary::len).max().unwrap_or(0)
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Csv => csv::CsvExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
pub(crate) fn sample_data() -> ExportData {
    let graph = LabeledGraph::from_edges(GraphKind::Undirected, &[("A", "B"), ("B", "C")]);
    ExportData::from_graph("path", &graph).expect("sample graph is well formed")
}
