//! Parser for JSON graph files.
//!
//! This module reads a [`GraphFile`], checks it for consistency and turns it
//! into a [`LabeledGraph`] ready for equivalence analysis.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::types::GraphFile;
use crate::graph::LabeledGraph;

/// Errors that can occur while loading a graph file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The graph description is inconsistent.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a graph file from a path.
pub fn parse_file(path: &Path) -> ParseResult<GraphFile> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a graph file from a string.
///
/// # Example
///
/// ```
/// use isoprune::parser::parse_str;
///
/// let file = parse_str(r#"{"directed": true, "vertices": ["a"], "edges": []}"#).unwrap();
/// assert!(file.directed);
/// ```
pub fn parse_str(content: &str) -> ParseResult<GraphFile> {
    let file: GraphFile = serde_json::from_str(content)?;
    Ok(file)
}

/// Validates a parsed graph file.
///
/// Rejects empty labels, duplicate vertices and edges that name a vertex
/// not listed in `vertices`.
pub fn validate(file: &GraphFile) -> ParseResult<()> {
    let mut seen = HashSet::with_capacity(file.vertices.len());
    for label in &file.vertices {
        if label.is_empty() {
            return Err(ParseError::InvalidGraph(
                "vertex labels must not be empty".to_string(),
            ));
        }
        if !seen.insert(label.as_str()) {
            return Err(ParseError::InvalidGraph(format!(
                "duplicate vertex '{label}'"
            )));
        }
    }

    for (from, to) in &file.edges {
        for end in [from, to] {
            if !seen.contains(end.as_str()) {
                return Err(ParseError::InvalidGraph(format!(
                    "edge {from} -> {to} references unknown vertex '{end}'"
                )));
            }
        }
    }

    Ok(())
}

/// Builds a [`LabeledGraph`] from a validated graph file.
pub fn build_graph(file: &GraphFile) -> ParseResult<LabeledGraph> {
    validate(file)?;

    let mut graph = LabeledGraph::with_capacity(file.kind(), file.vertices.len(), file.edges.len());
    for label in &file.vertices {
        graph.add_vertex(label);
    }
    for (from, to) in &file.edges {
        graph.add_edge(from, to);
    }

    log::debug!(
        "built {} graph '{}' with {} vertices and {} edges",
        graph.kind(),
        file.display_name(),
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Reads, validates and builds a graph from a file in one step.
pub fn load_graph(path: &Path) -> ParseResult<(GraphFile, LabeledGraph)> {
    let file = parse_file(path)?;
    let graph = build_graph(&file)?;
    Ok((file, graph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DegreePair, GraphKind};
    use std::io::Write;

    const PATH_GRAPH: &str = r#"{
        "name": "path",
        "directed": false,
        "vertices": ["A", "B", "C"],
        "edges": [["A", "B"], ["B", "C"]]
    }"#;

    #[test]
    fn test_parse_str_valid() {
        let file = parse_str(PATH_GRAPH).unwrap();

        assert_eq!(file.name, Some("path".to_string()));
        assert!(!file.directed);
        assert_eq!(file.vertices.len(), 3);
        assert_eq!(file.edges.len(), 2);
    }

    #[test]
    fn test_parse_str_empty_object() {
        let file = parse_str("{}").unwrap();
        assert!(file.name.is_none());
        assert!(validate(&file).is_ok());
    }

    #[test]
    fn test_parse_str_invalid_json() {
        let result = parse_str("{ invalid json }");

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParseError::JsonError(_)));
    }

    #[test]
    fn test_validate_duplicate_vertex() {
        let file = parse_str(r#"{"vertices": ["A", "A"]}"#).unwrap();
        let err = validate(&file).unwrap_err();
        assert!(matches!(err, ParseError::InvalidGraph(_)));
        assert!(err.to_string().contains("duplicate vertex 'A'"));
    }

    #[test]
    fn test_validate_unknown_edge_endpoint() {
        let file = parse_str(r#"{"vertices": ["A"], "edges": [["A", "Z"]]}"#).unwrap();
        let err = validate(&file).unwrap_err();
        assert!(err.to_string().contains("unknown vertex 'Z'"));
    }

    #[test]
    fn test_validate_empty_label() {
        let file = parse_str(r#"{"vertices": [""]}"#).unwrap();
        assert!(validate(&file).is_err());
    }

    #[test]
    fn test_build_graph() {
        let file = parse_str(PATH_GRAPH).unwrap();
        let graph = build_graph(&file).unwrap();

        assert_eq!(graph.kind(), GraphKind::Undirected);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degrees("B"), Ok(Some(DegreePair::symmetric(2))));
    }

    #[test]
    fn test_build_graph_rejects_invalid() {
        let file = parse_str(r#"{"edges": [["x", "y"]]}"#).unwrap();
        assert!(build_graph(&file).is_err());
    }

    #[test]
    fn test_load_graph_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(PATH_GRAPH.as_bytes()).unwrap();

        let (file, graph) = load_graph(tmp.path()).unwrap();
        assert_eq!(file.display_name(), "path");
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_load_graph_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_graph(&dir.path().join("missing.json"));
        assert!(matches!(result.unwrap_err(), ParseError::IoError(_)));
    }
}
