//! Markdown export implementation.
//!
//! Exports equivalence classes in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Render a label as inline code that is safe inside a table cell.
    fn code_cell(label: &str) -> String {
        let escaped = label.replace('|', "\\|");
        if escaped.contains('`') {
            format!("`` {} ``", escaped)
        } else {
            format!("`{}`", escaped)
        }
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Degree Equivalence Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Graph:** {} ({})", data.graph_name, data.kind)?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Vertices | {} |", data.vertex_count)?;
        writeln!(writer, "| Edges | {} |", data.edge_count)?;
        writeln!(writer, "| Equivalence Classes | {} |", data.classes.len())?;
        writeln!(writer, "| Singleton Classes | {} |", data.singleton_count())?;
        writeln!(writer, "| Largest Class | {} |", data.largest_class_size())?;
        writeln!(writer)?;

        if data.classes.is_empty() {
            writeln!(writer, "_The graph has no vertices._")?;
            return Ok(());
        }

        // Classes table
        writeln!(writer, "## Classes")?;
        writeln!(writer)?;
        writeln!(writer, "| Degrees (in-out) | Size | Vertices |")?;
        writeln!(writer, "|------------------|------|----------|")?;
        for class in &data.classes {
            let members: Vec<String> = class.vertices.iter().map(|v| Self::code_cell(v)).collect();
            writeln!(
                writer,
                "| {} | {} | {} |",
                class.key(),
                class.len(),
                members.join(", ")
            )?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sample_data;
    use crate::graph::{GraphKind, LabeledGraph};

    #[test]
    fn test_markdown_export_header() {
        let data = sample_data();
        let mut output = Vec::new();

        MarkdownExporter.export(&data, &mut output).unwrap();

        let md = String::from_utf8(output).unwrap();
        assert!(md.starts_with("# Degree Equivalence Report"));
        assert!(md.contains("**Graph:** path (undirected)"));
        assert!(md.contains("| Vertices | 3 |"));
        assert!(md.contains("| Equivalence Classes | 2 |"));
    }

    #[test]
    fn test_markdown_export_classes() {
        let data = sample_data();
        let mut output = Vec::new();

        MarkdownExporter.export(&data, &mut output).unwrap();

        let md = String::from_utf8(output).unwrap();
        assert!(md.contains("| 2-2 | 1 | `B` |"));
        assert!(md.contains("| 1-1 | 2 | `A`, `C` |"));
    }

    #[test]
    fn test_markdown_code_cell_escapes() {
        assert_eq!(MarkdownExporter::code_cell("plain"), "`plain`");
        assert_eq!(MarkdownExporter::code_cell("a|b"), "`a\\|b`");
        assert_eq!(MarkdownExporter::code_cell("x`y"), "`` x`y ``");
    }

    #[test]
    fn test_markdown_pipe_label_keeps_table_shape() {
        let graph = LabeledGraph::from_edges(GraphKind::Undirected, &[("a|b", "c")]);
        let data = ExportData::from_graph("pipes", &graph).unwrap();
        let mut output = Vec::new();

        MarkdownExporter.export(&data, &mut output).unwrap();

        let md = String::from_utf8(output).unwrap();
        assert!(md.contains("| 1-1 | 2 | `a\\|b`, `c` |"));
    }

    #[test]
    fn test_markdown_export_empty_graph() {
        let graph = LabeledGraph::new(GraphKind::Directed);
        let data = ExportData::from_graph("empty", &graph).unwrap();
        let mut output = Vec::new();

        MarkdownExporter.export(&data, &mut output).unwrap();

        let md = String::from_utf8(output).unwrap();
        assert!(md.contains("_The graph has no vertices._"));
        assert!(!md.contains("## Classes"));
    }
}
