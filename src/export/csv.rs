//! CSV export implementation.
//!
//! Exports one row per equivalence class for spreadsheet use.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    /// Quote a single class member so ';' inside a label stays distinct
    /// from the member separator.
    fn escape_member(label: &str) -> String {
        if label.contains(';') || label.contains('"') {
            format!("\"{}\"", label.replace('"', "\"\""))
        } else {
            label.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "key,in_degree,out_degree,size,vertices")?;

        for class in &data.classes {
            // Members are ';'-separated within one field.
            let members = class
                .vertices
                .iter()
                .map(|v| Self::escape_member(v))
                .collect::<Vec<_>>()
                .join(";");
            writeln!(
                writer,
                "{},{},{},{},{}",
                class.key(),
                class.degrees.in_degree,
                class.degrees.out_degree,
                class.len(),
                Self::escape_field(&members)
            )?;
        }

        Ok(())
    }
}
