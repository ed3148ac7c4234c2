//! Parser module for graph description files.
//!
//! Graphs are described in JSON: a kind flag, a list of vertex labels and a
//! list of edges between those labels.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use isoprune::parser::load_graph;
//!
//! let (file, graph) = load_graph(Path::new("graph.json")).unwrap();
//! for class in graph.equivalence_classes().unwrap() {
//!     println!("{}: {:?}", file.display_name(), graph.class_labels(&class));
//! }
//! ```

pub mod graph_file;
pub mod types;

// Re-export commonly used items for convenience
pub use graph_file::{
    build_graph, load_graph, parse_file, parse_str, validate, ParseError, ParseResult,
};

pub use types::GraphFile;
