//! Graph module for degree-based vertex equivalence.
//!
//! This module provides the [`DegreeEquivalenceComparator`], the
//! [`GraphContext`] it evaluates vertices against, and [`LabeledGraph`], a
//! petgraph-backed graph with string-labelled vertices.
//!
//! # Example
//!
//! ```rust
//! use isoprune::graph::{GraphKind, LabeledGraph};
//!
//! let path = LabeledGraph::from_edges(GraphKind::Undirected, &[("a", "b"), ("b", "c"), ("c", "d")]);
//! let star = LabeledGraph::from_edges(GraphKind::Undirected, &[("h", "x"), ("h", "y"), ("h", "z")]);
//!
//! // Same size, different degree classes: cannot be isomorphic.
//! assert!(!path.compare_classes(&star).unwrap().is_compatible());
//! ```

mod context;
mod degree;
mod labeled;

pub use context::{
    DegreeError, DegreeResult, DirectedDegree, GraphContext, GraphKind, UndirectedDegree,
};
pub use degree::{DegreeEquivalenceComparator, DegreePair};
pub use labeled::LabeledGraph;
