//! isoprune - degree-based vertex equivalence for graph isomorphism pruning
//!
//! This crate classifies graph vertices by their (in-degree, out-degree)
//! pair so that an isomorphism search only tries to map vertices onto
//! vertices of the same class.

pub mod equivalence;
pub mod export;
pub mod graph;
pub mod parser;
