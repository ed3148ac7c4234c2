//! Equivalence classification for isomorphism search.
//!
//! This module defines the [`EquivalenceComparator`] contract and the
//! partitioning step built on it. A search algorithm uses the resulting
//! [`EquivalenceSet`]s to restrict which elements of one structure may map
//! to which elements of another.
//!
//! # Example
//!
//! ```rust
//! use isoprune::equivalence::{create_equivalence_sets, UniformEquivalenceComparator};
//!
//! let sets = create_equivalence_sets(["a", "b"], &(), &UniformEquivalenceComparator).unwrap();
//! assert_eq!(sets.len(), 1);
//! ```

mod comparator;
pub mod set;

pub use comparator::{EquivalenceComparator, UniformEquivalenceComparator};
pub use set::{create_equivalence_sets, match_equivalence_sets, EquivalenceSet, SetPair, SetPairing};
