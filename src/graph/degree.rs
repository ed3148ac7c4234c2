//! Degree-based vertex equivalence.
//!
//! Two vertices are equivalent iff they have the same in-degree and the same
//! out-degree. The vertices may live in different graphs, and those graphs
//! may be of different kinds: an undirected vertex of degree `d` is treated
//! as having in-degree `d` and out-degree `d`.

use std::fmt;

use serde::Serialize;

use super::context::{DegreeError, DegreeResult, GraphContext};
use crate::equivalence::EquivalenceComparator;

/// Multiplier for the in-degree when folding a pair into a hash.
const HASH_PRIME: u64 = 2_147_483_647;

/// The ordered (in-degree, out-degree) pair of a vertex.
///
/// Derived on every query and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DegreePair {
    /// Number of incoming edges
    pub in_degree: usize,
    /// Number of outgoing edges
    pub out_degree: usize,
}

impl DegreePair {
    /// Creates a pair from explicit in- and out-degrees.
    pub fn new(in_degree: usize, out_degree: usize) -> Self {
        Self {
            in_degree,
            out_degree,
        }
    }

    /// Pair for an undirected vertex of degree `degree`.
    pub fn symmetric(degree: usize) -> Self {
        Self::new(degree, degree)
    }

    /// Returns true when in-degree equals out-degree.
    pub fn is_balanced(&self) -> bool {
        self.in_degree == self.out_degree
    }

    /// Total number of incident edge endpoints.
    pub fn total(&self) -> usize {
        self.in_degree + self.out_degree
    }

    /// Canonical `"<in>-<out>"` key; the separator keeps (1, 23) apart
    /// from (12, 3).
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Integer hash of the pair, stable across runs and platforms.
    ///
    /// # Example
    ///
    /// ```rust
    /// use isoprune::graph::DegreePair;
    ///
    /// assert_ne!(DegreePair::new(1, 23).hash_code(), DegreePair::new(12, 3).hash_code());
    /// ```
    pub fn hash_code(&self) -> u64 {
        (self.in_degree as u64)
            .wrapping_mul(HASH_PRIME)
            .wrapping_add(self.out_degree as u64)
    }
}

impl fmt::Display for DegreePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.in_degree, self.out_degree)
    }
}

/// Declares vertices equivalent when their degree pairs match.
///
/// Stateless; every query asks the context graph afresh.
///
/// # Example
///
/// ```rust
/// use isoprune::equivalence::EquivalenceComparator;
/// use isoprune::graph::{DegreeEquivalenceComparator, GraphContext};
/// use petgraph::graph::{DiGraph, UnGraph};
///
/// // Undirected vertex of degree 1.
/// let mut un = UnGraph::<(), ()>::new_undirected();
/// let a = un.add_node(());
/// let b = un.add_node(());
/// un.add_edge(a, b, ());
///
/// // Directed vertex with one incoming and one outgoing edge.
/// let mut di = DiGraph::<(), ()>::new();
/// let x = di.add_node(());
/// let y = di.add_node(());
/// di.add_edge(x, y, ());
/// di.add_edge(y, x, ());
///
/// let cmp = DegreeEquivalenceComparator::new();
/// let un_ctx = GraphContext::undirected(&un);
/// let di_ctx = GraphContext::directed(&di);
/// assert!(cmp.equivalent(&a, &un_ctx, &x, &di_ctx).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DegreeEquivalenceComparator;

impl DegreeEquivalenceComparator {
    /// Creates a new degree comparator.
    pub fn new() -> Self {
        Self
    }

    /// Computes the degree pair of `vertex` within `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`DegreeError::VertexNotFound`] when `graph` does not own
    /// `vertex`.
    pub fn in_out_degrees<V: Copy>(
        &self,
        graph: &GraphContext<'_, V>,
        vertex: V,
    ) -> DegreeResult<DegreePair> {
        graph.in_out_degrees(vertex)
    }
}

impl<'g, V: Copy> EquivalenceComparator<V, GraphContext<'g, V>> for DegreeEquivalenceComparator {
    type Error = DegreeError;

    fn equivalent(
        &self,
        a: &V,
        context_a: &GraphContext<'g, V>,
        b: &V,
        context_b: &GraphContext<'g, V>,
    ) -> DegreeResult<bool> {
        let left = self.in_out_degrees(context_a, *a)?;
        let right = self.in_out_degrees(context_b, *b)?;
        Ok(left == right)
    }

    fn equivalence_hash(&self, element: &V, context: &GraphContext<'g, V>) -> DegreeResult<u64> {
        Ok(self.in_out_degrees(context, *element)?.hash_code())
    }
}
