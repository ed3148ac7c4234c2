//! Graph with string-labelled vertices, backed by petgraph.
//!
//! Provides a directed or undirected graph whose vertices are looked up by
//! label, plus shortcuts for computing degree equivalence classes.

use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use std::collections::HashMap;

use super::context::{DegreeResult, GraphContext, GraphKind};
use super::degree::{DegreeEquivalenceComparator, DegreePair};
use crate::equivalence::{
    create_equivalence_sets, match_equivalence_sets, EquivalenceSet, SetPairing,
};

#[derive(Debug, Clone)]
enum Storage {
    Undirected(UnGraph<String, ()>),
    Directed(DiGraph<String, ()>),
}

/// A graph whose vertices carry unique string labels.
///
/// # Example
///
/// ```rust
/// use isoprune::graph::{GraphKind, LabeledGraph};
///
/// let mut graph = LabeledGraph::new(GraphKind::Undirected);
/// graph.add_vertex("A");
/// graph.add_vertex("B");
/// graph.add_vertex("C");
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
///
/// let classes = graph.equivalence_classes().unwrap();
/// assert_eq!(classes.len(), 2);
/// assert_eq!(graph.class_labels(&classes[1]), vec!["A", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledGraph {
    /// The underlying petgraph graph
    storage: Storage,
    /// Maps labels to their node indices for O(1) lookup
    vertex_indices: HashMap<String, NodeIndex>,
}

impl LabeledGraph {
    /// Creates a new empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self::with_capacity(kind, 0, 0)
    }

    /// Creates a new graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `kind` - Directed or undirected
    /// * `vertices` - Expected number of vertices
    /// * `edges` - Expected number of edges
    pub fn with_capacity(kind: GraphKind, vertices: usize, edges: usize) -> Self {
        let storage = match kind {
            GraphKind::Undirected => Storage::Undirected(UnGraph::with_capacity(vertices, edges)),
            GraphKind::Directed => Storage::Directed(DiGraph::with_capacity(vertices, edges)),
        };
        Self {
            storage,
            vertex_indices: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from an edge list, adding vertices as they appear.
    ///
    /// # Example
    ///
    /// ```rust
    /// use isoprune::graph::{GraphKind, LabeledGraph};
    ///
    /// let graph = LabeledGraph::from_edges(GraphKind::Directed, &[("a", "b"), ("b", "c")]);
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edges(kind: GraphKind, edges: &[(&str, &str)]) -> Self {
        let mut graph = Self::with_capacity(kind, edges.len(), edges.len());
        for (from, to) in edges {
            graph.add_vertex(from);
            graph.add_vertex(to);
            graph.add_edge(from, to);
        }
        graph
    }

    /// Returns whether the graph is directed or undirected.
    pub fn kind(&self) -> GraphKind {
        match self.storage {
            Storage::Undirected(_) => GraphKind::Undirected,
            Storage::Directed(_) => GraphKind::Directed,
        }
    }

    /// Adds a vertex.
    ///
    /// If a vertex with the same label already exists, returns its existing
    /// index without modification.
    pub fn add_vertex(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.vertex_indices.get(label) {
            return idx;
        }

        let idx = match &mut self.storage {
            Storage::Undirected(g) => g.add_node(label.to_string()),
            Storage::Directed(g) => g.add_node(label.to_string()),
        };
        self.vertex_indices.insert(label.to_string(), idx);
        idx
    }

    /// Adds an edge between two existing vertices.
    ///
    /// For a directed graph the edge runs from `from` to `to`.
    ///
    /// # Returns
    ///
    /// `true` if the edge was added, `false` if either vertex doesn't exist.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let Some(&from_idx) = self.vertex_indices.get(from) else {
            return false;
        };
        let Some(&to_idx) = self.vertex_indices.get(to) else {
            return false;
        };

        match &mut self.storage {
            Storage::Undirected(g) => g.add_edge(from_idx, to_idx, ()),
            Storage::Directed(g) => g.add_edge(from_idx, to_idx, ()),
        };
        true
    }

    /// Looks up the index of a vertex by label.
    pub fn vertex(&self, label: &str) -> Option<NodeIndex> {
        self.vertex_indices.get(label).copied()
    }

    /// Looks up the label of a vertex by index.
    pub fn label(&self, vertex: NodeIndex) -> Option<&str> {
        let weight = match &self.storage {
            Storage::Undirected(g) => g.node_weight(vertex),
            Storage::Directed(g) => g.node_weight(vertex),
        };
        weight.map(String::as_str)
    }

    /// All vertex indices in insertion order.
    pub fn vertices(&self) -> Vec<NodeIndex> {
        match &self.storage {
            Storage::Undirected(g) => g.node_indices().collect(),
            Storage::Directed(g) => g.node_indices().collect(),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_indices.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        match &self.storage {
            Storage::Undirected(g) => g.edge_count(),
            Storage::Directed(g) => g.edge_count(),
        }
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_indices.is_empty()
    }

    /// Checks if a vertex with this label exists.
    pub fn contains(&self, label: &str) -> bool {
        self.vertex_indices.contains_key(label)
    }

    /// Degree context over this graph.
    pub fn context(&self) -> GraphContext<'_, NodeIndex> {
        match &self.storage {
            Storage::Undirected(g) => GraphContext::undirected(g),
            Storage::Directed(g) => GraphContext::directed(g),
        }
    }

    /// Degree pair of the vertex with this label.
    ///
    /// Returns `Ok(None)` when no vertex carries the label.
    pub fn degrees(&self, label: &str) -> DegreeResult<Option<DegreePair>> {
        match self.vertex(label) {
            Some(vertex) => self.context().in_out_degrees(vertex).map(Some),
            None => Ok(None),
        }
    }

    /// Partitions the vertices into degree equivalence classes.
    ///
    /// Classes are ordered smallest first; see
    /// [`create_equivalence_sets`].
    pub fn equivalence_classes(&self) -> DegreeResult<Vec<EquivalenceSet<NodeIndex>>> {
        create_equivalence_sets(
            self.vertices(),
            &self.context(),
            &DegreeEquivalenceComparator,
        )
    }

    /// Matches this graph's degree classes against another graph's.
    ///
    /// An incompatible result proves the two graphs are not isomorphic.
    pub fn compare_classes(&self, other: &LabeledGraph) -> DegreeResult<SetPairing> {
        let left = self.equivalence_classes()?;
        let right = other.equivalence_classes()?;
        match_equivalence_sets(
            &left,
            &self.context(),
            &right,
            &other.context(),
            &DegreeEquivalenceComparator,
        )
    }

    /// Labels of the members of `set`, in membership order.
    pub fn class_labels(&self, set: &EquivalenceSet<NodeIndex>) -> Vec<String> {
        set.members()
            .iter()
            .filter_map(|&v| self.label(v))
            .map(str::to_string)
            .collect()
    }
}
