//! Graph contexts for degree queries.
//!
//! A vertex is always evaluated against the graph that owns it. Only two
//! kinds of graph are meaningful here, so the context is a closed enum:
//! undirected graphs report a single degree, directed graphs report in- and
//! out-degree separately.

use std::any::Any;
use std::fmt;

use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::stable_graph::StableGraph;
use petgraph::{Directed, Direction, Undirected};
use serde::Serialize;

use super::degree::DegreePair;

/// Errors raised while querying a graph context for degrees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DegreeError {
    /// The context object is neither a directed nor an undirected graph.
    #[error("unsupported graph kind: context must be a directed or undirected graph")]
    UnsupportedGraphKind,

    /// The vertex does not belong to the graph it was paired with.
    #[error("vertex {index} is not present in the context graph")]
    VertexNotFound { index: usize },
}

/// Result type alias for degree queries.
pub type DegreeResult<T> = Result<T, DegreeError>;

/// Degree queries offered by an undirected graph.
pub trait UndirectedDegree<V> {
    /// Number of edges incident to `vertex`.
    fn degree(&self, vertex: V) -> DegreeResult<usize>;
}

/// Degree queries offered by a directed graph.
pub trait DirectedDegree<V> {
    /// Number of edges ending at `vertex`.
    fn in_degree(&self, vertex: V) -> DegreeResult<usize>;

    /// Number of edges starting at `vertex`.
    fn out_degree(&self, vertex: V) -> DegreeResult<usize>;
}

fn missing<Ix: IndexType>(vertex: NodeIndex<Ix>) -> DegreeError {
    DegreeError::VertexNotFound {
        index: vertex.index(),
    }
}

impl<N, E, Ix: IndexType> UndirectedDegree<NodeIndex<Ix>> for Graph<N, E, Undirected, Ix> {
    fn degree(&self, vertex: NodeIndex<Ix>) -> DegreeResult<usize> {
        if self.node_weight(vertex).is_none() {
            return Err(missing(vertex));
        }
        Ok(self.edges(vertex).count())
    }
}

impl<N, E, Ix: IndexType> DirectedDegree<NodeIndex<Ix>> for Graph<N, E, Directed, Ix> {
    fn in_degree(&self, vertex: NodeIndex<Ix>) -> DegreeResult<usize> {
        if self.node_weight(vertex).is_none() {
            return Err(missing(vertex));
        }
        Ok(self.edges_directed(vertex, Direction::Incoming).count())
    }

    fn out_degree(&self, vertex: NodeIndex<Ix>) -> DegreeResult<usize> {
        if self.node_weight(vertex).is_none() {
            return Err(missing(vertex));
        }
        Ok(self.edges_directed(vertex, Direction::Outgoing).count())
    }
}

impl<N, E, Ix: IndexType> UndirectedDegree<NodeIndex<Ix>> for StableGraph<N, E, Undirected, Ix> {
    fn degree(&self, vertex: NodeIndex<Ix>) -> DegreeResult<usize> {
        if !self.contains_node(vertex) {
            return Err(missing(vertex));
        }
        Ok(self.edges(vertex).count())
    }
}

impl<N, E, Ix: IndexType> DirectedDegree<NodeIndex<Ix>> for StableGraph<N, E, Directed, Ix> {
    fn in_degree(&self, vertex: NodeIndex<Ix>) -> DegreeResult<usize> {
        if !self.contains_node(vertex) {
            return Err(missing(vertex));
        }
        Ok(self.edges_directed(vertex, Direction::Incoming).count())
    }

    fn out_degree(&self, vertex: NodeIndex<Ix>) -> DegreeResult<usize> {
        if !self.contains_node(vertex) {
            return Err(missing(vertex));
        }
        Ok(self.edges_directed(vertex, Direction::Outgoing).count())
    }
}

/// Which of the two supported graph kinds a context is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Undirected,
    Directed,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undirected => write!(f, "undirected"),
            Self::Directed => write!(f, "directed"),
        }
    }
}

/// The graph a vertex is evaluated against.
///
/// # Example
///
/// ```rust
/// use isoprune::graph::GraphContext;
/// use petgraph::graph::UnGraph;
///
/// let mut g = UnGraph::<(), ()>::new_undirected();
/// let a = g.add_node(());
/// let b = g.add_node(());
/// g.add_edge(a, b, ());
///
/// let ctx = GraphContext::undirected(&g);
/// let pair = ctx.in_out_degrees(a).unwrap();
/// assert_eq!((pair.in_degree, pair.out_degree), (1, 1));
/// ```
pub enum GraphContext<'g, V> {
    Undirected(&'g dyn UndirectedDegree<V>),
    Directed(&'g dyn DirectedDegree<V>),
}

// Manual impls: a derive would demand `V: Clone`.
impl<V> Clone for GraphContext<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for GraphContext<'_, V> {}

impl<V> fmt::Debug for GraphContext<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GraphContext").field(&self.kind()).finish()
    }
}

impl<'g, V> GraphContext<'g, V> {
    /// Wraps an undirected graph.
    pub fn undirected<G>(graph: &'g G) -> Self
    where
        G: UndirectedDegree<V> + 'g,
    {
        Self::Undirected(graph)
    }

    /// Wraps a directed graph.
    pub fn directed<G>(graph: &'g G) -> Self
    where
        G: DirectedDegree<V> + 'g,
    {
        Self::Directed(graph)
    }

    /// Returns the kind of graph behind this context.
    pub fn kind(&self) -> GraphKind {
        match self {
            Self::Undirected(_) => GraphKind::Undirected,
            Self::Directed(_) => GraphKind::Directed,
        }
    }

    /// Computes the (in-degree, out-degree) pair of `vertex`.
    ///
    /// For an undirected graph both components equal the vertex degree.
    pub fn in_out_degrees(&self, vertex: V) -> DegreeResult<DegreePair>
    where
        V: Copy,
    {
        match self {
            Self::Undirected(graph) => graph.degree(vertex).map(DegreePair::symmetric),
            Self::Directed(graph) => Ok(DegreePair::new(
                graph.in_degree(vertex)?,
                graph.out_degree(vertex)?,
            )),
        }
    }
}

impl<'g, Ix: IndexType> GraphContext<'g, NodeIndex<Ix>> {
    /// Builds a context from a type-erased graph.
    ///
    /// Recognises petgraph `Graph` and `StableGraph` of either direction with
    /// node weight `N`, edge weight `E` and index type `Ix`. Anything else
    /// yields [`DegreeError::UnsupportedGraphKind`].
    pub fn from_any<N: 'static, E: 'static>(graph: &'g dyn Any) -> DegreeResult<Self> {
        if let Some(g) = graph.downcast_ref::<Graph<N, E, Undirected, Ix>>() {
            return Ok(Self::undirected(g));
        }
        if let Some(g) = graph.downcast_ref::<Graph<N, E, Directed, Ix>>() {
            return Ok(Self::directed(g));
        }
        if let Some(g) = graph.downcast_ref::<StableGraph<N, E, Undirected, Ix>>() {
            return Ok(Self::undirected(g));
        }
        if let Some(g) = graph.downcast_ref::<StableGraph<N, E, Directed, Ix>>() {
            return Ok(Self::directed(g));
        }
        Err(DegreeError::UnsupportedGraphKind)
    }
}
