//! Weighted undirected graph consumed by the MST algorithms.
//!
//! Every undirected edge is stored once in insertion order and once in the
//! adjacency list of each endpoint. Parallel edges between the same pair are
//! kept as distinct edges.

use std::collections::HashSet;

use crate::error::InvalidEdge;

/// An undirected weighted edge `(u, v, weight)` with `u != v`.
///
/// `(u, v, w)` and `(v, u, w)` describe the same undirected edge; the
/// orientation is only kept so results can report edges the way they were
/// discovered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    u: usize,
    v: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge, rejecting self-loops and non-finite weights.
    ///
    /// # Errors
    /// Returns [`InvalidEdge::SelfLoop`] when `u == v` and
    /// [`InvalidEdge::NonFiniteWeight`] when `weight` is NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use spantree_core::{Edge, InvalidEdge};
    ///
    /// assert!(Edge::new(0, 1, 2.5).is_ok());
    /// assert_eq!(Edge::new(2, 2, 5.0), Err(InvalidEdge::SelfLoop { vertex: 2 }));
    /// ```
    pub fn new(u: usize, v: usize, weight: f64) -> Result<Self, InvalidEdge> {
        if u == v {
            return Err(InvalidEdge::SelfLoop { vertex: u });
        }
        if !weight.is_finite() {
            return Err(InvalidEdge::NonFiniteWeight { u, v, weight });
        }
        Ok(Self { u, v, weight })
    }

    /// Builds an edge from endpoints already known to be a valid pair.
    pub(crate) const fn from_trusted(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn u(&self) -> usize { self.u }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(&self) -> usize { self.v }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the endpoints as `(min, max)`.
    #[must_use]
    pub const fn endpoints_sorted(&self) -> (usize, usize) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }

    /// Returns the endpoint opposite `vertex`.
    ///
    /// `vertex` is expected to be one of the endpoints; any other value
    /// yields `u`.
    #[must_use]
    pub const fn other(&self, vertex: usize) -> usize {
        if vertex == self.u { self.v } else { self.u }
    }
}

/// A weighted undirected graph over vertices `0..vertex_count`.
///
/// # Examples
/// ```
/// use spantree_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 1.0)?;
/// graph.add_edge(1, 2, 2.0)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbours(1).len(), 2);
/// # Ok::<(), spantree_core::InvalidEdge>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
        }
    }

    /// Builds a graph from `(u, v, weight)` triples.
    ///
    /// # Errors
    /// Returns the first [`InvalidEdge`] encountered.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, InvalidEdge>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Adds the undirected edge `(u, v, weight)`.
    ///
    /// # Errors
    /// Returns [`InvalidEdge::VertexOutOfRange`] if either endpoint is not
    /// below [`Graph::vertex_count`], otherwise any error from
    /// [`Edge::new`]. The graph is unchanged on error.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<(), InvalidEdge> {
        let vertex_count = self.vertex_count();
        if let Some(&vertex) = [u, v].iter().find(|&&vertex| vertex >= vertex_count) {
            return Err(InvalidEdge::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
        let edge = Edge::new(u, v, weight)?;
        self.adjacency[u].push(edge);
        self.adjacency[v].push(edge);
        self.edges.push(edge);
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges, counting every parallel copy.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns every edge incident to `vertex`, or nothing for an unknown
    /// vertex.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Returns every edge in insertion order, parallel copies included.
    #[must_use]
    pub fn all_edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns one edge per unordered vertex pair.
    ///
    /// Adjacency lists are scanned from vertex `0` upwards and the first copy
    /// seen for a pair wins, so parallel edges collapse to whichever copy was
    /// added first at the lower-numbered endpoint.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut seen = HashSet::new();
        self.adjacency
            .iter()
            .flatten()
            .filter(|edge| seen.insert(edge.endpoints_sorted()))
            .copied()
            .collect()
    }
}
