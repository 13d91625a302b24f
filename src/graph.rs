//! Undirected graph model
//!
//! Adjacency-list storage for unweighted and weighted undirected graphs.
//! Neighbor lists keep edge-insertion order; traversals iterate them as
//! stored, so insertion order is observable in traces.

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced at the graph construction boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Undirected graph over vertices `0..vertex_count`.
///
/// Every added edge appears in both endpoints' neighbor lists. Self-loops and
/// duplicate edges are allowed and are not deduplicated. Edge endpoints are
/// validated on insertion; an invalid edge is rejected, never dropped or
/// clamped.
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<usize>>,
    weighted: Vec<Vec<(usize, u64)>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> GraphResult<Self> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
            weighted: vec![Vec::new(); vertex_count],
        })
    }

    fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex >= self.vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    fn insert_edge(&mut self, u: usize, v: usize) {
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
    }

    fn insert_weighted_edge(&mut self, u: usize, v: usize, weight: u64) {
        self.weighted[u].push((v, weight));
        self.weighted[v].push((u, weight));
    }

    /// Add an undirected edge `u -- v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.insert_edge(u, v);
        Ok(())
    }

    /// Add an undirected weighted edge `u -- v` with the given weight.
    pub fn add_weighted_edge(&mut self, u: usize, v: usize, weight: u64) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.insert_weighted_edge(u, v, weight);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Unweighted neighbors of `vertex` in insertion order.
    ///
    /// # Panics
    /// Panics if `vertex >= vertex_count`. Engines validate their start
    /// vertex up front; interior indices are valid by construction.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// Weighted neighbors of `vertex` as `(neighbor, weight)` pairs, in
    /// insertion order.
    ///
    /// # Panics
    /// Panics if `vertex >= vertex_count`.
    pub fn weighted_neighbors(&self, vertex: usize) -> &[(usize, u64)] {
        &self.weighted[vertex]
    }

    /// Number of unweighted edges (a self-loop counts once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Number of weighted edges (a self-loop counts once).
    pub fn weighted_edge_count(&self) -> usize {
        self.weighted.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// The built-in 5-vertex demo graph:
    ///
    /// ```text
    ///     0
    ///    / \
    ///   1---2
    ///   |   |
    ///   3---4
    /// ```
    pub fn sample() -> Self {
        let mut graph = Self {
            vertex_count: 5,
            adjacency: vec![Vec::new(); 5],
            weighted: vec![Vec::new(); 5],
        };
        for &(u, v) in &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 4), (3, 4)] {
            graph.insert_edge(u, v);
        }
        graph
    }

    /// The built-in 5-vertex weighted demo graph, edges
    /// 0-1 (4), 0-2 (1), 1-2 (2), 1-3 (5), 2-3 (8), 2-4 (10), 3-4 (2).
    pub fn sample_weighted() -> Self {
        let mut graph = Self {
            vertex_count: 5,
            adjacency: vec![Vec::new(); 5],
            weighted: vec![Vec::new(); 5],
        };
        for &(u, v, w) in &[
            (0, 1, 4),
            (0, 2, 1),
            (1, 2, 2),
            (1, 3, 5),
            (2, 3, 8),
            (2, 4, 10),
            (3, 4, 2),
        ] {
            graph.insert_weighted_edge(u, v, w);
        }
        graph
    }
}
