use bit_set::BitSet;
use thiserror::Error;
use tracing::info;

use crate::vertex_set::{VertexId, VertexSet};

/** errors reported by the checked graph constructors */
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// a vertex index is not in `0..n`
    #[error("vertex {vertex} out of range (graph has {nb_vertices} vertices)")]
    VertexOutOfRange {
        /// offending index
        vertex: VertexId,
        /// number of vertices of the graph
        nb_vertices: usize,
    },
    /// a vertex is adjacent to itself
    #[error("self loop on vertex {0}")]
    SelfLoop(VertexId),
    /// `v` is listed as a neighbor of `u` but not the other way around
    #[error("asymmetric adjacency: {1} is a neighbor of {0} but {0} is not a neighbor of {1}")]
    AsymmetricAdjacency(VertexId, VertexId),
}

/** simple undirected graph over a fixed number of vertices.

The graph is immutable once built. `adj_matrix[i]` is the bit vector of the neighbors of `i`.
The unchecked constructors assume a symmetric, loop-free adjacency with indices in `0..n`;
the `try_` constructors verify it.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
}

impl Graph {

    /// graph with `n` vertices and no edge
    pub fn empty(n:usize) -> Self {
        Self::from_adj_matrix(vec![BitSet::with_capacity(n) ; n])
    }

    /** constructor using an adjacency matrix (one bit vector per vertex) */
    pub fn from_adj_matrix(adj_matrix:Vec<BitSet>) -> Self {
        let n = adj_matrix.len();
        // at the end: m = ∑ d(v) / 2
        let m = adj_matrix.iter().map(|row| row.len()).sum::<usize>() / 2;
        Self { n, m, adj_matrix }
    }

    /** constructor using an adjacency list (adj_list[i]: neighbors of i) */
    pub fn from_adj_list(adj_list:&[Vec<VertexId>]) -> Self {
        let n = adj_list.len();
        let mut adj_matrix = vec![BitSet::with_capacity(n) ; n];
        for (row, neighbors) in adj_matrix.iter_mut().zip(adj_list) {
            for v in neighbors {
                row.insert(*v);
            }
        }
        Self::from_adj_matrix(adj_matrix)
    }

    /** constructor using an edge list over `n` vertices. Both directions are inserted. */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Self {
        let mut adj_matrix = vec![BitSet::with_capacity(n) ; n];
        for &(u,v) in edges {
            adj_matrix[u].insert(v);
            adj_matrix[v].insert(u);
        }
        Self::from_adj_matrix(adj_matrix)
    }

    /// same as [`Graph::from_adj_matrix`], but rejects out-of-range indices, loops and asymmetric rows
    pub fn try_from_adj_matrix(adj_matrix:Vec<BitSet>) -> Result<Self, GraphError> {
        let n = adj_matrix.len();
        for (u, row) in adj_matrix.iter().enumerate() {
            for v in row.iter() {
                if v >= n { return Err(GraphError::VertexOutOfRange { vertex: v, nb_vertices: n }); }
                if v == u { return Err(GraphError::SelfLoop(u)); }
                if !adj_matrix[v].contains(u) { return Err(GraphError::AsymmetricAdjacency(u, v)); }
            }
        }
        Ok(Self::from_adj_matrix(adj_matrix))
    }

    /// same as [`Graph::from_adj_list`], with the checks of [`Graph::try_from_adj_matrix`]
    pub fn try_from_adj_list(adj_list:&[Vec<VertexId>]) -> Result<Self, GraphError> {
        let n = adj_list.len();
        if let Some(&v) = adj_list.iter().flatten().find(|v| **v >= n) {
            return Err(GraphError::VertexOutOfRange { vertex: v, nb_vertices: n });
        }
        Self::try_from_adj_matrix(Self::from_adj_list(adj_list).adj_matrix)
    }

    /// same as [`Graph::from_edges`], but rejects out-of-range endpoints and loops
    pub fn try_from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self, GraphError> {
        for &(u,v) in edges {
            for w in [u, v].iter() {
                if *w >= n { return Err(GraphError::VertexOutOfRange { vertex: *w, nb_vertices: n }); }
            }
            if u == v { return Err(GraphError::SelfLoop(u)); }
        }
        Ok(Self::from_edges(n, edges))
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// bit vector of the neighbors of `u`
    pub fn neighbors(&self, u:VertexId) -> &BitSet { &self.adj_matrix[u] }

    /// number of neighbors of `u`
    pub fn degree(&self, u:VertexId) -> usize { self.adj_matrix[u].len() }

    /// returns if u and v are adjacent (O(1))
    pub fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool { self.adj_matrix[u].contains(v) }

    /// read-only view of the adjacency matrix
    pub fn view(&self) -> &[BitSet] { &self.adj_matrix }

    /// builds the edge list (pairs `u < v`)
    pub fn edges(&self) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::with_capacity(self.m);
        for (u,row) in self.adj_matrix.iter().enumerate() {
            for v in row.iter().filter(|v| *v > u) {
                res.push((u,v));
            }
        }
        res
    }

    /// true iff no two vertices of `set` are adjacent
    pub fn is_anticlique(&self, set:&VertexSet) -> bool {
        set.iter().all(|u| self.adj_matrix[u].is_disjoint(set.view()))
    }

    /// true iff `set` is an anticlique and every other vertex has a neighbor in `set`
    pub fn is_max_anticlique(&self, set:&VertexSet) -> bool {
        self.is_anticlique(set) && (0..self.n)
            .filter(|v| !set.contains(*v))
            .all(|v| !self.adj_matrix[v].is_disjoint(set.view()))
    }

    /// logs statistics of the graph
    pub fn display_statistics(&self) {
        let min_degree = (0..self.n).map(|u| self.degree(u)).min().unwrap_or(0);
        let max_degree = (0..self.n).map(|u| self.degree(u)).max().unwrap_or(0);
        info!(
            vertices = self.n,
            edges = self.m,
            min_degree,
            max_degree,
            "graph statistics"
        );
    }
}
