/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Undirected unweighted graphs stored as adjacency lists.

mod tokens;
pub use tokens::Tokens;

mod instance;
pub use instance::*;

mod random_tree;
pub use random_tree::*;

use crate::Error;

/// An undirected, unweighted graph.
///
/// Each undirected edge `(u, v)` is stored twice: `v` is appended to the
/// successors of `u`, and `u` to the successors of `v`. Duplicate edges and
/// self-loops are kept as they are; in particular, a self-loop `(v, v)` makes
/// `v` appear twice among its own successors. Successor lists are in
/// insertion order.
///
/// A graph is immutable once built, so it can be shared by any number of
/// concurrent computations.
///
/// # Examples
///
/// ```
/// use shortest_paths::graph::Graph;
///
/// let graph = Graph::load("3 2\n0 1\n1 2\n")?;
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.successors(1), &[0, 2]);
/// # Ok::<(), shortest_paths::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    num_edges: usize,
    successors: Vec<Vec<usize>>,
}

impl Graph {
    /// Loads a graph from its textual description: the number of vertices
    /// `V`, the number of edges `E`, and then `E` pairs of vertex ids.
    ///
    /// Anything after the edge block is ignored; use [`Graph::read`] if
    /// you need to read it.
    pub fn load(input: &str) -> Result<Self, Error> {
        Self::read(&mut Tokens::new(input))
    }

    /// Reads a graph from a token stream, leaving the stream positioned
    /// right after the last edge.
    ///
    /// # Errors
    ///
    /// A format error is returned if a count or a vertex id cannot be parsed
    /// (counts must fit in a `u32`) or if fewer than `E` edges are present;
    /// a range error is returned if an edge endpoint is not in `[0, V)`.
    /// [`Error::TooLarge`] is returned if the adjacency lists cannot be
    /// allocated.
    pub fn read(tokens: &mut Tokens<'_>) -> Result<Self, Error> {
        let num_nodes = tokens.next_count("number of vertices")?;
        let num_edges = tokens.next_count("number of edges")?;
        let mut graph = Self::empty(num_nodes, num_edges)?;

        for _ in 0..num_edges {
            let u = tokens.next_id("edge")?;
            let v = tokens.next_id("edge")?;
            let u = tokens::vertex_in_range(u, num_nodes)?;
            let v = tokens::vertex_in_range(v, num_nodes)?;
            graph.add_edge(u, v);
        }

        Ok(graph)
    }

    /// Builds a graph from a list of edges, with the same validation and
    /// insertion order as [`Graph::load`].
    pub fn from_edges(
        num_nodes: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, Error> {
        let mut graph = Self::empty(num_nodes, 0)?;
        for (u, v) in edges {
            crate::error::check_vertex(u, num_nodes)?;
            crate::error::check_vertex(v, num_nodes)?;
            graph.add_edge(u, v);
            graph.num_edges += 1;
        }
        Ok(graph)
    }

    fn empty(num_nodes: usize, num_edges: usize) -> Result<Self, Error> {
        let mut successors = Vec::new();
        successors
            .try_reserve_exact(num_nodes)
            .map_err(|_| Error::TooLarge {
                what: "adjacency lists",
                num_nodes,
            })?;
        successors.resize_with(num_nodes, Vec::new);
        Ok(Self {
            num_edges,
            successors,
        })
    }

    fn add_edge(&mut self, u: usize, v: usize) {
        self.successors[u].push(v);
        self.successors[v].push(u);
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.successors.len()
    }

    /// Returns the number of undirected edges, counting duplicates and
    /// self-loops.
    #[inline(always)]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the neighbors of `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not smaller than [`num_nodes`](Graph::num_nodes).
    #[inline(always)]
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.successors[node]
    }

    /// Returns the length of the neighbor list of `node`.
    #[inline(always)]
    pub fn outdegree(&self, node: usize) -> usize {
        self.successors[node].len()
    }
}
