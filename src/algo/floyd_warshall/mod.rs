/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Distances from one row of the all-pairs Floyd–Warshall matrix.
//!
//! Both implementations build the dense `V × V` matrix, run the full
//! `O(V³)` relaxation and report only the row of the start vertex. They are
//! useful as an independent check of the breadth-first implementations,
//! and as a benchmark of dense parallel work.

mod seq;
pub use seq::*;

mod par;
pub use par::*;

use crate::{
    algo::{Distance, UNREACHABLE},
    graph::Graph,
    Error,
};

/// The matrix entry of pairs with no known path.
///
/// The sum of two infinities does not overflow, and it is larger than any
/// path length, so relaxation never mistakes a missing path for a real one.
pub const INFINITY: usize = usize::MAX / 2;

/// Builds the initial flat, row-major distance matrix: zero on the
/// diagonal, one for adjacent pairs, [`INFINITY`] elsewhere.
///
/// The diagonal is written last, so self-loops do not give a vertex a
/// positive distance from itself.
fn init_matrix(graph: &Graph) -> Result<Vec<usize>, Error> {
    let num_nodes = graph.num_nodes();
    let mut dist = alloc_matrix(num_nodes)?;
    for node in 0..num_nodes {
        let row = &mut dist[node * num_nodes..(node + 1) * num_nodes];
        for &succ in graph.successors(node) {
            row[succ] = 1;
        }
        row[node] = 0;
    }
    Ok(dist)
}

/// Allocates a `num_nodes × num_nodes` matrix filled with [`INFINITY`],
/// failing instead of aborting if it cannot fit in memory.
fn alloc_matrix(num_nodes: usize) -> Result<Vec<usize>, Error> {
    let too_large = || Error::TooLarge {
        what: "distance matrix",
        num_nodes,
    };
    let len = num_nodes.checked_mul(num_nodes).ok_or_else(too_large)?;
    let mut dist = Vec::new();
    dist.try_reserve_exact(len).map_err(|_| too_large())?;
    dist.resize(len, INFINITY);
    Ok(dist)
}

/// Extracts the row of `start`, mapping [`INFINITY`] to [`UNREACHABLE`].
fn extract_row(dist: &[usize], num_nodes: usize, start: usize) -> Box<[Distance]> {
    dist[start * num_nodes..(start + 1) * num_nodes]
        .iter()
        .map(|&d| if d < INFINITY { d as Distance } else { UNREACHABLE })
        .collect()
}
