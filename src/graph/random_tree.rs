/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Generates a random spanning tree on `num_nodes` vertices.
///
/// Vertices are shuffled with a generator seeded by `seed`, and then the
/// `i`-th vertex of the permutation is attached to a uniformly chosen vertex
/// among the previous ones. Each returned edge `(u, v)` has `u < v`.
///
/// The result depends only on `num_nodes` and `seed`.
pub fn random_tree(num_nodes: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut vertices = Vec::from_iter(0..num_nodes);
    vertices.shuffle(&mut rng);

    (1..num_nodes)
        .map(|i| {
            let j = rng.random_range(0..i);
            let (u, v) = (vertices[i], vertices[j]);
            (u.min(v), u.max(v))
        })
        .collect()
}

/// Serializes a graph in the format accepted by
/// [`Graph::load`](crate::graph::Graph::load).
pub fn serialize(num_nodes: usize, edges: &[(usize, usize)]) -> String {
    let header = format!("{}\n{}\n", num_nodes, edges.len());
    edges
        .iter()
        .map(|&(u, v)| format!("{} {}\n", u, v))
        .fold(header, |mut out, line| {
            out.push_str(&line);
            out
        })
}
