/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{extract_row, init_matrix};
use crate::{
    algo::{traits::ShortestPathFinder, Distance},
    error::check_vertex,
    graph::Graph,
    Error,
};
use dsi_progress_logger::ProgressLog;

/// A sequential Floyd–Warshall computation.
///
/// For each intermediate vertex `k`, every pair `(i, j)` is relaxed through
/// `k`. Time is cubic and memory quadratic in the number of vertices.
#[derive(Debug, Clone, Copy, Default)]
pub struct Seq;

impl ShortestPathFinder for Seq {
    fn compute(
        &self,
        graph: &Graph,
        start: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<Box<[Distance]>, Error> {
        let n = graph.num_nodes();
        check_vertex(start, n)?;

        pl.item_name("intermediate node");
        pl.expected_updates(Some(n));
        pl.start("Computing Floyd–Warshall distances");

        let mut dist = init_matrix(graph)?;

        for k in 0..n {
            for i in 0..n {
                // Neither dist[i][k] nor row k change during iteration k.
                let d_ik = dist[i * n + k];
                for j in 0..n {
                    let via_k = d_ik + dist[k * n + j];
                    if via_k < dist[i * n + j] {
                        dist[i * n + j] = via_k;
                    }
                }
            }
            pl.update();
        }

        pl.done();
        Ok(extract_row(&dist, n, start))
    }
}
