/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{extract_row, init_matrix};
use crate::{
    algo::{traits::ShortestPathFinder, Distance},
    error::check_vertex,
    graph::Graph,
    utils::Threads,
    Error,
};
use dsi_progress_logger::ProgressLog;
use rayon::{prelude::*, ThreadPool};
use std::borrow::Borrow;

/// A parallel Floyd–Warshall computation.
///
/// For each intermediate vertex `k`, the rows of the matrix are split into
/// one contiguous block per thread, and each thread relaxes the rows of its
/// block. Blocks are disjoint, and row `k` (which cannot change during
/// iteration `k`, as `dist[k][k]` is zero) is read from a copy taken before
/// the iteration starts, so no locking is needed. The end of each parallel
/// iteration is a barrier: iteration `k + 1` starts only when all rows have
/// been relaxed through `k`.
pub struct Par<T: Borrow<ThreadPool> = ThreadPool> {
    threads: T,
}

impl Par<ThreadPool> {
    /// Creates a parallel computation using one thread per hardware thread.
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_threads(Threads::Default.build()?))
    }

    /// Creates a parallel computation that uses the specified number of
    /// threads.
    pub fn with_num_threads(num_threads: usize) -> Result<Self, Error> {
        Ok(Self::with_threads(Threads::NumThreads(num_threads).build()?))
    }
}

impl<T: Borrow<ThreadPool>> Par<T> {
    /// Creates a parallel computation that uses the specified thread pool.
    pub fn with_threads(threads: T) -> Self {
        Self { threads }
    }
}

impl<T: Borrow<ThreadPool>> ShortestPathFinder for Par<T> {
    fn compute(
        &self,
        graph: &Graph,
        start: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<Box<[Distance]>, Error> {
        let n = graph.num_nodes();
        check_vertex(start, n)?;

        let threads = self.threads.borrow();
        let num_threads = threads.current_num_threads();
        let rows_per_chunk = n.div_ceil(num_threads);

        pl.item_name("intermediate node");
        pl.expected_updates(Some(n));
        pl.start(format!(
            "Computing Floyd–Warshall distances using {} threads",
            num_threads
        ));

        let mut dist = init_matrix(graph)?;
        let mut row_k = vec![0; n];

        for k in 0..n {
            row_k.copy_from_slice(&dist[k * n..(k + 1) * n]);
            threads.install(|| {
                dist.par_chunks_mut(rows_per_chunk * n).for_each(|rows| {
                    for row in rows.chunks_exact_mut(n) {
                        let d_ik = row[k];
                        for (d_ij, &d_kj) in row.iter_mut().zip(&row_k) {
                            let via_k = d_ik + d_kj;
                            if via_k < *d_ij {
                                *d_ij = via_k;
                            }
                        }
                    }
                });
            });
            pl.update();
        }

        pl.done();
        Ok(extract_row(&dist, n, start))
    }
}
