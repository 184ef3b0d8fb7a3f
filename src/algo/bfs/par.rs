/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{
    algo::{traits::ShortestPathFinder, Distance, UNREACHABLE},
    error::check_vertex,
    graph::Graph,
    utils::{closure_vec, Threads},
    Error,
};
use dsi_progress_logger::ProgressLog;
use parking_lot::Mutex;
use rayon::{prelude::*, ThreadPool};
use std::{
    borrow::Borrow,
    sync::atomic::{AtomicIsize, Ordering},
};

/// A level-synchronous parallel breadth-first visit computing distances.
///
/// At each level the current frontier is split into one contiguous chunk per
/// thread of the pool. Every vertex discovered while scanning the frontier at
/// distance `d` gets distance `d + 1`, no matter which thread discovers it, so
/// the result is the same as that of [`Seq`](super::Seq).
///
/// Discovery uses double-checked locking: a thread first reads the distance
/// of a neighbor without locking, and only if the neighbor looks undiscovered
/// it takes the lock guarding the next frontier, checks again, and sets the
/// distance. Newly discovered vertices are collected in a thread-local list
/// that is appended to the next frontier under the same lock when the chunk
/// is done. The end of the parallel phase is the barrier between levels.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use shortest_paths::prelude::*;
///
/// let graph = Graph::from_edges(4, [(0, 1)])?;
/// let visit = bfs::Par::with_num_threads(2)?;
/// assert_eq!(*visit.compute(&graph, 0, no_logging![])?, [0, 1, -1, -1]);
/// # Ok::<(), shortest_paths::Error>(())
/// ```
pub struct Par<T: Borrow<ThreadPool> = ThreadPool> {
    threads: T,
}

impl Par<ThreadPool> {
    /// Creates a parallel visit using one thread per hardware thread.
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_threads(Threads::Default.build()?))
    }

    /// Creates a parallel visit that uses the specified number of threads.
    pub fn with_num_threads(num_threads: usize) -> Result<Self, Error> {
        Ok(Self::with_threads(Threads::NumThreads(num_threads).build()?))
    }
}

impl<T: Borrow<ThreadPool>> Par<T> {
    /// Creates a parallel visit that uses the specified thread pool.
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
        let num_nodes = graph.num_nodes();
        check_vertex(start, num_nodes)?;

        let threads = self.threads.borrow();
        let num_threads = threads.current_num_threads();

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start(format!(
            "Computing BFS distances from {} using {} threads",
            start, num_threads
        ));

        let distances = closure_vec(|| AtomicIsize::new(UNREACHABLE), num_nodes);
        distances[start].store(0, Ordering::Relaxed);

        let mut curr_frontier = vec![start];
        let mut distance: Distance = 0;

        while !curr_frontier.is_empty() {
            let distance_plus_one = distance + 1;
            let next_frontier = Mutex::new(Vec::new());
            let chunk_size = curr_frontier.len().div_ceil(num_threads);

            threads.install(|| {
                curr_frontier.par_chunks(chunk_size).for_each(|chunk| {
                    let mut local_next = Vec::new();
                    for &node in chunk {
                        for &succ in graph.successors(node) {
                            if distances[succ].load(Ordering::Relaxed) != UNREACHABLE {
                                continue;
                            }
                            let _guard = next_frontier.lock();
                            if distances[succ].load(Ordering::Relaxed) == UNREACHABLE {
                                distances[succ].store(distance_plus_one, Ordering::Relaxed);
                                local_next.push(succ);
                            }
                        }
                    }
                    if !local_next.is_empty() {
                        next_frontier.lock().append(&mut local_next);
                    }
                });
            });

            pl.update_with_count(curr_frontier.len());
            curr_frontier = next_frontier.into_inner();
            distance = distance_plus_one;
        }

        pl.done();
        Ok(distances.into_iter().map(AtomicIsize::into_inner).collect())
    }
}
