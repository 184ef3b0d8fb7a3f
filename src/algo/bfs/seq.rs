/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{
    algo::{traits::ShortestPathFinder, Distance, UNREACHABLE},
    error::check_vertex,
    graph::Graph,
    Error,
};
use dsi_progress_logger::ProgressLog;
use std::collections::VecDeque;

/// A sequential breadth-first visit computing distances.
///
/// Vertices are extracted from a FIFO queue, and each undiscovered neighbor
/// gets the distance of the extracted vertex plus one. The visit order
/// depends only on the order of the successor lists.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use shortest_paths::prelude::*;
///
/// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)])?;
/// let distances = bfs::Seq.compute(&graph, 0, no_logging![])?;
/// assert_eq!(*distances, [0, 1, 2, 1]);
/// # Ok::<(), shortest_paths::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Seq;

impl ShortestPathFinder for Seq {
    fn compute(
        &self,
        graph: &Graph,
        start: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<Box<[Distance]>, Error> {
        let num_nodes = graph.num_nodes();
        check_vertex(start, num_nodes)?;

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start(format!("Computing BFS distances from {}", start));

        let mut distances = vec![UNREACHABLE; num_nodes];
        let mut queue = VecDeque::new();
        distances[start] = 0;
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            let distance = distances[node] + 1;
            for &succ in graph.successors(node) {
                if distances[succ] == UNREACHABLE {
                    distances[succ] = distance;
                    queue.push_back(succ);
                }
            }
            pl.light_update();
        }

        pl.done();
        Ok(distances.into_boxed_slice())
    }
}
