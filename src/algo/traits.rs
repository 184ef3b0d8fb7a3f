/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{algo::Distance, graph::Graph, Error};
use dsi_progress_logger::ProgressLog;

/// An algorithm computing the distances from a vertex of a [`Graph`].
///
/// Implementations are interchangeable: on the same graph and start vertex
/// all of them return the same distance vector. The vector has one entry per
/// vertex, equal to the number of edges of a shortest path from `start`, or
/// to [`UNREACHABLE`](crate::algo::UNREACHABLE) if there is no such path.
/// The entry of `start` is always zero.
///
/// Implementations hold no state that is modified by a computation, so a
/// finder and a graph can be shared by concurrent computations.
pub trait ShortestPathFinder {
    /// Computes the distances from `start`.
    ///
    /// # Arguments
    /// * `graph`: the graph.
    /// * `start`: the vertex the distances are measured from.
    /// * `pl`: a progress logger; pass `no_logging![]` to disable logging.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] if `start` is not smaller than
    /// the number of vertices of `graph`, before doing any work.
    fn compute(
        &self,
        graph: &Graph,
        start: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<Box<[Distance]>, Error>;
}
