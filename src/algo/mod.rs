/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Single-source shortest-path algorithms on unweighted graphs.

pub mod bfs;

pub mod floyd_warshall;

mod finder;
pub use finder::*;

/// Traits used to interact with the implemented algorithms.
pub mod traits;

/// A distance in number of edges, or [`UNREACHABLE`].
pub type Distance = isize;

/// The distance reported for vertices that cannot be reached from the start.
pub const UNREACHABLE: Distance = -1;
