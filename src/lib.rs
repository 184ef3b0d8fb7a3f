/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Single-source shortest-path distances on unweighted undirected graphs.
//!
//! A [`Graph`](graph::Graph) is loaded once from its textual edge list and
//! then handed to any [`ShortestPathFinder`](traits::ShortestPathFinder):
//! sequential or parallel breadth-first search, or sequential or parallel
//! Floyd–Warshall. All finders return the same distances.

pub mod algo;
pub mod graph;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind};

/// Module exposing all traits in a single level.
pub mod traits {
    pub use crate::algo::traits::*;
}

/// Use `use shortest_paths::prelude::*;` to import common types, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::{bfs, floyd_warshall, Algorithm, Distance, Finder, UNREACHABLE};
    pub use graph::{Graph, Instance};
    pub use traits::*;
    pub use utils::Threads;
    pub use crate::{Error, ErrorKind};
}
