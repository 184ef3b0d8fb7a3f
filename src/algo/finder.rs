/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{
    algo::{bfs, floyd_warshall, traits::ShortestPathFinder, Distance},
    graph::Graph,
    utils::Threads,
    Error,
};
use dsi_progress_logger::ProgressLog;
use std::{fmt, str::FromStr};

/// The available shortest-path algorithms.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Algorithm {
    /// [`bfs::Seq`].
    BfsSeq,
    /// [`bfs::Par`].
    BfsPar,
    /// [`floyd_warshall::Seq`].
    FloydSeq,
    /// [`floyd_warshall::Par`].
    FloydPar,
}

impl Algorithm {
    /// All algorithms, sequential ones first.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BfsSeq,
        Algorithm::FloydSeq,
        Algorithm::BfsPar,
        Algorithm::FloydPar,
    ];

    /// Returns the name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::BfsSeq => "bfs-seq",
            Self::BfsPar => "bfs-par",
            Self::FloydSeq => "floyd-seq",
            Self::FloydPar => "floyd-par",
        }
    }

    /// Returns true if the algorithm uses a thread pool.
    pub fn is_parallel(self) -> bool {
        matches!(self, Self::BfsPar | Self::FloydPar)
    }

    /// Creates a finder for this algorithm.
    ///
    /// `threads` is ignored by sequential algorithms.
    pub fn finder(self, threads: Threads) -> Result<Finder, Error> {
        Ok(match self {
            Self::BfsSeq => Finder::BfsSeq(bfs::Seq),
            Self::FloydSeq => Finder::FloydSeq(floyd_warshall::Seq),
            Self::BfsPar => Finder::BfsPar(bfs::Par::with_threads(threads.build()?)),
            Self::FloydPar => {
                Finder::FloydPar(floyd_warshall::Par::with_threads(threads.build()?))
            }
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when parsing an unknown algorithm name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?} (expected bfs-seq, bfs-par, floyd-seq or floyd-par)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

/// A finder selected at run time among the available algorithms.
pub enum Finder {
    BfsSeq(bfs::Seq),
    BfsPar(bfs::Par),
    FloydSeq(floyd_warshall::Seq),
    FloydPar(floyd_warshall::Par),
}

impl ShortestPathFinder for Finder {
    fn compute(
        &self,
        graph: &Graph,
        start: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<Box<[Distance]>, Error> {
        match self {
            Self::BfsSeq(finder) => finder.compute(graph, start, pl),
            Self::BfsPar(finder) => finder.compute(graph, start, pl),
            Self::FloydSeq(finder) => finder.compute(graph, start, pl),
            Self::FloydPar(finder) => finder.compute(graph, start, pl),
        }
    }
}
