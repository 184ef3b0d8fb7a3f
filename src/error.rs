/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::num::ParseIntError;
use thiserror::Error;

/// The error type of this crate.
///
/// Loading and computing can fail in two ways that matter to callers:
/// malformed or truncated input ([`ErrorKind::Format`]) and vertex ids outside
/// `[0, V)` ([`ErrorKind::Range`]). Use [`Error::kind`] to tell them apart
/// without matching on every variant.
#[derive(Error, Debug)]
pub enum Error {
    /// The input ended before `what` could be read.
    #[error("failed to read {what}: unexpected end of input")]
    UnexpectedEnd { what: &'static str },
    /// The token where `what` was expected is not a valid integer.
    #[error("failed to read {what}: {token:?} is not a valid integer")]
    InvalidInteger {
        what: &'static str,
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// A vertex id (edge endpoint or start vertex) is not in `[0, num_nodes)`.
    #[error("vertex {vertex} is out of range for a graph with {num_nodes} vertices")]
    VertexOutOfRange { vertex: i64, num_nodes: usize },
    /// A structure sized on the number of vertices cannot be allocated.
    #[error("{what} for {num_nodes} vertices does not fit in memory")]
    TooLarge {
        what: &'static str,
        num_nodes: usize,
    },
    /// The input could not be read.
    #[error("could not read input")]
    Io(#[from] std::io::Error),
    /// The worker pool of a parallel algorithm could not be built.
    #[error("could not build thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or truncated numeric input.
    Format,
    /// A vertex id outside `[0, V)`.
    Range,
    /// A graph or matrix too large to be allocated.
    Capacity,
    /// An I/O failure while reading input.
    Io,
    /// A failure setting up worker threads.
    ThreadPool,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedEnd { .. } | Self::InvalidInteger { .. } => ErrorKind::Format,
            Self::VertexOutOfRange { .. } => ErrorKind::Range,
            Self::TooLarge { .. } => ErrorKind::Capacity,
            Self::Io(_) => ErrorKind::Io,
            Self::ThreadPool(_) => ErrorKind::ThreadPool,
        }
    }

    pub(crate) fn out_of_range(vertex: usize, num_nodes: usize) -> Self {
        Self::VertexOutOfRange {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            num_nodes,
        }
    }
}

/// Checks that `vertex` is a valid index for a graph with `num_nodes` vertices.
pub(crate) fn check_vertex(vertex: usize, num_nodes: usize) -> Result<(), Error> {
    if vertex < num_nodes {
        Ok(())
    } else {
        Err(Error::out_of_range(vertex, num_nodes))
    }
}
