/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::Error;
use std::str::SplitAsciiWhitespace;

/// A reader of whitespace-separated integers.
///
/// The textual input format is a flat sequence of integers in which line
/// breaks carry no meaning. The same reader is used by [`Graph::read`] for the
/// vertex count, the edge count and the edges, and afterwards by the caller
/// for whatever follows the edge block (e.g., the start vertex).
///
/// [`Graph::read`]: crate::graph::Graph::read
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    iter: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    /// Creates a reader over the given text.
    pub fn new(input: &'a str) -> Self {
        Self {
            iter: input.split_ascii_whitespace(),
        }
    }

    fn next_token(&mut self, what: &'static str) -> Result<&'a str, Error> {
        self.iter.next().ok_or(Error::UnexpectedEnd { what })
    }

    /// Reads a non-negative count not larger than [`u32::MAX`].
    ///
    /// Negative values and values that do not fit in a `u32` are malformed
    /// counts, not range errors.
    pub fn next_count(&mut self, what: &'static str) -> Result<usize, Error> {
        let token = self.next_token(what)?;
        token
            .parse::<u32>()
            .map(|count| count as usize)
            .map_err(|source| Error::InvalidInteger {
                what,
                token: token.to_owned(),
                source,
            })
    }

    /// Reads a signed integer that is meant to be a vertex id, without
    /// checking its range.
    pub fn next_id(&mut self, what: &'static str) -> Result<i64, Error> {
        let token = self.next_token(what)?;
        token.parse().map_err(|source| Error::InvalidInteger {
            what,
            token: token.to_owned(),
            source,
        })
    }

    /// Reads a vertex id and checks that it lies in `[0, num_nodes)`.
    pub fn next_vertex(&mut self, what: &'static str, num_nodes: usize) -> Result<usize, Error> {
        let id = self.next_id(what)?;
        vertex_in_range(id, num_nodes)
    }

    /// Returns true if no token is left.
    pub fn is_empty(&self) -> bool {
        self.iter.clone().next().is_none()
    }
}

/// Converts a parsed vertex id to an index, checking it is in `[0, num_nodes)`.
pub(crate) fn vertex_in_range(id: i64, num_nodes: usize) -> Result<usize, Error> {
    usize::try_from(id)
        .ok()
        .filter(|&vertex| vertex < num_nodes)
        .ok_or(Error::VertexOutOfRange {
            vertex: id,
            num_nodes,
        })
}
