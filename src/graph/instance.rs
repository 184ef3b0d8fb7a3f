/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Graph, Tokens};
use crate::Error;
use std::path::Path;

/// A graph together with the start vertex of a computation.
///
/// This is the content of an input file: the graph description read by
/// [`Graph::read`], followed by the start vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub graph: Graph,
    pub start: usize,
}

impl Instance {
    /// Parses an instance from text.
    ///
    /// The start vertex is checked against the number of vertices of the
    /// graph, so a parsed instance always has a valid start vertex.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut tokens = Tokens::new(input);
        let graph = Graph::read(&mut tokens)?;
        let start = tokens.next_vertex("start vertex", graph.num_nodes())?;
        Ok(Self { graph, start })
    }

    /// Reads and parses an instance from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::parse(&std::fs::read_to_string(path)?)
    }
}
