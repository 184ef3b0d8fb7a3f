/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use shortest_paths::graph::Tokens;
use shortest_paths::prelude::*;
use std::io::Write;

#[test]
fn test_load_counts_and_adjacency() -> Result<()> {
    let graph = Graph::load(
        r"
4
6
0 1
0 2
0 3
1 2
1 3
2 3
",
    )?;
    assert_eq!(graph.num_nodes(), 4);
    assert_eq!(graph.num_edges(), 6);
    for node in 0..4 {
        assert_eq!(graph.outdegree(node), 3);
    }
    assert_eq!(graph.successors(2), &[0, 1, 3]);
    Ok(())
}

#[test]
fn test_duplicate_edges_are_kept() -> Result<()> {
    let graph = Graph::load("3 4 0 1 0 1 1 2 1 2")?;
    assert_eq!(graph.successors(1), &[0, 0, 2, 2]);
    Ok(())
}

#[test]
fn test_invalid_input() {
    let err = Graph::load("invalid input").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(
        err,
        Error::InvalidInteger {
            what: "number of vertices",
            ..
        }
    ));
}

#[test]
fn test_missing_counts() {
    assert!(matches!(
        Graph::load(""),
        Err(Error::UnexpectedEnd {
            what: "number of vertices"
        })
    ));
    assert!(matches!(
        Graph::load("3"),
        Err(Error::UnexpectedEnd {
            what: "number of edges"
        })
    ));
    assert_eq!(
        Graph::load("3 x").unwrap_err().kind(),
        ErrorKind::Format
    );
}

#[test]
fn test_huge_counts_are_malformed() {
    let err = Graph::load("18446744073709551615 0").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(
        err,
        Error::InvalidInteger {
            what: "number of vertices",
            ..
        }
    ));
    assert!(matches!(
        Graph::load("4294967296 0"),
        Err(Error::InvalidInteger {
            what: "number of vertices",
            ..
        })
    ));
    assert!(matches!(
        Graph::load("3 99999999999999999999"),
        Err(Error::InvalidInteger {
            what: "number of edges",
            ..
        })
    ));
}

#[test]
fn test_too_many_vertices_for_memory() {
    let err = Graph::from_edges(usize::MAX, std::iter::empty()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity);
}

#[test]
fn test_too_few_edges() {
    let err = Graph::load("3\n3\n0 1\n1 2\n").unwrap_err();
    assert!(matches!(err, Error::UnexpectedEnd { what: "edge" }));
}

#[test]
fn test_malformed_edge() {
    let err = Graph::load("3 1 0 one").unwrap_err();
    assert!(matches!(err, Error::InvalidInteger { what: "edge", .. }));
}

#[test]
fn test_edge_out_of_range() {
    let err = Graph::load("3 1 0 3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(matches!(
        err,
        Error::VertexOutOfRange {
            vertex: 3,
            num_nodes: 3
        }
    ));
    assert!(matches!(
        Graph::load("3 1 -2 1"),
        Err(Error::VertexOutOfRange { vertex: -2, .. })
    ));
}

#[test]
fn test_empty_graph() -> Result<()> {
    let graph = Graph::load("0 0")?;
    assert_eq!(graph.num_nodes(), 0);
    assert_eq!(graph.num_edges(), 0);
    Ok(())
}

#[test]
fn test_tokens_after_graph() -> Result<()> {
    let mut tokens = Tokens::new("3 2\n0 1\n1 2\n2\n");
    let graph = Graph::read(&mut tokens)?;
    assert_eq!(tokens.next_vertex("start vertex", graph.num_nodes())?, 2);
    assert!(tokens.is_empty());
    Ok(())
}

#[test]
fn test_instance_from_path() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "5\n4\n0 1\n0 4\n1 2\n1 3\n0\n")?;
    file.flush()?;

    let instance = Instance::from_path(file.path())?;
    assert_eq!(instance.graph.num_nodes(), 5);
    assert_eq!(instance.start, 0);
    Ok(())
}

#[test]
fn test_instance_missing_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let err = Instance::from_path(dir.path().join("missing.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    Ok(())
}
