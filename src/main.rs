/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dsi_progress_logger::prelude::*;
use shortest_paths::graph::{random_tree, serialize};
use shortest_paths::prelude::*;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Shortest-path distances on unweighted undirected graphs")]
struct Cli {
    /// Increase logging verbosity (can be repeated).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Computes the distances from the start vertex of a graph file and
    /// prints one per line (-1 for unreachable vertices).
    Run {
        /// A file containing the number of vertices, the number of edges,
        /// the edges and the start vertex.
        graph_file: PathBuf,
        /// One of bfs-seq, bfs-par, floyd-seq, floyd-par.
        #[arg(default_value = "bfs-seq")]
        algorithm: Algorithm,
        /// Number of worker threads of parallel algorithms (default: one per
        /// hardware thread).
        #[arg(short, long)]
        threads: Option<usize>,
    },
    /// Writes a random tree with start vertex 0, for benchmarking.
    Generate {
        /// Number of vertices.
        #[arg(short, long)]
        nodes: usize,
        /// Seed of the random generator.
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Output file (default: standard output).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    stderrlog::new()
        .verbosity(1 + cli.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    match cli.command {
        Command::Run {
            graph_file,
            algorithm,
            threads,
        } => {
            let mut main_pl = progress_logger![display_memory = true];
            let instance = Instance::from_path(&graph_file)
                .with_context(|| format!("Cannot load graph from {}", graph_file.display()))?;
            main_pl.info(format_args!(
                "Loaded graph with {} vertices and {} edges; running {}",
                instance.graph.num_nodes(),
                instance.graph.num_edges(),
                algorithm
            ));

            if threads.is_some() && !algorithm.is_parallel() {
                log::warn!("{} is sequential: ignoring --threads", algorithm);
            }
            let threads = threads.map_or(Threads::Default, Threads::NumThreads);
            let finder = algorithm.finder(threads)?;
            let distances = finder
                .compute(&instance.graph, instance.start, &mut main_pl)
                .context("Cannot compute shortest paths")?;

            let mut out = BufWriter::new(std::io::stdout().lock());
            for distance in distances.iter() {
                writeln!(out, "{}", distance)?;
            }
            out.flush()?;
        }
        Command::Generate {
            nodes,
            seed,
            output,
        } => {
            anyhow::ensure!(nodes > 0, "A graph needs at least one vertex");
            let edges = random_tree(nodes, seed);
            let mut text = serialize(nodes, &edges);
            text.push_str("0\n");
            match output {
                Some(path) => std::fs::write(&path, text)
                    .with_context(|| format!("Cannot write {}", path.display()))?,
                None => std::io::stdout().lock().write_all(text.as_bytes())?,
            }
        }
    }

    Ok(())
}
