/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::no_logging;
use shortest_paths::graph::random_tree;
use shortest_paths::prelude::*;

const NUM_SAMPLES: usize = 10;
const BFS_SIZES: [usize; 3] = [10_000, 100_000, 1_000_000];
const FLOYD_WARSHALL_SIZES: [usize; 2] = [200, 500];

fn bench_algorithms(
    c: &mut Criterion,
    group_name: &str,
    sizes: &[usize],
    algorithms: &[Algorithm],
) {
    let mut group = c.benchmark_group(group_name);
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);

    for &num_nodes in sizes {
        let graph = Graph::from_edges(num_nodes, random_tree(num_nodes, 42))
            .expect("generated trees are valid graphs");
        group.throughput(Throughput::Elements(num_nodes as u64));

        for &algorithm in algorithms {
            let finder = algorithm
                .finder(Threads::Default)
                .expect("cannot build thread pool");
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), num_nodes),
                &graph,
                |b, graph| {
                    b.iter_with_large_drop(|| finder.compute(graph, 0, no_logging![]).unwrap())
                },
            );
        }
    }
    group.finish();
}

pub fn bench_bfs(c: &mut Criterion) {
    bench_algorithms(
        c,
        "Breadth-first search",
        &BFS_SIZES,
        &[Algorithm::BfsSeq, Algorithm::BfsPar],
    );
}

pub fn bench_floyd_warshall(c: &mut Criterion) {
    bench_algorithms(
        c,
        "Floyd–Warshall",
        &FLOYD_WARSHALL_SIZES,
        &[Algorithm::FloydSeq, Algorithm::FloydPar],
    );
}

criterion_group!(benches, bench_bfs, bench_floyd_warshall);
criterion_main!(benches);
