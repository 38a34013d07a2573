use chromagraph::{AlgorithmConfig, Graph, TraversalOrder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn grid(side: usize) -> Graph<usize> {
    let mut graph = Graph::oriented();
    let ids: Vec<_> = (0..side * side).map(|i| graph.add_vertex(i)).collect();
    for row in 0..side {
        for col in 0..side {
            let here = ids[row * side + col];
            if col + 1 < side {
                let _ = graph.add_edge(here, ids[row * side + col + 1]);
            }
            if row + 1 < side {
                let _ = graph.add_edge(here, ids[(row + 1) * side + col]);
            }
        }
    }
    graph
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    let side = 15;
    let graph = grid(side);
    let ids: Vec<_> = graph.vertex_ids().collect();
    let (source, target) = (ids[0], ids[side * side - 1]);
    let config = AlgorithmConfig::default();

    group.bench_function("dijkstra_unit_grid", |b| {
        b.iter(|| black_box(graph.dijkstra(source)));
    });

    group.bench_function("dijkstra_weighted_grid", |b| {
        b.iter(|| {
            black_box(graph.dijkstra_with(
                source,
                |u, v| (u.index() * 31 + v.index() * 17) % 9 + 1,
                &config,
            ))
        });
    });

    group.bench_function("path_corner_to_corner", |b| {
        b.iter(|| black_box(graph.path(source, target)));
    });

    group.bench_function("bfs_grid", |b| {
        b.iter(|| black_box(graph.traverse(source, TraversalOrder::BreadthFirst, &config, |_, _| {})));
    });

    group.bench_function("dfs_grid", |b| {
        b.iter(|| black_box(graph.traverse(source, TraversalOrder::DepthFirst, &config, |_, _| {})));
    });

    group.finish();
}

criterion_group!(benches, bench_shortest_path);
criterion_main!(benches);
