use chromagraph::{AlgorithmConfig, ColoringHeuristic, Graph, Heuristic};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(vertices: usize, edges: usize, seed: u64) -> Graph<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::undirected();
    let ids: Vec<_> = (0..vertices).map(|_| graph.add_vertex(None)).collect();
    for _ in 0..edges {
        let x = ids[rng.gen_range(0..vertices)];
        let y = ids[rng.gen_range(0..vertices)];
        let _ = graph.add_edge(x, y);
    }
    graph
}

fn bench_coloring(c: &mut Criterion) {
    let mut group = c.benchmark_group("coloring");
    let graph = random_graph(200, 800, 42);
    let config = AlgorithmConfig::new().with_seed(42);

    for heuristic in Heuristic::ALL {
        group.bench_function(heuristic.name(), |b| {
            b.iter(|| black_box(heuristic.color_with(&graph, &config)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_coloring);
criterion_main!(benches);
