use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_search::algorithm::astar::AStar;
use graph_search::graph::generators::{generate_random_graph, generate_random_grid, generate_random_tree};
use graph_search::{BreadthFirst, DepthFirst, Dijkstra, ShortestPathAlgorithm, ShortestPathResult, TreeTraversal};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    let mut rng = StdRng::seed_from_u64(17);

    for &size in &[1_000usize, 10_000, 100_000] {
        let graph = generate_random_graph(&mut rng, size, 4.0, 100).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| {
                let result: ShortestPathResult<u64> = Dijkstra::new()
                    .compute_shortest_paths(graph, black_box(0))
                    .unwrap();
                result
            })
        });
    }

    group.finish();
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    let mut rng = StdRng::seed_from_u64(23);
    let tree = generate_random_tree(&mut rng, 100_000).unwrap();

    group.bench_function("dfs", |b| {
        b.iter(|| DepthFirst::new().traverse(black_box(&tree)).unwrap())
    });
    group.bench_function("bfs", |b| {
        b.iter(|| BreadthFirst::new().traverse(black_box(&tree)).unwrap())
    });

    group.finish();
}

fn bench_astar(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(31);
    let mut grid = generate_random_grid(&mut rng, 200, 200, 0.25).unwrap();
    grid.unblock((0, 0)).unwrap();
    grid.unblock((199, 199)).unwrap();

    c.bench_function("astar_200x200", |b| {
        b.iter(|| AStar::new().find_path(black_box(&grid), (0, 0), (199, 199)).unwrap())
    });
}

criterion_group!(benches, bench_dijkstra, bench_traversals, bench_astar);
criterion_main!(benches);
