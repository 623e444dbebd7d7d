use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand::rngs::StdRng;

use anticlique_color::generators::{max_anticlique_graph, random_graph};

/// G(n, p) graphs, p in {0.25, 0.5, 0.75}, a fresh graph per iteration
fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_3_coloring/random");
    let mut rng = StdRng::seed_from_u64(0);
    for &n in &[5usize, 10, 15, 20, 30, 40] {
        for &quarter in &[1u32, 2, 3] {
            let p = f64::from(quarter) / 4.;
            group.bench_with_input(BenchmarkId::new(format!("p={}", p), n), &n, |b, &n| {
                b.iter_batched(
                    || random_graph(n, p, &mut rng),
                    |graph| black_box(graph.check_3_coloring()),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

/// graphs with the largest number of maximal anticliques
fn bench_max_anticlique_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_3_coloring/max_anticliques");
    group.sample_size(10);
    for &n in &[6usize, 9, 12, 15, 18, 21, 24] {
        let graph = max_anticlique_graph(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| black_box(graph.check_3_coloring()))
        });
    }
    for &n in &[6usize, 9, 12, 15] {
        let graph = max_anticlique_graph(n);
        group.bench_with_input(BenchmarkId::new("list_all", n), &graph, |b, graph| {
            b.iter(|| black_box(graph.list_all_max_anticliques().len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random_graphs, bench_max_anticlique_graphs);
criterion_main!(benches);
