use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ize_engine::{cluster, facet_greedy};
use test_fixtures::synthetic_catalog;

const CATEGORIES: [&str; 6] = ["Chairs", "Tables", "Sofas", "Beds", "Desks", "Lamps"];
const COLORS: [&str; 5] = ["Red", "Blue", "Green", "White", "Black"];

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");
    for n in [25usize, 100] {
        let hits = synthetic_catalog(n, &CATEGORIES, &COLORS);
        group.bench_with_input(BenchmarkId::new("cluster", n), &hits, |b, hits| {
            b.iter(|| cluster(black_box(hits)))
        });
        group.bench_with_input(BenchmarkId::new("facet_greedy", n), &hits, |b, hits| {
            b.iter(|| facet_greedy(black_box(hits), None))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grouping);
criterion_main!(benches);
