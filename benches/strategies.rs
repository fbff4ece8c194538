//! Criterion benchmarks for the update strategies.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use life_strategies::{Grid, Strategy};
use rand::{SeedableRng, rngs::StdRng};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");
    group.sample_size(10);

    for size in [64, 256, 512] {
        let mut current: Grid = Grid::new(size, size);
        current.randomize(&mut StdRng::seed_from_u64(42), 0.3);
        let mut next: Grid = Grid::new(size, size);

        for strategy in Strategy::all() {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), format!("{}x{}", size, size)),
                &size,
                |b, _| {
                    b.iter(|| strategy.compute_next_generation(black_box(&current), &mut next, 8));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
