//! Performance benchmark comparing the four update strategies

use std::time::Instant;

use life_strategies::domain::worker_pool::DEFAULT_WORKERS;
use life_strategies::{Grid, Strategy};
use rand::{SeedableRng, rngs::StdRng};

/// Cell-parallel spawns one task per cell; past this size it dominates the run
const CELL_PARALLEL_LIMIT: usize = 1000;

fn random_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size);
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), 0.3);
    grid
}

/// Average milliseconds per generation
fn benchmark(strategy: Strategy, current: &Grid, iterations: u32) -> f64 {
    let (rows, cols) = current.dimensions();
    let mut next: Grid = Grid::new(rows, cols);

    let start = Instant::now();
    for _ in 0..iterations {
        strategy.compute_next_generation(current, &mut next, DEFAULT_WORKERS);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();

    println!("=== Game of Life Strategy Benchmark ===\n");

    let sizes = [100, 500, 1000, 2000, 3000];
    let iterations = 5;

    print!("{:>10}", "Size");
    for strategy in Strategy::all() {
        print!(" {:>14}", strategy.name());
    }
    println!(" {:>10}", "Speedup");
    println!("{:-<82}", "");

    for size in sizes {
        let current = random_grid(size);
        let mut sequential_ms = 0.0;
        let mut fastest = f64::MAX;

        print!("{:>10}", format!("{}x{}", size, size));
        for strategy in Strategy::all() {
            if strategy == Strategy::CellParallel && size > CELL_PARALLEL_LIMIT {
                print!(" {:>14}", "-");
                continue;
            }
            let ms = benchmark(strategy, &current, iterations);
            if strategy == Strategy::Sequential {
                sequential_ms = ms;
            }
            fastest = fastest.min(ms);
            print!(" {:>14.2}", ms);
        }
        println!(" {:>9.1}x", sequential_ms / fastest);
    }

    println!("\n=== Worker count at 3000x3000 ===\n");

    let current = random_grid(3000);
    let (rows, cols) = current.dimensions();
    for workers in [1, 2, 4, 8, 16] {
        let mut next: Grid = Grid::new(rows, cols);
        let start = Instant::now();
        for _ in 0..iterations {
            Strategy::WorkerPool.compute_next_generation(&current, &mut next, workers);
        }
        let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
        println!(
            "{:>3} workers: {:>8.2} ms/gen, {:.1}M cells/sec",
            workers,
            ms,
            (rows * cols) as f64 / (ms / 1000.0) / 1_000_000.0
        );
    }
}
