//! Throughput benchmark comparing the generation strategies

use life_canvas::{Algorithm, Cell, Grid};
use rand::Rng;
use std::time::Instant;

/// Random soup with ~30% live cells
fn random_grid(size: usize) -> Grid {
    let mut rng = rand::rng();
    Grid::from_fn(size, size, |_, _| Cell::from(rng.random_bool(0.3)))
}

/// Average milliseconds per generation
fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.evolve(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Generation Benchmark ===\n");

    let algorithms = Algorithm::all();
    for algorithm in &algorithms {
        println!("{:>10}: {}", algorithm.name(), algorithm.description());
    }
    println!();

    let sizes = [100, 400, 1000, 2000];
    let iterations = 20;

    print!("{:>10}", "Size");
    for algorithm in &algorithms {
        print!(" {:>12}", algorithm.name());
    }
    println!(" {:>10}", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let timings: Vec<f64> = algorithms
            .iter()
            .map(|&algorithm| benchmark(algorithm, size, iterations))
            .collect();

        print!("{:>10}", format!("{}x{}", size, size));
        for ms in &timings {
            print!(" {:>12.2}", ms);
        }
        // Slowest over fastest
        let slowest = timings.iter().cloned().fold(f64::MIN, f64::max);
        let fastest = timings.iter().cloned().fold(f64::MAX, f64::min);
        println!(" {:>9.1}x", slowest / fastest);
    }

    let size = 2000;
    let cells = size * size;
    let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);
    println!(
        "\nParallel at {size}x{size}: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
