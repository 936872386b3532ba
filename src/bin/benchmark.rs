//! Step-throughput benchmark comparing the serial and row-parallel passes

use canvas_life::{Grid, StepMode};
use std::time::Instant;

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::new(size, size).expect("benchmark sizes are positive");
    grid.randomize(0.3, &mut rand::rng());

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::new(size, size).expect("benchmark sizes are positive");
    grid.randomize(0.3, &mut rand::rng());

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Step Throughput Benchmark ===\n");

    let sizes = [100, 200, 500, 1000, 2000];
    let iterations = 20;

    println!(
        "{:>12} {:>14} {:>14} {:>10}",
        "Size",
        StepMode::Serial.name(),
        StepMode::ParallelRows.name(),
        "Speedup"
    );
    println!("{:-<54}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);

        println!(
            "{:>12} {:>14.2} {:>14.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    let parallel_ms = benchmark_parallel(2000, iterations);
    println!(
        "parallel-rows: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
