//! Step throughput benchmark comparing serial and parallel strategies

use std::time::Instant;

use life_universe::{Seed, StepStrategy, Universe};

fn benchmark(size: usize, strategy: StepStrategy, iterations: u32) -> f64 {
    let Ok(mut universe) = Universe::with_seed(size, size, Seed::Random(42)) else {
        return f64::NAN;
    };

    let start = Instant::now();
    for _ in 0..iterations {
        universe.step_with(strategy);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [64, 256, 1000, 2000, 5000, 10000];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10} {:>14}", "Size", "Serial", "Parallel", "Speedup", "Cells/sec");
    println!("{:-<64}", "");

    for size in sizes {
        let serial_ms = benchmark(size, StepStrategy::Serial, iterations);
        let parallel_ms = benchmark(size, StepStrategy::Parallel, iterations);
        let fastest = serial_ms.min(parallel_ms);
        let cells_per_sec = (size * size) as f64 / (fastest / 1000.0);

        println!(
            "{:>12} {:>12.3} {:>12.3} {:>9.1}x {:>13.1}M",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            cells_per_sec / 1_000_000.0
        );
    }

    println!("\n=== Memory Usage (10000x10000) ===\n");
    let bytes = 10000 * 10000 * 2; // current + scratch, 1 byte per cell
    println!("Universe: {:>12} bytes ({:.1} MB)", bytes, bytes as f64 / 1_000_000.0);
}
