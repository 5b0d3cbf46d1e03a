//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;

use cellular_automata::domain::{Algorithm, BrianGrid, RuleTable};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark_brain(algorithm: Algorithm, size: usize, iterations: u32) -> anyhow::Result<f64> {
    let mut rng = StdRng::seed_from_u64(0xB2A1);
    let mut grid = BrianGrid::random_with_rng(size, size, 0.2, &mut rng)?;

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.step_brain(&grid);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn benchmark_history(algorithm: Algorithm, rows: usize, iterations: u32) -> anyhow::Result<f64> {
    let table = RuleTable::from_rule(110);

    let start = Instant::now();
    for _ in 0..iterations {
        algorithm.build_history(table, rows, rows * 2)?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    println!("=== Brian's Brain: ms per generation ===\n");

    let sizes = [60, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_brain(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark_brain(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Rule 110 history: ms per build ===\n");

    println!("{:>10} {:>12} {:>12} {:>10}", "Rows", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for rows in [150, 500, 1000, 2000] {
        let serial_ms = benchmark_history(Algorithm::Serial, rows, 5)?;
        let parallel_ms = benchmark_history(Algorithm::Parallel, rows, 5)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", rows, rows * 2),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let cells = 2000 * 2000;
    let parallel_ms = benchmark_brain(Algorithm::Parallel, 2000, iterations)?;
    println!(
        "\nThroughput at 2000x2000 (parallel): {:.1}M cells/sec",
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );

    Ok(())
}
