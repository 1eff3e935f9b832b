use std::io;

use anyhow::Result;
use mm_bench::{run_benchmark, BENCHMARK_SIZES};
use mm_matrix::{Multiplier, NaiveMultiplier, OptimizedMultiplier};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    tracing::info!(
        sizes = ?BENCHMARK_SIZES,
        threads = rayon::current_num_threads(),
        "starting matrix multiplication benchmark"
    );

    let optimized = OptimizedMultiplier::new();
    let naive = NaiveMultiplier::new();
    // Optimized runs first so it never benefits from running second.
    let multipliers: [&dyn Multiplier; 2] = [&optimized, &naive];

    let mut rng = rand::thread_rng();
    let stdout = io::stdout();
    run_benchmark(&BENCHMARK_SIZES, &mut rng, &multipliers, &mut stdout.lock())?;

    Ok(())
}
