use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use mm_matrix::{random_square_matrix, Multiplier};
use rand::Rng;

use crate::timing::timed;

/// Matrix sizes benchmarked by the binary, in ascending order.
pub const BENCHMARK_SIZES: [usize; 4] = [512, 1024, 2048, 4096];

/// Timings for one matrix size, one entry per multiplier in run order.
#[derive(Debug, Clone)]
pub struct SizeReport {
    pub n: usize,
    pub timings: Vec<(String, Duration)>,
}

impl SizeReport {
    /// Elapsed time for the multiplier called `name`, if it ran.
    pub fn elapsed(&self, name: &str) -> Option<Duration> {
        self.timings
            .iter()
            .find(|(label, _)| label == name)
            .map(|(_, d)| *d)
    }
}

/// Capitalizes a multiplier name for display ("naive" -> "Naive").
fn label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Writes the report header.
pub fn write_header<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Time to multiply two N by N matrices")?;
    writeln!(out)
}

/// Writes the block for one size.
pub fn write_report<W: Write>(out: &mut W, report: &SizeReport) -> std::io::Result<()> {
    writeln!(out, "N = {}", report.n)?;
    for (name, elapsed) in &report.timings {
        writeln!(out, "- {}: {:.3} s", label(name), elapsed.as_secs_f64())?;
    }
    writeln!(out)
}

/// Benchmarks one size: generates A and B once, then times every multiplier
/// on that same pair in the order given.
pub fn bench_size<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
    multipliers: &[&dyn Multiplier],
) -> Result<SizeReport> {
    let a = random_square_matrix(n, rng).with_context(|| format!("generating A for N = {n}"))?;
    let b = random_square_matrix(n, rng).with_context(|| format!("generating B for N = {n}"))?;
    tracing::debug!(n, "generated input matrices");

    let mut timings = Vec::with_capacity(multipliers.len());
    for mul in multipliers {
        let t = timed(|| mul.multiply(&a, &b))
            .with_context(|| format!("{} multiplication failed for N = {n}", mul.name()))?;
        tracing::debug!(n, algorithm = mul.name(), secs = t.secs(), "multiplied");
        timings.push((mul.name().to_string(), t.elapsed));
    }

    Ok(SizeReport { n, timings })
}

/// Runs the benchmark over `sizes`, printing each size's block to `out` as
/// soon as it completes.
///
/// Stops at the first failure; blocks already written for earlier sizes are
/// left in place.
pub fn run_benchmark<R: Rng + ?Sized, W: Write>(
    sizes: &[usize],
    rng: &mut R,
    multipliers: &[&dyn Multiplier],
    out: &mut W,
) -> Result<Vec<SizeReport>> {
    write_header(out).context("writing report header")?;

    let mut reports = Vec::with_capacity(sizes.len());
    for &n in sizes {
        tracing::info!(n, "benchmarking");
        let report = bench_size(n, rng, multipliers)?;
        write_report(out, &report).context("writing report")?;
        out.flush().context("flushing report")?;
        reports.push(report);
    }
    Ok(reports)
}
