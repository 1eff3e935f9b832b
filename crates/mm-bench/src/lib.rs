//! `mm-bench` - Times naive against optimized matrix multiplication.
//!
//! For each size in [`BENCHMARK_SIZES`] one random pair of matrices is
//! generated and multiplied by each algorithm in turn; the elapsed wall-clock
//! times are printed as they become available.

pub mod driver;
pub mod timing;

pub use driver::{
    bench_size, run_benchmark, write_header, write_report, SizeReport, BENCHMARK_SIZES,
};
pub use timing::{timed, Timed};
