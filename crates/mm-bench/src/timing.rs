use std::time::{Duration, Instant};

/// The output of an operation together with how long it took.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub output: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in seconds.
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs `op` once and measures its wall-clock duration on the monotonic clock.
///
/// Only the call itself is timed. The output is handed back rather than
/// dropped inside the measured window, so freeing a large result does not
/// count against the operation.
pub fn timed<T, E>(op: impl FnOnce() -> Result<T, E>) -> Result<Timed<T>, E> {
    let start = Instant::now();
    let output = op()?;
    let elapsed = start.elapsed();
    Ok(Timed { output, elapsed })
}
