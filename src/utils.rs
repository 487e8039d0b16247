use std::time::{Duration, Instant};

/// Seconds elapsed since `start`, used for the profiling lines in the log.
pub fn elapsed_secs(start: Instant) -> f64 {
    let duration: Duration = start.elapsed();
    let seconds = duration.as_secs();
    let subsec_nanos = duration.subsec_nanos();

    seconds as f64 + subsec_nanos as f64 / 1_000_000_000.0
}
