use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

/// Result of a measured call together with its wall-clock duration
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Discard the timing and keep the value
    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }
}

impl<T, E> Timed<Result<T, E>> {
    /// Move the timing inside a successful result
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let elapsed = self.elapsed;
        self.value.map(|value| Timed { value, elapsed })
    }
}

/// Seconds with six decimal places, e.g. "0.012345s"
pub fn format_run_time(elapsed: Duration) -> String {
    format!("{:.6}s", elapsed.as_secs_f64())
}

/// Monotonic timer that reports its elapsed time exactly once
///
/// Reporting happens on [`ScopedTimer::finish`] or, failing that, when the
/// guard is dropped. A drop during unwinding is reported at `warn` level.
#[derive(Debug)]
pub struct ScopedTimer {
    label: String,
    start: Instant,
    reported: bool,
}

impl ScopedTimer {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
            reported: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer, report, and return the elapsed time
    pub fn finish(mut self) -> Duration {
        self.report()
    }

    fn report(&mut self) -> Duration {
        let elapsed = self.elapsed();
        self.reported = true;

        if thread::panicking() {
            warn!(
                label = %self.label,
                elapsed_secs = elapsed.as_secs_f64(),
                "{} run time: {} (panicked)",
                self.label,
                format_run_time(elapsed)
            );
        } else {
            info!(
                label = %self.label,
                elapsed_secs = elapsed.as_secs_f64(),
                "{} run time: {}",
                self.label,
                format_run_time(elapsed)
            );
        }

        elapsed
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !self.reported {
            self.report();
        }
    }
}

/// Run `f`, report its wall-clock duration, and return both
///
/// The value, including any `Err`, is passed through untouched. Panics
/// propagate after the duration has been reported.
pub fn measure<T>(label: &str, f: impl FnOnce() -> T) -> Timed<T> {
    let timer = ScopedTimer::start(label);
    let value = f();
    let elapsed = timer.finish();
    Timed { value, elapsed }
}

/// Run `f` and report its wall-clock duration, returning only its value
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    measure(label, f).into_inner()
}
