//! Time utilities: step timing for the progress output.

use std::time::{Duration, Instant};

/// Measures one pipeline step.
pub struct StepTimer {
    started: Instant,
}

impl StepTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed seconds with two decimals, e.g. "0.03".
    pub fn seconds(&self) -> String {
        format!("{:.2}", self.elapsed().as_secs_f64())
    }
}
