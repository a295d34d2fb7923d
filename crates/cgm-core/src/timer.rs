// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::time::Instant;

/// Monotonic stopwatch.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a timer at the current instant.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restarts the timer.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Seconds since construction or the last reset; restarts when `reset` is set.
    pub fn elapsed_secs(&mut self, reset: bool) -> f64 {
        let now = Instant::now();
        let secs = now.duration_since(self.start).as_secs_f64();
        if reset {
            self.start = now;
        }
        secs
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
