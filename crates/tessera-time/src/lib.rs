// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tessera time: a monotonic, high-resolution nanosecond timer.
//!
//! There is no process-wide clock state. Each [`Timer`] captures its own
//! origin when created, so independent timers can coexist and tests can make
//! fresh ones. Reads after construction take `&self` and never block.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

const NANOS_PER_MILLI: f64 = 1_000_000.0;
const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// OS clock backing [`Timer`] on the current target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockBackend {
    /// `mach_absolute_time` (macOS, iOS).
    MachAbsolute,
    /// `QueryPerformanceCounter` (Windows).
    PerformanceCounter,
    /// `clock_gettime(CLOCK_MONOTONIC)` (everything else).
    Monotonic,
}

impl ClockBackend {
    /// Backend selected for the compilation target.
    pub const fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::MachAbsolute
        } else if cfg!(target_os = "windows") {
            Self::PerformanceCounter
        } else {
            Self::Monotonic
        }
    }
}

impl fmt::Display for ClockBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MachAbsolute => "mach_absolute_time",
            Self::PerformanceCounter => "QueryPerformanceCounter",
            Self::Monotonic => "CLOCK_MONOTONIC",
        })
    }
}

/// Monotonic timer reporting nanoseconds since its creation.
///
/// ```
/// use tessera_time::Timer;
/// let timer = Timer::new();
/// let a = timer.now_ns();
/// let b = timer.now_ns();
/// assert!(b >= a);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    origin: Instant,
    last_lap_ns: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Starts a timer at the current instant.
    pub fn new() -> Self {
        debug!(backend = %ClockBackend::current(), "timer started");
        Self {
            origin: Instant::now(),
            last_lap_ns: 0,
        }
    }

    /// Clock in use.
    pub const fn backend(&self) -> ClockBackend {
        ClockBackend::current()
    }

    /// Nanoseconds since the timer was created. Never decreases.
    ///
    /// Saturates at `u64::MAX` (after roughly 584 years).
    pub fn now_ns(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    /// Time since the timer was created.
    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Nanoseconds since the previous lap (or since creation, for the first).
    pub fn lap_ns(&mut self) -> u64 {
        let now = self.now_ns();
        let lap = now - self.last_lap_ns;
        self.last_lap_ns = now;
        lap
    }
}

/// Nanoseconds to milliseconds.
pub fn ns_to_ms(ns: u64) -> f64 {
    ns as f64 / NANOS_PER_MILLI
}

/// Nanoseconds to seconds.
pub fn ns_to_secs(ns: u64) -> f64 {
    ns as f64 / NANOS_PER_SEC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(ns_to_ms(2_500_000), 2.5);
        assert_eq!(ns_to_secs(1_500_000_000), 1.5);
        assert_eq!(ns_to_secs(0), 0.0);
    }

    #[test]
    fn backend_matches_target() {
        #[cfg(target_os = "linux")]
        assert_eq!(ClockBackend::current(), ClockBackend::Monotonic);
        #[cfg(target_os = "macos")]
        assert_eq!(ClockBackend::current(), ClockBackend::MachAbsolute);
        #[cfg(target_os = "windows")]
        assert_eq!(ClockBackend::current(), ClockBackend::PerformanceCounter);
        assert_eq!(ClockBackend::Monotonic.to_string(), "CLOCK_MONOTONIC");
    }
}
