//! Fixed-rate step gate
//!
//! Admits at most one step per frame interval. If the caller comes back
//! early, the thread sleeps for the remainder. If it comes back late, the
//! step is admitted immediately and nothing is caught up. The physics never
//! sees the wall clock, only whether it gets called.

use std::thread;
use std::time::{Duration, Instant};

#[cfg(feature = "viewer")]
use bevy::prelude::Resource;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "viewer", derive(Resource))]
pub struct FramePacer {
    interval: Duration,
    last: Option<Instant>,
}

impl FramePacer {
    /// Gate at `rate_hz` steps per second (clamped to at least 1)
    pub fn new(rate_hz: u32) -> Self {
        Self::with_interval(Duration::from_secs(1) / rate_hz.max(1))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block until one interval has passed since the previous admitted step
    ///
    /// The first call never blocks. Returns how long the thread slept.
    pub fn wait(&mut self) -> Duration {
        let mut slept = Duration::ZERO;
        if let Some(last) = self.last {
            loop {
                let elapsed = last.elapsed();
                if elapsed >= self.interval {
                    break;
                }
                let remaining = self.interval - elapsed;
                thread::sleep(remaining);
                slept += remaining;
            }
        }
        self.last = Some(Instant::now());
        slept
    }
}
