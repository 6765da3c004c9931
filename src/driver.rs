//! Fixed-rate frame scheduling.
//!
//! The loop that owns the clock requests one frame per iteration and sleeps
//! out whatever is left of it. `cancel` invalidates every outstanding request
//! at once, so a restart can discard the pending frame and start a fresh one
//! without a stale frame running against the reset state.

use std::time::{Duration, Instant};

/// A scheduled frame. Only meaningful to the clock that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRequest {
    generation: u64,
    due: Instant,
}

impl FrameRequest {
    pub fn due(&self) -> Instant {
        self.due
    }
}

#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    generation: u64,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule the next frame one interval after `now`.
    pub fn request(&mut self, now: Instant) -> FrameRequest {
        FrameRequest {
            generation: self.generation,
            due: now + self.interval,
        }
    }

    /// Invalidate every request issued so far.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_live(&self, request: &FrameRequest) -> bool {
        request.generation == self.generation
    }

    /// Time left before `request` is due, or `None` if it was cancelled.
    /// An overdue request yields `Duration::ZERO` (no catch-up, no drop).
    pub fn remaining(&self, request: &FrameRequest, now: Instant) -> Option<Duration> {
        if !self.is_live(request) {
            return None;
        }
        Some(request.due.saturating_duration_since(now))
    }
}
