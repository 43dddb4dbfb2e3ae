use std::time::{Duration, Instant};
use tracing::trace;

/// Shortest gap between two frames; a zero interval would spin the host.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Decides when the host should request the next frame.
///
/// The interval lives here rather than in the painting code. If the host
/// wakes late, the next deadline is taken from the wake-up time, so missed
/// frames are dropped instead of replayed.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    next_due: Instant,
}

impl FrameScheduler {
    /// The first frame is due immediately. Intervals below [`MIN_INTERVAL`]
    /// are raised to it.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            next_due: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn deadline(&self) -> Instant {
        self.next_due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Returns `true` and arms the next deadline when a frame is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.next_due = now + self.interval;
        trace!(interval_ms = self.interval.as_millis() as u64, "next frame armed");
        true
    }
}
