use instant::Instant;
use std::time::Duration;

/// Collapses a burst of notifications into one recompute signal.
///
/// `notify` records each raw notification; `poll` fires exactly once, the
/// first time it is called at least `quiet` after the latest notification.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet: Duration,
    last: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, last: None }
    }

    #[inline]
    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.last.is_some()
    }

    pub fn notify(&mut self, at: Instant) {
        self.last = Some(at);
    }

    /// Time still to wait at `at` before `poll` can fire, or `None` when
    /// nothing is pending.
    pub fn remaining(&self, at: Instant) -> Option<Duration> {
        let last = self.last?;
        let elapsed = if at >= last {
            at.duration_since(last)
        } else {
            Duration::ZERO
        };
        Some(self.quiet.saturating_sub(elapsed))
    }

    pub fn poll(&mut self, at: Instant) -> bool {
        match self.last {
            Some(last) if at >= last && at.duration_since(last) >= self.quiet => {
                self.last = None;
                true
            }
            _ => false,
        }
    }
}
