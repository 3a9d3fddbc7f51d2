use crate::models::breakdown::TimeBreakdown;
use crate::models::target::CountdownTarget;
use crate::services::clock::Clock;

/// Owns the configured target and the latest breakdown computed from it.
///
/// Single writer (whoever calls `refresh`), single reader (the display);
/// only the most recent value is retained.
pub struct CountdownService<C: Clock> {
    target: CountdownTarget,
    clock: C,
    latest: TimeBreakdown,
}

impl<C: Clock> CountdownService<C> {
    pub fn new(target: CountdownTarget, clock: C) -> Self {
        let latest = TimeBreakdown::compute(target.instant_ms(), clock.now_ms());
        Self {
            target,
            clock,
            latest,
        }
    }

    pub fn target(&self) -> &CountdownTarget {
        &self.target
    }

    /// Recompute from the live clock and return the fresh breakdown.
    pub fn refresh(&mut self) -> TimeBreakdown {
        let now_ms = self.clock.now_ms();
        self.refresh_at(now_ms)
    }

    /// Recompute from an explicit instant. This keeps the decomposition
    /// testable without any timer in the picture.
    pub fn refresh_at(&mut self, now_ms: i64) -> TimeBreakdown {
        self.latest = TimeBreakdown::compute(self.target.instant_ms(), now_ms);
        self.latest
    }

    pub fn latest(&self) -> TimeBreakdown {
        self.latest
    }

    pub fn is_arrived(&self) -> bool {
        self.latest.is_arrived()
    }
}
