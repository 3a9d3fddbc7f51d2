use chrono::Utc;

/// Source of the current instant.
///
/// Injectable so the countdown logic can be driven with explicit times in
/// tests instead of always reading the live clock.
pub trait Clock: Send {
    /// Current time as epoch milliseconds.
    fn now_ms(&self) -> i64;
}

/// Clock backed by the host system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}
