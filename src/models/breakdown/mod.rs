use serde::{Deserialize, Serialize};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;

/// Decomposition of the time remaining until a target instant.
///
/// Produced fresh on every tick and handed straight to the display; no
/// history is retained. All fields are non-negative, with `hours < 24`,
/// `minutes < 60` and `seconds < 60`, while `days` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// The exact clamped delta in milliseconds. Satisfies
    /// `days*86_400_000 + hours*3_600_000 + minutes*60_000 + seconds*1_000
    /// <= total_remaining_ms < that + 1_000`.
    pub total_remaining_ms: i64,
}

impl TimeBreakdown {
    /// Decompose the time remaining between two epoch-millisecond instants.
    ///
    /// Total over all inputs: a past-due or equal target yields an all-zero
    /// breakdown rather than negative values, and extreme instants cannot
    /// overflow the subtraction.
    pub fn compute(target_ms: i64, now_ms: i64) -> Self {
        let total = target_ms.saturating_sub(now_ms).max(0);

        let mut remainder = total;
        let days = remainder / MS_PER_DAY;
        remainder -= days * MS_PER_DAY;
        let hours = remainder / MS_PER_HOUR;
        remainder -= hours * MS_PER_HOUR;
        let minutes = remainder / MS_PER_MINUTE;
        remainder -= minutes * MS_PER_MINUTE;
        let seconds = remainder / MS_PER_SECOND;

        Self {
            days,
            hours,
            minutes,
            seconds,
            total_remaining_ms: total,
        }
    }

    /// True once the target instant has been reached or passed.
    pub fn is_arrived(&self) -> bool {
        self.total_remaining_ms == 0
    }

    /// Whole hours remaining, across day boundaries.
    pub fn total_hours(&self) -> i64 {
        self.total_remaining_ms / MS_PER_HOUR
    }

    /// Whole minutes remaining, across day boundaries.
    pub fn total_minutes(&self) -> i64 {
        self.total_remaining_ms / MS_PER_MINUTE
    }
}
