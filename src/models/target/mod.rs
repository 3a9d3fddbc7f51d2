use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// The configured point in time the countdown runs toward.
///
/// Built once at startup and never mutated afterwards. Parsing fails soft:
/// an unparseable timestamp keeps the raw string for display and pins the
/// instant to the epoch, so the countdown simply shows as already arrived
/// instead of crashing the display.
#[derive(Debug, Clone)]
pub struct CountdownTarget {
    raw: String,
    parsed: Option<DateTime<FixedOffset>>,
    destination: Option<String>,
}

impl CountdownTarget {
    /// Parse a configured timestamp, with an optional named IANA zone for
    /// values that carry no offset of their own.
    pub fn parse(raw: &str, timezone: Option<&str>, destination: Option<String>) -> Self {
        let parsed = parse_instant(raw, timezone);
        if parsed.is_none() {
            log::error!("Could not parse target timestamp '{raw}'; showing the raw value");
        }

        Self {
            raw: raw.to_string(),
            parsed,
            destination,
        }
    }

    /// Epoch milliseconds of the target. Falls back to the epoch itself when
    /// the configured value never parsed.
    pub fn instant_ms(&self) -> i64 {
        self.parsed.map(|dt| dt.timestamp_millis()).unwrap_or(0)
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed.is_some()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Optional destination label shown alongside the target date.
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// Human-readable rendering of the target in its own offset, or the raw
    /// configured string when it never parsed.
    pub fn human_readable(&self) -> String {
        match self.parsed {
            Some(dt) => dt.format("%A, %-d %B %Y at %H:%M %:z").to_string(),
            None => self.raw.clone(),
        }
    }
}

fn parse_instant(raw: &str, timezone: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt);
    }

    // Offset-less timestamps can still resolve through a configured named zone.
    let tz: Tz = timezone?.parse().ok()?;
    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
}
