//! Time source for record timestamps.

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Source of "now" for `lastModified` stamps. Swappable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Format an instant as RFC 3339 UTC with millisecond precision,
/// e.g. `2024-05-01T12:30:00.250Z`.
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    at.to_offset(UtcOffset::UTC)
        .format(&format)
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "timestamp formatting failed; using unix seconds");
            at.unix_timestamp().to_string()
        })
}

#[cfg(test)]
#[path = "clock_test.rs"]
mod tests;
