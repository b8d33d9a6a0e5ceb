use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone};

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const CLOCK_FORMAT: &str = "%H:%M";
    pub const FULL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Offset-less layouts the backend has been seen to emit.
    pub const NAIVE_FORMATS: &'static [&'static str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
}

// Time Helper functions

/// RFC 3339 timestamps are converted to local time.
/// Naive timestamps are read as local wall-clock time, the same way a browser `Date` reads them.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    TimeUtils::NAIVE_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(raw, fmt)
            .ok()
            .and_then(resolve_wall_clock)
    })
}

/// A wall-clock time inside a spring-forward gap does not exist locally; it is moved past the gap.
fn resolve_wall_clock(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| Local.from_local_datetime(&(naive + TimeDelta::hours(1))).earliest())
}

/// Axis label, e.g. `04:00`. Falls back to the raw text.
pub fn format_clock_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format(TimeUtils::CLOCK_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Tooltip heading, e.g. `2024-11-06 04:00:00`. Falls back to the raw text.
pub fn format_full_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format(TimeUtils::FULL_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
