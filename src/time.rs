use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Source of "now", swappable so rendered output is deterministic in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
struct FixedClock(DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}

#[cfg(test)]
pub fn fixed_clock(timestamp: i64) -> Arc<dyn Clock> {
    let at = DateTime::from_timestamp(timestamp, 0).unwrap_or_default();
    Arc::new(FixedClock(at))
}

/// Describes how long ago `timestamp` (unix seconds) was, e.g. "3 hours ago".
///
/// Thresholds follow the usual humanized-duration rounding: 45 seconds
/// becomes a minute, 45 minutes an hour, 22 hours a day, 26 days a month
/// and 320 days a year.
pub fn format_relative(timestamp: u64, now: DateTime<Utc>) -> String {
    let now_ts = now.timestamp();
    let ts = i64::try_from(timestamp).unwrap_or(i64::MAX);
    if ts > now_ts {
        return "in the future".to_string();
    }

    let secs = now_ts - ts;
    let mins = (secs as f64 / 60.0).round() as i64;
    let hours = (secs as f64 / 3600.0).round() as i64;
    let days = (secs as f64 / 86400.0).round() as i64;
    let months = (secs as f64 / (86400.0 * 30.4375)).round() as i64;
    let years = (secs as f64 / (86400.0 * 365.25)).round() as i64;

    match secs {
        s if s < 45 => "a few seconds ago".to_string(),
        s if s < 90 => "a minute ago".to_string(),
        s if s < 45 * 60 => format!("{mins} minutes ago"),
        s if s < 90 * 60 => "an hour ago".to_string(),
        s if s < 22 * 3600 => format!("{hours} hours ago"),
        s if s < 36 * 3600 => "a day ago".to_string(),
        s if s < 26 * 86400 => format!("{days} days ago"),
        s if s < 45 * 86400 => "a month ago".to_string(),
        s if s < 320 * 86400 => format!("{} months ago", months.max(2)),
        s if s < 548 * 86400 => "a year ago".to_string(),
        _ => format!("{} years ago", years.max(2)),
    }
}
