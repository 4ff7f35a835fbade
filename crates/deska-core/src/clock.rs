//! Time source abstraction.

use chrono::{DateTime, FixedOffset, Local};

/// Supplies the current, timezone-aware instant.
///
/// Formatting is the engine's job; a clock only reports the instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Formats the time as spoken: `"09:05 AM"`.
pub fn format_time(instant: &DateTime<FixedOffset>) -> String {
    instant.format("%I:%M %p").to_string()
}

/// Formats the date as spoken: `"Monday, October 19, 2026"`.
pub fn format_date(instant: &DateTime<FixedOffset>) -> String {
    instant.format("%A, %B %-d, %Y").to_string()
}
