//! Wall-clock source and timestamp rendering

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Display format for submission timestamps, local time without a zone
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local date and time
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Calendar day of `now`, time of day dropped
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system's local wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }

    /// Parse an instant in [`TIMESTAMP_FORMAT`]
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Render `YYYY-MM-DD HH:MM:SS`, zero padded
pub fn format_timestamp(now: NaiveDateTime) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}
