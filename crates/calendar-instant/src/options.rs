//! Option structs for parsing, formatting, and week boundaries.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Which day begins a week for week boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// US convention (Sunday = day 0 of the week).
    #[default]
    Sunday,
    /// ISO 8601 convention (Monday = day 0 of the week).
    Monday,
}

impl WeekStart {
    /// How many days `weekday` is from the start of its week.
    pub fn days_from_start(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }
}

impl std::str::FromStr for WeekStart {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(CalendarError::UnrecognizedName(format!(
                "unknown week start '{other}' (expected sunday or monday)"
            ))),
        }
    }
}

/// Options for [`CalendarInstant::parse_with`](crate::CalendarInstant::parse_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail with [`CalendarError::InvalidDate`](crate::CalendarError::InvalidDate)
    /// on bad input. When `false`, bad input yields `Ok(None)`.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl ParseOptions {
    /// Non-strict parsing: failures become "no value".
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

/// Options for [`CalendarInstant::format`](crate::CalendarInstant::format).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Append `HH:mm` to the date.
    pub include_time: bool,
    /// With `include_time`, append seconds as well. Ignored on its own.
    pub include_seconds: bool,
}
