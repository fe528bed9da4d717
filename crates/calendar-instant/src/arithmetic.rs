//! Adding and subtracting calendar units.
//!
//! Sub-day units, days and weeks are fixed millisecond lengths (UTC has no DST).
//! Months and years move the civil fields and clamp the day-of-month to the
//! destination month's length, so `Jan 31 + 1 month` is the last day of
//! February rather than an overflow into March.
//!
//! Subtraction is always `add` with the amount negated. There is no separate
//! subtraction path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::days_in_month;
use crate::error::{CalendarError, Result};
use crate::instant::{
    civil_date, CalendarInstant, MAX_YEAR, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
    MILLIS_PER_SECOND, MIN_YEAR,
};

/// Granularity for [`CalendarInstant::add`] and [`CalendarInstant::sub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl TimeUnit {
    /// Fixed length in milliseconds, or `None` for the calendar units.
    pub fn fixed_millis(self) -> Option<i64> {
        match self {
            TimeUnit::Years | TimeUnit::Months => None,
            TimeUnit::Weeks => Some(7 * MILLIS_PER_DAY),
            TimeUnit::Days => Some(MILLIS_PER_DAY),
            TimeUnit::Hours => Some(MILLIS_PER_HOUR),
            TimeUnit::Minutes => Some(MILLIS_PER_MINUTE),
            TimeUnit::Seconds => Some(MILLIS_PER_SECOND),
            TimeUnit::Milliseconds => Some(1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Years => "years",
            TimeUnit::Months => "months",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Days => "days",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Milliseconds => "milliseconds",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = CalendarError;

    /// Accepts singular or plural names, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" | "years" => Ok(TimeUnit::Years),
            "month" | "months" => Ok(TimeUnit::Months),
            "week" | "weeks" => Ok(TimeUnit::Weeks),
            "day" | "days" => Ok(TimeUnit::Days),
            "hour" | "hours" => Ok(TimeUnit::Hours),
            "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "second" | "seconds" => Ok(TimeUnit::Seconds),
            "millisecond" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            other => Err(CalendarError::UnrecognizedName(format!(
                "unknown time unit '{other}'"
            ))),
        }
    }
}

// ── add / sub ───────────────────────────────────────────────────────────────

impl CalendarInstant {
    /// Advance by `amount` of `unit`.
    ///
    /// # Panics
    ///
    /// Panics if the result leaves the supported year range. Use
    /// [`checked_add`](Self::checked_add) to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_instant::{CalendarInstant, TimeUnit};
    ///
    /// let leap_day = CalendarInstant::parse("2024-02-29").unwrap();
    /// assert_eq!(leap_day.add(1, TimeUnit::Years).to_db_date(), "2025-02-28");
    /// ```
    pub fn add(self, amount: i64, unit: TimeUnit) -> Self {
        self.checked_add(amount, unit)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Move back by `amount` of `unit`. Same as `add(-amount, unit)`.
    ///
    /// # Panics
    ///
    /// Panics if the result leaves the supported year range.
    pub fn sub(self, amount: i64, unit: TimeUnit) -> Self {
        self.checked_sub(amount, unit)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Advance by `amount` of `unit`, failing instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result leaves the
    /// supported year range.
    pub fn checked_add(self, amount: i64, unit: TimeUnit) -> Result<Self> {
        let shifted = match unit {
            TimeUnit::Months => self.shift_months(amount),
            TimeUnit::Years => self.shift_years(amount),
            fixed => fixed
                .fixed_millis()
                .and_then(|ms| amount.checked_mul(ms))
                .and_then(|delta| self.epoch_millis().checked_add(delta))
                .and_then(CalendarInstant::from_epoch_millis),
        };
        shifted.ok_or_else(|| {
            debug!(instant = %self, amount, %unit, "arithmetic left the supported range");
            CalendarError::OutOfRange(format!("{self} {amount:+} {unit}"))
        })
    }

    /// Move back by `amount` of `unit`, failing instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result leaves the
    /// supported year range or `amount` cannot be negated.
    pub fn checked_sub(self, amount: i64, unit: TimeUnit) -> Result<Self> {
        let negated = amount.checked_neg().ok_or_else(|| {
            CalendarError::OutOfRange(format!("cannot negate {amount} {unit}"))
        })?;
        self.checked_add(negated, unit)
    }

    /// Month arithmetic with day clamping.
    ///
    /// The month index is normalized with floored division so negative
    /// amounts roll back across year boundaries (index -1 is December of the
    /// previous year). The day is applied only once the destination month is
    /// known, so no intermediate date ever overflows.
    fn shift_months(self, amount: i64) -> Option<Self> {
        let day = self.day();
        let target = i64::from(self.month0()).checked_add(amount)?;
        let year = i64::from(self.year()).checked_add(target.div_euclid(12))?;
        let month0 = target.rem_euclid(12) as u32;
        let year = year_in_range(year)?;

        let last_day = days_in_month(year, month0);
        let date = civil_date(year, month0, day.min(last_day));
        Some(CalendarInstant::at_time(date, self.time()))
    }

    /// Year arithmetic with day clamping, anchored on the original month.
    fn shift_years(self, amount: i64) -> Option<Self> {
        let day = self.day();
        let month0 = self.month0();
        let year = year_in_range(i64::from(self.year()).checked_add(amount)?)?;

        let last_day = days_in_month(year, month0);
        let date = civil_date(year, month0, day.min(last_day));
        Some(CalendarInstant::at_time(date, self.time()))
    }
}

fn year_in_range(year: i64) -> Option<i32> {
    if (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
        i32::try_from(year).ok()
    } else {
        None
    }
}

// ── Unit shortcuts ──────────────────────────────────────────────────────────

impl CalendarInstant {
    pub fn add_years(self, amount: i64) -> Self {
        self.add(amount, TimeUnit::Years)
    }

    pub fn add_months(self, amount: i64) -> Self {
        self.add(amount, TimeUnit::Months)
    }

    pub fn add_weeks(self, amount: i64) -> Self {
        self.add(amount, TimeUnit::Weeks)
    }

    pub fn add_days(self, amount: i64) -> Self {
        self.add(amount, TimeUnit::Days)
    }

    pub fn add_hours(self, amount: i64) -> Self {
        self.add(amount, TimeUnit::Hours)
    }

    pub fn add_minutes(self, amount: i64) -> Self {
        self.add(amount, TimeUnit::Minutes)
    }

    pub fn add_seconds(self, amount: i64) -> Self {
        self.add(amount, TimeUnit::Seconds)
    }

    pub fn add_milliseconds(self, amount: i64) -> Self {
        self.add(amount, TimeUnit::Milliseconds)
    }

    pub fn sub_years(self, amount: i64) -> Self {
        self.sub(amount, TimeUnit::Years)
    }

    pub fn sub_months(self, amount: i64) -> Self {
        self.sub(amount, TimeUnit::Months)
    }

    pub fn sub_weeks(self, amount: i64) -> Self {
        self.sub(amount, TimeUnit::Weeks)
    }

    pub fn sub_days(self, amount: i64) -> Self {
        self.sub(amount, TimeUnit::Days)
    }

    pub fn sub_hours(self, amount: i64) -> Self {
        self.sub(amount, TimeUnit::Hours)
    }

    pub fn sub_minutes(self, amount: i64) -> Self {
        self.sub(amount, TimeUnit::Minutes)
    }

    pub fn sub_seconds(self, amount: i64) -> Self {
        self.sub(amount, TimeUnit::Seconds)
    }

    pub fn sub_milliseconds(self, amount: i64) -> Self {
        self.sub(amount, TimeUnit::Milliseconds)
    }
}
