//! Ordering and field-wise differences between instants.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::instant::{
    CalendarInstant, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
};

/// Approximate month length used to wrap [`DateDifference::days`].
const DAYS_PER_DIFF_MONTH: u64 = 30;

/// Unsigned breakdown of the distance between two instants.
///
/// `years` and `months` come from the calendar fields alone (day-of-month is
/// ignored), so Jan 31 and Feb 1 are one month apart. The remaining fields are
/// carved out of `total` with fixed unit sizes, and `days` wraps at 30
/// regardless of the real month length. Summing the fields with real unit
/// lengths does not reconstruct `total`; only `total` is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateDifference {
    pub years: u64,
    pub months: u64,
    /// Whole days modulo 30.
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
    /// Absolute distance in milliseconds.
    pub total: u64,
}

impl CalendarInstant {
    /// `-1` if `self` is earlier than `other`, `0` if equal, `1` if later.
    /// Exact millisecond comparison, no tolerance.
    pub fn compare_to(&self, other: &CalendarInstant) -> i8 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    pub fn is_before(&self, other: &CalendarInstant) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &CalendarInstant) -> bool {
        self > other
    }

    pub fn is_same(&self, other: &CalendarInstant) -> bool {
        self == other
    }

    /// Break the distance to `other` into calendar-ish fields.
    ///
    /// The result is symmetric: `a.diff(&b) == b.diff(&a)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_instant::CalendarInstant;
    ///
    /// let a = CalendarInstant::parse("2024-01-01T00:00:00Z").unwrap();
    /// let b = CalendarInstant::parse("2024-03-02T03:04:05.006Z").unwrap();
    /// let d = a.diff(&b);
    /// assert_eq!((d.years, d.months), (0, 2));
    /// assert_eq!((d.hours, d.minutes, d.seconds, d.milliseconds), (3, 4, 5, 6));
    /// assert_eq!(d.total, (b.epoch_millis() - a.epoch_millis()) as u64);
    /// ```
    pub fn diff(&self, other: &CalendarInstant) -> DateDifference {
        let total = self.epoch_millis().abs_diff(other.epoch_millis());

        let month_delta = (i64::from(self.year()) - i64::from(other.year())) * 12
            + (i64::from(self.month0()) - i64::from(other.month0()));
        let month_delta = month_delta.unsigned_abs();

        DateDifference {
            years: month_delta / 12,
            months: month_delta % 12,
            days: (total / MILLIS_PER_DAY as u64) % DAYS_PER_DIFF_MONTH,
            hours: (total / MILLIS_PER_HOUR as u64) % 24,
            minutes: (total / MILLIS_PER_MINUTE as u64) % 60,
            seconds: (total / MILLIS_PER_SECOND as u64) % 60,
            milliseconds: total % MILLIS_PER_SECOND as u64,
            total,
        }
    }
}

impl fmt::Display for DateDifference {
    /// Human-readable form, e.g. `1 year, 2 months, 3 days`. Zero fields are
    /// omitted; an all-zero difference prints `0 milliseconds`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
            (self.milliseconds, "millisecond"),
        ];
        let parts: Vec<String> = fields
            .iter()
            .filter(|(n, _)| *n > 0)
            .map(|(n, name)| format!("{n} {name}{}", if *n == 1 { "" } else { "s" }))
            .collect();
        if parts.is_empty() {
            f.write_str("0 milliseconds")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}
