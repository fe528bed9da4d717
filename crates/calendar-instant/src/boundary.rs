//! Snapping an instant to the start or end of its day, week, month, or year.
//!
//! Starts are `00:00:00.000` and ends are `23:59:59.999` on the boundary date.
//! Month and year ends take the last day from [`days_in_month`], the same
//! table the month/year arithmetic clamps against.

use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::calendar::days_in_month;
use crate::error::{CalendarError, Result};
use crate::instant::{civil_date, CalendarInstant, MILLIS_PER_DAY};
use crate::options::WeekStart;

const END_OF_DAY_MILLIS: i64 = MILLIS_PER_DAY - 1;

/// Which edge of the unit to snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKind {
    Start,
    End,
}

/// The calendar unit whose boundary is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryUnit {
    Day,
    Week,
    Month,
    Year,
}

impl std::str::FromStr for BoundaryKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(BoundaryKind::Start),
            "end" => Ok(BoundaryKind::End),
            other => Err(CalendarError::UnrecognizedName(format!(
                "unknown boundary '{other}' (expected start or end)"
            ))),
        }
    }
}

impl std::str::FromStr for BoundaryUnit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(BoundaryUnit::Day),
            "week" => Ok(BoundaryUnit::Week),
            "month" => Ok(BoundaryUnit::Month),
            "year" => Ok(BoundaryUnit::Year),
            other => Err(CalendarError::UnrecognizedName(format!(
                "unknown boundary unit '{other}'"
            ))),
        }
    }
}

impl CalendarInstant {
    /// Snap to a boundary, with weeks starting on Sunday.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_instant::{BoundaryKind, BoundaryUnit, CalendarInstant};
    ///
    /// let x = CalendarInstant::parse("2024-02-14T09:30:00Z").unwrap();
    /// let end = x.boundary(BoundaryKind::End, BoundaryUnit::Month);
    /// assert_eq!(end.to_db(), "2024-02-29T23:59:59.999Z");
    /// ```
    pub fn boundary(self, kind: BoundaryKind, unit: BoundaryUnit) -> Self {
        self.boundary_with(kind, unit, WeekStart::default())
    }

    /// Snap to a boundary using an explicit week start.
    pub fn boundary_with(
        self,
        kind: BoundaryKind,
        unit: BoundaryUnit,
        week_start: WeekStart,
    ) -> Self {
        match (kind, unit) {
            (BoundaryKind::Start, BoundaryUnit::Day) => self.start_of_day(),
            (BoundaryKind::End, BoundaryUnit::Day) => self.end_of_day(),
            (BoundaryKind::Start, BoundaryUnit::Week) => self.start_of_week_from(week_start),
            (BoundaryKind::End, BoundaryUnit::Week) => self.end_of_week_from(week_start),
            (BoundaryKind::Start, BoundaryUnit::Month) => self.start_of_month(),
            (BoundaryKind::End, BoundaryUnit::Month) => self.end_of_month(),
            (BoundaryKind::Start, BoundaryUnit::Year) => self.start_of_year(),
            (BoundaryKind::End, BoundaryUnit::Year) => self.end_of_year(),
        }
    }

    pub fn start_of_day(self) -> Self {
        CalendarInstant::at_day_offset(self.date(), 0)
    }

    pub fn end_of_day(self) -> Self {
        CalendarInstant::at_day_offset(self.date(), END_OF_DAY_MILLIS)
    }

    /// Start of the Sunday-based week.
    pub fn start_of_week(self) -> Self {
        self.start_of_week_from(WeekStart::Sunday)
    }

    /// End of the Sunday-based week (Saturday, end of day).
    pub fn end_of_week(self) -> Self {
        self.end_of_week_from(WeekStart::Sunday)
    }

    /// Start of the week containing this instant.
    ///
    /// In the first days of [`MIN_YEAR`](crate::MIN_YEAR) the week start would
    /// fall before the supported range, so the result saturates to
    /// [`CalendarInstant::MIN`].
    pub fn start_of_week_from(self, week_start: WeekStart) -> Self {
        let back = week_start.days_from_start(self.weekday());
        let first = self.date() - Days::new(u64::from(back));
        CalendarInstant::at_day_offset(first, 0).max(CalendarInstant::MIN)
    }

    /// End of the week containing this instant, saturating to
    /// [`CalendarInstant::MAX`] in the last days of [`MAX_YEAR`](crate::MAX_YEAR).
    pub fn end_of_week_from(self, week_start: WeekStart) -> Self {
        let forward = 6 - week_start.days_from_start(self.weekday());
        let last = self.date() + Days::new(u64::from(forward));
        CalendarInstant::at_day_offset(last, END_OF_DAY_MILLIS).min(CalendarInstant::MAX)
    }

    pub fn start_of_month(self) -> Self {
        let first = civil_date(self.year(), self.month0(), 1);
        CalendarInstant::at_day_offset(first, 0)
    }

    pub fn end_of_month(self) -> Self {
        let (year, month0) = (self.year(), self.month0());
        let last = civil_date(year, month0, days_in_month(year, month0));
        CalendarInstant::at_day_offset(last, END_OF_DAY_MILLIS)
    }

    pub fn start_of_year(self) -> Self {
        let first = civil_date(self.year(), 0, 1);
        CalendarInstant::at_day_offset(first, 0)
    }

    pub fn end_of_year(self) -> Self {
        let year = self.year();
        let last = civil_date(year, 11, days_in_month(year, 11));
        CalendarInstant::at_day_offset(last, END_OF_DAY_MILLIS)
    }
}
