//! # calendar-instant
//!
//! UTC calendar instants with millisecond precision.
//!
//! A [`CalendarInstant`] can be shifted by calendar units, snapped to the
//! start or end of its day, week, month, or year, compared and diffed against
//! another instant, and rendered in a handful of fixed layouts. Month and
//! year arithmetic clamps the day-of-month instead of overflowing
//! (`Jan 31 + 1 month` is the last day of February), and month boundaries use
//! the same month-length table, so the two always agree.
//!
//! Nothing here reads a local timezone. "Now" comes from a [`Clock`], which
//! tests replace with a [`FixedClock`].
//!
//! ## Modules
//!
//! - [`instant`] — the value type, construction, parsing, accessors, predicates
//! - [`arithmetic`] — `add`/`sub` by [`TimeUnit`] with day clamping
//! - [`boundary`] — start/end of day, week, month, year
//! - [`diff`] — comparison and [`DateDifference`]
//! - [`format`] — regional and database layouts
//! - [`calendar`] — month lengths and leap years
//! - [`clock`] — injected time sources
//! - [`options`] — parse, format, and week-start options
//! - [`error`] — Error types
//!
//! ## Quick Start
//!
//! ```
//! use calendar_instant::{CalendarInstant, TimeUnit};
//!
//! let start = CalendarInstant::parse("2024-01-31T09:00:00Z").unwrap();
//! let next = start.add(1, TimeUnit::Months);
//! assert_eq!(next.to_db(), "2024-02-29T09:00:00.000Z");
//! assert_eq!(next.end_of_month().to_br(true), "29/02/2024 23:59");
//! assert_eq!(start.diff(&next).months, 1);
//! ```

pub mod arithmetic;
pub mod boundary;
pub mod calendar;
pub mod clock;
pub mod diff;
pub mod error;
pub mod format;
pub mod instant;
pub mod options;

pub use arithmetic::TimeUnit;
pub use boundary::{BoundaryKind, BoundaryUnit};
pub use calendar::{days_in_month, is_leap_year};
pub use clock::{Clock, FixedClock, SystemClock};
pub use diff::DateDifference;
pub use error::{CalendarError, Result};
pub use instant::{CalendarInstant, InstantSource, MAX_YEAR, MIN_YEAR};
pub use options::{FormatOptions, ParseOptions, WeekStart};
