//! Fixed textual layouts. Every field is zero-padded and read in UTC.
//!
//! | Method | Layout |
//! |--------|--------|
//! | [`to_br`](CalendarInstant::to_br) | `DD/MM/YYYY` or `DD/MM/YYYY HH:mm` |
//! | [`to_us`](CalendarInstant::to_us) | `MM/DD/YYYY` or `MM/DD/YYYY HH:mm` |
//! | [`to_db`](CalendarInstant::to_db) | `YYYY-MM-DDTHH:mm:ss.sssZ` |
//! | [`to_db_date`](CalendarInstant::to_db_date) | `YYYY-MM-DD` |
//! | [`to_db_datetime`](CalendarInstant::to_db_datetime) | `YYYY-MM-DD HH:mm:ss` |

use std::fmt;

use crate::instant::CalendarInstant;
use crate::options::FormatOptions;

const BR_DATE: &str = "%d/%m/%Y";
const BR_DATE_TIME: &str = "%d/%m/%Y %H:%M";
const US_DATE: &str = "%m/%d/%Y";
const US_DATE_TIME: &str = "%m/%d/%Y %H:%M";
const DB_INSTANT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const DB_DATE: &str = "%Y-%m-%d";
const DB_DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
const DATE_HOUR_MINUTE: &str = "%Y-%m-%d %H:%M";

impl CalendarInstant {
    /// Brazilian layout: `DD/MM/YYYY`, plus ` HH:mm` with `include_time`.
    pub fn to_br(&self, include_time: bool) -> String {
        self.render(if include_time { BR_DATE_TIME } else { BR_DATE })
    }

    /// US layout: `MM/DD/YYYY`, plus ` HH:mm` with `include_time`.
    pub fn to_us(&self, include_time: bool) -> String {
        self.render(if include_time { US_DATE_TIME } else { US_DATE })
    }

    /// Full instant with milliseconds and a `Z` suffix.
    ///
    /// This is also the [`Display`](fmt::Display) and serde form, and it
    /// parses back to the same instant.
    pub fn to_db(&self) -> String {
        self.render(DB_INSTANT)
    }

    pub fn to_db_date(&self) -> String {
        self.render(DB_DATE)
    }

    pub fn to_db_datetime(&self) -> String {
        self.render(DB_DATE_TIME)
    }

    /// `YYYY-MM-DD` by default; `include_time` appends `HH:mm`, and
    /// `include_time` with `include_seconds` gives `YYYY-MM-DD HH:mm:ss`.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_instant::{CalendarInstant, FormatOptions};
    ///
    /// let x = CalendarInstant::parse("2024-02-29T07:05:09Z").unwrap();
    /// assert_eq!(x.format(&FormatOptions::default()), "2024-02-29");
    ///
    /// let opts = FormatOptions { include_time: true, include_seconds: true };
    /// assert_eq!(x.format(&opts), "2024-02-29 07:05:09");
    /// ```
    pub fn format(&self, options: &FormatOptions) -> String {
        match (options.include_time, options.include_seconds) {
            (false, _) => self.to_db_date(),
            (true, false) => self.render(DATE_HOUR_MINUTE),
            (true, true) => self.to_db_datetime(),
        }
    }

    fn render(&self, layout: &str) -> String {
        self.as_datetime().format(layout).to_string()
    }
}

impl fmt::Display for CalendarInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_datetime().format(DB_INSTANT))
    }
}
