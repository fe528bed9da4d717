//! The [`CalendarInstant`] value type: construction, parsing, civil-field
//! accessors, and clock-relative predicates.
//!
//! An instant is an absolute point in time with millisecond resolution. All
//! civil fields (year, month, day, ...) are read in UTC; there is no local
//! timezone anywhere in this crate.
//!
//! # Parsing
//!
//! Text is handed to chrono's parsers, tried in this order:
//!
//! - RFC 3339 with any offset (`2024-02-29T10:00:00+02:00`), normalized to UTC
//! - naive date-time with `T` or space, optional fraction, optional trailing
//!   `Z` (`2024-02-29T10:00:00.250`), read as UTC
//! - naive date-time without seconds (`2024-02-29T10:00`), read as UTC
//! - date only (`2024-02-29`), midnight UTC
//!
//! Anything else is an [`CalendarError::InvalidDate`]. Digits below the
//! millisecond are truncated.

use std::str::FromStr;

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc, Weekday,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::calendar;
use crate::clock::{Clock, SystemClock};
use crate::error::{CalendarError, Result};
use crate::options::ParseOptions;

/// Earliest year a [`CalendarInstant`] can be constructed in.
pub const MIN_YEAR: i32 = -262_000;
/// Latest year a [`CalendarInstant`] can be constructed in.
pub const MAX_YEAR: i32 = 262_000;

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub(crate) const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Naive layouts tried after RFC 3339. All are read as UTC.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// An absolute instant with millisecond precision, read in UTC civil fields.
///
/// Values are immutable: every arithmetic and boundary operation returns a
/// new instant, so chained calls never alias.
///
/// # Examples
///
/// ```
/// use calendar_instant::CalendarInstant;
///
/// let end_of_feb = CalendarInstant::parse("2024-01-31").unwrap().add_months(1);
/// assert_eq!(end_of_feb.to_db_date(), "2024-02-29");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarInstant {
    dt: DateTime<Utc>,
}

/// Anything a [`CalendarInstant`] can be created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstantSource<'a> {
    /// The current wall-clock time.
    Now,
    /// An absolute time value.
    DateTime(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Text accepted by [`CalendarInstant::parse`].
    Text(&'a str),
}

impl From<DateTime<Utc>> for InstantSource<'_> {
    fn from(dt: DateTime<Utc>) -> Self {
        InstantSource::DateTime(dt)
    }
}

impl From<i64> for InstantSource<'_> {
    fn from(ms: i64) -> Self {
        InstantSource::Millis(ms)
    }
}

impl<'a> From<&'a str> for InstantSource<'a> {
    fn from(text: &'a str) -> Self {
        InstantSource::Text(text)
    }
}

// ── Construction ────────────────────────────────────────────────────────────

impl CalendarInstant {
    /// The first millisecond of [`MIN_YEAR`].
    pub const MIN: Self = range_edge(MIN_YEAR, 1, 1, (0, 0, 0, 0));
    /// The last millisecond of [`MAX_YEAR`].
    pub const MAX: Self = range_edge(MAX_YEAR, 12, 31, (23, 59, 59, 999));

    /// The current instant from the system clock, truncated to milliseconds.
    pub fn now() -> Self {
        Self::now_from(&SystemClock)
    }

    /// The current instant according to `clock`, truncated to milliseconds.
    ///
    /// A clock reading outside the supported range saturates to
    /// [`CalendarInstant::MIN`] or [`CalendarInstant::MAX`].
    pub fn now_from(clock: &impl Clock) -> Self {
        let now = clock.now();
        Self::from_utc(now).unwrap_or_else(|| {
            debug!(%now, "clock reading outside the supported range, saturating");
            if now.year() < MIN_YEAR {
                Self::MIN
            } else {
                Self::MAX
            }
        })
    }

    /// The current instant according to `clock`, failing instead of
    /// saturating.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the clock reports a time
    /// outside the supported range.
    pub fn try_now_from(clock: &impl Clock) -> Result<Self> {
        Self::from_datetime(clock.now())
    }

    /// Create an instant from any [`InstantSource`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the source does not resolve to
    /// an instant in the supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_instant::CalendarInstant;
    ///
    /// let a = CalendarInstant::create("2024-02-29").unwrap();
    /// let b = CalendarInstant::create(a.epoch_millis()).unwrap();
    /// assert_eq!(a, b);
    /// assert!(CalendarInstant::create("yesterday-ish").is_err());
    /// ```
    pub fn create<'a>(source: impl Into<InstantSource<'a>>) -> Result<Self> {
        match source.into() {
            InstantSource::Now => Self::try_now_from(&SystemClock),
            InstantSource::DateTime(dt) => Self::from_datetime(dt),
            InstantSource::Millis(ms) => Self::from_millis(ms),
            InstantSource::Text(text) => Self::parse(text),
        }
    }

    /// Create an instant from an absolute time value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if `dt` falls outside the
    /// supported range.
    pub fn from_datetime(dt: DateTime<Utc>) -> Result<Self> {
        Self::from_utc(dt).ok_or_else(|| {
            CalendarError::InvalidDate(format!("{dt} is outside the supported range"))
        })
    }

    /// Create an instant from milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if `ms` is not a representable
    /// instant in the supported range.
    pub fn from_millis(ms: i64) -> Result<Self> {
        Self::from_epoch_millis(ms).ok_or_else(|| {
            CalendarError::InvalidDate(format!("{ms} ms is outside the supported range"))
        })
    }

    /// Strictly parse `text` into an instant.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if no accepted layout matches or
    /// the date does not exist (e.g. `2023-02-29`).
    pub fn parse(text: &str) -> Result<Self> {
        parse_text(text)
            .and_then(Self::from_utc)
            .ok_or_else(|| CalendarError::InvalidDate(format!("'{}'", text.trim())))
    }

    /// Parse `text` according to `options`.
    ///
    /// With `strict` set, failure is an error. Otherwise failure is `Ok(None)`,
    /// which is never confused with a real instant such as the epoch.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] only in strict mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_instant::{CalendarInstant, ParseOptions};
    ///
    /// let none = CalendarInstant::parse_with("garbage", &ParseOptions::lenient()).unwrap();
    /// assert!(none.is_none());
    ///
    /// let epoch = CalendarInstant::parse_with("1970-01-01", &ParseOptions::lenient()).unwrap();
    /// assert_eq!(epoch.map(|i| i.epoch_millis()), Some(0));
    /// ```
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Option<Self>> {
        match Self::parse(text) {
            Ok(instant) => Ok(Some(instant)),
            Err(_) if !options.strict => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Non-strict parse: `None` when `text` is not a valid instant.
    pub fn parse_lenient(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    pub(crate) fn from_epoch_millis(ms: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(ms).and_then(Self::from_utc)
    }

    /// Truncate to milliseconds and check the year range.
    fn from_utc(dt: DateTime<Utc>) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&dt.year()) {
            return None;
        }
        DateTime::from_timestamp_millis(dt.timestamp_millis()).map(|dt| Self { dt })
    }

    /// `date` at `millis_of_day` past midnight.
    ///
    /// Only boundary and arithmetic code calls this, with dates that are
    /// already known to be valid and inside chrono's range.
    pub(crate) fn at_day_offset(date: NaiveDate, millis_of_day: i64) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        Self {
            dt: (midnight + TimeDelta::milliseconds(millis_of_day)).and_utc(),
        }
    }

    /// `date` at `time`, with the same validity contract as [`Self::at_day_offset`].
    pub(crate) fn at_time(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            dt: date.and_time(time).and_utc(),
        }
    }
}

const fn range_edge(
    year: i32,
    month: u32,
    day: u32,
    hms_milli: (u32, u32, u32, u32),
) -> CalendarInstant {
    let (hour, minute, second, milli) = hms_milli;
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => match date.and_hms_milli_opt(hour, minute, second, milli) {
            Some(naive) => CalendarInstant { dt: naive.and_utc() },
            None => panic!("range edge time is invalid"),
        },
        None => panic!("range edge date is invalid"),
    }
}

/// Resolve `(year, month0, day)` to a date the caller has already validated.
///
/// # Panics
///
/// Panics if the fields do not form a real date; callers clamp `day` with
/// [`calendar::days_in_month`] first.
pub(crate) fn civil_date(year: i32, month0: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, day)
        .unwrap_or_else(|| panic!("invalid civil date {year}-{:02}-{day:02}", month0 + 1))
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let s = text.trim();
    if s.is_empty() {
        debug!("empty date input");
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(naive.and_utc());
        }
    }

    let parsed = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc());
    if parsed.is_none() {
        debug!(input = s, "no accepted date layout matched");
    }
    parsed
}

// ── Accessors ───────────────────────────────────────────────────────────────

impl CalendarInstant {
    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.dt.timestamp_millis()
    }

    /// The underlying chrono value.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.dt
    }

    pub fn year(&self) -> i32 {
        self.dt.year()
    }

    /// Month of the year, 1 (January) through 12.
    pub fn month(&self) -> u32 {
        self.dt.month()
    }

    /// Month of the year, 0 (January) through 11.
    pub fn month0(&self) -> u32 {
        self.dt.month0()
    }

    /// Day of the month, 1 through 31.
    pub fn day(&self) -> u32 {
        self.dt.day()
    }

    pub fn hour(&self) -> u32 {
        self.dt.hour()
    }

    pub fn minute(&self) -> u32 {
        self.dt.minute()
    }

    pub fn second(&self) -> u32 {
        self.dt.second()
    }

    pub fn millisecond(&self) -> u32 {
        self.dt.timestamp_subsec_millis()
    }

    pub fn weekday(&self) -> Weekday {
        self.dt.weekday()
    }

    /// Day of the week with Sunday = 0 through Saturday = 6.
    pub fn weekday_index(&self) -> u32 {
        self.dt.weekday().num_days_from_sunday()
    }

    /// Length of this instant's month.
    pub fn days_in_month(&self) -> u32 {
        calendar::days_in_month(self.year(), self.month0())
    }

    pub fn is_leap_year(&self) -> bool {
        calendar::is_leap_year(self.year())
    }

    pub(crate) fn date(&self) -> NaiveDate {
        self.dt.date_naive()
    }

    pub(crate) fn time(&self) -> NaiveTime {
        self.dt.time()
    }
}

// ── Predicates ──────────────────────────────────────────────────────────────

impl CalendarInstant {
    /// Strictly after the system clock's "now".
    pub fn is_future(&self) -> bool {
        self.is_future_at(&SystemClock)
    }

    /// Strictly before the system clock's "now".
    pub fn is_past(&self) -> bool {
        self.is_past_at(&SystemClock)
    }

    /// Same UTC calendar date as the system clock's "now".
    pub fn is_today(&self) -> bool {
        self.is_today_at(&SystemClock)
    }

    pub fn is_future_at(&self, clock: &impl Clock) -> bool {
        self.epoch_millis() > clock.now().timestamp_millis()
    }

    pub fn is_past_at(&self, clock: &impl Clock) -> bool {
        self.epoch_millis() < clock.now().timestamp_millis()
    }

    pub fn is_today_at(&self, clock: &impl Clock) -> bool {
        self.date() == clock.now().date_naive()
    }
}

// ── Conversions ─────────────────────────────────────────────────────────────

impl FromStr for CalendarInstant {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for CalendarInstant {
    type Error = CalendarError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<i64> for CalendarInstant {
    type Error = CalendarError;

    fn try_from(ms: i64) -> Result<Self> {
        Self::from_millis(ms)
    }
}

impl TryFrom<DateTime<Utc>> for CalendarInstant {
    type Error = CalendarError;

    fn try_from(dt: DateTime<Utc>) -> Result<Self> {
        Self::from_datetime(dt)
    }
}

impl From<CalendarInstant> for DateTime<Utc> {
    fn from(instant: CalendarInstant) -> Self {
        instant.dt
    }
}

impl Serialize for CalendarInstant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_db())
    }
}

impl<'de> Deserialize<'de> for CalendarInstant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;

    fn clock_at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(y, m, d, h, mi, s).unwrap())
    }

    // ── construction ────────────────────────────────────────────────────

    #[test]
    fn test_now_from_truncates_to_millis() {
        let at = Utc.with_ymd_and_hms(2026, 2, 18, 14, 30, 0).unwrap()
            + TimeDelta::nanoseconds(123_456_789);
        let now = CalendarInstant::now_from(&FixedClock(at));
        assert_eq!(now.millisecond(), 123);
        assert_eq!(now.as_datetime().timestamp_subsec_nanos(), 123_000_000);
    }

    #[test]
    fn test_create_from_each_source() {
        let dt = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        let a = CalendarInstant::create(dt).unwrap();
        let b = CalendarInstant::create(dt.timestamp_millis()).unwrap();
        let c = CalendarInstant::create("2024-02-29").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_create_now_source() {
        let before = Utc::now().timestamp_millis();
        let now = CalendarInstant::create(InstantSource::Now).unwrap();
        assert!(now.epoch_millis() >= before);
    }

    #[test]
    fn test_from_millis_epoch_and_negative() {
        let epoch = CalendarInstant::from_millis(0).unwrap();
        assert_eq!(epoch.to_db(), "1970-01-01T00:00:00.000Z");
        let before = CalendarInstant::from_millis(-1).unwrap();
        assert_eq!(before.to_db(), "1969-12-31T23:59:59.999Z");
    }

    #[test]
    fn test_from_millis_out_of_range_is_invalid_date() {
        let err = CalendarInstant::from_millis(i64::MAX).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate(_)));
    }

    #[test]
    fn test_from_datetime_outside_year_range() {
        let far = NaiveDate::from_ymd_opt(MAX_YEAR + 1, 1, 1)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc();
        assert!(CalendarInstant::from_datetime(far).is_err());
    }

    #[test]
    fn test_range_constants() {
        assert_eq!(CalendarInstant::MIN.to_db(), "-262000-01-01T00:00:00.000Z");
        assert_eq!(CalendarInstant::MAX.to_db(), "+262000-12-31T23:59:59.999Z");
        for edge in [CalendarInstant::MIN, CalendarInstant::MAX] {
            assert_eq!(CalendarInstant::from_millis(edge.epoch_millis()).unwrap(), edge);
        }
        assert!(CalendarInstant::from_millis(CalendarInstant::MIN.epoch_millis() - 1).is_err());
        assert!(CalendarInstant::from_millis(CalendarInstant::MAX.epoch_millis() + 1).is_err());
    }

    #[test]
    fn test_now_from_saturates_outside_range() {
        let past = NaiveDate::from_ymd_opt(MIN_YEAR - 5, 6, 1)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc();
        let future = NaiveDate::from_ymd_opt(MAX_YEAR + 5, 6, 1)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc();
        assert_eq!(CalendarInstant::now_from(&FixedClock(past)), CalendarInstant::MIN);
        assert_eq!(CalendarInstant::now_from(&FixedClock(future)), CalendarInstant::MAX);
    }

    #[test]
    fn test_try_now_from_rejects_outside_range() {
        let future = NaiveDate::from_ymd_opt(MAX_YEAR + 1, 1, 1)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc();
        let err = CalendarInstant::try_now_from(&FixedClock(future)).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate(_)));
        let ok = CalendarInstant::try_now_from(&clock_at(2026, 2, 18, 12, 0, 0)).unwrap();
        assert_eq!(ok.to_db(), "2026-02-18T12:00:00.000Z");
    }

    // ── parsing ─────────────────────────────────────────────────────────

    #[test]
    fn test_parse_date_only_is_midnight_utc() {
        let i = CalendarInstant::parse("2024-02-29").unwrap();
        assert_eq!((i.year(), i.month(), i.day()), (2024, 2, 29));
        assert_eq!((i.hour(), i.minute(), i.second(), i.millisecond()), (0, 0, 0, 0));
    }

    #[test]
    fn test_parse_rfc3339_offset_normalized_to_utc() {
        let i = CalendarInstant::parse("2024-03-01T01:30:00+02:00").unwrap();
        assert_eq!(i.to_db(), "2024-02-29T23:30:00.000Z");
    }

    #[test]
    fn test_parse_naive_layouts() {
        let cases = [
            ("2024-05-06T07:08:09", "2024-05-06T07:08:09.000Z"),
            ("2024-05-06 07:08:09.5", "2024-05-06T07:08:09.500Z"),
            ("2024-05-06T07:08", "2024-05-06T07:08:00.000Z"),
            ("2024-05-06 07:08", "2024-05-06T07:08:00.000Z"),
            ("  2024-05-06  ", "2024-05-06T00:00:00.000Z"),
        ];
        for (input, expected) in cases {
            assert_eq!(CalendarInstant::parse(input).unwrap().to_db(), expected, "{input}");
        }
    }

    #[test]
    fn test_parse_truncates_sub_millisecond() {
        let i = CalendarInstant::parse("2024-05-06T07:08:09.123987Z").unwrap();
        assert_eq!(i.millisecond(), 123);
    }

    #[test]
    fn test_parse_invalid_strict_is_error() {
        for input in ["", "not a date", "2023-02-29", "2024-13-01", "2024-04-31T00:00:00Z"] {
            let err = CalendarInstant::parse(input).unwrap_err();
            assert!(matches!(err, CalendarError::InvalidDate(_)), "{input}");
        }
    }

    #[test]
    fn test_parse_with_lenient_distinguishes_epoch_from_failure() {
        let lenient = ParseOptions::lenient();
        assert_eq!(CalendarInstant::parse_with("nope", &lenient).unwrap(), None);
        let epoch = CalendarInstant::parse_with("1970-01-01T00:00:00Z", &lenient)
            .unwrap()
            .unwrap();
        assert_eq!(epoch.epoch_millis(), 0);
    }

    #[test]
    fn test_parse_with_strict_propagates() {
        let result = CalendarInstant::parse_with("nope", &ParseOptions::default());
        assert!(matches!(result, Err(CalendarError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_lenient() {
        assert!(CalendarInstant::parse_lenient("2024-01-01").is_some());
        assert!(CalendarInstant::parse_lenient("01/01/2024").is_none());
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: CalendarInstant = "2024-01-01".parse().unwrap();
        let b = CalendarInstant::try_from("2024-01-01").unwrap();
        let c = CalendarInstant::try_from(a.epoch_millis()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    // ── accessors ───────────────────────────────────────────────────────

    #[test]
    fn test_civil_fields() {
        let i = CalendarInstant::parse("2026-02-18T14:30:45.678Z").unwrap();
        assert_eq!(i.year(), 2026);
        assert_eq!(i.month(), 2);
        assert_eq!(i.month0(), 1);
        assert_eq!(i.day(), 18);
        assert_eq!(i.hour(), 14);
        assert_eq!(i.minute(), 30);
        assert_eq!(i.second(), 45);
        assert_eq!(i.millisecond(), 678);
        assert_eq!(i.weekday(), Weekday::Wed);
        assert_eq!(i.weekday_index(), 3);
        assert_eq!(i.days_in_month(), 28);
        assert!(!i.is_leap_year());
    }

    // ── predicates ──────────────────────────────────────────────────────

    #[test]
    fn test_future_and_past_are_strict() {
        let clock = clock_at(2026, 2, 18, 12, 0, 0);
        let same = CalendarInstant::now_from(&clock);
        assert!(!same.is_future_at(&clock));
        assert!(!same.is_past_at(&clock));

        let later = CalendarInstant::parse("2026-02-18T12:00:00.001Z").unwrap();
        assert!(later.is_future_at(&clock));
        assert!(!later.is_past_at(&clock));

        let earlier = CalendarInstant::parse("2026-02-18T11:59:59.999Z").unwrap();
        assert!(earlier.is_past_at(&clock));
    }

    #[test]
    fn test_is_today_compares_utc_dates() {
        let clock = clock_at(2026, 2, 18, 23, 59, 59);
        assert!(CalendarInstant::parse("2026-02-18T00:00:00Z").unwrap().is_today_at(&clock));
        assert!(!CalendarInstant::parse("2026-02-19T00:00:00Z").unwrap().is_today_at(&clock));
        assert!(!CalendarInstant::parse("2026-02-17T23:59:59Z").unwrap().is_today_at(&clock));
    }

    #[test]
    fn test_system_clock_predicates() {
        let long_ago = CalendarInstant::parse("1990-01-01").unwrap();
        assert!(long_ago.is_past());
        assert!(!long_ago.is_future());
        assert!(!long_ago.is_today());
    }

    // ── serde ───────────────────────────────────────────────────────────

    #[test]
    fn test_serde_as_db_string() {
        let i = CalendarInstant::parse("2024-02-29T10:20:30.400Z").unwrap();
        let json = serde_json::to_string(&i).unwrap();
        assert_eq!(json, "\"2024-02-29T10:20:30.400Z\"");
        let back: CalendarInstant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, i);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: std::result::Result<CalendarInstant, _> = serde_json::from_str("\"2023-02-29\"");
        assert!(result.is_err());
    }
}
