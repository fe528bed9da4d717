//! Month-length facts for the proleptic Gregorian calendar.
//!
//! [`days_in_month`] is the only place that knows how long a month is.
//! Month/year arithmetic and month/year boundaries both go through it, so
//! clamping and "end of month" can never disagree.

/// Whether `year` is a leap year (astronomical numbering, 1 BC is `0`).
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Number of days in the zero-based `month0` (0 = January) of `year`.
///
/// # Panics
///
/// Panics if `month0` is not in `0..=11`.
///
/// # Examples
///
/// ```
/// use calendar_instant::days_in_month;
///
/// assert_eq!(days_in_month(2024, 1), 29);
/// assert_eq!(days_in_month(2023, 1), 28);
/// assert_eq!(days_in_month(2024, 3), 30);
/// ```
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        _ => panic!("month index out of range: {month0} (must be 0..=11)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMON: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    const LEAP: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    #[test]
    fn test_month_lengths_common_year() {
        for (m, expected) in COMMON.iter().enumerate() {
            assert_eq!(days_in_month(2023, m as u32), *expected, "month0 {m}");
        }
    }

    #[test]
    fn test_month_lengths_leap_year() {
        for (m, expected) in LEAP.iter().enumerate() {
            assert_eq!(days_in_month(2024, m as u32), *expected, "month0 {m}");
        }
    }

    #[test]
    fn test_century_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(1600));
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
    }

    #[test]
    fn test_proleptic_negative_years() {
        // Year 0 (1 BC) and -4 (5 BC) are leap years in the proleptic calendar.
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-1));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn test_agrees_with_chrono() {
        use chrono::{Datelike, NaiveDate};
        for year in [1900, 1999, 2000, 2023, 2024, 2100] {
            for m in 0..12u32 {
                let first = NaiveDate::from_ymd_opt(year, m + 1, 1).unwrap();
                let next = if m == 11 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, m + 2, 1).unwrap()
                };
                let last = next.pred_opt().unwrap();
                assert_eq!(last.month(), first.month());
                assert_eq!(days_in_month(year, m), last.day(), "{year}-{}", m + 1);
            }
        }
    }

    #[test]
    #[should_panic(expected = "month index out of range")]
    fn test_month_index_out_of_range_panics() {
        days_in_month(2024, 12);
    }
}
