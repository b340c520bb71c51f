//! Month and year validation for calendar periods.
//!
//! Calendars cover one month of one year. Years are restricted to 1900-2099
//! and months are accepted by full name or three-letter abbreviation.

use chrono::{Datelike, Month, NaiveDate};

use crate::error::{DaybookError, DaybookResult};

const MONTH_NAMES: [(&str, Month); 23] = [
    ("jan", Month::January),
    ("january", Month::January),
    ("feb", Month::February),
    ("february", Month::February),
    ("mar", Month::March),
    ("march", Month::March),
    ("apr", Month::April),
    ("april", Month::April),
    ("may", Month::May),
    ("jun", Month::June),
    ("june", Month::June),
    ("jul", Month::July),
    ("july", Month::July),
    ("aug", Month::August),
    ("august", Month::August),
    ("sep", Month::September),
    ("september", Month::September),
    ("oct", Month::October),
    ("october", Month::October),
    ("nov", Month::November),
    ("november", Month::November),
    ("dec", Month::December),
    ("december", Month::December),
];

/// Column headers for the Sunday-first display layout.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Parse a month name ("Jan", "january", "DEC", ...) case-insensitively.
///
/// Use [`Month::name`] for the canonical full name.
pub fn validate_month(input: &str) -> DaybookResult<Month> {
    let lower = input.trim().to_lowercase();

    MONTH_NAMES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, month)| *month)
        .ok_or_else(|| DaybookError::InvalidMonth(input.to_string()))
}

/// Parse a four-digit year starting with "19" or "20".
pub fn validate_year(input: &str) -> DaybookResult<i32> {
    let trimmed = input.trim();

    let well_formed = trimmed.len() == 4
        && trimmed.bytes().all(|b| b.is_ascii_digit())
        && (trimmed.starts_with("19") || trimmed.starts_with("20"));

    if !well_formed {
        return Err(DaybookError::InvalidYear(input.to_string()));
    }

    trimmed
        .parse()
        .map_err(|_| DaybookError::InvalidYear(input.to_string()))
}

/// Proleptic Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: Month) -> u32 {
    match month {
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Weekday of the 1st of the month, Monday = 0.
pub fn weekday_of_first(year: i32, month: Month) -> DaybookResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
        .ok_or_else(|| DaybookError::InvalidYear(year.to_string()))?;

    Ok(first.weekday().num_days_from_monday())
}

/// Map a Monday-first weekday index to its column in the Sunday-first layout.
pub fn sunday_first_column(monday_index: u32) -> usize {
    ((monday_index + 1) % 7) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- validate_month ---

    #[test]
    fn month_accepts_full_and_abbreviated_names() {
        assert_eq!(validate_month("Jan").unwrap(), Month::January);
        assert_eq!(validate_month("January").unwrap(), Month::January);
        assert_eq!(validate_month("dec").unwrap(), Month::December);
        assert_eq!(validate_month("December").unwrap(), Month::December);
        assert_eq!(validate_month("SEP").unwrap(), Month::September);
        assert_eq!(validate_month("may").unwrap(), Month::May);
    }

    #[test]
    fn month_canonical_name() {
        assert_eq!(validate_month("feb").unwrap().name(), "February");
        assert_eq!(validate_month("NOVEMBER").unwrap().name(), "November");
    }

    #[test]
    fn month_rejects_garbage() {
        for input in ["Febr", "13", "", "Sept", "Janu"] {
            assert!(
                matches!(validate_month(input), Err(DaybookError::InvalidMonth(_))),
                "expected {input:?} to be rejected"
            );
        }
    }

    // --- validate_year ---

    #[test]
    fn year_accepts_1900_to_2099() {
        assert_eq!(validate_year("2020").unwrap(), 2020);
        assert_eq!(validate_year("1999").unwrap(), 1999);
        assert_eq!(validate_year("1900").unwrap(), 1900);
        assert_eq!(validate_year("2099").unwrap(), 2099);
    }

    #[test]
    fn year_rejects_out_of_range_and_malformed() {
        for input in ["1800", "2150", "20A0", "202", "20201", "", "-2020"] {
            assert!(
                matches!(validate_year(input), Err(DaybookError::InvalidYear(_))),
                "expected {input:?} to be rejected"
            );
        }
    }

    // --- days_in_month ---

    #[test]
    fn days_in_month_regular_and_leap() {
        assert_eq!(days_in_month(2021, Month::February), 28);
        assert_eq!(days_in_month(2020, Month::February), 29);
        assert_eq!(days_in_month(2021, Month::November), 30);
        assert_eq!(days_in_month(2021, Month::January), 31);
    }

    #[test]
    fn days_in_month_century_rule() {
        assert_eq!(days_in_month(1900, Month::February), 28);
        assert_eq!(days_in_month(2000, Month::February), 29);
    }

    #[test]
    fn days_in_month_agrees_with_chrono_for_whole_range() {
        for year in 1900..=2099 {
            for number in 1..=12u32 {
                let month = Month::try_from(number as u8).unwrap();
                let first = NaiveDate::from_ymd_opt(year, number, 1).unwrap();
                let next = if number == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, number + 1, 1).unwrap()
                };
                let expected = (next - first).num_days() as u32;
                assert_eq!(days_in_month(year, month), expected, "{year}-{number}");
            }
        }
    }

    // --- weekday ---

    #[test]
    fn weekday_of_first_is_monday_based() {
        // 2021-01-01 was a Friday, 2024-04-01 a Monday, 2023-01-01 a Sunday
        assert_eq!(weekday_of_first(2021, Month::January).unwrap(), 4);
        assert_eq!(weekday_of_first(2024, Month::April).unwrap(), 0);
        assert_eq!(weekday_of_first(2023, Month::January).unwrap(), 6);
    }

    #[test]
    fn sunday_first_column_offset() {
        assert_eq!(sunday_first_column(6), 0); // Sunday
        assert_eq!(sunday_first_column(0), 1); // Monday
        assert_eq!(sunday_first_column(4), 5); // Friday
        assert_eq!(WEEKDAY_HEADERS[sunday_first_column(5)], "Sat");
    }
}
