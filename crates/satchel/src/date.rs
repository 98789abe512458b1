//! Date parsing, rendering, and days-in-month arithmetic.

use std::collections::HashMap;

use chrono::{Datelike, Month, NaiveDate};
use thiserror::Error;

/// Fixed message stored under `"Err"` when a date fails to parse.
const DATE_LOAD_ERROR: &str = "There was an error loading the date!";

#[derive(Debug, Error)]
pub enum DateError {
    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },

    #[error("unknown month name: {0}")]
    UnknownMonth(String),
}

/// Parses a `YYYY-MM-DD` date and renders it long-form, e.g. `March 5 2024`.
///
/// On failure the supplied header map gains an `"Err"` entry with a fixed
/// message (the entry is never removed by this module) and the parse error
/// is returned.
pub fn long_form_date(
    date: &str,
    headers: &mut HashMap<String, String>,
) -> Result<String, DateError> {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => Ok(parsed.format("%B %-d %Y").to_string()),
        Err(source) => {
            headers.insert("Err".to_string(), DATE_LOAD_ERROR.to_string());
            Err(DateError::InvalidDate {
                input: date.to_string(),
                source,
            })
        }
    }
}

/// Days in a month, selected by full English month name.
///
/// February is decided by probing the length of the year: if December 31
/// falls on day-of-year 366 the year is a leap year. Unrecognized month
/// names fall through to 31.
pub fn days_in_month_by_name(month: &str, year: i32) -> u32 {
    match month {
        "January" | "March" | "May" | "July" | "August" | "October" | "December" => 31,
        "April" | "June" | "September" | "November" => 30,
        "February" => {
            let year_length = NaiveDate::from_ymd_opt(year, 12, 31).map_or(365, |d| d.ordinal());
            if year_length > 365 { 29 } else { 28 }
        }
        _ => 31,
    }
}

/// Days in a month via the calendar rule: February 29 exists exactly when
/// the date itself is representable.
pub fn days_in(month: Month, year: i32) -> u32 {
    match month {
        Month::February => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Parses an English month name into a [`Month`].
///
/// Accepts the full name and, as a superset of the historical behavior, the
/// three-letter abbreviation, case-insensitively. Failures are logged and
/// returned.
pub fn month_from_name(name: &str) -> Result<Month, DateError> {
    name.parse::<Month>().map_err(|_| {
        tracing::warn!(name, "unrecognized month name");
        DateError::UnknownMonth(name.to_string())
    })
}

/// Membership test for a month in an ordered list of months.
pub fn months_contain(candidate: Month, months: &[Month]) -> bool {
    months.contains(&candidate)
}

/// Ordinal suffix for a day of the month: `1st`, `2nd`, `3rd`, `4th`, ...
///
/// Only 1/21/31, 2/22 and 3/23 get special suffixes; 11, 12 and 13 take the
/// default `th` like every other day.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Renders a date as `Month Dayth, Year`, e.g. `March 3rd, 2024`.
pub fn format_with_ordinal(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}
