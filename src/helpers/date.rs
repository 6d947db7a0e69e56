//! Date helper functions

use chrono::{DateTime, Datelike, TimeZone};

/// Format a date as "YYYY Month-name Ordinal-day"
///
/// # Examples
/// ```ignore
/// long_date(&date) // -> "2021 June 1st"
/// ```
pub fn long_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{} {}", date.format("%Y %B"), ordinal(date.day()))
}

/// Format a date as "YYYY-MM-DD"
pub fn short_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%d").to_string()
}

/// English ordinal form of a day of month (1st, 2nd, 3rd, 4th, ...)
fn ordinal(day: u32) -> String {
    let suffix = match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", day, suffix)
}
