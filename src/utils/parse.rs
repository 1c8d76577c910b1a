//! Lenient coercions used while normalizing raw CSV cells.
//!
//! Both functions are total: anything they cannot make sense of maps to the
//! neutral value (`None` for dates, `0.0` for numbers).

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};

/// Date layouts accepted as the leading part of a cell, in priority order.
/// Day-first comes before month-first since the exports are pt-BR; two-digit
/// years are only tried once every four-digit layout has failed.
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%m/%d/%Y",
    "%d/%m/%y",
    "%d-%m-%y",
    "%d.%m.%y",
    "%m/%d/%y",
];

/// Time parts allowed after the date ("10:30", "T10:30:00", ", 10:30 AM").
const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S",
    "%H:%M:%S%.f",
    "%H:%M",
    "%I:%M %p",
    "%I:%M:%S %p",
];

/// `%Y` happily reads "24" as year 24; anything before 1000 is a misparse.
const MIN_YEAR: i32 = 1000;

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    DATE_FORMATS.iter().find_map(|fmt| {
        let (date, rest) = NaiveDate::parse_and_remainder(value, fmt).ok()?;
        (date.year() >= MIN_YEAR && is_time_suffix(rest)).then_some(date)
    })
}

fn is_time_suffix(rest: &str) -> bool {
    if rest.is_empty() {
        return true;
    }

    let time = rest.trim_start_matches(|c: char| c == 'T' || c == ',' || c.is_whitespace());
    !time.is_empty()
        && TIME_FORMATS
            .iter()
            .any(|fmt| NaiveTime::parse_from_str(time, fmt).is_ok())
}

pub fn parse_number(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Rounds half away from zero to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
