//! Permissive calendar date recognition.
//!
//! Accepts the shapes people actually type into spreadsheets: ISO 8601 and
//! RFC 3339/2822 timestamps, slash and dash separated numeric dates, and
//! dates with English month names, each optionally followed by a time of
//! day. Calendar validity is enforced, so `2023-02-30` is rejected.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

/// `YYYY` or `YYYY-MM`, which chrono cannot parse into a full date.
static PARTIAL_ISO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}(-(0[1-9]|1[0-2]))?$").expect("Invalid partial ISO 8601 regex")
});

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d %b %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%B %d %Y",
    "%B %d, %Y",
];

const TIME_FORMATS: &[&str] = &[
    "%H:%M",
    "%H:%M:%S",
    "%H:%M:%S%.f",
    "%I:%M %p",
    "%I:%M:%S %p",
];

pub fn is_valid_date(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }

    if PARTIAL_ISO_REGEX.is_match(value)
        || DateTime::parse_from_rfc3339(value).is_ok()
        || DateTime::parse_from_rfc2822(value).is_ok()
    {
        return true;
    }

    DATE_FORMATS.iter().any(|date_fmt| {
        NaiveDate::parse_from_str(value, date_fmt).is_ok()
            || TIME_FORMATS
                .iter()
                .any(|time_fmt| parses_with_time(value, date_fmt, time_fmt))
    })
}

fn parses_with_time(value: &str, date_fmt: &str, time_fmt: &str) -> bool {
    let separators: &[&str] = if date_fmt == "%Y-%m-%d" {
        &[" ", "T"]
    } else {
        &[" "]
    };
    separators.iter().any(|sep| {
        let format = format!("{date_fmt}{sep}{time_fmt}");
        NaiveDateTime::parse_from_str(value, &format).is_ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iso_forms() {
        for value in [
            "2024",
            "2024-03",
            "2024-03-15",
            "2024-03-15T10:30",
            "2024-03-15T10:30:45",
            "2024-03-15T10:30:45.250",
            "2024-03-15T10:30:45Z",
            "2024-03-15T10:30:45+02:00",
            "2024-03-15 10:30",
        ] {
            assert!(is_valid_date(value), "{value} should be a date");
        }
    }

    #[test]
    fn accepts_common_spreadsheet_forms() {
        for value in [
            "03/15/2024",
            "3/5/2024",
            "2024/03/15",
            "03-15-2024",
            "15 Mar 2024",
            "Mar 15 2024",
            "Mar 15, 2024",
            "March 15, 2024",
            "15 March 2024",
            "03/15/2024 09:15 PM",
            "Fri, 15 Mar 2024 10:30:00 +0000",
        ] {
            assert!(is_valid_date(value), "{value} should be a date");
        }
    }

    #[test]
    fn rejects_non_dates() {
        for value in ["", "   ", "soon", "2024-13-01", "2023-02-30", "15/03/2024", "2024-03-15x"] {
            assert!(!is_valid_date(value), "{value} should not be a date");
        }
    }
}
