//! Permissive date parsing for TimeQA interval bounds
//!
//! Interval bounds in the corpus range from bare years ("1995") through
//! month-year forms ("Mar 1995") to full dates ("14 March 1995"). Each
//! bound reduces to a `TimePoint`; the day is discarded.

use chrono::{Datelike, NaiveDate};

use super::types::TimePoint;

/// Full-date formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Month-year formats, tried with a synthetic first-of-month day.
const MONTH_FORMATS: &[&str] = &["%B %Y", "%b %Y", "%m/%Y"];

/// Parse one interval bound into a `TimePoint`.
///
/// A bare year defaults to January, matching how a year-only bound is
/// treated everywhere else in the pipeline. Returns `None` when no
/// format matches.
pub fn parse_point(raw: &str) -> Option<TimePoint> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(year) = s.parse::<i32>() {
        return Some(TimePoint::from_year(year));
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(TimePoint::new(date.year(), date.month()));
        }
    }

    // Month-year inputs carry no day, and NaiveDate refuses to parse
    // without one; pin day 1 and retry.
    let with_day = format!("{s} 1");
    for format in MONTH_FORMATS {
        let format_with_day = format!("{format} %d");
        if let Ok(date) = NaiveDate::parse_from_str(&with_day, &format_with_day) {
            return Some(TimePoint::new(date.year(), date.month()));
        }
    }

    None
}
