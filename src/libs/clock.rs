//! Clock-time parsing and duration arithmetic.
//!
//! All shift math is carried out in whole minutes since midnight. Input times
//! arrive as text in either the 12-hour form (`H:MM AM/PM`) or, when
//! configured, the 24-hour form (`HH:MM`), and every parse failure is a
//! recognized outcome rather than an error: durations over unparsable input
//! degrade to zero so a malformed record never aborts a calculation pass.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Minutes in one day, used for the midnight rollover adjustment.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Clock-time notation accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// `H:MM AM/PM` with a 1-2 digit hour in 1-12 and a 2-digit minute.
    #[default]
    TwelveHour,
    /// `HH:MM` on the 24-hour clock.
    TwentyFourHour,
}

/// One break interval within a shift, stored as raw clock text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEntry {
    pub start: String,
    pub end: String,
}

impl BreakEntry {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Parses a `START-END` pair as given on the command line,
    /// e.g. `12:15 PM-12:45 PM`.
    pub fn parse(text: &str) -> Option<Self> {
        let (start, end) = text.split_once('-')?;
        let start = start.trim();
        let end = end.trim();
        if start.is_empty() || end.is_empty() {
            return None;
        }
        Some(Self::new(start, end))
    }
}

/// Parses a clock time into minutes since midnight.
///
/// In 12-hour mode the accepted shape is `H:MM AM/PM`: hour 1-12, exactly two
/// minute digits, case-insensitive meridiem, optional surrounding whitespace.
/// Anything else, including 24-hour times like `13:00 PM`, returns `None`.
/// `12:xx AM` maps to hour zero and `12:xx PM` to noon.
pub fn parse_time_of_day(text: &str, format: TimeFormat) -> Option<i64> {
    match format {
        TimeFormat::TwelveHour => parse_twelve_hour(text),
        TimeFormat::TwentyFourHour => parse_twenty_four_hour(text),
    }
}

fn parse_twelve_hour(text: &str) -> Option<i64> {
    let lower = text.trim().to_ascii_lowercase();
    let (clock, is_pm) = if let Some(rest) = lower.strip_suffix("am") {
        (rest.trim_end(), false)
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest.trim_end(), true)
    } else {
        return None;
    };
    let (hour_text, minute_text) = clock.split_once(':')?;
    if hour_text.is_empty() || hour_text.len() > 2 || !hour_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if minute_text.len() != 2 || !minute_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: i64 = hour_text.parse().ok()?;
    let minute: i64 = minute_text.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }
    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (hour, false) => hour,
        (hour, true) => hour + 12,
    };
    Some(hour * 60 + minute)
}

fn parse_twenty_four_hour(text: &str) -> Option<i64> {
    let time = NaiveTime::parse_from_str(text.trim(), "%H:%M").ok()?;
    Some(time.hour() as i64 * 60 + time.minute() as i64)
}

/// Minutes elapsed between two clock times.
///
/// An empty or unparsable side yields 0. A negative span is taken as a
/// forward crossing of midnight and shifted by one day, so an overnight
/// `11:00 PM` - `1:00 AM` shift counts 120 minutes. Spans of a full day or
/// more cannot be represented.
pub fn elapsed_minutes(start: &str, end: &str, format: TimeFormat) -> i64 {
    if start.trim().is_empty() || end.trim().is_empty() {
        return 0;
    }
    let start = match parse_time_of_day(start, format) {
        Some(minutes) => minutes,
        None => return 0,
    };
    let end = match parse_time_of_day(end, format) {
        Some(minutes) => minutes,
        None => return 0,
    };
    let span = end - start;
    if span < 0 {
        span + MINUTES_PER_DAY
    } else {
        span
    }
}

/// Sums the durations of a list of break intervals in entry order.
/// A pair missing either side contributes zero.
pub fn total_break_minutes(breaks: &[BreakEntry], format: TimeFormat) -> i64 {
    breaks.iter().map(|b| elapsed_minutes(&b.start, &b.end, format)).sum()
}
