//! Calendar-week bucketing for summaries.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Week grouping convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekAnchor {
    /// ISO-8601 weeks: Monday start, a week belongs to the year holding its
    /// Thursday.
    #[default]
    Iso,
    /// Sunday-start weeks: a week belongs to the year holding its Saturday.
    SundayStart,
}

/// Composite week bucket key. Week numbers repeat across years, so the year
/// is part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    pub week: u32,
    pub year: i32,
}

/// Computes the week bucket for a date.
///
/// Both conventions share one rule: move the date to its week's anchor day
/// (Thursday for ISO, Saturday for Sunday-start) and number weeks within the
/// anchor's year. A week spanning New Year therefore lands wholly in the year
/// that contains its anchor day. The ISO arm matches
/// [`chrono::Datelike::iso_week`].
pub fn week_key(date: NaiveDate, anchor: WeekAnchor) -> WeekKey {
    let offset = match anchor {
        WeekAnchor::Iso => 4 - date.weekday().number_from_monday() as i64,
        WeekAnchor::SundayStart => 6 - date.weekday().num_days_from_sunday() as i64,
    };
    let anchor_day = date + Duration::days(offset);
    WeekKey {
        week: (anchor_day.ordinal() - 1) / 7 + 1,
        year: anchor_day.year(),
    }
}
