//! Earnings summaries over the shift collection.

use crate::libs::shift::Shift;
use crate::libs::week::{week_key, WeekAnchor};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net and gross totals, summed independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MoneyPair {
    pub net: Decimal,
    pub gross: Decimal,
}

/// The three summary figures shown by the `sum` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    /// Totals for the week containing the reference date.
    pub week: MoneyPair,
    pub all_time: MoneyPair,
    /// Average hourly rates over all recorded working time; `None` when no
    /// working minutes exist yet, or when the totals are too large to scale
    /// into a rate.
    pub average_hourly: Option<MoneyPair>,
}

/// Folds the whole collection into a [`SummaryView`].
///
/// Recomputed from scratch on every call; records whose date falls in the
/// reference date's week bucket contribute to the weekly pair as well as the
/// all-time pair. Totals saturate at the `Decimal` range boundary rather than
/// overflow.
pub fn summarize(shifts: &[Shift], reference: NaiveDate, anchor: WeekAnchor) -> SummaryView {
    let current = week_key(reference, anchor);
    let mut week = MoneyPair::default();
    let mut all_time = MoneyPair::default();
    let mut working_minutes: i64 = 0;

    for shift in shifts {
        all_time.net = all_time.net.saturating_add(shift.net);
        all_time.gross = all_time.gross.saturating_add(shift.gross);
        working_minutes = working_minutes.saturating_add(shift.working_minutes);
        if week_key(shift.date, anchor) == current {
            week.net = week.net.saturating_add(shift.net);
            week.gross = week.gross.saturating_add(shift.gross);
        }
    }

    let average_hourly = if working_minutes > 0 {
        let minutes = Decimal::from(working_minutes);
        match (per_hour(all_time.net, minutes), per_hour(all_time.gross, minutes)) {
            (Some(net), Some(gross)) => Some(MoneyPair { net, gross }),
            _ => None,
        }
    } else {
        None
    };

    SummaryView {
        week,
        all_time,
        average_hourly,
    }
}

/// Scales a total into a per-hour rate; `None` when the scaled figure leaves
/// `Decimal` range.
fn per_hour(total: Decimal, minutes: Decimal) -> Option<Decimal> {
    total.checked_mul(Decimal::from(60))?.checked_div(minutes)
}
