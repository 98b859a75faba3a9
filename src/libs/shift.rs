//! Shift records and the derived-field engine.
//!
//! A [`RawShift`] is the form snapshot exactly as entered: clock text, odometer
//! text, pay text, break pairs. [`derive_shift`] turns it into a [`Shift`] with
//! every derived figure recomputed from scratch. The engine is total: it never
//! fails and never rounds, so repeated edits cannot accumulate rounding error.
//! Rounding to two fractional digits happens only at display and export time.

use crate::libs::clock::{self, BreakEntry};
use crate::libs::config::TrackerConfig;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw input snapshot for one shift.
///
/// Numeric fields stay as text here: they are parsed leniently during
/// derivation (thousands separators stripped, unparsable values read as zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawShift {
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    pub gross: String,
    pub miles_start: String,
    pub miles_end: String,
    /// Fuel price per gallon; the configured default applies when absent.
    pub price_per_gal: Option<String>,
    pub breaks: Vec<BreakEntry>,
}

/// One recorded shift with its derived figures.
///
/// Records are immutable once persisted: an edit replaces the whole record at
/// its id after a fresh derivation pass. `id` is `None` until the storage
/// layer assigns one on first insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    pub shift_minutes: i64,
    pub break_minutes: i64,
    pub working_minutes: i64,
    pub gross: Decimal,
    pub gas_cost: Decimal,
    pub net: Decimal,
    pub miles_start: Decimal,
    pub miles_end: Decimal,
    pub miles_driven: Decimal,
    pub gallons: Decimal,
    pub price_per_gal: Decimal,
    /// Net earnings per hour; `None` for a zero-length working span, which
    /// renders as a placeholder rather than an implied $0/hr.
    pub hourly: Option<Decimal>,
    pub breaks: Vec<BreakEntry>,
}

impl Shift {
    /// Rebuilds the raw snapshot this record derives from, for edit and
    /// restore flows that re-run the derivation.
    pub fn to_raw(&self) -> RawShift {
        RawShift {
            date: self.date,
            start: self.start.clone(),
            end: self.end.clone(),
            gross: self.gross.to_string(),
            miles_start: self.miles_start.to_string(),
            miles_end: self.miles_end.to_string(),
            price_per_gal: Some(self.price_per_gal.to_string()),
            breaks: self.breaks.clone(),
        }
    }
}

/// Derives the full field set for one shift.
///
/// The steps, in data-dependency order:
/// 1. shift, break and working minutes from the clock text;
/// 2. miles driven as `miles_end - miles_start`, unclamped (a backwards
///    odometer entry flows through as a negative span);
/// 3. gallons as `miles_driven / mpg`, zero when the configured mpg is zero;
/// 4. gas cost, then net as `gross - gas_cost`;
/// 5. hourly as net over working hours, absent when no working time.
///
/// Intermediate values keep full decimal precision throughout. All arithmetic
/// is checked: a figure that would leave `Decimal` range reads as zero, and an
/// unrepresentable hourly rate reads as absent, the same degradation applied
/// to unreadable input.
pub fn derive_shift(raw: &RawShift, config: &TrackerConfig) -> Shift {
    let format = config.time_format;
    let shift_minutes = clock::elapsed_minutes(&raw.start, &raw.end, format);
    let break_minutes = clock::total_break_minutes(&raw.breaks, format);
    let working_minutes = (shift_minutes - break_minutes).max(0);

    let gross = parse_decimal(&raw.gross);
    let miles_start = parse_decimal(&raw.miles_start);
    let miles_end = parse_decimal(&raw.miles_end);
    let miles_driven = miles_end.checked_sub(miles_start).unwrap_or(Decimal::ZERO);
    let price_per_gal = raw
        .price_per_gal
        .as_deref()
        .and_then(clean_decimal)
        .unwrap_or(config.default_price_per_gal);
    // checked_div is None for a zero mpg as well as on overflow
    let gallons = miles_driven.checked_div(config.mpg).unwrap_or(Decimal::ZERO);
    let gas_cost = gallons.checked_mul(price_per_gal).unwrap_or(Decimal::ZERO);
    let net = gross.checked_sub(gas_cost).unwrap_or(Decimal::ZERO);
    let hourly = if working_minutes > 0 {
        net.checked_mul(Decimal::from(60))
            .and_then(|scaled| scaled.checked_div(Decimal::from(working_minutes)))
    } else {
        None
    };

    Shift {
        id: None,
        date: raw.date,
        start: raw.start.trim().to_string(),
        end: raw.end.trim().to_string(),
        shift_minutes,
        break_minutes,
        working_minutes,
        gross,
        gas_cost,
        net,
        miles_start,
        miles_end,
        miles_driven,
        gallons,
        price_per_gal,
        hourly,
        breaks: raw.breaks.clone(),
    }
}

/// Reads a decimal the way a form field is read: surrounding whitespace and
/// thousands separators are ignored, anything unparsable is zero.
pub fn parse_decimal(text: &str) -> Decimal {
    clean_decimal(text).unwrap_or(Decimal::ZERO)
}

fn clean_decimal(text: &str) -> Option<Decimal> {
    let cleaned = text.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}
