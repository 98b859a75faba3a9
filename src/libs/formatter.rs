//! Presentation-boundary formatting.
//!
//! The engines keep full precision; every rounding to two fractional digits
//! happens here, at display and export time. Tables and export rows share
//! these helpers so a figure reads the same everywhere.

use crate::libs::clock::BreakEntry;
use rust_decimal::Decimal;

/// Placeholder shown where no hourly rate exists (zero working minutes).
/// A literal "0.00" would read as a real rate, so absence renders as a dash.
pub const HOURLY_PLACEHOLDER: &str = "--";

/// Formats whole minutes as "HH:MM". Negative input clamps to "00:00".
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a decimal quantity with exactly two fractional digits.
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Formats an hourly rate, or the placeholder when none exists.
pub fn format_hourly(hourly: Option<Decimal>) -> String {
    match hourly {
        Some(rate) => format_money(rate),
        None => HOURLY_PLACEHOLDER.to_string(),
    }
}

/// Joins break pairs as `start-end` separated by `|`, the shape used in
/// exports and the list view.
pub fn format_breaks(breaks: &[BreakEntry]) -> String {
    breaks
        .iter()
        .map(|b| format!("{}-{}", b.start, b.end))
        .collect::<Vec<_>>()
        .join("|")
}
