//! Shift recording command.
//!
//! Records a completed shift: clock times, gross pay, odometer readings,
//! fuel price, and any breaks taken. Values missing from the command line
//! are collected interactively, so `dashtrack add` with no flags walks
//! through a full entry while a fully-flagged invocation records silently.
//!
//! All derived figures (working time, gas cost, net profit, hourly rate)
//! are computed at entry time and stored alongside the raw inputs.

use crate::db::shifts::Shifts;
use crate::libs::clock::BreakEntry;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::shift::{derive_shift, RawShift};
use crate::libs::view::{DisplayMode, View};
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

/// Command-line arguments for the add command.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long, short, default_value = "today", help = "Shift date (YYYY-MM-DD or 'today')")]
    date: String,
    #[arg(long, help = "Clock-in time, e.g. '9:05 AM'")]
    start: Option<String>,
    #[arg(long, help = "Clock-out time, e.g. '7:30 PM'")]
    end: Option<String>,
    #[arg(long, help = "Gross pay for the shift")]
    gross: Option<String>,
    #[arg(long, help = "Odometer reading at clock-in")]
    miles_start: Option<String>,
    #[arg(long, help = "Odometer reading at clock-out")]
    miles_end: Option<String>,
    #[arg(long, help = "Price per gallon (falls back to the configured default)")]
    price: Option<String>,
    #[arg(long = "break", value_name = "START-END", help = "Break as START-END; repeat for several")]
    breaks: Vec<String>,
}

/// Executes the add command.
///
/// Resolves missing inputs interactively, derives the shift figures under
/// the active configuration, and persists the result.
pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?.tracker_or_default();
    let date = parse_date(&args.date)?;

    // Any missing core field switches the command into interactive entry
    let interactive = args.start.is_none()
        || args.end.is_none()
        || args.gross.is_none()
        || args.miles_start.is_none()
        || args.miles_end.is_none();

    let start = prompt_missing(args.start, Message::PromptShiftStart)?;
    let end = prompt_missing(args.end, Message::PromptShiftEnd)?;
    let gross = prompt_missing(args.gross, Message::PromptGrossPay)?;
    let miles_start = prompt_missing(args.miles_start, Message::PromptMilesStart)?;
    let miles_end = prompt_missing(args.miles_end, Message::PromptMilesEnd)?;

    let price_per_gal = match args.price {
        Some(price) => Some(price),
        None if interactive => prompt_price()?,
        None => None,
    };

    let breaks = if !args.breaks.is_empty() {
        parse_breaks(args.breaks.iter().map(String::as_str))?
    } else if interactive {
        prompt_breaks()?
    } else {
        Vec::new()
    };

    let raw = RawShift {
        date,
        start,
        end,
        gross,
        miles_start,
        miles_end,
        price_per_gal,
        breaks,
    };
    let shift = derive_shift(&raw, &config);

    let recorded = Shifts::new()?.create(&shift)?;

    msg_success!(Message::ShiftRecorded(recorded.id.unwrap_or(0)));
    View::shifts(&[recorded], DisplayMode::Net)?;
    Ok(())
}

/// Returns the flag value, or prompts for one when absent.
///
/// Empty answers are allowed: the derivation engine treats missing clock
/// and money fields as zero rather than rejecting the entry.
fn prompt_missing(value: Option<String>, prompt: Message) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .allow_empty(true)
            .interact_text()?),
    }
}

fn prompt_price() -> Result<Option<String>> {
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPricePerGal.to_string())
        .allow_empty(true)
        .interact_text()?;

    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

fn prompt_breaks() -> Result<Vec<BreakEntry>> {
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptBreaks.to_string())
        .allow_empty(true)
        .interact_text()?;

    parse_breaks(text.split('|'))
}

/// Parses `START-END` break pairs, rejecting anything malformed.
fn parse_breaks<'a, I>(items: I) -> Result<Vec<BreakEntry>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut breaks = Vec::new();
    for item in items {
        let text = item.trim();
        if text.is_empty() {
            continue;
        }
        match BreakEntry::parse(text) {
            Some(entry) => breaks.push(entry),
            None => msg_bail_anyhow!(Message::InvalidBreakPair(text.to_string())),
        }
    }
    Ok(breaks)
}

// Parses the date string into a NaiveDate.
fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(date_str.to_string())))
    }
}
