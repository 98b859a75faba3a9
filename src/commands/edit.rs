//! Shift editing command.
//!
//! Walks through every field of a recorded shift with the stored value
//! prefilled, then replaces the record wholesale. Derived figures are
//! recomputed from the edited inputs, never patched in place.

use crate::db::shifts::Shifts;
use crate::libs::clock::BreakEntry;
use crate::libs::config::Config;
use crate::libs::formatter::format_breaks;
use crate::libs::messages::Message;
use crate::libs::shift::{derive_shift, RawShift};
use crate::libs::view::{DisplayMode, View};
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Command-line arguments for the edit command.
#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(help = "Identifier of the shift to edit")]
    id: i64,
}

/// Executes the edit command.
pub fn cmd(args: EditArgs) -> Result<()> {
    let config = Config::read()?.tracker_or_default();
    let mut shifts_db = Shifts::new()?;

    let shift = match shifts_db.fetch(args.id)? {
        Some(shift) => shift,
        None => {
            msg_error!(Message::ShiftNotFound(args.id));
            return Ok(());
        }
    };

    msg_print!(Message::EditingShift(args.id), true);

    let stored = shift.to_raw();

    let date_text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptShiftDate.to_string())
        .default(stored.date.to_string())
        .interact_text()?;
    let date = parse_date(&date_text)?;

    let start = prompt_with_default(Message::PromptShiftStart, stored.start)?;
    let end = prompt_with_default(Message::PromptShiftEnd, stored.end)?;
    let gross = prompt_with_default(Message::PromptGrossPay, stored.gross)?;
    let miles_start = prompt_with_default(Message::PromptMilesStart, stored.miles_start)?;
    let miles_end = prompt_with_default(Message::PromptMilesEnd, stored.miles_end)?;
    let price = prompt_with_default(Message::PromptPricePerGal, stored.price_per_gal.unwrap_or_default())?;
    let breaks_text = prompt_with_default(Message::PromptBreaks, format_breaks(&stored.breaks))?;
    let breaks = parse_breaks(breaks_text.split('|'))?;

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmShiftUpdate.to_string())
        .default(true)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let raw = RawShift {
        date,
        start,
        end,
        gross,
        miles_start,
        miles_end,
        price_per_gal: if price.trim().is_empty() { None } else { Some(price) },
        breaks,
    };

    let mut updated = derive_shift(&raw, &config);
    updated.id = shift.id;
    shifts_db.update(&updated)?;

    msg_success!(Message::ShiftUpdated(args.id));
    View::shifts(&[updated], DisplayMode::Net)?;
    Ok(())
}

/// Prompts for a field with the stored value prefilled.
fn prompt_with_default(prompt: Message, default: String) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default)
        .allow_empty(true)
        .interact_text()?)
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
