use crate::db::shifts::Shifts;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::summary::summarize;
use crate::libs::view::{DisplayMode, View};
use crate::{msg_error_anyhow, msg_info, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(long, short, default_value = "today", help = "Reference date for the current week (YYYY-MM-DD or 'today')")]
    date: String,
    #[arg(long, short, value_enum, default_value = "net", help = "Earnings column to display")]
    mode: DisplayMode,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let config = Config::read()?.tracker_or_default();
    let date = parse_date(&args.date)?;

    let shifts = Shifts::new()?.fetch_all()?;
    if shifts.is_empty() {
        msg_info!(Message::NoShiftsRecorded);
        return Ok(());
    }

    let summary = summarize(&shifts, date, config.week_anchor);

    msg_print!(Message::SummaryHeader(date.to_string()), true);
    View::summary(&summary, args.mode)?;

    Ok(())
}

// Parses the date string into a NaiveDate.
fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(date_str.to_string())))
    }
}
