use crate::db::shifts::Shifts;
use crate::libs::messages::Message;
use crate::libs::view::{DisplayMode, View};
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, short, help = "Only show shifts for this date (YYYY-MM-DD or 'today')")]
    date: Option<String>,
    #[arg(long, short, value_enum, default_value = "net", help = "Earnings column to display")]
    mode: DisplayMode,
}

// Runs the list command to display recorded shifts.
pub fn cmd(args: ListArgs) -> Result<()> {
    let mut shifts_db = Shifts::new()?;

    let shifts = match &args.date {
        Some(date) => {
            let date = parse_date(date)?;
            let shifts = shifts_db.fetch_by_date(date)?;
            if shifts.is_empty() {
                msg_info!(Message::NoShiftsForDate(date.to_string()));
                return Ok(());
            }
            shifts
        }
        None => {
            let shifts = shifts_db.fetch_all()?;
            if shifts.is_empty() {
                msg_info!(Message::NoShiftsRecorded);
                return Ok(());
            }
            shifts
        }
    };

    View::shifts(&shifts, args.mode)?;

    // Break detail only makes sense for a single-day view
    if args.date.is_some() {
        for shift in shifts.iter().filter(|shift| !shift.breaks.is_empty()) {
            View::breaks(shift)?;
        }
    }

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
