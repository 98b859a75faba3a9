use crate::db::shifts::Shifts;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

// Arguments for the delete command.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(help = "Identifiers of the shifts to delete")]
    ids: Vec<i64>,
    #[arg(long, short, help = "Skip the confirmation prompt")]
    force: bool,
}

// Runs the delete command to remove recorded shifts.
pub fn cmd(args: DeleteArgs) -> Result<()> {
    if args.ids.is_empty() {
        msg_error!(Message::NoShiftIdsProvided);
        return Ok(());
    }

    if !args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteShifts(args.ids.len()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut shifts_db = Shifts::new()?;
    let mut deleted: usize = 0;
    for id in &args.ids {
        if shifts_db.delete(*id)? {
            deleted += 1;
        } else {
            msg_warning!(Message::ShiftNotFound(*id));
        }
    }

    msg_success!(Message::ShiftsDeleted(deleted));
    Ok(())
}
