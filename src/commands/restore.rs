use crate::db::shifts::Shifts;
use crate::libs::backup::{read_snapshot, restore};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

// Arguments for the restore command.
#[derive(Debug, Args)]
pub struct RestoreArgs {
    #[arg(help = "Backup file to restore from")]
    input: PathBuf,
}

// Runs the restore command to merge a snapshot into local storage.
pub fn cmd(args: RestoreArgs) -> Result<()> {
    if !args.input.exists() {
        msg_error!(Message::BackupFileNotFound(args.input.display().to_string()));
        return Ok(());
    }

    let config = Config::read()?.tracker_or_default();
    let snapshot = read_snapshot(&args.input)?;

    let mut shifts_db = Shifts::new()?;
    let (imported, skipped) = restore(&snapshot, &mut shifts_db, &config)?;

    msg_success!(Message::RestoreCompleted(imported, skipped));
    Ok(())
}
