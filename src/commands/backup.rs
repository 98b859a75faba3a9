use crate::db::shifts::Shifts;
use crate::libs::backup::{default_backup_path, write_snapshot, Snapshot};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

// Arguments for the backup command.
#[derive(Debug, Args)]
pub struct BackupArgs {
    #[arg(short, long, help = "Destination file (defaults to a timestamped name)")]
    output: Option<PathBuf>,
}

// Runs the backup command to snapshot all shifts into a JSON file.
pub fn cmd(args: BackupArgs) -> Result<()> {
    let entries = Shifts::new()?.fetch_all()?;
    let snapshot = Snapshot::capture(entries);

    let path = args.output.unwrap_or_else(default_backup_path);
    write_snapshot(&snapshot, &path)?;

    msg_success!(Message::BackupCompleted(path.display().to_string()));
    Ok(())
}
