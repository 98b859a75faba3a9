pub mod add;
pub mod backup;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod restore;
pub mod sum;
pub mod sync;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Record a shift")]
    Add(add::AddArgs),
    #[command(about = "List recorded shifts")]
    List(list::ListArgs),
    #[command(about = "Edit a recorded shift")]
    Edit(edit::EditArgs),
    #[command(about = "Delete recorded shifts")]
    Delete(delete::DeleteArgs),
    #[command(about = "Get earnings summary")]
    Sum(sum::SumArgs),
    #[command(about = "Export shifts to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Write a backup snapshot")]
    Backup(backup::BackupArgs),
    #[command(about = "Restore shifts from a backup snapshot")]
    Restore(restore::RestoreArgs),
    #[command(about = "Push all shifts to the configured server")]
    Sync,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Backup(args) => backup::cmd(args),
            Commands::Restore(args) => restore::cmd(args),
            Commands::Sync => sync::cmd().await,
        }
    }
}
