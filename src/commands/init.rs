//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard that guides users through
//! configuring dashtrack for first-time use: tracker engine settings
//! (MPG, fuel price, week convention, clock format) and the optional
//! sync server address.

use crate::libs::config::{Config, CONFIG_FILE_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::fs;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    ///
    /// When specified, this flag deletes the current configuration file,
    /// resetting the application to built-in defaults.
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// Handles configuration setup with an interactive wizard for first-time
/// setup, or configuration removal when `--delete` is used.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    // Handle deletion mode - exit early after cleanup
    if init_args.delete {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(&config_path)?;
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_warning!(Message::ConfigFileNotFound);
        }
        return Ok(());
    }

    // Run interactive configuration wizard
    // This will prompt the user to select and configure various modules
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
