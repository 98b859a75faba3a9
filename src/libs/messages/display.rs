//! Display implementation for user-facing messages.
//!
//! All message text lives in this one match, so wording stays consistent and
//! a variant can't be shown without an explicit formatting decision.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration file removed.".to_string(),
            Message::ConfigFileNotFound => "No configuration file found.".to_string(),
            Message::ConfigModuleTracker => "Tracker configuration".to_string(),
            Message::ConfigModuleServer => "Server configuration".to_string(),
            Message::PromptSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptMpg => "Vehicle fuel economy (miles per gallon)".to_string(),
            Message::PromptDefaultPrice => "Default price per gallon".to_string(),
            Message::PromptWeekAnchor => "Week convention".to_string(),
            Message::PromptTimeFormat => "Clock format".to_string(),
            Message::PromptServerApiUrl => "Server API URL".to_string(),

            // === SHIFT MESSAGES ===
            Message::ShiftRecorded(id) => format!("Shift #{} recorded.", id),
            Message::ShiftUpdated(id) => format!("Shift #{} updated.", id),
            Message::ShiftNotFound(id) => format!("Shift with ID {} not found.", id),
            Message::ShiftsDeleted(count) => format!("Deleted {} shift(s).", count),
            Message::NoShiftIdsProvided => "No shift IDs provided for deletion.".to_string(),
            Message::ConfirmDeleteShifts(count) => format!("Are you sure you want to delete {} shift(s)?", count),
            Message::ConfirmShiftUpdate => "Save changes?".to_string(),
            Message::OperationCancelled => "Operation cancelled.".to_string(),
            Message::NoShiftsRecorded => "No shifts recorded yet.".to_string(),
            Message::NoShiftsForDate(date) => format!("No shifts found for {}.", date),
            Message::EditingShift(id) => format!("Editing shift #{}", id),
            Message::InvalidBreakPair(text) => format!("Break '{}' is not a START-END pair.", text),
            Message::InvalidDateFormat(text) => format!("Invalid date '{}'. Use YYYY-MM-DD or 'today'.", text),

            // === SHIFT ENTRY PROMPTS ===
            Message::PromptShiftDate => "Shift date (YYYY-MM-DD)".to_string(),
            Message::PromptShiftStart => "Start time".to_string(),
            Message::PromptShiftEnd => "End time".to_string(),
            Message::PromptGrossPay => "Gross pay".to_string(),
            Message::PromptMilesStart => "Odometer at start".to_string(),
            Message::PromptMilesEnd => "Odometer at end".to_string(),
            Message::PromptPricePerGal => "Price per gallon (blank for default)".to_string(),
            Message::PromptBreaks => "Breaks as START-END, separated by | (blank for none)".to_string(),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(date) => format!("📊 Earnings summary as of {}", date),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::NoDataToExport => "No shifts to export.".to_string(),

            // === BACKUP MESSAGES ===
            Message::BackupCompleted(path) => format!("Backup written to: {}", path),
            Message::BackupFileNotFound(path) => format!("Backup file not found: {}", path),
            Message::RestoreCompleted(imported, skipped) => {
                format!("Restore complete: {} imported, {} skipped (date already present).", imported, skipped)
            }
            Message::BackupVersionUnsupported(version) => format!("Unsupported backup version: {}", version),

            // === SYNC MESSAGES ===
            Message::ServerNotConfigured => "No server configured. Run 'dashtrack init' to set one up.".to_string(),
            Message::SyncCompleted(count) => format!("Synced {} shift(s) to the server.", count),
            Message::SyncFailed(reason) => format!("Sync failed: {}", reason),
        };
        write!(f, "{}", text)
    }
}
