//! Data export command for external analysis and backup.
//!
//! Extracts every recorded shift into a standalone file for spreadsheets
//! or downstream tooling.
//!
//! ## Supported Export Formats
//!
//! - **CSV**: Comma-separated values for spreadsheet applications
//! - **JSON**: Structured data for programmatic processing
//! - **Excel**: Native spreadsheet format with a styled header row

use crate::db::shifts::Shifts;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    ///
    /// Controls the structure and format of the exported file:
    /// - **csv**: Comma-separated values, compatible with spreadsheet tools
    /// - **json**: Structured JSON data, ideal for programmatic processing
    /// - **excel**: Native Excel format with header styling and column sizing
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// When specified, the export is saved to this exact location. If not
    /// provided, a timestamped filename is generated, e.g.
    /// `dashtrack_export_20250115_143022.csv`.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Executes the data export command.
///
/// Fetches all recorded shifts in date order and hands them to the
/// exporter for the chosen format.
pub fn cmd(args: ExportArgs) -> Result<()> {
    let shifts = Shifts::new()?.fetch_all()?;
    if shifts.is_empty() {
        msg_info!(Message::NoDataToExport);
        return Ok(());
    }

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&shifts)?;

    Ok(())
}
