//! Shift export functionality supporting multiple output formats.
//!
//! Renders recorded shifts as CSV, JSON, or Excel files. Every format
//! emits the same sixteen columns in the same order, with all derived
//! figures already formatted for presentation: durations as whole
//! minutes, money and fuel quantities with two fractional digits, and
//! break pairs joined into a single cell.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dashtrack::libs::export::{ExportFormat, Exporter};
//!
//! # fn demo(shifts: &[dashtrack::libs::shift::Shift]) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(shifts)?;
//! # Ok(())
//! # }
//! ```

use crate::libs::formatter::{format_breaks, format_hourly, format_money};
use crate::libs::messages::Message;
use crate::libs::shift::Shift;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Column titles shared by every export format, in presentation order.
pub const EXPORT_COLUMNS: [&str; 16] = [
    "Date",
    "Start",
    "End",
    "Shift Duration (min)",
    "Break Duration (min)",
    "Working Duration (min)",
    "Gross Pay",
    "Net Profit",
    "Hourly Rate",
    "Miles Start",
    "Miles End",
    "Miles Driven",
    "Gallons Used",
    "Price/gal",
    "Gas Cost",
    "Breaks",
];

/// Enumeration of supported export formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, for spreadsheets and scripting.
    Csv,
    /// Pretty-printed JSON, for programmatic consumers.
    Json,
    /// Excel workbook with a formatted header row.
    Excel,
}

/// Serializable structure representing one shift as an export row.
///
/// All fields are string representations so every format renders a figure
/// identically. Serde renames match [`EXPORT_COLUMNS`], which keeps JSON
/// keys aligned with the tabular headers.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "End")]
    pub end: String,
    #[serde(rename = "Shift Duration (min)")]
    pub shift_minutes: String,
    #[serde(rename = "Break Duration (min)")]
    pub break_minutes: String,
    #[serde(rename = "Working Duration (min)")]
    pub working_minutes: String,
    #[serde(rename = "Gross Pay")]
    pub gross: String,
    #[serde(rename = "Net Profit")]
    pub net: String,
    #[serde(rename = "Hourly Rate")]
    pub hourly: String,
    #[serde(rename = "Miles Start")]
    pub miles_start: String,
    #[serde(rename = "Miles End")]
    pub miles_end: String,
    #[serde(rename = "Miles Driven")]
    pub miles_driven: String,
    #[serde(rename = "Gallons Used")]
    pub gallons: String,
    #[serde(rename = "Price/gal")]
    pub price_per_gal: String,
    #[serde(rename = "Gas Cost")]
    pub gas_cost: String,
    #[serde(rename = "Breaks")]
    pub breaks: String,
}

impl ExportRow {
    /// Builds a fully formatted row from a derived shift.
    pub fn from_shift(shift: &Shift) -> Self {
        Self {
            date: shift.date.to_string(),
            start: shift.start.clone(),
            end: shift.end.clone(),
            shift_minutes: shift.shift_minutes.to_string(),
            break_minutes: shift.break_minutes.to_string(),
            working_minutes: shift.working_minutes.to_string(),
            gross: format_money(shift.gross),
            net: format_money(shift.net),
            hourly: format_hourly(shift.hourly),
            miles_start: format_money(shift.miles_start),
            miles_end: format_money(shift.miles_end),
            miles_driven: format_money(shift.miles_driven),
            gallons: format_money(shift.gallons),
            price_per_gal: format_money(shift.price_per_gal),
            gas_cost: format_money(shift.gas_cost),
            breaks: format_breaks(&shift.breaks),
        }
    }

    /// Returns the cell values in [`EXPORT_COLUMNS`] order.
    pub fn values(&self) -> [&String; 16] {
        [
            &self.date,
            &self.start,
            &self.end,
            &self.shift_minutes,
            &self.break_minutes,
            &self.working_minutes,
            &self.gross,
            &self.net,
            &self.hourly,
            &self.miles_start,
            &self.miles_end,
            &self.miles_driven,
            &self.gallons,
            &self.price_per_gal,
            &self.gas_cost,
            &self.breaks,
        ]
    }
}

/// Export handler holding the chosen format and output destination.
pub struct Exporter {
    /// The desired output format for the export operation
    format: ExportFormat,
    /// The destination path for the exported file
    output_path: PathBuf,
}

impl Exporter {
    /// Creates a new Exporter with the specified format and optional output path.
    ///
    /// When no custom path is provided, a default filename is generated from
    /// the current timestamp with a format-appropriate extension, e.g.
    /// `dashtrack_export_20250115_143022.csv`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        // Generate default filename with timestamp for uniqueness
        let default_name = format!("dashtrack_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Writes the given shifts to the output file in the configured format.
    ///
    /// The slice is written in the order given; callers decide sorting.
    /// Announces the destination path on success.
    pub fn export(&self, shifts: &[Shift]) -> Result<()> {
        let rows: Vec<ExportRow> = shifts.iter().map(ExportRow::from_shift).collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&rows)?,
            ExportFormat::Json => self.export_json(&rows)?,
            ExportFormat::Excel => self.export_excel(&rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Exports rows to CSV with a single header record.
    fn export_csv(&self, rows: &[ExportRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(EXPORT_COLUMNS)?;
        for row in rows {
            wtr.write_record(row.values())?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Exports rows to JSON format with pretty printing.
    fn export_json(&self, rows: &[ExportRow]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Exports rows to an Excel worksheet with formatted headers and
    /// auto-sized columns.
    fn export_excel(&self, rows: &[ExportRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        // Create formatting style for the header row
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, title) in EXPORT_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (index, row) in rows.iter().enumerate() {
            for (col, value) in row.values().iter().enumerate() {
                worksheet.write_string(index as u32 + 1, col as u16, value.as_str())?;
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
