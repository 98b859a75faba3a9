//! # DashTrack - Dashing Delivery Shift Tracker
//!
//! A command-line utility for gig delivery drivers: records shifts with
//! timing, mileage, fuel cost and pay, and derives earnings summaries.
//!
//! ## Features
//!
//! - **Shift Recording**: Clock times, breaks, odometer readings and gross pay
//! - **Derived Figures**: Working time, fuel burn, gas cost, net profit, hourly rate
//! - **Weekly Summaries**: Current-week and all-time net/gross totals
//! - **Data Export**: Export shifts to CSV, JSON, and Excel formats
//! - **Backup & Restore**: Versioned JSON snapshots with date-keyed merging
//! - **Remote Sync**: Optional push of the shift log to a configured server
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dashtrack::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
