//! Core library modules for the dashtrack application.
//!
//! Serves as the main entry point for all dashtrack library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Shift Engine**: Clock parsing, earnings derivation, week bucketing
//! - **Data Management**: Summaries, backup snapshots, restore merging
//! - **User Interface**: Console rendering, data export, formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dashtrack::libs::config::Config;
//! use dashtrack::libs::shift::{derive_shift, RawShift};
//!
//! # fn demo(raw: RawShift) -> anyhow::Result<()> {
//! let config = Config::read()?.tracker_or_default();
//! let shift = derive_shift(&raw, &config);
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod shift;
pub mod summary;
pub mod view;
pub mod week;
