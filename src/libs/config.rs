//! Application configuration management.
//!
//! Configuration lives in a single `config.json` under the platform data
//! directory and is edited either by hand or through the interactive wizard
//! behind `dashtrack init`. Every module is optional: a missing file or a
//! missing section falls back to defaults, so the tool works with no setup
//! at all.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\dashtrack\config.json`
//! - **macOS**: `~/Library/Application Support/dashtrack/config.json`
//! - **Linux**: `~/.local/share/dashtrack/config.json`
//!
//! ## Modules
//!
//! - **Tracker**: vehicle and calendar settings feeding the derivation and
//!   aggregation engines (fuel economy, default pump price, week convention,
//!   clock notation).
//! - **Server**: optional remote endpoint the `sync` command pushes the shift
//!   log to.

use super::data_storage::DataStorage;
use crate::libs::clock::TimeFormat;
use crate::libs::messages::Message;
use crate::libs::week::WeekAnchor;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::str::FromStr;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Fuel-burn constant: miles per gallon assumed for every shift.
///
/// Serves as the serde default and the wizard's suggestion. A vehicle with a
/// different economy figure changes it in `config.json`, never in code.
pub fn default_mpg() -> Decimal {
    Decimal::new(26, 0)
}

/// Pump price per gallon applied when a shift doesn't record one.
pub fn default_price_per_gal() -> Decimal {
    Decimal::new(3272, 3)
}

/// A configurable module presented by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Identifier used in configuration routing.
    pub key: String,
    /// Display name shown during interactive setup.
    pub name: String,
}

/// Vehicle and calendar settings for the calculation engines.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Miles per gallon used to turn miles driven into gallons burned.
    #[serde(default = "default_mpg")]
    pub mpg: Decimal,
    /// Fallback price per gallon for shifts entered without one.
    #[serde(default = "default_price_per_gal")]
    pub default_price_per_gal: Decimal,
    /// Week bucketing convention for summaries.
    #[serde(default)]
    pub week_anchor: WeekAnchor,
    /// Clock notation accepted for start, end and break times.
    #[serde(default)]
    pub time_format: TimeFormat,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            mpg: default_mpg(),
            default_price_per_gal: default_price_per_gal(),
            week_anchor: WeekAnchor::default(),
            time_format: TimeFormat::default(),
        }
    }
}

impl TrackerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "tracker".to_string(),
            name: "Tracker (vehicle & calendar)".to_string(),
        }
    }

    /// Interactive setup, prefilled with the current values.
    pub fn init(config: &Option<TrackerConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleTracker);

        let mpg_text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMpg.to_string())
            .default(default.mpg.to_string())
            .validate_with(|input: &String| -> Result<(), &str> {
                match Decimal::from_str(input.trim()) {
                    Ok(value) if !value.is_sign_negative() => Ok(()),
                    _ => Err("Enter a non-negative number"),
                }
            })
            .interact_text()?;

        let price_text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultPrice.to_string())
            .default(default.default_price_per_gal.to_string())
            .validate_with(|input: &String| -> Result<(), &str> {
                match Decimal::from_str(input.trim()) {
                    Ok(value) if !value.is_sign_negative() => Ok(()),
                    _ => Err("Enter a non-negative number"),
                }
            })
            .interact_text()?;

        let anchor_items = ["ISO (weeks start Monday)", "Sunday start (weeks start Sunday)"];
        let anchor_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWeekAnchor.to_string())
            .items(&anchor_items)
            .default(match default.week_anchor {
                WeekAnchor::Iso => 0,
                WeekAnchor::SundayStart => 1,
            })
            .interact()?;

        let format_items = ["12-hour (H:MM AM/PM)", "24-hour (HH:MM)"];
        let format_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimeFormat.to_string())
            .items(&format_items)
            .default(match default.time_format {
                TimeFormat::TwelveHour => 0,
                TimeFormat::TwentyFourHour => 1,
            })
            .interact()?;

        Ok(TrackerConfig {
            mpg: Decimal::from_str(mpg_text.trim())?,
            default_price_per_gal: Decimal::from_str(price_text.trim())?,
            week_anchor: if anchor_index == 1 { WeekAnchor::SundayStart } else { WeekAnchor::Iso },
            time_format: if format_index == 1 { TimeFormat::TwentyFourHour } else { TimeFormat::TwelveHour },
        })
    }
}

/// Remote endpoint the `sync` command pushes the shift log to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the receiving API, e.g. `https://example.com/dashtrack`.
    pub api_url: String,
}

impl ServerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "server".to_string(),
            name: "Server (remote sync)".to_string(),
        }
    }

    pub fn init(config: &Option<ServerConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or(ServerConfig { api_url: String::new() });
        msg_print!(Message::ConfigModuleServer);

        Ok(ServerConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
        })
    }
}

/// Root configuration object.
///
/// Every section is optional and omitted from the file when unset, so a
/// hand-edited `config.json` stays minimal.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tracker: None,
            server: None,
        }
    }
}

impl Config {
    /// Reads the configuration file, or returns defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The tracker section, or its defaults when not configured.
    pub fn tracker_or_default(&self) -> TrackerConfig {
        self.tracker.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard and returns the updated config.
    ///
    /// Existing values are used as prompt defaults, so re-running the wizard
    /// only changes what the user actually touches.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![TrackerConfig::module(), ServerConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "tracker" => config.tracker = Some(TrackerConfig::init(&config.tracker)?),
                "server" => config.server = Some(ServerConfig::init(&config.server)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
