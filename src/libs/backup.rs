//! Backup snapshots and restore merging.
//!
//! A backup is a single JSON document holding every recorded shift plus a
//! little envelope metadata. Restore walks the snapshot and inserts entries
//! whose date is not already present, leaving local records untouched.
//! Restored entries are re-derived from their raw inputs so stored figures
//! always reflect the active configuration.

use crate::db::shifts::Shifts;
use crate::libs::config::TrackerConfig;
use crate::libs::messages::Message;
use crate::libs::shift::{derive_shift, Shift};
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Snapshot format version written by this build.
pub const BACKUP_VERSION: u32 = 1;

/// A complete backup document: envelope metadata plus all entries.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the snapshot was taken, local time.
    pub export_date: String,
    /// Snapshot format version, checked on restore.
    pub version: u32,
    /// Every shift on record at capture time.
    pub entries: Vec<Shift>,
}

impl Snapshot {
    /// Wraps the given shifts in a versioned, timestamped envelope.
    pub fn capture(entries: Vec<Shift>) -> Self {
        Self {
            export_date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            version: BACKUP_VERSION,
            entries,
        }
    }
}

/// Default backup filename, timestamped to keep earlier backups intact.
pub fn default_backup_path() -> PathBuf {
    PathBuf::from(format!("dashtrack_backup_{}.json", Local::now().format("%Y%m%d_%H%M%S")))
}

/// Writes a snapshot to disk as pretty-printed JSON.
pub fn write_snapshot(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    File::create(path)?.write_all(json.as_bytes())?;
    Ok(())
}

/// Reads a snapshot back from disk, rejecting unknown format versions.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let file = File::open(path)?;
    let snapshot: Snapshot = serde_json::from_reader(file)?;

    if snapshot.version != BACKUP_VERSION {
        msg_bail_anyhow!(Message::BackupVersionUnsupported(snapshot.version));
    }

    Ok(snapshot)
}

/// Merges snapshot entries into storage, skipping dates already present.
///
/// Returns `(imported, skipped)` counts. Each imported entry is re-derived
/// from its raw clock and odometer inputs under the given configuration.
pub fn restore(snapshot: &Snapshot, shifts: &mut Shifts, config: &TrackerConfig) -> Result<(usize, usize)> {
    let mut imported = 0;
    let mut skipped = 0;

    for entry in &snapshot.entries {
        if shifts.has_date(entry.date)? {
            skipped += 1;
            continue;
        }

        let derived = derive_shift(&entry.to_raw(), config);
        shifts.create(&derived)?;
        imported += 1;
    }

    Ok((imported, skipped))
}
