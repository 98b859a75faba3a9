use crate::api::RemoteClient;
use crate::db::shifts::Shifts;
use crate::libs::backup::Snapshot;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success, msg_warning};
use anyhow::Result;

// Runs the sync command to push all shifts to the configured server.
//
// Network failures are reported but never fatal: local data is the source
// of truth and stays intact either way.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;

    let server = match config.server {
        Some(server) => server,
        None => {
            msg_warning!(Message::ServerNotConfigured);
            return Ok(());
        }
    };

    let entries = Shifts::new()?.fetch_all()?;
    if entries.is_empty() {
        msg_info!(Message::NoShiftsRecorded);
        return Ok(());
    }

    let snapshot = Snapshot::capture(entries);
    let client = RemoteClient::new(&server);

    match client.push(&snapshot).await {
        Ok(count) => msg_success!(Message::SyncCompleted(count)),
        Err(e) => msg_error!(Message::SyncFailed(e.to_string())),
    }

    Ok(())
}
