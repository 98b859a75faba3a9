use crate::libs::backup::Snapshot;
use crate::libs::config::ServerConfig;
use crate::msg_debug;
use anyhow::{bail, Result};
use reqwest::Client;

const SYNC_URL: &str = "shifts/sync";

/// HTTP client for pushing shift snapshots to a remote server.
pub struct RemoteClient {
    client: Client,
    config: ServerConfig,
}

impl RemoteClient {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Pushes a full snapshot to the configured server.
    ///
    /// Returns the number of entries sent. A non-success status becomes an
    /// error; callers decide whether that is fatal.
    pub async fn push(&self, snapshot: &Snapshot) -> Result<usize> {
        let url = format!("{}/{}", self.config.api_url, SYNC_URL);
        msg_debug!(format!("POST {} ({} entries)", url, snapshot.entries.len()));
        let res = self.client.post(&url).json(snapshot).send().await?;

        let status = res.status();
        if !status.is_success() {
            bail!("server returned HTTP {}", status);
        }

        Ok(snapshot.entries.len())
    }
}
