//! API client modules for external service integrations.
//!
//! Provides the HTTP side of dashtrack: a small client that pushes shift
//! snapshots to a user-configured server. The server address lives in the
//! `server` section of the configuration file.

pub mod remote;

pub use remote::RemoteClient;
