//! adclink connector - desktop connector service client
//!
//! Talks to the connector's local service process over HTTP/JSON and
//! exposes it as the core's [`IConnectorService`] port.
//!
//! ## Modules
//!
//! - [`client`] - Low-level request/response plumbing
//! - [`provider`] - [`IConnectorService`] implementation over the client
//!
//! [`IConnectorService`]: adclink_core::ports::IConnectorService

pub mod client;
pub mod provider;

use std::path::PathBuf;

use thiserror::Error;

pub use provider::HttpConnectorService;

/// Errors that prevent a connector client from being constructed
///
/// These are the only hard failures in adclink; once a client exists every
/// service failure is reported as an absent or negative answer.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The configured endpoint is not a usable http(s) URL
    #[error("Invalid connector endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The connector API is required but not installed
    #[error("Desktop connector API not found at {}", .path.display())]
    ApiNotInstalled { path: PathBuf },

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
