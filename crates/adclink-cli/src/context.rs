//! Shared command context: configuration and service wiring

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use adclink_connector::HttpConnectorService;
use adclink_core::config::Config;
use adclink_core::DesktopConnector;
use adclink_local::{LocalFileSystemAdapter, SystemProcessTable};

/// Loaded configuration plus where it came from
#[derive(Debug, Clone)]
pub struct CliContext {
    pub config_path: PathBuf,
    pub config: Config,
    /// Whether `config_path` was given on the command line
    pub explicit: bool,
}

impl CliContext {
    /// Load configuration from `explicit`, or from the default location
    ///
    /// An explicit file must exist and parse; the default file silently
    /// falls back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                let config = Config::load(path).with_context(|| {
                    format!("Failed to load configuration from {}", path.display())
                })?;
                Ok(Self {
                    config_path: path.to_path_buf(),
                    config,
                    explicit: true,
                })
            }
            None => {
                let config_path = Config::default_path();
                let config = Config::load_or_default(&config_path);
                Ok(Self {
                    config_path,
                    config,
                    explicit: false,
                })
            }
        }
    }

    /// Wire a [`DesktopConnector`] over the HTTP service and host adapters
    pub fn connector(&self) -> Result<DesktopConnector> {
        let service = HttpConnectorService::connect(&self.config.service)
            .context("Failed to connect to the desktop connector service")?;
        debug!(config_path = %self.config_path.display(), "Connector wired");

        Ok(DesktopConnector::new(
            Arc::new(service),
            Arc::new(LocalFileSystemAdapter::new()),
            Arc::new(SystemProcessTable::new()),
            self.config.sync.clone(),
        ))
    }
}
