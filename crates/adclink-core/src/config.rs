//! Configuration module for adclink.
//!
//! Provides typed configuration structs that map to the YAML configuration file,
//! with loading, validation, defaults, and a builder pattern for programmatic use.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

// ---------------------------------------------------------------------------
// Config struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for adclink.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

/// Where and how to reach the desktop connector service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the connector's local service endpoint.
    pub endpoint: String,
    /// Installation directory of the desktop connector.
    pub install_dir: PathBuf,
    /// File name of the connector API inside `install_dir`.
    pub api_name: String,
    /// Refuse to start when the connector API is not installed.
    pub require_installation: bool,
}

/// Sync-state detection and on-demand sync settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Stable id of the drive property holding an item's local state.
    ///
    /// Matched against the property definition id, never its display name.
    pub local_state_property_id: String,
    /// Notify the connector that running processes released a file before
    /// syncing it.
    pub release_handles: bool,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

impl ServiceConfig {
    /// Full path of the connector API file.
    pub fn api_path(&self) -> PathBuf {
        self.install_dir.join(&self.api_name)
    }
}

// ---------------------------------------------------------------------------
// Config::load()
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/adclink/config.yaml` on Linux and
    /// `%APPDATA%\adclink\config.yaml` on Windows.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("adclink")
            .join("config.yaml")
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Connector service endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:7150/api";

/// Stable id of the local-state property (connector 15 and later).
pub const DEFAULT_LOCAL_STATE_PROPERTY_ID: &str = "DesktopConnector.Core.LocalState";

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            install_dir: PathBuf::from(r"C:\Program Files\Autodesk\Desktop Connector"),
            api_name: "Autodesk.DesktopConnector.API.dll".to_string(),
            require_installation: false,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            local_state_property_id: DEFAULT_LOCAL_STATE_PROPERTY_ID.to_string(),
            release_handles: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config::validate()
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"service.endpoint"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- service ---
        match Url::parse(&self.service.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ValidationError {
                field: "service.endpoint".into(),
                message: format!("unsupported scheme '{}'; use http or https", url.scheme()),
            }),
            Err(e) => errors.push(ValidationError {
                field: "service.endpoint".into(),
                message: format!("invalid URL '{}': {e}", self.service.endpoint),
            }),
        }
        if self.service.api_name.trim().is_empty() {
            errors.push(ValidationError {
                field: "service.api_name".into(),
                message: "must not be empty".into(),
            });
        }
        if self.service.require_installation && !self.service.api_path().exists() {
            errors.push(ValidationError {
                field: "service.install_dir".into(),
                message: format!(
                    "connector API not found at {}",
                    self.service.api_path().display()
                ),
            });
        }

        // --- sync ---
        if self.sync.local_state_property_id.trim().is_empty() {
            errors.push(ValidationError {
                field: "sync.local_state_property_id".into(),
                message: "must not be empty".into(),
            });
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

/// Builder for constructing a [`Config`] programmatically.
///
/// Starts from [`Config::default`] and allows selective overrides.
///
/// # Example
///
/// ```rust,no_run
/// use adclink_core::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .service_endpoint("http://127.0.0.1:9000/api")
///     .sync_local_state_property_id("DesktopConnector.Core.LocalState")
///     .logging_level("debug")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder initialised with default values.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    // --- service ---

    pub fn service_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.service.endpoint = endpoint.into();
        self
    }

    pub fn service_install_dir(mut self, dir: PathBuf) -> Self {
        self.config.service.install_dir = dir;
        self
    }

    pub fn service_api_name(mut self, name: impl Into<String>) -> Self {
        self.config.service.api_name = name.into();
        self
    }

    pub fn service_require_installation(mut self, required: bool) -> Self {
        self.config.service.require_installation = required;
        self
    }

    // --- sync ---

    pub fn sync_local_state_property_id(mut self, id: impl Into<String>) -> Self {
        self.config.sync.local_state_property_id = id.into();
        self
    }

    pub fn sync_release_handles(mut self, release: bool) -> Self {
        self.config.sync.release_handles = release;
        self
    }

    // --- logging ---

    pub fn logging_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    // --- build ---

    /// Consume the builder and return the finished [`Config`].
    pub fn build(self) -> Config {
        self.config
    }

    /// Build and validate in one step. Returns `Err` with the list of
    /// validation errors if the configuration is invalid.
    pub fn build_validated(self) -> Result<Config, Vec<ValidationError>> {
        let config = self.build();
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors)
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
