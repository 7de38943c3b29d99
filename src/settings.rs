//! Layered configuration for the governance client.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `governance.toml` in the working directory, when present
//! 3. Environment variables prefixed with `GOVERNANCE__`, using `__` as the
//!    nesting separator (for example `GOVERNANCE__API__BASE_URL`)
//!
//! A `.env` file is loaded into the environment first when it exists.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `.env` file exists but could not be read.
    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
    /// A source could not be read or deserialized.
    #[error("invalid configuration: {0}")]
    Source(#[from] config::ConfigError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceConfig {
    /// REST backend settings.
    pub api: ApiConfig,
    /// Lifecycle rule choices.
    pub workflow: WorkflowConfig,
    /// Listing settings.
    pub pagination: PaginationConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// REST backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL that the endpoint paths are appended to.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Bearer token sent with every request, if any.
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8000/api"),
            timeout_secs: 30,
            token: None,
        }
    }
}

/// How evaluation creation treats initiatives that are not `finalizada`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationPolicy {
    /// Reject the evaluation unless the initiative is `finalizada`.
    #[default]
    RequireFinalized,
    /// Accept the evaluation and leave the status alone.
    AcceptWithoutTransition,
}

/// Lifecycle rule choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Evaluation creation policy.
    pub evaluation_policy: EvaluationPolicy,
    /// Whether updating an evaluation of a `finalizada` initiative also
    /// advances it to `evaluada`.
    pub trigger_on_update: bool,
    /// Whether deleting an initiative deletes its evaluations too.
    pub cascade_delete_evaluations: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            evaluation_policy: EvaluationPolicy::RequireFinalized,
            trigger_on_update: false,
            cascade_delete_evaluations: true,
        }
    }
}

/// Listing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Records per page.
    pub per_page: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { per_page: 15 }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            json: false,
        }
    }
}

impl GovernanceConfig {
    /// Default configuration file stem, resolved in the working directory.
    pub const FILE_STEM: &'static str = "governance";

    /// Environment variable prefix.
    pub const ENV_PREFIX: &'static str = "GOVERNANCE";

    /// Loads configuration from the default file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `.env` or a configuration source is
    /// malformed.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
        }
        Self::load_from(Path::new(Self::FILE_STEM))
    }

    /// Loads configuration from `file_stem` (any format supported by the
    /// `config` crate, extension optional) and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Source`] when a source is malformed.
    pub fn load_from(file_stem: &Path) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(file_stem).required(false))
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
