//! Application configuration loading and validation.
//!
//! Configuration is an explicitly constructed struct loaded from a TOML file;
//! business logic never reads the process environment. The one secret — the
//! cluster-manager bearer token — is taken from the `TENANTFORGE_RANCHER_TOKEN`
//! environment variable and never from the file.
//!
//! # Example
//!
//! ```no_run
//! use tenantforge::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::domain::ClusterId;
use crate::error::{ConfigError, Result};

/// Environment variable holding the cluster-manager bearer token.
pub const RANCHER_TOKEN_ENV: &str = "TENANTFORGE_RANCHER_TOKEN";

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Cluster-manager API settings.
    pub rancher: RancherConfig,

    /// Namespace-provisioning service settings.
    pub workspace: WorkspaceConfig,

    /// Catalog-repo defaults for provisioning.
    #[serde(default)]
    pub git: GitConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cluster-manager API configuration.
#[derive(Debug, Deserialize)]
pub struct RancherConfig {
    /// Base URL of the cluster-manager API.
    pub api_url: String,

    /// Cluster the provisioned projects live on; used to qualify project ids
    /// and to address cluster-scoped endpoints.
    pub cluster_id: String,

    /// Bearer token, loaded from [`RANCHER_TOKEN_ENV`] only.
    #[serde(skip)]
    pub token: Option<String>,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for RancherConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            cluster_id: String::new(),
            token: None,
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl RancherConfig {
    /// The configured cluster as a typed id.
    #[must_use]
    pub fn cluster(&self) -> ClusterId {
        ClusterId::new(self.cluster_id.clone())
    }
}

/// Namespace-provisioning service configuration.
#[derive(Debug, Deserialize)]
pub struct WorkspaceConfig {
    /// Base URL of the namespace-provisioning service.
    pub api_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Defaults for the catalog repo created alongside each project.
#[derive(Debug, Deserialize)]
pub struct GitConfig {
    /// Git repository URL backing the catalog.
    #[serde(default = "default_git_url")]
    pub repo_url: String,

    /// Branch tracked by the catalog.
    #[serde(default = "default_git_branch")]
    pub branch: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            repo_url: default_git_url(),
            branch: default_git_branch(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_git_url() -> String {
    "https://github.com/rancher/charts".into()
}

fn default_git_branch() -> String {
    "main".into()
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the bearer token from the environment (never from the file).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        config.rancher.token = std::env::var(RANCHER_TOKEN_ENV).ok().filter(|t| !t.is_empty());

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.rancher.api_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "rancher.api_url",
            }
            .into());
        }
        if Url::parse(&self.rancher.api_url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "rancher.api_url",
                reason: "not a valid URL".into(),
            }
            .into());
        }
        if self.rancher.cluster_id.is_empty() {
            return Err(ConfigError::MissingField {
                field: "rancher.cluster_id",
            }
            .into());
        }
        if self.rancher.timeout_ms == 0 || self.rancher.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rancher.timeout_ms",
                reason: "timeouts must be greater than 0".into(),
            }
            .into());
        }
        if self.workspace.api_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "workspace.api_url",
            }
            .into());
        }
        if Url::parse(&self.workspace.api_url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "workspace.api_url",
                reason: "not a valid URL".into(),
            }
            .into());
        }
        if self.workspace.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "workspace.timeout_ms",
                reason: "must be greater than 0".into(),
            }
            .into());
        }
        if self.git.repo_url.is_empty() {
            return Err(ConfigError::MissingField { field: "git.repo_url" }.into());
        }
        if self.git.branch.is_empty() {
            return Err(ConfigError::MissingField { field: "git.branch" }.into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [rancher]
        api_url = "https://rancher.example.com"
        cluster_id = "c-1"

        [workspace]
        api_url = "https://workspace.example.com"
    "#;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config = Config::parse_toml(MINIMAL).unwrap();
        assert_eq!(config.rancher.cluster_id, "c-1");
        assert_eq!(config.rancher.timeout_ms, 10_000);
        assert_eq!(config.git.branch, "main");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_cluster_id_is_rejected() {
        let toml = r#"
            [rancher]
            api_url = "https://rancher.example.com"
            cluster_id = ""

            [workspace]
            api_url = "https://workspace.example.com"
        "#;
        let err = Config::parse_toml(toml).unwrap_err();
        assert!(err.to_string().contains("rancher.cluster_id"));
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        let toml = r#"
            [rancher]
            api_url = "not a url"
            cluster_id = "c-1"

            [workspace]
            api_url = "https://workspace.example.com"
        "#;
        let err = Config::parse_toml(toml).unwrap_err();
        assert!(err.to_string().contains("rancher.api_url"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let toml = r#"
            [rancher]
            api_url = "https://rancher.example.com"
            cluster_id = "c-1"
            timeout_ms = 0

            [workspace]
            api_url = "https://workspace.example.com"
        "#;
        assert!(Config::parse_toml(toml).is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse_toml("rancher = ").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }
}
