//! Toolkit configuration with TOML file support.

use std::path::Path;
use std::time::Duration;

use adakit_indexer::IndexerConfig;
use adakit_types::NetworkId;
use serde::{Deserialize, Serialize};

use crate::{LogFormat, ToolkitError};

/// Configuration for a [`Toolkit`](crate::Toolkit).
///
/// Load it from TOML via [`ToolkitConfig::from_toml_file`] or build it in
/// code. Without a `project_id` the toolkit runs with the indexer disabled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Network addresses and indexer queries are resolved against.
    #[serde(default)]
    pub network: NetworkId,

    /// Indexing API credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Overrides the network's default indexer endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout for indexer calls, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log filter, e.g. "info" or "warn,adakit_indexer=debug". "off" disables logging.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_format() -> String {
    LogFormat::Human.as_str().to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ToolkitConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ToolkitError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ToolkitError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ToolkitError> {
        toml::from_str(s).map_err(|e| ToolkitError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ToolkitError> {
        toml::to_string_pretty(self).map_err(|e| ToolkitError::Config(e.to_string()))
    }

    /// Check the fields serde cannot: log format, timeout and endpoint shape.
    pub fn validate(&self) -> Result<(), ToolkitError> {
        self.log_format()?;
        if self.log_level.trim().is_empty() {
            return Err(ToolkitError::Config("log_level must not be empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ToolkitError::Config(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        if let Some(url) = &self.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ToolkitError::Config(format!(
                    "base_url {url:?} must be an http(s) URL"
                )));
            }
        }
        Ok(())
    }

    pub fn log_format(&self) -> Result<LogFormat, ToolkitError> {
        self.log_format.parse()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The indexer half of this configuration.
    pub fn indexer_config(&self) -> IndexerConfig {
        IndexerConfig {
            network: self.network,
            project_id: self.project_id.clone(),
            base_url: self.base_url.clone(),
            request_timeout: self.request_timeout(),
        }
    }
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            network: NetworkId::default(),
            project_id: None,
            base_url: None,
            request_timeout_secs: default_request_timeout_secs(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = ToolkitConfig::from_toml_str("").unwrap();
        assert_eq!(config, ToolkitConfig::default());
        assert_eq!(config.network, NetworkId::Mainnet);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format().unwrap(), LogFormat::Human);
    }

    #[test]
    fn partial_toml_overrides() {
        let config = ToolkitConfig::from_toml_str(
            r#"
                network = "testnet"
                project_id = "testnetAbc"
                log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.network, NetworkId::Testnet);
        assert_eq!(config.project_id.as_deref(), Some("testnetAbc"));
        assert_eq!(config.log_format().unwrap(), LogFormat::Json);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = ToolkitConfig {
            project_id: Some("mainnetXyz".into()),
            base_url: Some("https://indexer.local/api/v0".into()),
            ..ToolkitConfig::default()
        };
        let parsed = ToolkitConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn unknown_network_is_rejected() {
        assert!(matches!(
            ToolkitConfig::from_toml_str(r#"network = "preview""#),
            Err(ToolkitError::Config(_))
        ));
    }

    #[test]
    fn validate_catches_bad_fields() {
        let bad_format = ToolkitConfig {
            log_format: "xml".into(),
            ..ToolkitConfig::default()
        };
        assert!(bad_format.validate().is_err());

        let zero_timeout = ToolkitConfig {
            request_timeout_secs: 0,
            ..ToolkitConfig::default()
        };
        assert!(zero_timeout.validate().is_err());

        let bad_url = ToolkitConfig {
            base_url: Some("indexer.local".into()),
            ..ToolkitConfig::default()
        };
        assert!(bad_url.validate().is_err());

        assert!(ToolkitConfig::default().validate().is_ok());
    }

    #[test]
    fn indexer_config_carries_credentials() {
        let config = ToolkitConfig {
            network: NetworkId::Testnet,
            project_id: Some("testnetAbc".into()),
            request_timeout_secs: 5,
            ..ToolkitConfig::default()
        };
        let indexer = config.indexer_config();
        assert_eq!(indexer.project_id().unwrap(), "testnetAbc");
        assert_eq!(indexer.request_timeout, Duration::from_secs(5));
        assert!(indexer.base_url().contains("testnet"));
    }
}
