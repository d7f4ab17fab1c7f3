//! Indexer client configuration.

use std::time::Duration;

use adakit_types::NetworkId;

use crate::error::IndexerError;

pub const MAINNET_BASE_URL: &str = "https://cardano-mainnet.blockfrost.io/api/v0";
pub const TESTNET_BASE_URL: &str = "https://cardano-testnet.blockfrost.io/api/v0";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable settings an [`AssetLedgerClient`](crate::AssetLedgerClient) is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Network whose indexing endpoint is queried.
    pub network: NetworkId,
    /// Indexing API credential. Reads are disabled without it.
    pub project_id: Option<String>,
    /// Overrides the network's default endpoint.
    pub base_url: Option<String>,
    pub request_timeout: Duration,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            network: NetworkId::Mainnet,
            project_id: None,
            base_url: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl IndexerConfig {
    pub fn new(network: NetworkId, project_id: impl Into<String>) -> Self {
        Self {
            network,
            project_id: Some(project_id.into()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Endpoint root without a trailing slash.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => match self.network {
                NetworkId::Mainnet => MAINNET_BASE_URL.to_string(),
                NetworkId::Testnet => TESTNET_BASE_URL.to_string(),
            },
        }
    }

    /// The credential, or [`IndexerError::NotConfigured`] when absent or blank.
    pub fn project_id(&self) -> Result<&str, IndexerError> {
        self.project_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(IndexerError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_per_network() {
        assert_eq!(
            IndexerConfig::new(NetworkId::Mainnet, "id").base_url(),
            MAINNET_BASE_URL
        );
        assert_eq!(
            IndexerConfig::new(NetworkId::Testnet, "id").base_url(),
            TESTNET_BASE_URL
        );
    }

    #[test]
    fn base_url_override_trims_slash() {
        let config =
            IndexerConfig::new(NetworkId::Testnet, "id").with_base_url("http://localhost:3000/");
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn missing_or_blank_project_id_is_not_configured() {
        assert!(matches!(
            IndexerConfig::default().project_id(),
            Err(IndexerError::NotConfigured)
        ));
        assert!(matches!(
            IndexerConfig::new(NetworkId::Mainnet, "  ").project_id(),
            Err(IndexerError::NotConfigured)
        ));
        assert_eq!(
            IndexerConfig::new(NetworkId::Mainnet, "mainnetABC").project_id().unwrap(),
            "mainnetABC"
        );
    }
}
