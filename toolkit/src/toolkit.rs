//! The toolkit facade.

use adakit_indexer::{
    AssetInventory, AssetLedgerClient, AssetMetadata, HttpTransport, IndexerConfig, IndexerError,
    OwnerDistribution, PolicyAsset, PolicyFilter, Transport,
};
use adakit_types::NetworkId;

use crate::{Serialization, ToolkitConfig, ToolkitError};

/// Address handling plus, once a project id is known, asset-ownership queries.
///
/// The query wrappers are best effort: any failure other than a disabled
/// indexer is logged with the query it belongs to and returned as `None`.
/// Call [`Toolkit::indexer`] for the underlying typed errors.
pub struct Toolkit<T = HttpTransport> {
    network: NetworkId,
    serialization: Serialization,
    indexer: Option<AssetLedgerClient<T>>,
}

impl Toolkit<HttpTransport> {
    /// Build from configuration. The indexer is enabled when a project id is set.
    pub fn from_config(config: &ToolkitConfig) -> Result<Self, ToolkitError> {
        config.validate()?;
        let indexer_config = config.indexer_config();
        let indexer = match indexer_config.project_id() {
            Ok(_) => Some(AssetLedgerClient::from_config(&indexer_config)?),
            Err(_) => None,
        };
        tracing::debug!(
            network = %config.network,
            indexer = indexer.is_some(),
            "toolkit initialised"
        );
        Ok(Self {
            network: config.network,
            serialization: Serialization,
            indexer,
        })
    }

    /// A toolkit with address handling only.
    pub fn unconfigured(network: NetworkId) -> Self {
        Self {
            network,
            serialization: Serialization,
            indexer: None,
        }
    }

    /// Enable queries against the network's default indexer endpoint.
    pub fn enable_indexer(self, project_id: impl Into<String>) -> Result<Self, IndexerError> {
        let config = IndexerConfig::new(self.network, project_id);
        let indexer = AssetLedgerClient::from_config(&config)?;
        Ok(Self {
            indexer: Some(indexer),
            ..self
        })
    }
}

impl<T: Transport> Toolkit<T> {
    /// A toolkit around an already-built client.
    pub fn with_indexer(indexer: AssetLedgerClient<T>) -> Self {
        Self {
            network: indexer.network(),
            serialization: Serialization,
            indexer: Some(indexer),
        }
    }

    pub fn network(&self) -> NetworkId {
        self.network
    }

    pub fn serialization(&self) -> &Serialization {
        &self.serialization
    }

    pub fn has_indexer(&self) -> bool {
        self.indexer.is_some()
    }

    /// The indexer client, or [`IndexerError::NotConfigured`] until one is enabled.
    pub fn indexer(&self) -> Result<&AssetLedgerClient<T>, IndexerError> {
        self.indexer.as_ref().ok_or(IndexerError::NotConfigured)
    }

    pub async fn nft_asset_owner(
        &self,
        policy_id: &str,
        asset_name: &str,
    ) -> Result<Option<String>, IndexerError> {
        let indexer = self.indexer()?;
        Ok(best_effort(indexer.sole_owner(policy_id, asset_name).await))
    }

    pub async fn asset_owners(
        &self,
        policy_id: &str,
        asset_name: &str,
    ) -> Result<Option<OwnerDistribution>, IndexerError> {
        let indexer = self.indexer()?;
        Ok(best_effort(
            indexer.owner_distribution(policy_id, asset_name).await,
        ))
    }

    pub async fn owned_assets(
        &self,
        address: &str,
        filter: &PolicyFilter,
    ) -> Result<Option<AssetInventory>, IndexerError> {
        let indexer = self.indexer()?;
        Ok(best_effort(
            indexer.owned_asset_inventory(address, filter).await,
        ))
    }

    pub async fn policy_assets(
        &self,
        policy_id: &str,
    ) -> Result<Option<Vec<PolicyAsset>>, IndexerError> {
        let indexer = self.indexer()?;
        Ok(best_effort(indexer.policy_inventory(policy_id).await))
    }

    pub async fn asset_data(
        &self,
        policy_id: &str,
        asset_name: &str,
    ) -> Result<Option<AssetMetadata>, IndexerError> {
        let indexer = self.indexer()?;
        Ok(best_effort(indexer.asset_metadata(policy_id, asset_name).await))
    }
}

fn best_effort<V>(result: Result<V, IndexerError>) -> Option<V> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            match e.query() {
                Some(query) => tracing::error!(%query, error = %e, "indexer query failed"),
                None => tracing::error!(error = %e, "indexer query failed"),
            }
            None
        }
    }
}
