//! Ownership views over the indexing API.

use std::collections::HashSet;

use adakit_crypto::derive_stake_address;
use adakit_types::{decode_asset_name, AssetUnit, NetworkId};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::IndexerConfig;
use crate::error::{IndexerError, Query};
use crate::pagination::{paged_url, PagedFetcher};
use crate::transport::{HttpTransport, Transport};
use crate::types::{
    AssetDetailRecord, AssetInventory, AssetMetadata, HeldAssetRecord, OwnerDistribution,
    OwnerRecord, PolicyAsset, PolicyAssetRecord, PolicyFilter,
};

/// Gateway used to resolve `ipfs://` image references.
pub const IPFS_GATEWAY: &str = "https://ipfs.blockfrost.dev/ipfs/";

const IPFS_SCHEME: &str = "ipfs://";

/// Aggregating client for asset ownership queries.
///
/// Configuration is fixed at construction; every call re-fetches from the
/// indexer and owns its own accumulator, so a client can be shared freely.
pub struct AssetLedgerClient<T = HttpTransport> {
    transport: T,
    project_id: String,
    network: NetworkId,
    base_url: String,
}

impl AssetLedgerClient<HttpTransport> {
    /// Build a client that talks HTTP to the configured endpoint.
    pub fn from_config(config: &IndexerConfig) -> Result<Self, IndexerError> {
        config.project_id()?;
        let transport = HttpTransport::new(config.request_timeout)
            .map_err(|e| IndexerError::Setup(format!("failed to create HTTP client: {e}")))?;
        Self::new(config, transport)
    }
}

impl<T: Transport> AssetLedgerClient<T> {
    /// Fails with [`IndexerError::NotConfigured`] when no project id is set.
    pub fn new(config: &IndexerConfig, transport: T) -> Result<Self, IndexerError> {
        let project_id = config.project_id()?.to_string();
        Ok(Self {
            transport,
            project_id,
            network: config.network,
            base_url: config.base_url(),
        })
    }

    pub fn network(&self) -> NetworkId {
        self.network
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The single address holding a non-fungible asset.
    ///
    /// The endpoint only promises one holder for non-fungible assets; zero or
    /// several entries fail with [`IndexerError::AmbiguousOwnership`].
    pub async fn sole_owner(
        &self,
        policy_id: &str,
        asset_name: &str,
    ) -> Result<String, IndexerError> {
        let query = Query::SoleOwner {
            policy_id: policy_id.to_string(),
            asset_name: asset_name.to_string(),
        };
        let url = self.asset_owners_endpoint(policy_id, asset_name);
        let items = self
            .fetcher()
            .fetch_page(&url)
            .await
            .map_err(IndexerError::fetch(&query))?;

        if items.len() != 1 {
            return Err(IndexerError::AmbiguousOwnership {
                policy_id: policy_id.to_string(),
                asset_name: asset_name.to_string(),
                found: items.len(),
            });
        }
        let owner = parse_records::<OwnerRecord>(items, &query)?
            .pop()
            .ok_or_else(|| IndexerError::invalid_payload(&query, "expected a single owner"))?;
        Ok(owner.address)
    }

    /// Every holder of an asset with its quantity, largest holders first.
    ///
    /// Equal quantities keep the order the indexer returned them in. An
    /// address listed twice fails with [`IndexerError::DuplicateOwnerEntry`].
    pub async fn owner_distribution(
        &self,
        policy_id: &str,
        asset_name: &str,
    ) -> Result<OwnerDistribution, IndexerError> {
        let query = Query::OwnerDistribution {
            policy_id: policy_id.to_string(),
            asset_name: asset_name.to_string(),
        };
        let endpoint = self.asset_owners_endpoint(policy_id, asset_name);
        let items = self
            .fetcher()
            .fetch_all(|page| paged_url(&endpoint, page))
            .await
            .map_err(IndexerError::fetch(&query))?;

        let mut owners = parse_records::<OwnerRecord>(items, &query)?
            .into_iter()
            .map(|owner| {
                let quantity = owner.quantity.parse::<u64>().map_err(|e| {
                    IndexerError::invalid_payload(&query, format!("quantity {:?}: {e}", owner.quantity))
                })?;
                Ok((owner.address, quantity))
            })
            .collect::<Result<Vec<_>, IndexerError>>()?;
        owners.sort_by(|a, b| b.1.cmp(&a.1));

        let mut distribution = OwnerDistribution::with_capacity(owners.len());
        for (address, quantity) in owners {
            if distribution.contains_key(&address) {
                tracing::warn!(%policy_id, %asset_name, %address, "duplicate owner across pages");
                return Err(IndexerError::DuplicateOwnerEntry {
                    policy_id: policy_id.to_string(),
                    asset_name: asset_name.to_string(),
                    address,
                });
            }
            distribution.insert(address, quantity);
        }

        tracing::debug!(%policy_id, %asset_name, owners = distribution.len(), "resolved asset owners");
        Ok(distribution)
    }

    /// Assets held by the wallet behind `address`, optionally filtered by policy.
    ///
    /// The wallet is resolved to its stake address first, so every address
    /// sharing a stake key is covered. A single-policy filter yields
    /// [`AssetInventory::ByName`]; no filter or several policies yield
    /// [`AssetInventory::ByPolicy`].
    pub async fn owned_asset_inventory(
        &self,
        address: &str,
        filter: &PolicyFilter,
    ) -> Result<AssetInventory, IndexerError> {
        let stake_address = derive_stake_address(address)?;
        let query = Query::OwnedAssets {
            stake_address: stake_address.clone(),
        };
        let endpoint = format!("{}/accounts/{stake_address}/addresses/assets", self.base_url);
        let items = self
            .fetcher()
            .fetch_all(|page| paged_url(&endpoint, page))
            .await
            .map_err(IndexerError::fetch(&query))?;

        let mut inventory = AssetInventory::for_filter(filter);
        for held in parse_records::<HeldAssetRecord>(items, &query)? {
            if !filter.matches(&held.unit) {
                continue;
            }
            let unit = AssetUnit::parse(&held.unit)
                .map_err(|e| IndexerError::invalid_payload(&query, e))?;
            let name = unit
                .name()
                .map_err(|e| IndexerError::invalid_payload(&query, e))?;
            let quantity = held.quantity.parse::<f64>().map_err(|e| {
                IndexerError::invalid_payload(&query, format!("quantity {:?}: {e}", held.quantity))
            })?;
            inventory.insert(unit.policy_id, name, quantity);
        }

        tracing::debug!(%stake_address, assets = inventory.len(), "resolved owned assets");
        Ok(inventory)
    }

    /// Every asset minted under a policy.
    ///
    /// A unit listed twice fails with [`IndexerError::DuplicatePolicyAsset`].
    pub async fn policy_inventory(&self, policy_id: &str) -> Result<Vec<PolicyAsset>, IndexerError> {
        let query = Query::PolicyInventory {
            policy_id: policy_id.to_string(),
        };
        let endpoint = format!("{}/assets/policy/{policy_id}", self.base_url);
        let items = self
            .fetcher()
            .fetch_all(|page| paged_url(&endpoint, page))
            .await
            .map_err(IndexerError::fetch(&query))?;

        let records = parse_records::<PolicyAssetRecord>(items, &query)?;
        let mut seen = HashSet::with_capacity(records.len());
        let mut assets = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.asset.clone()) {
                tracing::warn!(%policy_id, unit = %record.asset, "duplicate asset across pages");
                return Err(IndexerError::DuplicatePolicyAsset {
                    policy_id: policy_id.to_string(),
                    unit: record.asset,
                });
            }
            let name = AssetUnit::parse(&record.asset)
                .and_then(|unit| unit.name())
                .map_err(|e| IndexerError::invalid_payload(&query, e))?;
            assets.push(PolicyAsset {
                name,
                unit: record.asset,
                quantity: record.quantity,
            });
        }

        tracing::debug!(%policy_id, assets = assets.len(), "resolved policy assets");
        Ok(assets)
    }

    /// Normalized detail for one asset.
    ///
    /// On-chain metadata is passed through verbatim; the only rewrite is an
    /// `ipfs://<cid>` image, exposed as a gateway URL in `image_url`.
    pub async fn asset_metadata(
        &self,
        policy_id: &str,
        asset_name: &str,
    ) -> Result<AssetMetadata, IndexerError> {
        let query = Query::AssetMetadata {
            policy_id: policy_id.to_string(),
            asset_name: asset_name.to_string(),
        };
        let url = self.asset_endpoint(policy_id, asset_name);
        let body = self
            .fetcher()
            .fetch_json(&url)
            .await
            .map_err(IndexerError::fetch(&query))?;
        let detail: AssetDetailRecord =
            serde_json::from_value(body).map_err(|e| IndexerError::invalid_payload(&query, e))?;

        let asset_name = match detail.asset_name.as_deref() {
            Some(hex_name) => {
                decode_asset_name(hex_name).map_err(|e| IndexerError::invalid_payload(&query, e))?
            }
            None => String::new(),
        };
        let asset_quantity = detail.quantity.parse::<u64>().map_err(|e| {
            IndexerError::invalid_payload(&query, format!("quantity {:?}: {e}", detail.quantity))
        })?;
        let image_url = detail
            .onchain_metadata
            .as_ref()
            .and_then(|metadata| metadata.get("image"))
            .and_then(Value::as_str)
            .and_then(ipfs_gateway_url);

        Ok(AssetMetadata {
            id: detail.fingerprint,
            policy_id: detail.policy_id,
            asset_name,
            asset_quantity,
            image_url,
            metadata: detail.onchain_metadata,
        })
    }

    fn fetcher(&self) -> PagedFetcher<'_, T> {
        PagedFetcher::new(&self.transport, &self.project_id)
    }

    fn asset_endpoint(&self, policy_id: &str, asset_name: &str) -> String {
        format!(
            "{}/assets/{}",
            self.base_url,
            AssetUnit::from_name(policy_id, asset_name)
        )
    }

    fn asset_owners_endpoint(&self, policy_id: &str, asset_name: &str) -> String {
        format!("{}/addresses", self.asset_endpoint(policy_id, asset_name))
    }
}

/// Rewrite `ipfs://<cid>` to an HTTP gateway URL.
pub fn ipfs_gateway_url(image: &str) -> Option<String> {
    image
        .strip_prefix(IPFS_SCHEME)
        .map(|cid| format!("{IPFS_GATEWAY}{cid}"))
}

fn parse_records<R: DeserializeOwned>(
    items: Vec<Value>,
    query: &Query,
) -> Result<Vec<R>, IndexerError> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|e| IndexerError::invalid_payload(query, e)))
        .collect()
}
