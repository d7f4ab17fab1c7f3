//! Indexing API records and the ownership views built from them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Address -> quantity, ordered by descending quantity.
pub type OwnerDistribution = IndexMap<String, u64>;

/// One holder of an asset (`/assets/{unit}/addresses`).
#[derive(Debug, Deserialize)]
pub(crate) struct OwnerRecord {
    pub address: String,
    pub quantity: String,
}

/// One asset held by an account (`/accounts/{stake}/addresses/assets`).
#[derive(Debug, Deserialize)]
pub(crate) struct HeldAssetRecord {
    pub unit: String,
    pub quantity: String,
}

/// One asset minted under a policy (`/assets/policy/{policy}`).
#[derive(Debug, Deserialize)]
pub(crate) struct PolicyAssetRecord {
    pub asset: String,
    pub quantity: String,
}

/// Single-asset detail (`/assets/{unit}`).
#[derive(Debug, Deserialize)]
pub(crate) struct AssetDetailRecord {
    pub policy_id: String,
    #[serde(default)]
    pub asset_name: Option<String>,
    pub fingerprint: String,
    pub quantity: String,
    #[serde(default)]
    pub onchain_metadata: Option<Value>,
}

/// Which policies an inventory query keeps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PolicyFilter {
    /// Every asset.
    #[default]
    All,
    /// Assets whose unit contains this policy id. Yields a flat name -> quantity view.
    Policy(String),
    /// Assets whose unit contains any of these policy ids.
    AnyOf(Vec<String>),
}

impl PolicyFilter {
    pub fn matches(&self, unit: &str) -> bool {
        match self {
            Self::All => true,
            Self::Policy(policy_id) => unit.contains(policy_id.as_str()),
            Self::AnyOf(policy_ids) => policy_ids.iter().any(|id| unit.contains(id.as_str())),
        }
    }
}

impl From<&str> for PolicyFilter {
    fn from(policy_id: &str) -> Self {
        Self::Policy(policy_id.to_string())
    }
}

impl From<Vec<String>> for PolicyFilter {
    fn from(policy_ids: Vec<String>) -> Self {
        Self::AnyOf(policy_ids)
    }
}

/// Assets held by a wallet.
///
/// Quantities are floating point so fractional fungible tokens survive.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AssetInventory {
    /// asset name -> quantity, for a single-policy query.
    ByName(IndexMap<String, f64>),
    /// policy id -> asset name -> quantity.
    ByPolicy(IndexMap<String, IndexMap<String, f64>>),
}

impl AssetInventory {
    pub(crate) fn for_filter(filter: &PolicyFilter) -> Self {
        match filter {
            PolicyFilter::Policy(_) => Self::ByName(IndexMap::new()),
            PolicyFilter::All | PolicyFilter::AnyOf(_) => Self::ByPolicy(IndexMap::new()),
        }
    }

    pub(crate) fn insert(&mut self, policy_id: String, asset_name: String, quantity: f64) {
        match self {
            Self::ByName(assets) => {
                assets.insert(asset_name, quantity);
            }
            Self::ByPolicy(policies) => {
                policies
                    .entry(policy_id)
                    .or_default()
                    .insert(asset_name, quantity);
            }
        }
    }

    /// Number of distinct assets in the inventory.
    pub fn len(&self) -> usize {
        match self {
            Self::ByName(assets) => assets.len(),
            Self::ByPolicy(policies) => policies.values().map(IndexMap::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An asset minted under a policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PolicyAsset {
    /// Decoded asset name.
    pub name: String,
    /// Full asset unit.
    pub unit: String,
    /// Quantity as reported by the indexer.
    pub quantity: String,
}

/// Normalized single-asset metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadata {
    /// Asset fingerprint.
    pub id: String,
    pub policy_id: String,
    pub asset_name: String,
    pub asset_quantity: u64,
    /// Gateway URL for an `ipfs://` image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// On-chain metadata, verbatim.
    pub metadata: Option<Value>,
}
