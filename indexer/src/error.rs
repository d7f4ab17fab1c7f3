use std::fmt;

use adakit_types::AddressError;
use thiserror::Error;

/// Failures of a single request against the indexing API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("indexer rejected request to {url} with HTTP {status}")]
    UpstreamRejected { url: String, status: u16 },

    #[error("malformed response from {url}: {reason}")]
    UpstreamMalformed { url: String, reason: String },
}

/// The ownership query a failure belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    SoleOwner { policy_id: String, asset_name: String },
    OwnerDistribution { policy_id: String, asset_name: String },
    OwnedAssets { stake_address: String },
    PolicyInventory { policy_id: String },
    AssetMetadata { policy_id: String, asset_name: String },
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SoleOwner {
                policy_id,
                asset_name,
            } => write!(f, "NFT asset owner for {policy_id}.{asset_name}"),
            Self::OwnerDistribution {
                policy_id,
                asset_name,
            } => write!(f, "asset owners for {policy_id}.{asset_name}"),
            Self::OwnedAssets { stake_address } => write!(f, "owned assets for {stake_address}"),
            Self::PolicyInventory { policy_id } => write!(f, "policy assets for {policy_id}"),
            Self::AssetMetadata {
                policy_id,
                asset_name,
            } => write!(f, "asset data for {policy_id}.{asset_name}"),
        }
    }
}

/// Failures of an ownership operation, scoped to the query that raised them.
#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("indexer is not configured: a project id is required")]
    NotConfigured,

    #[error("failed to set up indexer client: {0}")]
    Setup(String),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("{query}: {source}")]
    Fetch {
        query: Query,
        #[source]
        source: FetchError,
    },

    #[error("{query}: invalid payload: {reason}")]
    InvalidPayload { query: Query, reason: String },

    #[error("ambiguous ownership for {policy_id}.{asset_name}: expected one owner, found {found}")]
    AmbiguousOwnership {
        policy_id: String,
        asset_name: String,
        found: usize,
    },

    #[error("duplicate owner entry for {address} in {policy_id}.{asset_name}")]
    DuplicateOwnerEntry {
        policy_id: String,
        asset_name: String,
        address: String,
    },

    #[error("duplicate asset entry for {unit} under policy {policy_id}")]
    DuplicatePolicyAsset { policy_id: String, unit: String },
}

impl IndexerError {
    pub(crate) fn fetch(query: &Query) -> impl FnOnce(FetchError) -> Self + '_ {
        move |source| Self::Fetch {
            query: query.clone(),
            source,
        }
    }

    pub(crate) fn invalid_payload(query: &Query, reason: impl fmt::Display) -> Self {
        Self::InvalidPayload {
            query: query.clone(),
            reason: reason.to_string(),
        }
    }

    /// The query this failure is scoped to, if it came from one.
    pub fn query(&self) -> Option<&Query> {
        match self {
            Self::Fetch { query, .. } | Self::InvalidPayload { query, .. } => Some(query),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_names_the_query() {
        let query = Query::PolicyInventory {
            policy_id: "abc".into(),
        };
        let err = IndexerError::fetch(&query)(FetchError::UpstreamRejected {
            url: "https://indexer/assets/policy/abc".into(),
            status: 429,
        });
        assert_eq!(
            err.to_string(),
            "policy assets for abc: indexer rejected request to https://indexer/assets/policy/abc with HTTP 429"
        );
        assert_eq!(err.query(), Some(&query));
    }

    #[test]
    fn address_errors_pass_through() {
        let err = IndexerError::from(AddressError::NotAStakeWallet("addr1v".into()));
        assert_eq!(err.to_string(), "not a valid staking wallet: addr1v");
        assert!(err.query().is_none());
    }
}
