//! Cardano address toolkit.
//!
//! [`Toolkit`] bundles offline address handling ([`Serialization`]) with an
//! optional [`AssetLedgerClient`](adakit_indexer::AssetLedgerClient) for
//! asset-ownership queries. The indexer half stays disabled until a project
//! id is supplied, either in [`ToolkitConfig`] or through
//! [`Toolkit::enable_indexer`].
//!
//! ```toml
//! network = "testnet"
//! project_id = "testnetAbc123"
//! log_format = "json"
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod serialization;
pub mod toolkit;

pub use config::ToolkitConfig;
pub use error::ToolkitError;
pub use logging::{init_logging, try_init_logging, LogFormat};
pub use serialization::Serialization;
pub use toolkit::Toolkit;

pub use adakit_crypto::SignedMessage;
pub use adakit_indexer::{
    AssetInventory, AssetMetadata, IndexerError, OwnerDistribution, PolicyAsset, PolicyFilter,
};
pub use adakit_types::{CredentialPart, DecodedAddress, Era, NetworkId};
