//! Asset-ownership aggregation over a chain indexing API.
//!
//! The indexing service exposes page-numbered list endpoints. This crate
//! drains them to exhaustion ([`PagedFetcher`]), validates every page, and
//! folds the results into ownership views ([`AssetLedgerClient`]):
//!
//! - the sole owner of a non-fungible asset
//! - the full owner distribution of an asset
//! - the assets held by a wallet, keyed by its stake address
//! - the assets minted under a policy
//! - normalized metadata for a single asset
//!
//! Duplicate entries across pages mean the service returned an inconsistent
//! snapshot; they fail the whole call instead of being merged. Nothing is
//! cached or retried.

pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod transport;
pub mod types;

pub use client::AssetLedgerClient;
pub use config::IndexerConfig;
pub use error::{FetchError, IndexerError, Query};
pub use pagination::{paged_url, PagedFetcher, PAGE_ORDER, PAGE_SIZE};
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use types::{AssetInventory, AssetMetadata, OwnerDistribution, PolicyAsset, PolicyFilter};
