//! Fundamental types for adakit.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! network selectors, the decoded shape of a ledger address, asset units, and
//! the address error taxonomy.

pub mod address;
pub mod asset;
pub mod error;
pub mod network;

pub use address::{CredentialPart, DecodedAddress, Era};
pub use asset::{decode_asset_name, encode_asset_name, AssetUnit, POLICY_ID_HEX_LEN};
pub use error::{AddressError, AssetError};
pub use network::{AddressNetwork, NetworkId};
