//! Address and asset error types shared across crates.

use thiserror::Error;

/// Failures while decoding or deriving addresses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("unknown address type (header 0x{header:02x}) for {address}")]
    UnknownAddressType { address: String, header: u8 },

    #[error("not a valid staking wallet: {0}")]
    NotAStakeWallet(String),
}

impl AddressError {
    pub fn invalid(address: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            address: address.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failures while splitting or decoding asset identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset unit {0} is shorter than a policy id")]
    UnitTooShort(String),

    #[error("invalid hex in {value}: {reason}")]
    InvalidHex { value: String, reason: String },
}
