//! Asset units: policy id + hex-encoded asset name.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AssetError;

/// Length of a policy id in hex characters (28-byte script hash).
pub const POLICY_ID_HEX_LEN: usize = 56;

/// A native asset identifier split into its policy id and asset-name bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetUnit {
    pub policy_id: String,
    pub asset_name_hex: String,
}

impl AssetUnit {
    /// Split an on-chain unit (`<policy id><asset name hex>`).
    pub fn parse(unit: &str) -> Result<Self, AssetError> {
        if unit.len() < POLICY_ID_HEX_LEN || !unit.is_char_boundary(POLICY_ID_HEX_LEN) {
            return Err(AssetError::UnitTooShort(unit.to_string()));
        }
        let (policy_id, asset_name_hex) = unit.split_at(POLICY_ID_HEX_LEN);
        Ok(Self {
            policy_id: policy_id.to_string(),
            asset_name_hex: asset_name_hex.to_string(),
        })
    }

    /// Build a unit from a policy id and a human-readable asset name.
    pub fn from_name(policy_id: &str, asset_name: &str) -> Self {
        Self {
            policy_id: policy_id.to_string(),
            asset_name_hex: encode_asset_name(asset_name),
        }
    }

    /// The concatenated on-chain identifier.
    pub fn unit(&self) -> String {
        format!("{}{}", self.policy_id, self.asset_name_hex)
    }

    /// The asset name decoded for presentation.
    pub fn name(&self) -> Result<String, AssetError> {
        decode_asset_name(&self.asset_name_hex)
    }
}

impl fmt::Display for AssetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.policy_id, self.asset_name_hex)
    }
}

/// Hex-encode an asset name as it appears in an asset unit.
pub fn encode_asset_name(name: &str) -> String {
    hex::encode(name.as_bytes())
}

/// Decode hex asset-name bytes into a display string.
///
/// Names are arbitrary bytes on chain; invalid UTF-8 is replaced rather than
/// rejected.
pub fn decode_asset_name(hex_name: &str) -> Result<String, AssetError> {
    let bytes = hex::decode(hex_name).map_err(|e| AssetError::InvalidHex {
        value: hex_name.to_string(),
        reason: e.to_string(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
