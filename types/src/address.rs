//! Decoded shape of a ledger address.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::network::AddressNetwork;

/// Address era, selected by the header byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    /// Legacy bootstrap-era address (header high nibble `0x8`).
    Byron,
    Shelley,
}

/// Kind of credential occupying the payment or delegation slot of an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialPart {
    /// Verification-key hash.
    Payment,
    /// Script hash.
    Script,
    /// Stake-key hash.
    Stake,
    /// Pointer to a stake registration certificate.
    Pointer,
    /// The slot is absent.
    None,
}

impl CredentialPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Script => "script",
            Self::Stake => "stake",
            Self::Pointer => "pointer",
            Self::None => "none",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for CredentialPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural decomposition of a bech32 address.
///
/// `canonical_address` is the input address, except when the delegation part
/// is [`CredentialPart::Stake`]: then it is the derived reward (stake) address,
/// which is what ownership indexes are keyed by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedAddress {
    pub network: AddressNetwork,
    pub era: Era,
    pub canonical_address: String,
    pub payment_part: CredentialPart,
    pub delegation_part: CredentialPart,
}

impl DecodedAddress {
    /// A legacy address: no network, no credential information.
    pub fn byron(address: impl Into<String>) -> Self {
        Self {
            network: AddressNetwork::Unknown,
            era: Era::Byron,
            canonical_address: address.into(),
            payment_part: CredentialPart::None,
            delegation_part: CredentialPart::None,
        }
    }

    /// Whether the address delegates to a stake key, i.e. has a reward address.
    pub fn is_stake_wallet(&self) -> bool {
        self.delegation_part == CredentialPart::Stake
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byron_has_no_parts() {
        let decoded = DecodedAddress::byron("DdzFF");
        assert_eq!(decoded.era, Era::Byron);
        assert_eq!(decoded.network, AddressNetwork::Unknown);
        assert!(decoded.payment_part.is_none());
        assert!(decoded.delegation_part.is_none());
        assert!(!decoded.is_stake_wallet());
        assert_eq!(decoded.canonical_address, "DdzFF");
    }

    #[test]
    fn credential_part_display() {
        assert_eq!(CredentialPart::Pointer.to_string(), "pointer");
        assert_eq!(CredentialPart::None.as_str(), "none");
    }
}
