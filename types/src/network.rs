//! Network identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which ledger network a client is configured against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production network.
    #[default]
    Mainnet,
    /// The public test network.
    Testnet,
}

impl NetworkId {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }

    /// Bech32 prefix used for reward (stake) addresses on this network.
    pub fn stake_hrp(&self) -> &'static str {
        match self {
            Self::Mainnet => "stake",
            Self::Testnet => "stake_test",
        }
    }

    /// Reward-address header byte for a key-hash stake credential.
    pub fn reward_header(&self) -> u8 {
        match self {
            Self::Mainnet => 0xe1,
            Self::Testnet => 0xe0,
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network as read from an address header.
///
/// Legacy (Byron) addresses do not expose a network in their header, so they
/// decode to [`AddressNetwork::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressNetwork {
    Mainnet,
    Testnet,
    Unknown,
}

impl AddressNetwork {
    /// Read the network bit (bit 0) of a Shelley-era header byte.
    pub fn from_header(header: u8) -> Self {
        if header & 0x01 == 0x01 {
            Self::Mainnet
        } else {
            Self::Testnet
        }
    }

    /// The concrete network, if known.
    pub fn network_id(&self) -> Option<NetworkId> {
        match self {
            Self::Mainnet => Some(NetworkId::Mainnet),
            Self::Testnet => Some(NetworkId::Testnet),
            Self::Unknown => None,
        }
    }
}

impl From<NetworkId> for AddressNetwork {
    fn from(id: NetworkId) -> Self {
        match id {
            NetworkId::Mainnet => Self::Mainnet,
            NetworkId::Testnet => Self::Testnet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_bit_selects_mainnet() {
        assert_eq!(AddressNetwork::from_header(0x01), AddressNetwork::Mainnet);
        assert_eq!(AddressNetwork::from_header(0x61), AddressNetwork::Mainnet);
        assert_eq!(AddressNetwork::from_header(0x00), AddressNetwork::Testnet);
        assert_eq!(AddressNetwork::from_header(0xe0), AddressNetwork::Testnet);
    }

    #[test]
    fn reward_headers() {
        assert_eq!(NetworkId::Mainnet.reward_header(), 0xe1);
        assert_eq!(NetworkId::Testnet.reward_header(), 0xe0);
        assert_eq!(NetworkId::Testnet.stake_hrp(), "stake_test");
    }

    #[test]
    fn unknown_network_has_no_id() {
        assert_eq!(AddressNetwork::Unknown.network_id(), None);
        assert_eq!(
            AddressNetwork::from(NetworkId::Mainnet).network_id(),
            Some(NetworkId::Mainnet)
        );
    }
}
