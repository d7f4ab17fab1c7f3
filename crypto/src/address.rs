//! Address decoding and reward-address derivation.
//!
//! Shelley-era header byte: high nibble = address type, bit 0 = network
//! (1 = mainnet). Layout after the header:
//!
//! | type | payload |
//! |---|---|
//! | `0x0`-`0x3` | payment credential (28) + stake credential (28) |
//! | `0x4`-`0x5` | payment credential (28) + pointer (3 varints) |
//! | `0x6`-`0x7` | payment credential (28) |
//! | `0xe`-`0xf` | stake credential (28) |
//!
//! A high nibble of `0x8` marks a legacy Byron address, which is accepted but
//! not decomposed.

use adakit_types::{
    AddressError, AddressNetwork, CredentialPart, DecodedAddress, Era, NetworkId,
};
use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};

/// Length of a key or script hash credential.
pub const CREDENTIAL_LEN: usize = 28;

/// Bech32 prefix shared by mainnet and testnet reward addresses.
const STAKE_PREFIX: &str = "stake";

const BYRON_TYPE: u8 = 0x08;
const REWARD_KEY_TYPE: u8 = 0x0e;
const HEADER_LEN: usize = 1;
const SINGLE_CREDENTIAL_LEN: usize = HEADER_LEN + CREDENTIAL_LEN;
const BASE_LEN: usize = HEADER_LEN + 2 * CREDENTIAL_LEN;

/// Payment and delegation parts for a Shelley address type.
fn shelley_parts(address_type: u8) -> Option<(CredentialPart, CredentialPart)> {
    let parts = match address_type {
        0x00 => (CredentialPart::Payment, CredentialPart::Stake),
        0x01 => (CredentialPart::Script, CredentialPart::Stake),
        0x02 => (CredentialPart::Payment, CredentialPart::Script),
        0x03 => (CredentialPart::Script, CredentialPart::Script),
        0x04 => (CredentialPart::Payment, CredentialPart::Pointer),
        0x05 => (CredentialPart::Script, CredentialPart::Pointer),
        0x06 => (CredentialPart::Payment, CredentialPart::None),
        0x07 => (CredentialPart::Script, CredentialPart::None),
        0x0e => (CredentialPart::None, CredentialPart::Stake),
        0x0f => (CredentialPart::None, CredentialPart::Script),
        _ => return None,
    };
    Some(parts)
}

/// Location of a stake registration certificate, referenced by pointer addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pointer {
    pub slot: u64,
    pub tx_index: u64,
    pub cert_index: u64,
}

impl Pointer {
    /// Read three base-128 varints that must consume `bytes` exactly.
    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let mut pos = 0;
        let mut next = || -> Option<u64> {
            let mut value: u64 = 0;
            loop {
                let byte = *bytes.get(pos)?;
                pos += 1;
                value = value.checked_mul(128)? | u64::from(byte & 0x7f);
                if byte & 0x80 == 0 {
                    return Some(value);
                }
            }
        };
        let pointer = Self {
            slot: next()?,
            tx_index: next()?,
            cert_index: next()?,
        };
        (pos == bytes.len()).then_some(pointer)
    }
}

/// A bech32 address split into its prefix and structurally validated bytes.
///
/// Construction rejects empty, truncated or over-long payloads and unknown
/// header types, so accessors never see a partial address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawAddress {
    hrp: Hrp,
    bytes: Vec<u8>,
}

impl RawAddress {
    /// Decode a bech32 string. Bech32m checksums are rejected.
    pub fn from_bech32(address: &str) -> Result<Self, AddressError> {
        let checked = CheckedHrpstring::new::<Bech32>(address)
            .map_err(|e| AddressError::invalid(address, e.to_string()))?;
        let bytes: Vec<u8> = checked.byte_iter().collect();
        Self::new(checked.hrp().as_str(), bytes).map_err(|e| match e {
            AddressError::InvalidAddress { reason, .. } => AddressError::invalid(address, reason),
            AddressError::UnknownAddressType { header, .. } => AddressError::UnknownAddressType {
                address: address.to_string(),
                header,
            },
            other => other,
        })
    }

    /// Build an address from a human-readable prefix and raw bytes.
    pub fn new(hrp: &str, bytes: Vec<u8>) -> Result<Self, AddressError> {
        let hrp = Hrp::parse(hrp).map_err(|e| AddressError::invalid(hrp, e.to_string()))?;
        let Some(&header) = bytes.first() else {
            return Err(AddressError::invalid(hrp.as_str(), "empty address payload"));
        };

        let address_type = header >> 4;
        if address_type != BYRON_TYPE {
            if shelley_parts(address_type).is_none() {
                return Err(AddressError::UnknownAddressType {
                    address: hrp.to_string(),
                    header,
                });
            }
            let well_formed = match address_type {
                0x00..=0x03 => bytes.len() == BASE_LEN,
                0x04 | 0x05 => bytes.len() > SINGLE_CREDENTIAL_LEN
                    && Pointer::from_bytes(&bytes[SINGLE_CREDENTIAL_LEN..]).is_some(),
                _ => bytes.len() == SINGLE_CREDENTIAL_LEN,
            };
            if !well_formed {
                return Err(AddressError::invalid(
                    hrp.as_str(),
                    format!(
                        "malformed payload of {} bytes for address type 0x{address_type:x}",
                        bytes.len()
                    ),
                ));
            }
        }

        Ok(Self { hrp, bytes })
    }

    /// Human-readable bech32 prefix (e.g. `addr`, `stake_test`).
    pub fn hrp(&self) -> &str {
        self.hrp.as_str()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The leading header byte.
    pub fn header(&self) -> u8 {
        self.bytes[0]
    }

    /// High nibble of the header.
    pub fn address_type(&self) -> u8 {
        self.header() >> 4
    }

    pub fn era(&self) -> Era {
        if self.address_type() == BYRON_TYPE {
            Era::Byron
        } else {
            Era::Shelley
        }
    }

    /// Network from the header bit. `None` for Byron addresses.
    pub fn network(&self) -> Option<NetworkId> {
        match self.era() {
            Era::Byron => None,
            Era::Shelley => AddressNetwork::from_header(self.header()).network_id(),
        }
    }

    /// Payment and delegation parts. Byron addresses report none for both.
    pub fn parts(&self) -> (CredentialPart, CredentialPart) {
        shelley_parts(self.address_type()).unwrap_or((CredentialPart::None, CredentialPart::None))
    }

    /// Payment verification-key hash, when the payment part is a key.
    pub fn payment_key_hash(&self) -> Option<[u8; CREDENTIAL_LEN]> {
        match self.parts().0 {
            CredentialPart::Payment => self.credential_at(HEADER_LEN),
            _ => None,
        }
    }

    /// Stake-key hash, when the delegation part is a stake key.
    pub fn stake_key_hash(&self) -> Option<[u8; CREDENTIAL_LEN]> {
        match self.parts() {
            (CredentialPart::None, CredentialPart::Stake) => self.credential_at(HEADER_LEN),
            (_, CredentialPart::Stake) => self.credential_at(SINGLE_CREDENTIAL_LEN),
            _ => None,
        }
    }

    /// Stake pointer, for pointer addresses.
    pub fn pointer(&self) -> Option<Pointer> {
        match self.parts().1 {
            CredentialPart::Pointer => Pointer::from_bytes(&self.bytes[SINGLE_CREDENTIAL_LEN..]),
            _ => None,
        }
    }

    /// Reward address carrying this address's stake key, on the header's network.
    pub fn reward_address(&self) -> Option<RawAddress> {
        let network = self.network()?;
        let credential = self.stake_key_hash()?;
        let mut bytes = Vec::with_capacity(SINGLE_CREDENTIAL_LEN);
        bytes.push(network.reward_header());
        bytes.extend_from_slice(&credential);
        Some(Self {
            hrp: Hrp::parse_unchecked(network.stake_hrp()),
            bytes,
        })
    }

    /// Re-encode as bech32.
    pub fn to_bech32(&self) -> Result<String, AddressError> {
        bech32::encode::<Bech32>(self.hrp, &self.bytes)
            .map_err(|e| AddressError::invalid(self.hrp.as_str(), e.to_string()))
    }

    fn credential_at(&self, offset: usize) -> Option<[u8; CREDENTIAL_LEN]> {
        self.bytes
            .get(offset..offset + CREDENTIAL_LEN)?
            .try_into()
            .ok()
    }
}

/// Decode a bech32 address into its era, network and credential shape.
///
/// When the delegation part is a stake key, `canonical_address` is the derived
/// reward address; otherwise it is `address` unchanged.
pub fn decode_address(address: &str) -> Result<DecodedAddress, AddressError> {
    describe(&RawAddress::from_bech32(address)?, address)
}

fn describe(raw: &RawAddress, address: &str) -> Result<DecodedAddress, AddressError> {
    let Some(network) = raw.network() else {
        return Ok(DecodedAddress::byron(address));
    };

    let (payment_part, delegation_part) = raw.parts();
    let canonical_address = match raw.reward_address() {
        Some(reward) => reward.to_bech32()?,
        None => address.to_string(),
    };

    Ok(DecodedAddress {
        network: AddressNetwork::from(network),
        era: Era::Shelley,
        canonical_address,
        payment_part,
        delegation_part,
    })
}

/// Resolve the reward (stake) address that ownership indexes key a wallet by.
///
/// Well-formed key-hash reward addresses (`stake`/`stake_test` prefix) are
/// returned unchanged.
pub fn derive_stake_address(address: &str) -> Result<String, AddressError> {
    let raw = RawAddress::from_bech32(address)?;
    if raw.hrp().starts_with(STAKE_PREFIX) && raw.address_type() == REWARD_KEY_TYPE {
        return Ok(address.to_string());
    }
    let decoded = describe(&raw, address)?;
    if !decoded.is_stake_wallet() {
        return Err(AddressError::NotAStakeWallet(address.to_string()));
    }
    Ok(decoded.canonical_address)
}
