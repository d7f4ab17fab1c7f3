//! Offline address handling for the toolkit.
//!
//! These are lenient front-ends over `adakit_crypto`: failures are logged
//! and turned into `None`/`false` so callers can treat bad input as absent.
//! Use the crypto crate directly when the reason matters.

use adakit_crypto::{decode_address, derive_stake_address, SignedMessage};
use adakit_types::DecodedAddress;

#[derive(Clone, Copy, Debug, Default)]
pub struct Serialization;

impl Serialization {
    pub fn decode_address(&self, address: &str) -> Option<DecodedAddress> {
        decode_address(address)
            .map_err(|e| tracing::error!(%address, error = %e, "failed to decode address"))
            .ok()
    }

    /// Reward address for the wallet behind `address`.
    pub fn stake_address(&self, address: &str) -> Option<String> {
        derive_stake_address(address)
            .map_err(|e| tracing::error!(%address, error = %e, "failed to derive stake address"))
            .ok()
    }

    /// Whether `message` is a valid signature over `payload` by the key behind `address`.
    pub fn validate_signed_message(
        &self,
        address: &str,
        message: &SignedMessage,
        payload: &[u8],
    ) -> bool {
        match message.verify(address, payload) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(%address, error = %e, "signed message rejected");
                false
            }
        }
    }
}
