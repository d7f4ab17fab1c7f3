//! Ed25519 signed-message verification bound to an address.
//!
//! A message is accepted for an address when the signer's public key hashes
//! (Blake2b-224) to the address's key credential and the signature over the
//! payload verifies under that key.

use adakit_types::AddressError;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::RawAddress;
use crate::hash::blake2b_224;

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature encoding: {0}")]
    InvalidSignature(String),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("address {0} has no key credential to verify against")]
    NoKeyCredential(String),

    #[error("public key does not belong to {0}")]
    KeyMismatch(String),

    #[error("signature does not verify")]
    VerificationFailed,
}

/// A detached signature plus the public key that produced it, both hex-encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    pub signature: String,
    pub public_key: String,
}

impl SignedMessage {
    pub fn new(signature: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            public_key: public_key.into(),
        }
    }

    /// Verify that `payload` was signed by the key controlling `address`.
    ///
    /// The payment key is preferred; reward addresses are checked against
    /// their stake key.
    pub fn verify(&self, address: &str, payload: &[u8]) -> Result<(), SignatureError> {
        let key_bytes: [u8; 32] = decode_fixed(&self.public_key)
            .map_err(SignatureError::InvalidPublicKey)?;
        let sig_bytes: [u8; 64] =
            decode_fixed(&self.signature).map_err(SignatureError::InvalidSignature)?;

        let raw = RawAddress::from_bech32(address)?;
        let expected = raw
            .payment_key_hash()
            .or_else(|| raw.stake_key_hash())
            .ok_or_else(|| SignatureError::NoKeyCredential(address.to_string()))?;
        if blake2b_224(&key_bytes) != expected {
            return Err(SignatureError::KeyMismatch(address.to_string()));
        }

        let verifying_key = VerifyingKey::from_bytes(&key_bytes)
            .map_err(|e| SignatureError::InvalidPublicKey(e.to_string()))?;
        let signature = Signature::from_bytes(&sig_bytes);
        verifying_key
            .verify(payload, &signature)
            .map_err(|_| SignatureError::VerificationFailed)
    }
}

fn decode_fixed<const N: usize>(value: &str) -> Result<[u8; N], String> {
    let bytes = hex::decode(value).map_err(|e| e.to_string())?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| format!("expected {N} bytes, got {len}"))
}
