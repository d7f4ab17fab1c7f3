//! Ledger primitives for adakit.
//!
//! - **Address codec**: bech32 address decoding into era, network and
//!   credential shape, plus reward (stake) address derivation
//! - **Blake2b-224** for verification-key hashes
//! - **Ed25519** signed-message verification bound to an address

pub mod address;
pub mod hash;
pub mod sign;

pub use address::{decode_address, derive_stake_address, Pointer, RawAddress, CREDENTIAL_LEN};
pub use hash::blake2b_224;
pub use sign::{SignatureError, SignedMessage};
