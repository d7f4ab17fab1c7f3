//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies are abstracted behind traits. This crate provides
//! test-friendly implementations that:
//! - Return scripted, deterministic responses
//! - Record every call for assertions
//! - Never touch the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod transport;

pub use transport::{NullTransport, RecordedRequest};
