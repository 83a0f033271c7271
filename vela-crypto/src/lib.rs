// src/lib.rs

//! # Vela Crypto
//!
//! Deterministic key derivation and canonical transaction signing for the
//! Vela ledger.
//!
//! This module provides the complete seed-to-signature pipeline:
//!
//! - **Seeds**: 16-byte root secrets with family-seed text import/export
//! - **Derivation**: seed → private generator → per-account key pairs
//! - **Signing**: deterministic ECDSA over secp256k1, low-s normalized
//! - **Canonical form**: strict byte-level signature validation that
//!   rejects malleable encodings
//!
//! ## Security Properties
//!
//! - **Determinism**: every key pair is a pure function of the seed and
//!   the account index, so a seed backup restores the whole wallet
//! - **No modulo bias**: scalar candidates are rejection-sampled against
//!   the curve order instead of reduced modulo it
//! - **Non-malleability**: produced signatures are strictly canonical;
//!   the high-s twin of every signature is rejected
//!
//! ## Example Usage
//!
//! ```rust
//! use vela_crypto::Seed;
//!
//! // Derive the first account from a passphrase seed
//! let seed = Seed::from_passphrase("masterpassphrase");
//! let key_pair = seed.derive_key_pair(0).unwrap();
//!
//! // Sign and verify a 32-byte message digest
//! let digest = vela_crypto::hash::sha512_half(b"payment intent");
//! let signature = key_pair.sign(&digest).unwrap();
//! assert!(key_pair.verify(&digest, &signature));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod errors;
pub mod hash;
pub mod seed;
pub mod derivation;
pub mod keypair;
pub mod canonical;

// Re-export commonly used types
pub use crate::errors::{CryptoError, Result};
pub use crate::seed::Seed;
pub use crate::keypair::KeyPair;

/// Seed size (16 bytes / 128 bits)
pub const SEED_SIZE: usize = 16;

/// Private key size (secp256k1 scalar: 32 bytes)
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Public key size (SEC1 compressed point: 33 bytes)
pub const PUBLIC_KEY_SIZE: usize = 33;

/// Hash160 output size (RIPEMD-160 over SHA-256: 20 bytes)
pub const HASH160_SIZE: usize = 20;

/// Version byte prefixed to a seed in its base58-check text form
pub const FAMILY_SEED_VERSION: u8 = 0x21;

/// Defensive cap on rejection-sampling rounds during scalar derivation.
///
/// A single round fails with probability below 2^-128, so reaching this
/// cap means the hash or the curve order constant is broken.
pub const DERIVATION_ROUND_LIMIT: u32 = 1000;
