// src/errors.rs

//! Error types for key derivation and signing.

use std::fmt;

/// Main error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Seed bytes are not exactly [`crate::SEED_SIZE`] bytes long
    InvalidSeedLength {
        /// Required seed length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Seed text could not be decoded (bad base58, checksum, or version)
    InvalidSeed(String),

    /// Rejection sampling exceeded the defensive round cap
    DerivationExhausted,

    /// Invalid key material (zero scalar, malformed point encoding)
    InvalidKey(String),

    /// Signature generation failed
    SigningError(String),

    /// A freshly produced signature failed the strict canonical check
    NonCanonicalSignature,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidSeedLength { expected, actual } => {
                write!(f, "Invalid seed length: expected {} bytes, got {}", expected, actual)
            }
            CryptoError::InvalidSeed(msg) => write!(f, "Invalid seed: {}", msg),
            CryptoError::DerivationExhausted => {
                write!(f, "Key derivation exhausted its sampling rounds")
            }
            CryptoError::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            CryptoError::SigningError(msg) => write!(f, "Signing error: {}", msg),
            CryptoError::NonCanonicalSignature => {
                write!(f, "Produced signature is not strictly canonical")
            }
        }
    }
}

impl std::error::Error for CryptoError {}

/// Result type alias for cryptographic operations
pub type Result<T> = std::result::Result<T, CryptoError>;
