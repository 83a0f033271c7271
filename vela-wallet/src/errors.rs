// src/errors.rs

//! Error types for wallet operations.

use std::fmt;
use std::io;

/// Main error type for wallet operations
#[derive(Debug)]
pub enum WalletError {
    /// Account not found
    AccountNotFound(String),

    /// Account already derived
    AccountExists(String),

    /// Invalid address format
    InvalidAddress(String),

    /// Keystore error
    KeystoreError(String),

    /// Key derivation or signing error
    CryptoError(String),

    /// Serialization error
    SerializationError(String),

    /// I/O error
    IoError(io::Error),

    /// Invalid password
    InvalidPassword,

    /// File not found
    FileNotFound(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::AccountNotFound(msg) => write!(f, "Account not found: {}", msg),
            WalletError::AccountExists(msg) => write!(f, "Account already exists: {}", msg),
            WalletError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            WalletError::KeystoreError(msg) => write!(f, "Keystore error: {}", msg),
            WalletError::CryptoError(msg) => write!(f, "Crypto error: {}", msg),
            WalletError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            WalletError::IoError(err) => write!(f, "I/O error: {}", err),
            WalletError::InvalidPassword => write!(f, "Invalid password"),
            WalletError::FileNotFound(msg) => write!(f, "File not found: {}", msg),
        }
    }
}

impl std::error::Error for WalletError {}

impl From<io::Error> for WalletError {
    fn from(err: io::Error) -> Self {
        WalletError::IoError(err)
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::SerializationError(format!("JSON error: {}", err))
    }
}

impl From<bincode::Error> for WalletError {
    fn from(err: bincode::Error) -> Self {
        WalletError::SerializationError(format!("Bincode error: {}", err))
    }
}

impl From<vela_crypto::CryptoError> for WalletError {
    fn from(err: vela_crypto::CryptoError) -> Self {
        WalletError::CryptoError(format!("{}", err))
    }
}

/// Result type alias for wallet operations
pub type Result<T> = std::result::Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WalletError::AccountNotFound("root".to_string());
        assert_eq!(format!("{}", err), "Account not found: root");
    }

    #[test]
    fn test_crypto_error_conversion() {
        let err: WalletError = vela_crypto::CryptoError::DerivationExhausted.into();
        assert!(matches!(err, WalletError::CryptoError(_)));
    }
}
