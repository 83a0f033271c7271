// src/lib.rs

//! # Vela Wallet
//!
//! Thin client wallet for the Vela ledger.
//!
//! This module provides:
//! - **Account Management**: deterministic accounts derived from one seed
//! - **Addresses**: base58-check account addresses over hash160
//! - **Signing**: canonical transaction signing with the active account
//! - **Keystore**: encrypted seed backup storage
//!
//! ## Example Usage
//!
//! ```rust
//! use vela_wallet::Wallet;
//!
//! // Restore a wallet from a passphrase and derive its first account
//! let mut wallet = Wallet::from_passphrase("masterpassphrase");
//! let address = wallet.derive_account(0).unwrap().address().to_string();
//! assert_eq!(address, "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod errors;
pub mod account;
pub mod wallet;
pub mod keystore;

// Re-export commonly used types
pub use crate::errors::{WalletError, Result};
pub use crate::account::{Account, AccountId, Address};
pub use crate::keystore::Keystore;
pub use crate::wallet::Wallet;

/// Wallet version for compatibility
pub const WALLET_VERSION: u32 = 1;

/// Default keystore directory name
pub const KEYSTORE_DIR: &str = ".vela-wallet";

/// Version byte prefixed to an address in its base58-check text form
pub const ADDRESS_VERSION: u8 = 0x00;
