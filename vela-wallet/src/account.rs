// src/account.rs

//! Accounts derived from a seed, with their ledger addresses.

use crate::errors::{Result, WalletError};
use crate::ADDRESS_VERSION;
use serde::{Deserialize, Serialize};
use vela_crypto::{KeyPair, Seed, HASH160_SIZE};

/// Identity of an account within one wallet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountId {
    /// The root key pair, taken directly from the private generator
    Root,

    /// A per-account key pair derived with this index
    Index(u32),
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountId::Root => write!(f, "root"),
            AccountId::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A ledger address: hash160 of a compressed public key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address([u8; HASH160_SIZE]);

impl Address {
    /// Builds the address for a key pair
    pub fn from_key_pair(key_pair: &KeyPair) -> Self {
        Self(key_pair.public_key_hash())
    }

    /// Returns the raw 20-byte account identifier
    pub fn as_bytes(&self) -> &[u8; HASH160_SIZE] {
        &self.0
    }

    /// Returns the account identifier as uppercase hex
    ///
    /// The form used for the account field inside serialized
    /// transactions, as opposed to the base58-check display form.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Parses an address from its base58-check text form
    ///
    /// # Example
    /// ```
    /// use vela_wallet::Address;
    ///
    /// let addr = Address::from_string("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh").unwrap();
    /// assert_eq!(addr.to_string(), "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh");
    /// ```
    pub fn from_string(text: &str) -> Result<Self> {
        let payload = bs58::decode(text)
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .with_check(Some(ADDRESS_VERSION))
            .into_vec()
            .map_err(|e| WalletError::InvalidAddress(format!("{}", e)))?;

        // The decoded payload still carries the version byte
        if payload.len() != HASH160_SIZE + 1 {
            return Err(WalletError::InvalidAddress(format!(
                "Invalid payload length: {}",
                payload.len()
            )));
        }

        let mut bytes = [0u8; HASH160_SIZE];
        bytes.copy_from_slice(&payload[1..]);
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = bs58::encode(&self.0)
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .with_check_version(ADDRESS_VERSION)
            .into_string();
        write!(f, "{}", text)
    }
}

/// An account: a derived key pair plus its address
#[derive(Clone, Debug)]
pub struct Account {
    /// Account identity within its wallet
    id: AccountId,

    /// The derived key pair
    key_pair: KeyPair,

    /// Ledger address of the public key
    address: Address,
}

/// Serializable public view of an account
///
/// Carries no secret material; safe to export and display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Account identity
    pub id: AccountId,

    /// Textual ledger address
    pub address: String,

    /// Compressed public key, uppercase hex
    pub public_key: String,
}

impl Account {
    /// Derives the account for an index from a seed
    ///
    /// # Arguments
    /// * `seed` - Wallet seed
    /// * `index` - Account index
    pub fn derive(seed: &Seed, index: u32) -> Result<Self> {
        let key_pair = seed.derive_key_pair(index)?;
        let address = Address::from_key_pair(&key_pair);

        Ok(Self {
            id: AccountId::Index(index),
            key_pair,
            address,
        })
    }

    /// Derives the root account from a seed
    pub fn derive_root(seed: &Seed) -> Result<Self> {
        let key_pair = seed.derive_root_key_pair()?;
        let address = Address::from_key_pair(&key_pair);

        Ok(Self {
            id: AccountId::Root,
            key_pair,
            address,
        })
    }

    /// Gets the account identity
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Gets the account address
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Gets the underlying key pair
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// Signs a message digest with this account's key
    pub fn sign(&self, digest: &[u8]) -> Result<Vec<u8>> {
        Ok(self.key_pair.sign(digest)?)
    }

    /// Verifies a signature against this account's key
    pub fn verify(&self, digest: &[u8], signature: &[u8]) -> bool {
        self.key_pair.verify(digest, signature)
    }

    /// Exports the public view of this account
    pub fn info(&self) -> AccountInfo {
        AccountInfo {
            id: self.id,
            address: self.address.to_string(),
            public_key: self.key_pair.public_key_hex(),
        }
    }

    /// Exports the public view as JSON
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.info())?)
    }
}
