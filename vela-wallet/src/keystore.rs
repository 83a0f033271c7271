// src/keystore.rs

//! Encrypted keystore for secure wallet backup storage.
//!
//! A keystore file holds one wallet backup (seed plus derived account
//! ids) encrypted with AES-256-GCM. The encryption key is derived from
//! the password and a per-keystore random salt.

use crate::account::AccountId;
use crate::errors::{Result, WalletError};
use crate::wallet::Wallet;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vela_crypto::hash::sha512_half_chunks;
use vela_crypto::Seed;

/// AES-GCM nonce size
const NONCE_SIZE: usize = 12;

/// Salt size for password key derivation
const SALT_SIZE: usize = 32;

/// Everything needed to restore a wallet
#[derive(Serialize, Deserialize)]
struct WalletBackup {
    seed: Vec<u8>,
    accounts: Vec<AccountId>,
}

/// Encrypted keystore
#[derive(Debug, Serialize, Deserialize)]
pub struct Keystore {
    /// Keystore version
    version: u32,

    /// Encrypted wallet backup (nonce || ciphertext || tag)
    encrypted_data: Vec<u8>,

    /// Salt for password key derivation
    salt: Vec<u8>,
}

impl Keystore {
    /// Creates a new keystore from a wallet
    ///
    /// # Arguments
    /// * `wallet` - Wallet to back up
    /// * `password` - Password for encryption
    pub fn new(wallet: &Wallet, password: &str) -> Result<Self> {
        let backup = WalletBackup {
            seed: wallet.seed().as_bytes().to_vec(),
            accounts: wallet.account_ids(),
        };
        let backup_data = bincode::serialize(&backup)?;

        let mut rng = rand::thread_rng();
        let salt: [u8; SALT_SIZE] = rng.gen();
        let key = Self::derive_key(password, &salt);

        let encrypted_data = Self::encrypt(&backup_data, &key)?;

        Ok(Self {
            version: crate::WALLET_VERSION,
            encrypted_data,
            salt: salt.to_vec(),
        })
    }

    /// Decrypts the keystore and restores the wallet
    ///
    /// Re-derives every account recorded in the backup.
    ///
    /// # Arguments
    /// * `password` - Password for decryption
    pub fn decrypt_wallet(&self, password: &str) -> Result<Wallet> {
        let key = Self::derive_key(password, &self.salt);

        let backup_data = Self::decrypt(&self.encrypted_data, &key)
            .map_err(|_| WalletError::InvalidPassword)?;
        let backup: WalletBackup = bincode::deserialize(&backup_data)?;

        let seed = Seed::from_bytes(&backup.seed)?;
        let mut wallet = Wallet::new(seed);
        for id in backup.accounts {
            match id {
                AccountId::Root => wallet.derive_root_account()?,
                AccountId::Index(index) => wallet.derive_account(index)?,
            };
        }

        Ok(wallet)
    }

    /// Saves keystore to file
    ///
    /// # Arguments
    /// * `path` - File path to save to
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads keystore from file
    ///
    /// # Arguments
    /// * `path` - File path to load from
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|_| WalletError::FileNotFound("Keystore file not found".to_string()))?;

        Ok(serde_json::from_str(&json)?)
    }

    /// Derives the encryption key from password and salt
    fn derive_key(password: &str, salt: &[u8]) -> [u8; 32] {
        sha512_half_chunks(&[salt, password.as_bytes()])
    }

    /// Encrypts data with AES-256-GCM, prepending the random nonce
    fn encrypt(plaintext: &[u8], key: &[u8; 32]) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new_from_slice(key)
            .map_err(|e| WalletError::KeystoreError(format!("Failed to create cipher: {}", e)))?;

        let mut rng = rand::thread_rng();
        let nonce_bytes: [u8; NONCE_SIZE] = rng.gen();
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| WalletError::KeystoreError(format!("Encryption failed: {}", e)))?;

        let mut result = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        result.extend_from_slice(&nonce_bytes);
        result.extend_from_slice(&ciphertext);

        Ok(result)
    }

    /// Decrypts data encrypted by [`Keystore::encrypt`]
    fn decrypt(ciphertext: &[u8], key: &[u8; 32]) -> Result<Vec<u8>> {
        if ciphertext.len() < NONCE_SIZE {
            return Err(WalletError::KeystoreError(
                "Ciphertext too short".to_string(),
            ));
        }

        let cipher = Aes256Gcm::new_from_slice(key)
            .map_err(|e| WalletError::KeystoreError(format!("Failed to create cipher: {}", e)))?;

        let nonce = Nonce::from_slice(&ciphertext[..NONCE_SIZE]);
        cipher
            .decrypt(nonce, &ciphertext[NONCE_SIZE..])
            .map_err(|_| WalletError::KeystoreError("Decryption failed".to_string()))
    }

    /// Gets the default keystore directory
    pub fn default_directory() -> Result<PathBuf> {
        let home = directories::UserDirs::new()
            .ok_or_else(|| WalletError::KeystoreError("Cannot find home directory".to_string()))?;

        let home_dir = home.home_dir();
        Ok(home_dir.join(crate::KEYSTORE_DIR))
    }

    /// Creates the keystore directory if it doesn't exist
    pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_wallet() -> Wallet {
        let mut wallet = Wallet::from_passphrase("keystore test");
        wallet.derive_root_account().unwrap();
        wallet.derive_account(0).unwrap();
        wallet.derive_account(1).unwrap();
        wallet
    }

    #[test]
    fn test_keystore_creation() {
        let keystore = Keystore::new(&test_wallet(), "secure_password").unwrap();
        assert_eq!(keystore.version, crate::WALLET_VERSION);
        assert!(!keystore.encrypted_data.is_empty());
        assert_eq!(keystore.salt.len(), SALT_SIZE);
    }

    #[test]
    fn test_keystore_encrypt_decrypt() {
        let wallet = test_wallet();
        let keystore = Keystore::new(&wallet, "test123").unwrap();

        let restored = keystore.decrypt_wallet("test123").unwrap();
        assert_eq!(restored.seed(), wallet.seed());
        assert_eq!(restored.account_ids(), wallet.account_ids());
        assert_eq!(restored.list_addresses(), wallet.list_addresses());
    }

    #[test]
    fn test_keystore_wrong_password() {
        let keystore = Keystore::new(&test_wallet(), "correct").unwrap();

        let result = keystore.decrypt_wallet("wrong");
        assert!(matches!(result, Err(WalletError::InvalidPassword)));
    }

    #[test]
    fn test_keystore_save_load() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_keystore.json");

        let wallet = test_wallet();
        let keystore = Keystore::new(&wallet, "password123").unwrap();
        keystore.save_to_file(&file_path).unwrap();

        let loaded = Keystore::load_from_file(&file_path).unwrap();
        let restored = loaded.decrypt_wallet("password123").unwrap();

        assert_eq!(restored.list_addresses(), wallet.list_addresses());
    }

    #[test]
    fn test_keystore_file_not_found() {
        let result = Keystore::load_from_file("/nonexistent/path.json");
        assert!(matches!(result, Err(WalletError::FileNotFound(_))));
    }

    #[test]
    fn test_derive_key_salted() {
        let key1 = Keystore::derive_key("password", &[1u8; SALT_SIZE]);
        let key2 = Keystore::derive_key("password", &[1u8; SALT_SIZE]);
        let key3 = Keystore::derive_key("password", &[2u8; SALT_SIZE]);

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
    }

    #[test]
    fn test_salts_are_unique_per_keystore() {
        let wallet = test_wallet();
        let a = Keystore::new(&wallet, "pw").unwrap();
        let b = Keystore::new(&wallet, "pw").unwrap();
        assert_ne!(a.salt, b.salt);
    }
}
