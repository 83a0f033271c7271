// src/seed.rs

//! Seeds: the 16-byte root of trust for all derived keys.

use crate::derivation::{derive_account_scalar, derive_private_generator, public_generator};
use crate::errors::{CryptoError, Result};
use crate::hash::sha512_quarter;
use crate::keypair::KeyPair;
use crate::{FAMILY_SEED_VERSION, SEED_SIZE};
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A wallet seed
///
/// Exactly [`SEED_SIZE`] opaque bytes. Every key pair a wallet can hold
/// is a deterministic function of the seed and an account index, so the
/// seed alone restores the wallet. The bytes are zeroized on drop and
/// never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; SEED_SIZE],
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seed([REDACTED])")
    }
}

impl Seed {
    /// Creates a seed from raw bytes
    ///
    /// # Arguments
    /// * `bytes` - Seed material, must be exactly [`SEED_SIZE`] bytes
    ///
    /// # Example
    /// ```
    /// use vela_crypto::Seed;
    ///
    /// let seed = Seed::from_bytes(&[0u8; 16]).unwrap();
    /// assert!(Seed::from_bytes(&[0u8; 15]).is_err());
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SEED_SIZE {
            return Err(CryptoError::InvalidSeedLength {
                expected: SEED_SIZE,
                actual: bytes.len(),
            });
        }

        let mut seed = [0u8; SEED_SIZE];
        seed.copy_from_slice(bytes);
        Ok(Self { bytes: seed })
    }

    /// Generates a random seed from the process CSPRNG
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let bytes: [u8; SEED_SIZE] = rng.gen();
        Self { bytes }
    }

    /// Creates a seed from a passphrase
    ///
    /// The seed is the first 128 bits of the passphrase's SHA-512
    /// digest.
    ///
    /// # Example
    /// ```
    /// use vela_crypto::Seed;
    ///
    /// let seed = Seed::from_passphrase("masterpassphrase");
    /// assert_eq!(seed.to_base58(), "snoPBrXtMeMyMHUVTgbuqAfg1SUTb");
    /// ```
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self {
            bytes: sha512_quarter(passphrase.as_bytes()),
        }
    }

    /// Decodes a seed from its family-seed text form
    ///
    /// Base58-check with the ledger alphabet and the
    /// [`FAMILY_SEED_VERSION`] version byte.
    ///
    /// # Arguments
    /// * `text` - Family-seed string, e.g. `"snoPBrXtMeMyMHUVTgbuqAfg1SUTb"`
    pub fn from_base58(text: &str) -> Result<Self> {
        let payload = bs58::decode(text)
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .with_check(Some(FAMILY_SEED_VERSION))
            .into_vec()
            .map_err(|e| CryptoError::InvalidSeed(format!("{}", e)))?;

        // The decoded payload still carries the version byte
        let bytes = payload
            .get(1..)
            .ok_or_else(|| CryptoError::InvalidSeed("Payload is empty".to_string()))?;
        Self::from_bytes(bytes)
    }

    /// Encodes the seed in its family-seed text form
    pub fn to_base58(&self) -> String {
        bs58::encode(&self.bytes)
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .with_check_version(FAMILY_SEED_VERSION)
            .into_string()
    }

    /// Returns the raw seed bytes
    pub fn as_bytes(&self) -> &[u8; SEED_SIZE] {
        &self.bytes
    }

    /// Derives the key pair for an account index
    ///
    /// Runs the full pipeline: private generator from the seed, then the
    /// account secret from the generator pair and the index. Account 0
    /// is not the root key pair; the account derivation always mixes in
    /// an account-specific term.
    ///
    /// # Arguments
    /// * `account` - Account index
    ///
    /// # Example
    /// ```
    /// use vela_crypto::Seed;
    ///
    /// let seed = Seed::from_passphrase("masterpassphrase");
    /// let key_pair = seed.derive_key_pair(0).unwrap();
    /// assert_eq!(key_pair.public_key_hex().len(), 66);
    /// ```
    pub fn derive_key_pair(&self, account: u32) -> Result<KeyPair> {
        let private_gen = derive_private_generator(&self.bytes)?;
        let public_gen = public_generator(&private_gen);
        let secret = derive_account_scalar(&private_gen, &public_gen, account)?;
        KeyPair::from_secret_scalar(secret)
    }

    /// Derives the root key pair directly from the private generator
    ///
    /// Skips account derivation entirely: the generator pair itself is
    /// the key pair. This is the ledger's "root account" operation.
    pub fn derive_root_key_pair(&self) -> Result<KeyPair> {
        let private_gen = derive_private_generator(&self.bytes)?;
        KeyPair::from_secret_scalar(private_gen)
    }
}
