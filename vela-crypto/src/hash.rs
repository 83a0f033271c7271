// src/hash.rs

//! Cryptographic hash functions for the Vela protocol.
//!
//! The derivation scheme and signing pipeline are defined over SHA-512:
//! scalar candidates are the first half of a SHA-512 digest, passphrase
//! seeds are the first quarter. Address material uses hash160
//! (RIPEMD-160 over SHA-256).

use crate::{HASH160_SIZE, SEED_SIZE};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};

/// Computes the full SHA-512 digest of input data
///
/// # Arguments
/// * `data` - Input data to hash
///
/// # Returns
/// 64-byte hash digest
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut out = [0u8; 64];
    out.copy_from_slice(&result);
    out
}

/// Computes SHA-512 and keeps the first 256 bits
///
/// This is the digest the ledger uses everywhere a 32-byte value is
/// needed: transaction hashing, scalar candidate generation.
///
/// # Arguments
/// * `data` - Input data to hash
///
/// # Returns
/// First 32 bytes of the 64-byte SHA-512 digest
///
/// # Example
/// ```
/// use vela_crypto::hash::sha512_half;
///
/// let digest = sha512_half(b"Hello Vela");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha512_half(data: &[u8]) -> [u8; 32] {
    let full = sha512(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&full[..32]);
    out
}

/// Hashes multiple data chunks together, keeping the first 256 bits
///
/// Hashes concatenated data without allocating the concatenation.
/// Derivation inputs like `seed || be32(counter)` are built this way.
///
/// # Arguments
/// * `chunks` - Slice of data chunks to hash
///
/// # Returns
/// First 32 bytes of the SHA-512 digest of the concatenated chunks
pub fn sha512_half_chunks(chunks: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha512::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    let result = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result[..32]);
    out
}

/// Computes SHA-512 and keeps the first 128 bits
///
/// Passphrase seeds are the first quarter of the passphrase digest.
///
/// # Arguments
/// * `data` - Input data to hash
///
/// # Returns
/// First 16 bytes of the 64-byte SHA-512 digest
pub fn sha512_quarter(data: &[u8]) -> [u8; SEED_SIZE] {
    let full = sha512(data);
    let mut out = [0u8; SEED_SIZE];
    out.copy_from_slice(&full[..SEED_SIZE]);
    out
}

/// Computes hash160: RIPEMD-160 over SHA-256
///
/// The standard public-key hash used for address derivation.
///
/// # Arguments
/// * `data` - Input data to hash (normally a compressed public key)
///
/// # Returns
/// 20-byte hash digest
///
/// # Example
/// ```
/// use vela_crypto::hash::hash160;
///
/// let digest = hash160(b"public key bytes");
/// assert_eq!(digest.len(), 20);
/// ```
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    let sha = Sha256::digest(data);
    let ripe = Ripemd160::digest(sha);
    let mut out = [0u8; HASH160_SIZE];
    out.copy_from_slice(&ripe);
    out
}
