// src/derivation.rs

//! Deterministic scalar derivation from seeds and account indices.
//!
//! Both derivation stages use the same rejection-sampling shape: hash
//! the input material together with a 32-bit big-endian counter, read
//! the first half of the SHA-512 digest as a big-endian integer, and
//! accept the first value below the secp256k1 group order. Sampling
//! instead of reducing modulo the order keeps the scalars uniform.

use crate::errors::{CryptoError, Result};
use crate::hash::sha512_half_chunks;
use crate::{DERIVATION_ROUND_LIMIT, PUBLIC_KEY_SIZE, SEED_SIZE};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::PrimeField;
use k256::{ProjectivePoint, Scalar};

/// Derives the private generator from a seed
///
/// The private generator is the root scalar of the derivation tree:
/// every account key pair is derived from it, and the root key pair is
/// the generator itself.
///
/// Candidate `i` is `SHA512(seed || be32(i))[..32]`; the first candidate
/// below the group order is accepted.
///
/// # Arguments
/// * `seed` - 16-byte root secret
///
/// # Returns
/// The private generator scalar
///
/// # Example
/// ```
/// use vela_crypto::derivation::derive_private_generator;
///
/// let generator = derive_private_generator(&[0u8; 16]).unwrap();
/// let again = derive_private_generator(&[0u8; 16]).unwrap();
/// assert_eq!(generator, again);
/// ```
pub fn derive_private_generator(seed: &[u8; SEED_SIZE]) -> Result<Scalar> {
    sample_scalar(|counter| sha512_half_chunks(&[seed.as_slice(), &counter.to_be_bytes()]))
}

/// Computes the public generator for a private generator
///
/// # Arguments
/// * `private_generator` - Scalar returned by [`derive_private_generator`]
///
/// # Returns
/// SEC1 compressed encoding of `private_generator * G`
pub fn public_generator(private_generator: &Scalar) -> [u8; PUBLIC_KEY_SIZE] {
    let point = ProjectivePoint::GENERATOR * private_generator;
    let encoded = point.to_affine().to_encoded_point(true);
    let mut out = [0u8; PUBLIC_KEY_SIZE];
    out.copy_from_slice(encoded.as_bytes());
    out
}

/// Derives the secret scalar for one account
///
/// Candidate `i` is
/// `SHA512(public_generator || be32(account) || be32(i))[..32]`; the
/// first candidate below the group order is accepted and the final
/// secret is `(candidate + private_generator) mod n`. The additive term
/// is what separates account keys from the root: even account 0 mixes
/// in an account-specific value.
///
/// # Arguments
/// * `private_generator` - Root scalar from [`derive_private_generator`]
/// * `public_generator` - Compressed public generator point
/// * `account` - Account index
///
/// # Returns
/// The account's secret scalar
pub fn derive_account_scalar(
    private_generator: &Scalar,
    public_generator: &[u8; PUBLIC_KEY_SIZE],
    account: u32,
) -> Result<Scalar> {
    let intermediate = sample_scalar(|counter| {
        sha512_half_chunks(&[
            public_generator.as_slice(),
            &account.to_be_bytes(),
            &counter.to_be_bytes(),
        ])
    })?;

    Ok(intermediate + private_generator)
}

/// Rejection-samples a scalar from a counter-indexed candidate stream
///
/// A candidate is accepted iff its big-endian value is below the group
/// order. The round cap only guards against a broken candidate source;
/// a single round already succeeds with probability `order / 2^256`.
fn sample_scalar<F>(candidate: F) -> Result<Scalar>
where
    F: Fn(u32) -> [u8; 32],
{
    for counter in 0..DERIVATION_ROUND_LIMIT {
        let bytes = candidate(counter);
        if let Some(scalar) = Option::<Scalar>::from(Scalar::from_repr(bytes.into())) {
            return Ok(scalar);
        }
    }

    Err(CryptoError::DerivationExhausted)
}
