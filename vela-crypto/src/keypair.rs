// src/keypair.rs

//! Account key pairs: signing, verification, and key encodings.

use crate::canonical::is_strictly_canonical;
use crate::errors::{CryptoError, Result};
use crate::hash::hash160;
use crate::{HASH160_SIZE, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE};
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use k256::Scalar;

/// A derived secp256k1 key pair
///
/// The public point is always computed from the private scalar at
/// construction, so a mismatched pair cannot exist. The private half is
/// zeroized when the pair is dropped.
#[derive(Clone)]
pub struct KeyPair {
    /// Signing key wrapping the private scalar
    signing_key: SigningKey,

    /// SEC1 compressed encoding of the public point
    public_key: [u8; PUBLIC_KEY_SIZE],
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode_upper(self.public_key))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl KeyPair {
    /// Creates a key pair from a secret scalar
    ///
    /// The single constructor: the public point is derived from the
    /// scalar, never supplied by the caller. The zero scalar is
    /// rejected.
    ///
    /// # Arguments
    /// * `secret` - Private scalar in `[1, n)`
    ///
    /// # Example
    /// ```
    /// use vela_crypto::derivation::derive_private_generator;
    /// use vela_crypto::KeyPair;
    ///
    /// let generator = derive_private_generator(&[0u8; 16]).unwrap();
    /// let key_pair = KeyPair::from_secret_scalar(generator).unwrap();
    /// assert_eq!(key_pair.public_key_bytes().len(), 33);
    /// ```
    pub fn from_secret_scalar(secret: Scalar) -> Result<Self> {
        let signing_key = SigningKey::from_bytes(&secret.to_bytes())
            .map_err(|_| CryptoError::InvalidKey("secret scalar is zero".to_string()))?;

        let encoded = signing_key.verifying_key().to_encoded_point(true);
        let mut public_key = [0u8; PUBLIC_KEY_SIZE];
        public_key.copy_from_slice(encoded.as_bytes());

        Ok(Self {
            signing_key,
            public_key,
        })
    }

    /// Signs a message digest
    ///
    /// Deterministic ECDSA (RFC 6979) with low-s normalization, encoded
    /// as a strict-canonical DER SEQUENCE. The canonical self-check
    /// failing means the signing routine itself is broken; that
    /// signature is never returned.
    ///
    /// # Arguments
    /// * `digest` - Message digest to sign, normally 32 bytes of
    ///   [`crate::hash::sha512_half`]
    ///
    /// # Returns
    /// DER-encoded signature bytes
    pub fn sign(&self, digest: &[u8]) -> Result<Vec<u8>> {
        let signature: Signature = self
            .signing_key
            .sign_prehash(digest)
            .map_err(|e| CryptoError::SigningError(format!("{}", e)))?;

        let signature = signature.normalize_s().unwrap_or(signature);
        let der = signature.to_der().as_bytes().to_vec();

        if !is_strictly_canonical(&der) {
            return Err(CryptoError::NonCanonicalSignature);
        }

        Ok(der)
    }

    /// Verifies a DER-encoded signature over a message digest
    ///
    /// Total over its input: malformed DER, an invalid stored public
    /// key, and any arithmetic fault all return `false`. High-s
    /// signatures are accepted here for compatibility; callers wanting
    /// strictness check [`crate::canonical::is_strictly_canonical`] as
    /// well.
    ///
    /// # Arguments
    /// * `digest` - Message digest that was signed
    /// * `signature` - Candidate DER signature bytes
    ///
    /// # Returns
    /// `true` iff the signature is valid for this key pair
    pub fn verify(&self, digest: &[u8], signature: &[u8]) -> bool {
        let signature = match Signature::from_der(signature) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        let verifying_key = match VerifyingKey::from_sec1_bytes(&self.public_key) {
            Ok(key) => key,
            Err(_) => return false,
        };

        verifying_key.verify_prehash(digest, &signature).is_ok()
    }

    /// Returns the SEC1 compressed public key
    pub fn public_key_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.public_key
    }

    /// Returns the private scalar as fixed-width big-endian bytes
    ///
    /// Always [`PRIVATE_KEY_SIZE`] bytes, zero-padded; no sign byte is
    /// ever present or stripped.
    pub fn private_key_bytes(&self) -> [u8; PRIVATE_KEY_SIZE] {
        self.signing_key.to_bytes().into()
    }

    /// Computes hash160 of the compressed public key
    ///
    /// The 20-byte digest addresses are derived from.
    pub fn public_key_hash(&self) -> [u8; HASH160_SIZE] {
        hash160(&self.public_key)
    }

    /// Returns the public key as fixed-width uppercase hex (66 chars)
    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(self.public_key)
    }

    /// Returns the private key as fixed-width uppercase hex (64 chars)
    pub fn private_key_hex(&self) -> String {
        hex::encode_upper(self.private_key_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::is_canonical;
    use crate::derivation::{derive_account_scalar, derive_private_generator, public_generator};
    use crate::hash::sha512_half;
    use k256::elliptic_curve::PrimeField;

    fn test_key_pair() -> KeyPair {
        let generator = derive_private_generator(&[0u8; 16]).unwrap();
        let public = public_generator(&generator);
        let secret = derive_account_scalar(&generator, &public, 0).unwrap();
        KeyPair::from_secret_scalar(secret).unwrap()
    }

    #[test]
    fn test_public_key_matches_private_scalar() {
        let key_pair = test_key_pair();

        // Rebuilding from the serialized scalar lands on the same point
        let scalar =
            Option::<Scalar>::from(Scalar::from_repr(key_pair.private_key_bytes().into()))
                .unwrap();
        let rebuilt = KeyPair::from_secret_scalar(scalar).unwrap();
        assert_eq!(rebuilt.public_key_bytes(), key_pair.public_key_bytes());
    }

    #[test]
    fn test_zero_scalar_rejected() {
        let result = KeyPair::from_secret_scalar(Scalar::from_repr([0u8; 32].into()).unwrap());
        assert!(matches!(result, Err(CryptoError::InvalidKey(_))));
    }

    #[test]
    fn test_sign_and_verify() {
        let key_pair = test_key_pair();
        let digest = sha512_half(b"message to sign");

        let signature = key_pair.sign(&digest).unwrap();
        assert!(key_pair.verify(&digest, &signature));
    }

    #[test]
    fn test_sign_deterministic() {
        let key_pair = test_key_pair();
        let digest = sha512_half(b"deterministic test");

        let sig1 = key_pair.sign(&digest).unwrap();
        let sig2 = key_pair.sign(&digest).unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_verify_wrong_digest() {
        let key_pair = test_key_pair();
        let digest = sha512_half(b"original message");
        let wrong = sha512_half(b"wrong message");

        let signature = key_pair.sign(&digest).unwrap();
        assert!(!key_pair.verify(&wrong, &signature));
    }

    #[test]
    fn test_verify_wrong_key() {
        let key_pair = test_key_pair();
        let other = {
            let generator = derive_private_generator(&[5u8; 16]).unwrap();
            KeyPair::from_secret_scalar(generator).unwrap()
        };

        let digest = sha512_half(b"message");
        let signature = key_pair.sign(&digest).unwrap();
        assert!(!other.verify(&digest, &signature));
    }

    #[test]
    fn test_signature_is_strictly_canonical() {
        let key_pair = test_key_pair();

        for message in [&b"a"[..], &b"b"[..], &b"longer message body"[..], &b""[..]] {
            let digest = sha512_half(message);
            let signature = key_pair.sign(&digest).unwrap();
            assert!(is_strictly_canonical(&signature));
        }
    }

    #[test]
    fn test_high_s_twin_rejected_as_strict_but_verifies() {
        let key_pair = test_key_pair();
        let digest = sha512_half(b"malleability check");
        let der = key_pair.sign(&digest).unwrap();

        // Rebuild the signature with s' = n - s
        let signature = Signature::from_der(&der).unwrap();
        let (r, s) = signature.split_scalars();
        let high = Signature::from_scalars(r.to_bytes(), (-*s).to_bytes()).unwrap();
        let high_der = high.to_der().as_bytes().to_vec();

        assert!(!is_canonical(&high_der, true));
        assert!(is_canonical(&high_der, false));
        assert!(key_pair.verify(&digest, &high_der));
    }

    #[test]
    fn test_verify_is_total() {
        let key_pair = test_key_pair();
        let digest = sha512_half(b"totality");
        let valid = key_pair.sign(&digest).unwrap();

        let mut truncated = valid.clone();
        truncated.truncate(valid.len() - 3);

        let mut trailing = valid.clone();
        trailing.push(0x00);

        let inputs: Vec<Vec<u8>> = vec![
            Vec::new(),
            vec![0x00],
            vec![0x30],
            vec![0xff; 72],
            vec![0x30, 0x06, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00],
            truncated,
            trailing,
        ];

        for input in inputs {
            // Must return a boolean, never panic
            assert!(!key_pair.verify(&digest, &input));
        }
    }

    #[test]
    fn test_public_key_hash_vector() {
        // Account 0 of the "masterpassphrase" seed
        let seed = crate::hash::sha512_quarter(b"masterpassphrase");
        let generator = derive_private_generator(&seed).unwrap();
        let public = public_generator(&generator);
        let secret = derive_account_scalar(&generator, &public, 0).unwrap();
        let key_pair = KeyPair::from_secret_scalar(secret).unwrap();

        assert_eq!(
            key_pair.public_key_hex(),
            "0330E7FC9D56BB25D6893BA3F317AE5BCF33B3291BD63DB32654A313222F7FD020"
        );
        assert_eq!(
            hex::encode(key_pair.public_key_hash()),
            "b5f762798a53d543a014caf8b297cff8f2f937e8"
        );
    }

    #[test]
    fn test_hex_widths_fixed() {
        let key_pair = test_key_pair();
        assert_eq!(key_pair.public_key_hex().len(), 66);
        assert_eq!(key_pair.private_key_hex().len(), 64);
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let key_pair = test_key_pair();
        let output = format!("{:?}", key_pair);
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains(&key_pair.private_key_hex()));
    }
}
