// src/canonical.rs

//! Byte-level canonical-form validation for DER-encoded signatures.
//!
//! Every ECDSA signature `(r, s)` has a numerically equivalent twin
//! `(r, n - s)`, and DER admits redundant integer paddings on top of
//! that. Systems that identify transactions by signature hash must pin
//! one encoding per signature, so validation here works on the raw
//! bytes: a signature that decodes to valid integers but is laid out
//! differently is still rejected.
//!
//! The checks operate on a two-integer SEQUENCE:
//!
//! ```text
//! 0x30 <len> 0x02 <rlen> <r bytes> 0x02 <slen> <s bytes>
//! ```

/// Minimum accepted signature encoding length
pub const MIN_SIGNATURE_SIZE: usize = 8;

/// Maximum accepted signature encoding length
pub const MAX_SIGNATURE_SIZE: usize = 72;

/// secp256k1 group order `n`, big-endian
const ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b,
    0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// `n / 2`, big-endian; an `s` above this is the malleable twin
const HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d,
    0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

/// Validates the strict canonical form of a DER-encoded signature
///
/// Equivalent to [`is_canonical`] with `strict = true`: the layout
/// checks plus the low-s requirement. Signing always self-checks with
/// this form.
///
/// # Example
/// ```
/// use vela_crypto::canonical::is_strictly_canonical;
///
/// // SEQUENCE of INTEGER 1, INTEGER 1
/// let minimal = [0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01];
/// assert!(is_strictly_canonical(&minimal));
/// ```
pub fn is_strictly_canonical(signature: &[u8]) -> bool {
    is_canonical(signature, true)
}

/// Validates the canonical form of a DER-encoded signature
///
/// All checks run on the raw byte layout, not the decoded integers:
///
/// - total length in `[8, 72]`
/// - SEQUENCE tag and exact framing length, no trailing bytes
/// - INTEGER tags, lengths in `[1, 33]`, lengths consistent with the
///   total
/// - `r` and `s` non-negative, nonzero, with no superfluous leading
///   zero byte
/// - `r < n` and `s < n`
/// - with `strict`, additionally `s <= n - s` (the low solution of the
///   two equivalent signatures)
///
/// Verification paths may pass `strict = false` to accept high-s
/// signatures produced elsewhere; signing never does.
pub fn is_canonical(signature: &[u8], strict: bool) -> bool {
    let len = signature.len();
    if !(MIN_SIGNATURE_SIZE..=MAX_SIGNATURE_SIZE).contains(&len) {
        return false;
    }

    // SEQUENCE framing covers the whole input
    if signature[0] != 0x30 || signature[1] as usize != len - 2 {
        return false;
    }

    // First INTEGER: r
    if signature[2] != 0x02 {
        return false;
    }
    let r_len = signature[3] as usize;
    if r_len == 0 || r_len > 33 || r_len + 7 > len {
        return false;
    }

    // Second INTEGER: s, consuming the remainder exactly
    if signature[4 + r_len] != 0x02 {
        return false;
    }
    let s_len = signature[5 + r_len] as usize;
    if s_len == 0 || s_len > 33 || r_len + s_len + 6 != len {
        return false;
    }

    let r = &signature[4..4 + r_len];
    let s = &signature[6 + r_len..6 + r_len + s_len];

    if !is_minimal_positive(r) || !is_minimal_positive(s) {
        return false;
    }

    let r = match as_order_sized(r) {
        Some(value) => value,
        None => return false,
    };
    let s = match as_order_sized(s) {
        Some(value) => value,
        None => return false,
    };

    if r >= ORDER || s >= ORDER {
        return false;
    }

    if strict && s > HALF_ORDER {
        return false;
    }

    true
}

/// Checks the DER minimal-positive-integer rules on one integer body
///
/// Non-negative (high bit of the first byte clear), nonzero (not the
/// single byte `0x00`), and no padding byte unless required by the sign
/// bit of the next byte.
fn is_minimal_positive(bytes: &[u8]) -> bool {
    if bytes[0] & 0x80 != 0 {
        return false;
    }
    if bytes[0] == 0x00 {
        if bytes.len() == 1 {
            return false;
        }
        if bytes[1] & 0x80 == 0 {
            return false;
        }
    }
    true
}

/// Left-pads an integer body to the order width for comparison
///
/// Returns `None` when the value cannot fit in 32 bytes after dropping
/// the allowed single leading zero.
fn as_order_sized(bytes: &[u8]) -> Option<[u8; 32]> {
    let unpadded = if bytes[0] == 0x00 { &bytes[1..] } else { bytes };
    if unpadded.len() > 32 {
        return None;
    }

    let mut out = [0u8; 32];
    out[32 - unpadded.len()..].copy_from_slice(unpadded);
    Some(out)
}
