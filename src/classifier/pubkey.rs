//! Encoded public key validation
//!
//! Non-strict validation is a prefix/length shape check, cheap enough for
//! bulk classification sweeps where cryptographic certainty is unneeded.
//! Strict validation additionally requires the bytes to deserialise to a
//! valid secp256k1 curve point, for contexts that accept a script before
//! relaying funds to it.

use bitcoin::secp256k1::PublicKey;

/// Encoding of a serialised public key, keyed on its first byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKeyEncoding {
    /// 0x02/0x03 prefix, 33 bytes; y recovered from the prefix parity
    Compressed,
    /// 0x04 prefix, 65 bytes; x and y serialised in full
    Uncompressed,
    /// 0x06 prefix, 65 bytes; full x and y committing to an even y
    HybridEven,
    /// 0x07 prefix, 65 bytes; full x and y committing to an odd y
    HybridOdd,
}

impl PublicKeyEncoding {
    /// Classify the first byte of a serialised key
    pub fn from_prefix(prefix: u8) -> Option<Self> {
        match prefix {
            0x02 | 0x03 => Some(PublicKeyEncoding::Compressed),
            0x04 => Some(PublicKeyEncoding::Uncompressed),
            0x06 => Some(PublicKeyEncoding::HybridEven),
            0x07 => Some(PublicKeyEncoding::HybridOdd),
            _ => None,
        }
    }

    /// Exact serialised length this encoding requires
    pub fn expected_len(&self) -> usize {
        match self {
            PublicKeyEncoding::Compressed => 33,
            _ => 65,
        }
    }
}

/// Check whether `buf` is an acceptable serialised public key
///
/// Non-strict mode checks the prefix/length shape only. Strict mode parses
/// the key through libsecp256k1, which rejects an x outside the field, a
/// point off the curve, and a hybrid key whose y parity contradicts its
/// prefix; secp256k1 has cofactor 1, so every parsed point lies in the
/// prime-order subgroup.
pub fn is_public_key(buf: &[u8], strict: bool) -> bool {
    let encoding = match buf.first().and_then(|&prefix| PublicKeyEncoding::from_prefix(prefix)) {
        Some(encoding) => encoding,
        None => return false,
    };

    if buf.len() != encoding.expected_len() {
        return false;
    }

    !strict || PublicKey::from_slice(buf).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // secp256k1 generator point; its y coordinate is even
    const G_X: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G_Y: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
    // The secp256k1 field prime, an out-of-range x coordinate
    const FIELD_PRIME: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

    fn key(parts: &[&str]) -> Vec<u8> {
        hex::decode(parts.concat()).unwrap()
    }

    #[test]
    fn test_compressed_key_valid_in_both_modes() {
        let compressed = key(&["02", G_X]);
        assert!(is_public_key(&compressed, false));
        assert!(is_public_key(&compressed, true));
    }

    #[test]
    fn test_uncompressed_key_valid_in_both_modes() {
        let uncompressed = key(&["04", G_X, G_Y]);
        assert!(is_public_key(&uncompressed, false));
        assert!(is_public_key(&uncompressed, true));
    }

    #[test]
    fn test_hybrid_key_with_matching_parity() {
        let hybrid_even = key(&["06", G_X, G_Y]);
        assert!(is_public_key(&hybrid_even, false));
        assert!(is_public_key(&hybrid_even, true));
    }

    #[test]
    fn test_hybrid_key_with_mismatched_parity() {
        // 0x07 commits to an odd y, but G's y is even: the shape check
        // cannot see this, full validation can
        let hybrid_odd = key(&["07", G_X, G_Y]);
        assert!(is_public_key(&hybrid_odd, false));
        assert!(!is_public_key(&hybrid_odd, true));
    }

    #[test]
    fn test_length_must_match_encoding() {
        let mut compressed = key(&["02", G_X]);
        compressed.push(0x00);
        assert!(!is_public_key(&compressed, false));
        assert!(!is_public_key(&compressed, true));

        let uncompressed = key(&["04", G_X, G_Y]);
        assert!(!is_public_key(&uncompressed[..64], false));
    }

    #[test]
    fn test_unknown_prefix_rejected() {
        let bad_prefix = key(&["05", G_X]);
        assert!(!is_public_key(&bad_prefix, false));
        assert!(!is_public_key(&bad_prefix, true));
        assert!(!is_public_key(&[], false));
    }

    #[test]
    fn test_strict_rejects_point_off_curve() {
        // x = 0 gives y^2 = 7, which has no square root in the field
        let zero_x = key(&["02", &"00".repeat(32)]);
        assert!(is_public_key(&zero_x, false));
        assert!(!is_public_key(&zero_x, true));
    }

    #[test]
    fn test_strict_rejects_out_of_range_x() {
        // An x >= p passes the shape check but cannot round-trip through
        // field deserialisation
        let wrapped_x = key(&["02", FIELD_PRIME]);
        assert!(is_public_key(&wrapped_x, false));
        assert!(!is_public_key(&wrapped_x, true));
    }

    #[test]
    fn test_encoding_table() {
        assert_eq!(PublicKeyEncoding::from_prefix(0x02), Some(PublicKeyEncoding::Compressed));
        assert_eq!(PublicKeyEncoding::from_prefix(0x03), Some(PublicKeyEncoding::Compressed));
        assert_eq!(PublicKeyEncoding::from_prefix(0x04), Some(PublicKeyEncoding::Uncompressed));
        assert_eq!(PublicKeyEncoding::from_prefix(0x06), Some(PublicKeyEncoding::HybridEven));
        assert_eq!(PublicKeyEncoding::from_prefix(0x07), Some(PublicKeyEncoding::HybridOdd));
        assert_eq!(PublicKeyEncoding::from_prefix(0x01), None);

        assert_eq!(PublicKeyEncoding::Compressed.expected_len(), 33);
        assert_eq!(PublicKeyEncoding::Uncompressed.expected_len(), 65);
        assert_eq!(PublicKeyEncoding::HybridEven.expected_len(), 65);
        assert_eq!(PublicKeyEncoding::HybridOdd.expected_len(), 65);
    }
}
