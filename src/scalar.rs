//! Secret scalar decoding.

use ed448_goldilocks::Scalar;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{DIGEST_LENGTH, ENCODED_LENGTH};

/// Clamps the first half of a private key digest in place.
///
/// The two least significant bits of the first byte are cleared, all eight
/// bits of the last byte are cleared, and the highest bit of the second to
/// last byte is set.
/// https://datatracker.ietf.org/doc/html/rfc8032#section-5.2.5
pub fn decode_scalar(buf: &mut [u8; ENCODED_LENGTH]) {
    buf[0] &= 0xFC;
    buf[56] = 0;
    buf[55] |= 0x80;
}

/// Secret scalar `s` derived from a private key.
///
/// Wiped when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct SecretScalar([u8; ENCODED_LENGTH]);

impl SecretScalar {
    /// Clamps `scalar_half` and takes it as a secret scalar.
    ///
    /// `scalar_half` is clamped in place and left as is; the caller owns
    /// wiping it.
    pub(crate) fn from_digest_half(scalar_half: &mut [u8; ENCODED_LENGTH]) -> Self {
        decode_scalar(scalar_half);
        Self(*scalar_half)
    }

    /// Clamped little-endian bytes.
    #[cfg(test)]
    pub(crate) fn as_bytes(&self) -> &[u8; ENCODED_LENGTH] {
        &self.0
    }

    /// Reduces the clamped value modulo the group order.
    pub(crate) fn to_scalar(&self) -> Scalar {
        let mut wide = [0u8; DIGEST_LENGTH];
        wide[..ENCODED_LENGTH].copy_from_slice(&self.0);
        let scalar = Scalar::from_bytes_mod_order_wide(&wide);
        wide.zeroize();
        scalar
    }
}
