//! Curve operations on edwards448.
//!
//! Thin layer over [`ed448_goldilocks`] that fixes the encodings used by
//! RFC 8032: points are 57-byte compressed `y` coordinates with the sign of
//! `x` in the top bit, scalars are 57-byte little-endian integers, and wide
//! 114-byte digests are reduced modulo the group order `L`.

use ed448_goldilocks::{
    curve::edwards::{CompressedEdwardsY, ExtendedPoint},
    Scalar,
};
use subtle::{Choice, ConstantTimeEq};

use crate::constants::{DIGEST_LENGTH, ENCODED_LENGTH};
use crate::error::CurveFault;
use crate::scalar::SecretScalar;

/// Encoded point.
pub type PointBytes = [u8; ENCODED_LENGTH];

/// Decodes a point.
///
/// Fails unless `bytes` is the canonical encoding of a point on the curve;
/// i.e., `y < p`, and the sign bit is clear when `x = 0`.
pub fn decode_point(bytes: &PointBytes) -> Result<ExtendedPoint, CurveFault> {
    let point = CompressedEdwardsY(*bytes)
        .decompress()
        .ok_or(CurveFault::InvalidPoint)?;
    if point.compress().0 != *bytes {
        // non-canonical encoding of a valid point
        return Err(CurveFault::InvalidPoint);
    }
    Ok(point)
}

/// Encodes a point.
pub fn encode_point(point: &ExtendedPoint) -> PointBytes {
    point.compress().0
}

/// Reduces a wide digest modulo `L`.
#[inline]
pub fn reduce_wide(wide: &[u8; DIGEST_LENGTH]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(wide)
}

/// Computes `[scalar]B`.
pub fn scalar_mult_base(scalar: &Scalar) -> ExtendedPoint {
    ExtendedPoint::generator().scalar_mul(scalar)
}

/// Computes `[wide mod L]B` and encodes it.
///
/// This is how `R` is obtained from the digest `r` before reduction.
pub fn scalar_mult_base_wide(wide: &[u8; DIGEST_LENGTH]) -> PointBytes {
    encode_point(&scalar_mult_base(&reduce_wide(wide)))
}

/// Computes `[scalar]point`.
pub fn scalar_mult(scalar: &Scalar, point: &ExtendedPoint) -> ExtendedPoint {
    point.scalar_mul(scalar)
}

/// Computes `S = (r + k * s) mod L` and encodes it.
///
/// `k_digest` and `r_digest` are the unreduced challenge and nonce digests.
pub(crate) fn combine(
    k_digest: &[u8; DIGEST_LENGTH],
    s: &SecretScalar,
    r_digest: &[u8; DIGEST_LENGTH],
) -> [u8; ENCODED_LENGTH] {
    let r = reduce_wide(r_digest);
    let k = reduce_wide(k_digest);
    (r + k * s.to_scalar()).to_bytes_rfc_8032()
}

/// Checks the cofactored verification equation `[8][s]B = [8]R + [8][k]A`.
///
/// `k_digest` is the unreduced challenge digest. Both sides are compared as
/// encodings in constant time.
/// https://datatracker.ietf.org/doc/html/rfc8032#section-5.2.7
#[allow(non_snake_case)]
pub fn verify_combined(
    k_digest: &[u8; DIGEST_LENGTH],
    A: &ExtendedPoint,
    s: &Scalar,
    R: &ExtendedPoint,
) -> Choice {
    let k = reduce_wide(k_digest);
    let s_B = scalar_mult_base(s);
    let k_A = scalar_mult(&k, A);
    let lhs = encode_point(&mul_by_cofactor(s_B));
    let rhs = encode_point(&mul_by_cofactor(*R + k_A));
    lhs[..].ct_eq(&rhs[..])
}

// [8]P by three doublings.
#[inline]
fn mul_by_cofactor(point: ExtendedPoint) -> ExtendedPoint {
    let p2 = point + point;
    let p4 = p2 + p2;
    p4 + p4
}
