//! Ed448 signature.
//!
//! Wire format per RFC 8032: `R (57 bytes) || S (57 bytes)`, where `R` is an
//! encoded point and `S` a little-endian scalar below the group order.

use core::fmt;

use ed448_goldilocks::Scalar;

use crate::constants::{ENCODED_LENGTH, SIGNATURE_LENGTH};
use crate::error::{Error, Result};

/// Ed448 signature.
#[allow(non_snake_case)]
#[derive(Clone)]
pub struct Signature {
    pub(crate) R: [u8; ENCODED_LENGTH],
    pub(crate) s_bytes: [u8; ENCODED_LENGTH],
    pub(crate) s: Scalar,
}

impl Signature {
    /// Creates a signature from a byte array.
    ///
    /// Fails if the byte representation of `S` is not canonical.
    /// `R` is checked when the signature is verified.
    #[inline]
    #[allow(non_snake_case)]
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Result<Signature> {
        let mut R = [0u8; ENCODED_LENGTH];
        let mut s_bytes = [0u8; ENCODED_LENGTH];
        R.copy_from_slice(&bytes[..ENCODED_LENGTH]);
        s_bytes.copy_from_slice(&bytes[ENCODED_LENGTH..]);

        Ok(Signature {
            R,
            s_bytes,
            s: check_scalar(s_bytes)?,
        })
    }

    /// Creates a signature from a byte slice.
    ///
    /// Fails if `bytes` is not 114 bytes long, or if `S` is not canonical.
    pub fn from_slice(bytes: &[u8]) -> Result<Signature> {
        let bytes = bytes
            .try_into()
            .map_err(|_| Error::InvalidSignatureEncoding)?;
        Self::from_bytes(bytes)
    }

    /// Encodes this signature.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..ENCODED_LENGTH].copy_from_slice(&self.R);
        bytes[ENCODED_LENGTH..].copy_from_slice(&self.s_bytes);
        bytes
    }

    /// Encoded point `R`.
    #[allow(non_snake_case)]
    pub fn R_bytes(&self) -> &[u8; ENCODED_LENGTH] {
        &self.R
    }

    /// Encoded scalar `S`.
    pub fn s_bytes(&self) -> &[u8; ENCODED_LENGTH] {
        &self.s_bytes
    }
}

// Checks a scalar bytes and returns a scalar if it is canonical.
#[inline(always)]
fn check_scalar(bytes: [u8; ENCODED_LENGTH]) -> Result<Scalar> {
    match Scalar::from_canonical_bytes(bytes) {
        None => Err(Error::InvalidSignatureEncoding),
        Some(x) => Ok(x),
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.R == other.R && self.s_bytes == other.s_bytes
    }
}

impl Eq for Signature {}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(")?;
        for b in self.to_bytes() {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl From<Signature> for [u8; SIGNATURE_LENGTH] {
    fn from(signature: Signature) -> Self {
        signature.to_bytes()
    }
}
