//! Errors.

use thiserror::Error;

/// Result type of this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Failure of a curve primitive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CurveFault {
    /// An encoding does not represent a canonical point on the curve.
    InvalidPoint,
}

/// Errors of key derivation, signing, and verification.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The hash engine failed.
    #[error("hash engine failure")]
    HashFailure,

    /// A curve primitive failed.
    #[error("curve operation failure: {0:?}")]
    CurveOperationFailure(CurveFault),

    /// A signature is malformed: wrong length or a non-canonical `S`.
    #[error("invalid signature encoding")]
    InvalidSignatureEncoding,

    /// A well-formed signature does not match the message and public key.
    #[error("signature verification failed")]
    VerificationFailed,

    /// A context string is longer than 255 bytes.
    #[error("context is longer than 255 bytes")]
    InvalidContext,

    /// A prehashed message is not 64 bytes long.
    #[error("prehashed message must be 64 bytes long")]
    InvalidPrehashLength,

    /// A key is not 57 bytes long.
    #[error("key must be 57 bytes long")]
    InvalidKeyLength,
}

impl Error {
    /// Returns if this error means a signature did not verify, as opposed
    /// to a malformed input or a fault.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, Error::VerificationFailed)
    }
}

impl From<CurveFault> for Error {
    fn from(fault: CurveFault) -> Self {
        Error::CurveOperationFailure(fault)
    }
}

impl From<Error> for signature::Error {
    fn from(err: Error) -> Self {
        signature::Error::from_source(err)
    }
}
