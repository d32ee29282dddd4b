//! Common constants.

/// Length of an Ed448 signature in bytes.
pub const SIGNATURE_LENGTH: usize = 114;

/// Length of an Ed448 public key in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 57;

/// Length of an Ed448 secret key (seed) in bytes.
pub const SECRET_KEY_LENGTH: usize = 57;

/// Length of an encoded point or scalar in bytes.
pub const ENCODED_LENGTH: usize = 57;

/// Output length of the SHAKE256 calls that feed the signature scheme.
pub const DIGEST_LENGTH: usize = 114;

/// Length of the SHAKE256 prehash used by Ed448ph.
pub const PREHASH_LENGTH: usize = 64;

/// Maximum length of a context string.
pub const MAX_CONTEXT_LENGTH: usize = 255;

/// Leading tag of dom4.
///
/// https://datatracker.ietf.org/doc/html/rfc8032#section-2
pub const DOM4_TAG: [u8; 8] = *b"SigEd448";
