//! A naïve implementation of Ed448 and Ed448ph signing and verification.
//!
//! ## Introduction
//!
//! This library is not officially audited and reviewed.
//! Use it **AT YOUR OWN RISK**.
//!
//! This library wraps [`ed448-goldilocks`](https://docs.rs/ed448-goldilocks/latest/ed448_goldilocks/)
//! with the signature scheme of [RFC 8032](https://datatracker.ietf.org/doc/html/rfc8032)
//! and implementations of
//! [`signature::Signer`](https://docs.rs/signature/latest/signature/trait.Signer.html) and
//! [`signature::Verifier`](https://docs.rs/signature/latest/signature/trait.Verifier.html):
//! [`SigningKey`] and [`VerifyingKey`].
//!
//! Hashing is pluggable through [`HashEngine`]; any extendable-output
//! function from the [`digest`](https://docs.rs/digest/latest/digest/)
//! ecosystem works. SHAKE256 from [`sha3`](https://docs.rs/sha3/latest/sha3/)
//! is the default under the "sha3" feature.
//!
//! Secret intermediates of signing live in a scratch area that is wiped
//! before signing returns, whether it succeeds or not.
//!
//! ## Example
//!
//! ```
//! use ed448_signer::{derive_public_key, sign, verify, Mode};
//! use sha3::Shake256;
//!
//! let seed = [0x42u8; 57];
//! let public_key = derive_public_key::<Shake256>(&seed).unwrap();
//! let signature = sign(&seed, b"hello", Mode::Pure).unwrap();
//! assert!(verify(&public_key, b"hello", &signature, Mode::Pure).is_ok());
//! assert!(verify(&public_key, b"hellp", &signature, Mode::Pure)
//!     .unwrap_err()
//!     .is_verification_failure());
//! ```
//!
//! Most of the idea was taken from [`ed25519-dalek`](https://docs.rs/ed25519-dalek/latest/ed25519_dalek/index.html).

pub mod constants;
pub mod curve;
pub mod derivation;
pub mod digest;
pub mod domain;
pub mod error;
pub mod mode;
pub mod scalar;
pub mod signature;
pub mod signing;
pub mod verifying;

pub use derivation::derive_public_key;
pub use self::digest::HashEngine;
pub use error::{CurveFault, Error, Result};
pub use mode::Mode;
pub use scalar::decode_scalar;
pub use self::signature::Signature;
#[cfg(feature = "sha3")]
pub use signing::sign;
pub use signing::{sign_with, SigningKey};
#[cfg(feature = "sha3")]
pub use verifying::verify;
pub use verifying::{verify_with, VerifyingKey};
