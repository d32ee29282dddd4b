//! Ed448 verifier.
//!
//! ## Example
//!
//! ```
//! use ed448_signer::{Signature, VerifyingKey};
//! use hex_literal::hex;
//! use signature::Verifier as _;
//!
//! // a test vector from RFC 8032
//! let public_key_bytes = hex!("3ba16da0c6f2cc1f30187740756f5e798d6bc5fc015d7c63cc9510ee3fd44adc24d8e968b6e46e6f94d19b945361726bd75e149ef09817f580");
//! let message = hex!("64a65f3cdedcdd66811e2915");
//! let signature_bytes = hex!("7eeeab7c4e50fb799b418ee5e3197ff6bf15d43a14c34389b59dd1a7b1b85b4ae90438aca634bea45e3a2695f1270f07fdcdf7c62b8efeaf00b45c2c96ba457eb1a8bf075a3db28e5c24f6b923ed4ad747c3c9e03c7079efb87cb110d3a99861e72003cbae6d6b8b827e4e6c143064ff3c00");
//!
//! let public_key = VerifyingKey::from_bytes(&public_key_bytes).unwrap();
//! let signature = Signature::from_bytes(&signature_bytes).unwrap();
//! assert!(public_key.verify(&message, &signature).is_ok());
//! ```

use core::fmt;

use ed448_goldilocks::curve::edwards::ExtendedPoint;
#[cfg(all(feature = "sha3", feature = "digest"))]
use signature::DigestVerifier;
#[cfg(feature = "sha3")]
use signature::Verifier;

use crate::constants::{DIGEST_LENGTH, PREHASH_LENGTH, PUBLIC_KEY_LENGTH};
use crate::curve::{self, PointBytes};
#[cfg(feature = "sha3")]
use crate::digest::DefaultEngine;
#[cfg(all(feature = "sha3", feature = "digest"))]
use crate::digest::Shake256U64;
use crate::digest::HashEngine;
use crate::domain::Dom4;
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::signature::Signature;

/// Ed448 public key.
///
/// Optionally implements
/// - [`signature::Verifier`](https://docs.rs/signature/latest/signature/trait.Verifier.html):
///   if the "sha3" feature is enabled (default).
/// - [`signature::DigestVerifier`](https://docs.rs/signature/latest/signature/trait.DigestVerifier.html):
///   if the "sha3" and "digest" features are
///   enabled.
///
/// ## Example
///
/// Please see the [`verifying`][crate::verifying] module.
#[derive(Clone)]
pub struct VerifyingKey {
    pub(crate) compressed: PointBytes,
    pub(crate) point: ExtendedPoint,
}

impl VerifyingKey {
    /// Constructs a verifying key from a given byte array.
    ///
    /// Fails if `bytes` is not the canonical encoding of a point on the
    /// curve.
    #[inline]
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self> {
        let point = curve::decode_point(bytes)?;
        Ok(VerifyingKey {
            compressed: *bytes,
            point,
        })
    }

    /// Encoded public key.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.compressed
    }

    /// Encoded public key as a reference.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.compressed
    }

    /// Verifies a given signature for a specified message.
    ///
    /// As this function is intended to be internally used, please use
    /// [`VerifyingKey::verify`] instead unless you disable the "sha3" feature.
    pub fn raw_verify<H>(
        &self,
        context: Option<&[u8]>,
        message: &[u8],
        signature: &Signature,
    ) -> Result<()>
    where
        H: HashEngine,
    {
        let dom4 = Dom4::new(false, context)?;
        self.verify_inner::<H>(&dom4, message, signature)
    }

    /// Verifies a given signature for a specified prehashed message.
    ///
    /// `prehashed_message` is `SHAKE256(message, 64)`.
    pub fn raw_verify_prehashed<H>(
        &self,
        context: Option<&[u8]>,
        prehashed_message: &[u8; PREHASH_LENGTH],
        signature: &Signature,
    ) -> Result<()>
    where
        H: HashEngine,
    {
        let dom4 = Dom4::new(true, context)?;
        self.verify_inner::<H>(&dom4, prehashed_message, signature)
    }

    /// Verifies a given signature in a given mode.
    pub fn verify_with<H>(
        &self,
        context: Option<&[u8]>,
        message: &[u8],
        signature: &Signature,
        mode: Mode,
    ) -> Result<()>
    where
        H: HashEngine,
    {
        let dom4 = Dom4::new(mode.is_prehashed(), context)?;
        let mut prehashed = [0u8; PREHASH_LENGTH];
        let message = mode.prepare::<H>(message, &mut prehashed)?;
        self.verify_inner::<H>(&dom4, message, signature)
    }

    // https://datatracker.ietf.org/doc/html/rfc8032#section-5.2.7
    #[allow(non_snake_case)]
    fn verify_inner<H>(&self, dom4: &Dom4, M: &[u8], signature: &Signature) -> Result<()>
    where
        H: HashEngine,
    {
        // a malformed R is a bad signature, not a curve fault
        let R = curve::decode_point(&signature.R)
            .map_err(|_| Error::InvalidSignatureEncoding)?;
        let k = Self::compute_challenge::<H>(dom4, &signature.R, &self.compressed, M)?;
        let valid = curve::verify_combined(&k, &self.point, &signature.s, &R);
        if bool::from(valid) {
            Ok(())
        } else {
            Err(Error::VerificationFailed)
        }
    }

    #[allow(non_snake_case)]
    fn compute_challenge<H>(
        dom4: &Dom4,
        R: &PointBytes,
        A: &PointBytes,
        M: &[u8],
    ) -> Result<[u8; DIGEST_LENGTH]>
    where
        H: HashEngine,
    {
        // k = SHAKE256(dom4(F, C) || R || A || M, 114)
        let mut k = [0u8; DIGEST_LENGTH];
        H::hash_all(&dom4.with_tail([R, A, M]), &mut k)?;
        Ok(k)
    }
}

impl fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerifyingKey(")?;
        for b in self.compressed {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}

impl PartialEq for VerifyingKey {
    fn eq(&self, other: &Self) -> bool {
        self.compressed == other.compressed
    }
}

impl Eq for VerifyingKey {}

impl AsRef<[u8]> for VerifyingKey {
    fn as_ref(&self) -> &[u8] {
        &self.compressed
    }
}

#[cfg(feature = "sha3")]
impl Verifier<Signature> for VerifyingKey {
    fn verify(
        &self,
        msg: &[u8],
        signature: &Signature,
    ) -> core::result::Result<(), signature::Error> {
        Ok(self.raw_verify::<DefaultEngine>(None, msg, signature)?)
    }
}

#[cfg(all(feature = "sha3", feature = "digest"))]
impl DigestVerifier<Shake256U64, Signature> for VerifyingKey {
    fn verify_digest(
        &self,
        digest: Shake256U64,
        signature: &Signature,
    ) -> core::result::Result<(), signature::Error> {
        let mut prehashed = [0u8; PREHASH_LENGTH];
        prehashed.copy_from_slice(&digest.squeeze());
        Ok(self.raw_verify_prehashed::<DefaultEngine>(None, &prehashed, signature)?)
    }
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = Error;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.try_into().map_err(|_| Error::InvalidKeyLength)?;
        Self::from_bytes(bytes)
    }
}

/// Verifies a signature with SHAKE256 and no context.
///
/// `signature` must be 114 bytes long.
#[cfg(feature = "sha3")]
pub fn verify(
    public_key: &[u8; PUBLIC_KEY_LENGTH],
    message: &[u8],
    signature: &[u8],
    mode: Mode,
) -> Result<()> {
    verify_with::<DefaultEngine>(public_key, None, message, signature, mode)
}

/// Verifies a signature with a given hash engine and an optional context.
///
/// Fails with [`Error::VerificationFailed`] if the signature does not match
/// or `public_key` is not a point on the curve, and with
/// [`Error::InvalidSignatureEncoding`] if `signature` is malformed.
pub fn verify_with<H>(
    public_key: &[u8; PUBLIC_KEY_LENGTH],
    context: Option<&[u8]>,
    message: &[u8],
    signature: &[u8],
    mode: Mode,
) -> Result<()>
where
    H: HashEngine,
{
    let signature = Signature::from_slice(signature)?;
    let public_key =
        VerifyingKey::from_bytes(public_key).map_err(|_| Error::VerificationFailed)?;
    public_key.verify_with::<H>(context, message, &signature, mode)
}



#[cfg(all(test, feature = "sha3"))]
mod test_properties {
    use proptest::prelude::*;

    use super::*;
    use crate::constants::{SECRET_KEY_LENGTH, SIGNATURE_LENGTH};
    use crate::signing::{sign, sign_with, SigningKey};

    fn seed() -> impl Strategy<Value = [u8; SECRET_KEY_LENGTH]> {
        prop::collection::vec(any::<u8>(), SECRET_KEY_LENGTH).prop_map(|v| {
            let mut seed = [0u8; SECRET_KEY_LENGTH];
            seed.copy_from_slice(&v);
            seed
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn signatures_verify(
            seed in seed(),
            message in prop::collection::vec(any::<u8>(), 0..256),
            context in prop::collection::vec(any::<u8>(), 0..32),
        ) {
            let public_key = SigningKey::from_bytes(&seed).unwrap().public_key().to_bytes();
            for mode in [Mode::Pure, Mode::PrehashRaw] {
                let signature =
                    sign_with::<DefaultEngine>(&seed, Some(&context[..]), &message, mode).unwrap();
                prop_assert!(verify_with::<DefaultEngine>(
                    &public_key,
                    Some(&context[..]),
                    &message,
                    &signature,
                    mode,
                )
                .is_ok());
            }
        }

        #[test]
        fn signing_is_deterministic(
            seed in seed(),
            message in prop::collection::vec(any::<u8>(), 0..128),
        ) {
            prop_assert_eq!(
                sign(&seed, &message, Mode::Pure).unwrap(),
                sign(&seed, &message, Mode::Pure).unwrap(),
            );
        }

        #[test]
        fn tampered_messages_are_rejected(
            seed in seed(),
            message in prop::collection::vec(any::<u8>(), 1..128),
            index in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let public_key = SigningKey::from_bytes(&seed).unwrap().public_key().to_bytes();
            let signature = sign(&seed, &message, Mode::Pure).unwrap();
            let mut tampered = message.clone();
            tampered[index.index(message.len())] ^= 1 << bit;
            prop_assert_eq!(
                verify(&public_key, &tampered, &signature, Mode::Pure).unwrap_err(),
                Error::VerificationFailed,
            );
        }

        #[test]
        fn tampered_signatures_are_rejected(
            seed in seed(),
            message in prop::collection::vec(any::<u8>(), 0..128),
            index in 0usize..SIGNATURE_LENGTH,
            bit in 0u8..8,
        ) {
            let public_key = SigningKey::from_bytes(&seed).unwrap().public_key().to_bytes();
            let mut signature = sign(&seed, &message, Mode::Pure).unwrap();
            signature[index] ^= 1 << bit;
            prop_assert!(verify(&public_key, &message, &signature, Mode::Pure).is_err());
        }

        #[test]
        fn tampered_public_keys_are_rejected(
            seed in seed(),
            message in prop::collection::vec(any::<u8>(), 0..128),
            index in 0usize..PUBLIC_KEY_LENGTH,
            bit in 0u8..8,
        ) {
            let mut public_key = SigningKey::from_bytes(&seed).unwrap().public_key().to_bytes();
            let signature = sign(&seed, &message, Mode::Pure).unwrap();
            public_key[index] ^= 1 << bit;
            let err = verify(&public_key, &message, &signature, Mode::Pure).unwrap_err();
            prop_assert!(err.is_verification_failure(), "{:?}", err);
        }

        #[test]
        fn prehash_modes_agree(
            seed in seed(),
            message in prop::collection::vec(any::<u8>(), 0..256),
        ) {
            let digest = crate::digest::prehash::<DefaultEngine>(&message).unwrap();
            prop_assert_eq!(
                sign(&seed, &message, Mode::PrehashRaw).unwrap(),
                sign(&seed, &digest, Mode::PrehashDigested).unwrap(),
            );
        }
    }
}
