//! Ed448 signer.
//!
//! ## Example
//!
//! ```
//! use ed448_signer::{SigningKey, Signature};
//! use hex_literal::hex;
//! use signature::{Keypair as _, Signer as _, Verifier as _};
//!
//! // a test vector from RFC 8032
//! let secret_key = hex!("c4eab05d357007c632f3dbb48489924d552b08fe0c353a0d4a1f00acda2c463afbea67c5e8d2877c5e3bc397a659949ef8021e954e0a12274e");
//! let message = hex!("03");
//!
//! let signing_key = SigningKey::from_bytes(&secret_key).unwrap();
//! let signature: Signature = signing_key.sign(&message);
//! assert_eq!(
//!     signature.to_bytes(),
//!     hex!("26b8f91727bd62897af15e41eb43c377efb9c610d48f2335cb0bd0087810f4352541b143c4b981b7e18f62de8ccdf633fc1bf037ab7cd779805e0dbcc0aae1cbcee1afb2e027df36bc04dcecbf154336c19f0af7e0a6472905e799f1953d2a0ff3348ab21aa4adafd1d234441cf807c03a00"),
//! );
//! assert!(signing_key.verifying_key().verify(&message, &signature).is_ok());
//! ```

#[cfg(feature = "sha3")]
use signature::{Keypair, Signer};
#[cfg(all(feature = "sha3", feature = "digest"))]
use signature::DigestSigner;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{
    DIGEST_LENGTH, ENCODED_LENGTH, PREHASH_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH,
};
use crate::curve;
use crate::derivation::expand_seed;
#[cfg(feature = "sha3")]
use crate::digest::DefaultEngine;
#[cfg(all(feature = "sha3", feature = "digest"))]
use crate::digest::Shake256U64;
use crate::digest::HashEngine;
use crate::domain::Dom4;
use crate::error::Result;
use crate::mode::Mode;
use crate::scalar::SecretScalar;
use crate::signature::Signature;
use crate::verifying::VerifyingKey;

/// Ed448 private key.
///
/// Holds the secret key (seed) and the public key derived from it.
/// The seed is wiped when the key is dropped.
///
/// Optionally implements
/// - [`signature::Signer`](https://docs.rs/signature/latest/signature/trait.Signer.html)
///   and [`signature::Keypair`](https://docs.rs/signature/latest/signature/trait.Keypair.html):
///   if the "sha3" feature is enabled (default).
/// - [`signature::DigestSigner`](https://docs.rs/signature/latest/signature/trait.DigestSigner.html):
///   if the "sha3" and "digest" features are enabled.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey {
    seed: [u8; SECRET_KEY_LENGTH],
    #[zeroize(skip)]
    public_key: VerifyingKey,
}

impl SigningKey {
    /// Constructs a signing key from a secret key (seed).
    ///
    /// Derives the public key with the given hash engine.
    pub fn from_bytes_with<H>(seed: &[u8; SECRET_KEY_LENGTH]) -> Result<Self>
    where
        H: HashEngine,
    {
        let public_key = crate::derivation::derive_public_key::<H>(seed)?;
        Ok(SigningKey {
            seed: *seed,
            public_key: VerifyingKey::from_bytes(&public_key)?,
        })
    }

    /// Constructs a signing key from a secret key (seed).
    #[cfg(feature = "sha3")]
    pub fn from_bytes(seed: &[u8; SECRET_KEY_LENGTH]) -> Result<Self> {
        Self::from_bytes_with::<DefaultEngine>(seed)
    }

    /// Secret key (seed).
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.seed
    }

    /// Public key that verifies signatures made with this key.
    pub fn public_key(&self) -> &VerifyingKey {
        &self.public_key
    }

    /// Signs a message.
    ///
    /// `context` is an optional context string of at most 255 bytes.
    /// In [`Mode::PrehashDigested`], `message` must be the 64-byte
    /// `SHAKE256(message, 64)`.
    pub fn sign_with<H>(
        &self,
        context: Option<&[u8]>,
        message: &[u8],
        mode: Mode,
    ) -> Result<Signature>
    where
        H: HashEngine,
    {
        let signature = sign_with::<H>(&self.seed, context, message, mode)?;
        Signature::from_bytes(&signature)
    }
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SigningKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "sha3")]
impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> core::result::Result<Signature, signature::Error> {
        Ok(self.sign_with::<DefaultEngine>(None, msg, Mode::Pure)?)
    }
}

#[cfg(all(feature = "sha3", feature = "digest"))]
impl DigestSigner<Shake256U64, Signature> for SigningKey {
    fn try_sign_digest(
        &self,
        digest: Shake256U64,
    ) -> core::result::Result<Signature, signature::Error> {
        let prehashed = digest.squeeze();
        Ok(self.sign_with::<DefaultEngine>(None, &prehashed, Mode::PrehashDigested)?)
    }
}

#[cfg(feature = "sha3")]
impl Keypair for SigningKey {
    type VerifyingKey = VerifyingKey;

    fn verifying_key(&self) -> VerifyingKey {
        self.public_key.clone()
    }
}

/// Signs a message with SHAKE256 and no context.
///
/// Secret byte buffers are wiped before returning; reduced `Scalar` values
/// from `ed448-goldilocks` are not, since the type does not implement `Zeroize`.
///
/// Returns the 114-byte signature `R || S`.
#[cfg(feature = "sha3")]
pub fn sign(
    seed: &[u8; SECRET_KEY_LENGTH],
    message: &[u8],
    mode: Mode,
) -> Result<[u8; SIGNATURE_LENGTH]> {
    sign_with::<DefaultEngine>(seed, None, message, mode)
}

/// Signs a message with a given hash engine and an optional context.
///
/// Secret byte buffers are wiped before returning; reduced `Scalar` values
/// from `ed448-goldilocks` are not, since the type does not implement `Zeroize`.
///
/// Returns the 114-byte signature `R || S`.
pub fn sign_with<H>(
    seed: &[u8; SECRET_KEY_LENGTH],
    context: Option<&[u8]>,
    message: &[u8],
    mode: Mode,
) -> Result<[u8; SIGNATURE_LENGTH]>
where
    H: HashEngine,
{
    let dom4 = Dom4::new(mode.is_prehashed(), context)?;
    let mut prehashed = [0u8; PREHASH_LENGTH];
    let message = mode.prepare::<H>(message, &mut prehashed)?;
    let mut workspace = Workspace::default();
    sign_in::<H>(&mut workspace, seed, &dom4, message)
}

/// Scratch memory of a single signing.
///
/// Each logical value has its own buffer.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Workspace {
    scalar_half: [u8; ENCODED_LENGTH],
    prefix_half: [u8; ENCODED_LENGTH],
    r_digest: [u8; DIGEST_LENGTH],
    k_digest: [u8; DIGEST_LENGTH],
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            scalar_half: [0u8; ENCODED_LENGTH],
            prefix_half: [0u8; ENCODED_LENGTH],
            r_digest: [0u8; DIGEST_LENGTH],
            k_digest: [0u8; DIGEST_LENGTH],
        }
    }
}

impl Workspace {
    #[cfg(test)]
    pub(crate) fn is_wiped(&self) -> bool {
        self.scalar_half.iter().all(|b| *b == 0)
            && self.prefix_half.iter().all(|b| *b == 0)
            && self.r_digest.iter().all(|b| *b == 0)
            && self.k_digest.iter().all(|b| *b == 0)
    }
}

// Runs the signing steps in `workspace` and wipes it whatever the outcome.
fn sign_in<H>(
    workspace: &mut Workspace,
    seed: &[u8; SECRET_KEY_LENGTH],
    dom4: &Dom4,
    message: &[u8],
) -> Result<[u8; SIGNATURE_LENGTH]>
where
    H: HashEngine,
{
    let signature = sign_steps::<H>(workspace, seed, dom4, message);
    workspace.zeroize();
    signature
}

// https://datatracker.ietf.org/doc/html/rfc8032#section-5.2.6
#[allow(non_snake_case)]
fn sign_steps<H>(
    ws: &mut Workspace,
    seed: &[u8; SECRET_KEY_LENGTH],
    dom4: &Dom4,
    message: &[u8],
) -> Result<[u8; SIGNATURE_LENGTH]>
where
    H: HashEngine,
{
    expand_seed::<H>(seed, &mut ws.scalar_half, &mut ws.prefix_half)?;

    // r = SHAKE256(dom4(F, C) || prefix || M', 114)
    H::hash_all(
        &dom4.with_tail([&[], &ws.prefix_half, message]),
        &mut ws.r_digest,
    )?;
    let R = curve::scalar_mult_base_wide(&ws.r_digest);

    let s = SecretScalar::from_digest_half(&mut ws.scalar_half);
    ws.prefix_half.zeroize();
    let A = curve::encode_point(&curve::scalar_mult_base(&s.to_scalar()));

    // k = SHAKE256(dom4(F, C) || R || A || M', 114)
    H::hash_all(&dom4.with_tail([&R, &A, message]), &mut ws.k_digest)?;

    let S = curve::combine(&ws.k_digest, &s, &ws.r_digest);

    let mut signature = [0u8; SIGNATURE_LENGTH];
    signature[..ENCODED_LENGTH].copy_from_slice(&R);
    signature[ENCODED_LENGTH..].copy_from_slice(&S);
    Ok(signature)
}
