//! Public key derivation.

use zeroize::Zeroizing;

use crate::constants::{DIGEST_LENGTH, ENCODED_LENGTH, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use crate::curve;
use crate::digest::HashEngine;
use crate::error::Result;
use crate::scalar::SecretScalar;

/// Derives the public key `A = [s]B` from a secret key (seed).
///
/// Nothing is returned if hashing fails; every intermediate is wiped
/// either way.
/// https://datatracker.ietf.org/doc/html/rfc8032#section-5.2.5
pub fn derive_public_key<H>(seed: &[u8; SECRET_KEY_LENGTH]) -> Result<[u8; PUBLIC_KEY_LENGTH]>
where
    H: HashEngine,
{
    let mut scalar_half = Zeroizing::new([0u8; ENCODED_LENGTH]);
    let mut prefix_half = Zeroizing::new([0u8; ENCODED_LENGTH]);
    expand_seed::<H>(seed, &mut scalar_half, &mut prefix_half)?;
    let s = SecretScalar::from_digest_half(&mut scalar_half);
    Ok(curve::encode_point(&curve::scalar_mult_base(&s.to_scalar())))
}

/// Hashes a seed into `SHAKE256(seed, 114)` and splits it into the scalar
/// half and the prefix half.
pub(crate) fn expand_seed<H>(
    seed: &[u8; SECRET_KEY_LENGTH],
    scalar_half: &mut [u8; ENCODED_LENGTH],
    prefix_half: &mut [u8; ENCODED_LENGTH],
) -> Result<()>
where
    H: HashEngine,
{
    let mut digest = Zeroizing::new([0u8; DIGEST_LENGTH]);
    H::hash_all(&[seed], &mut digest[..])?;
    scalar_half.copy_from_slice(&digest[..ENCODED_LENGTH]);
    prefix_half.copy_from_slice(&digest[ENCODED_LENGTH..]);
    Ok(())
}
