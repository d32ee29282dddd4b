//! Hashing for Ed448.
//!
//! Two views on SHAKE256 live here:
//! - [`HashEngine`]: hashes an ordered list of byte slices into an output
//!   of any length. Signing and verification are generic over it.
//! - [`XofDigest`]: makes an extendable output function (XOF) a
//!   [`Digest`](https://docs.rs/digest/latest/digest/trait.Digest.html) with
//!   a fixed output size, so that it can be handed to
//!   [`signature::DigestSigner`] and [`signature::DigestVerifier`].
//!
//! Unless you disable the "sha3" feature, the following type aliases are
//! defined for your convenience:
//! - [`DefaultEngine`]: SHAKE256 as a [`HashEngine`]
//! - [`Shake256U114`]: core hash function for Ed448
//! - [`Shake256U64`]: function for prehash calculation for Ed448

#[cfg(feature = "sha3")]
use digest::crypto_common::generic_array::typenum::{U114, U64};
use digest::{
    crypto_common::generic_array::ArrayLength, ExtendableOutput, FixedOutput, FixedOutputReset,
    HashMarker, Output, OutputSizeUser, Reset, Update,
};
use std::marker::PhantomData;

use crate::constants::PREHASH_LENGTH;
use crate::error::Result;

/// Hash engine that absorbs an ordered list of inputs and squeezes an
/// output of arbitrary length.
///
/// The inputs are logically concatenated. Any XOF from the RustCrypto
/// ecosystem (e.g., `sha3::Shake256`) is a `HashEngine`; implement it
/// yourself to plug in another provider.
pub trait HashEngine {
    /// Hashes `inputs` and fills `output` entirely.
    fn hash_all(inputs: &[&[u8]], output: &mut [u8]) -> Result<()>;
}

impl<T> HashEngine for T
where
    T: ExtendableOutput + Update + Default,
{
    fn hash_all(inputs: &[&[u8]], output: &mut [u8]) -> Result<()> {
        let mut xof = T::default();
        for input in inputs {
            xof.update(input);
        }
        xof.finalize_xof_into(output);
        Ok(())
    }
}

/// Computes the Ed448ph prehash `SHAKE256(message, 64)`.
pub fn prehash<H>(message: &[u8]) -> Result<[u8; PREHASH_LENGTH]>
where
    H: HashEngine,
{
    let mut digest = [0u8; PREHASH_LENGTH];
    H::hash_all(&[message], &mut digest)?;
    Ok(digest)
}

/// Adapter for an extendable output function (XOF) to make it a
/// [`Digest`](https://docs.rs/digest/latest/digest/trait.Digest.html) with
/// a fixed output size.
///
/// `Digest` comes from the blanket implementation in the `digest` crate.
#[derive(Clone)]
pub struct XofDigest<T, N>
where
    T: ExtendableOutput,
    N: ArrayLength<u8> + 'static,
{
    xof: T,
    _size: PhantomData<N>,
}

impl<T, N> XofDigest<T, N>
where
    T: ExtendableOutput,
    N: ArrayLength<u8> + 'static,
{
    /// Makes a given XOF a [`Digest`](digest::Digest).
    pub fn from_xof(xof: T) -> Self {
        Self {
            xof,
            _size: PhantomData,
        }
    }

    /// Finalizes the XOF into a byte array of the fixed output size.
    pub(crate) fn squeeze(self) -> Output<Self> {
        let mut output = Output::<Self>::default();
        self.xof.finalize_xof_into(output.as_mut());
        output
    }
}

impl<T, N> Default for XofDigest<T, N>
where
    T: ExtendableOutput + Default,
    N: ArrayLength<u8> + 'static,
{
    fn default() -> Self {
        Self::from_xof(T::default())
    }
}

impl<T, N> HashMarker for XofDigest<T, N>
where
    T: ExtendableOutput,
    N: ArrayLength<u8> + 'static,
{
}

impl<T, N> OutputSizeUser for XofDigest<T, N>
where
    T: ExtendableOutput,
    N: ArrayLength<u8> + 'static,
{
    type OutputSize = N;
}

impl<T, N> Update for XofDigest<T, N>
where
    T: ExtendableOutput + Update,
    N: ArrayLength<u8> + 'static,
{
    fn update(&mut self, data: &[u8]) {
        self.xof.update(data);
    }
}

impl<T, N> FixedOutput for XofDigest<T, N>
where
    T: ExtendableOutput,
    N: ArrayLength<u8> + 'static,
{
    fn finalize_into(self, out: &mut Output<Self>) {
        self.xof.finalize_xof_into(out.as_mut());
    }
}

impl<T, N> Reset for XofDigest<T, N>
where
    T: ExtendableOutput + Default,
    N: ArrayLength<u8> + 'static,
{
    fn reset(&mut self) {
        self.xof = T::default();
    }
}

impl<T, N> FixedOutputReset for XofDigest<T, N>
where
    T: ExtendableOutput + Default,
    N: ArrayLength<u8> + 'static,
{
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        let xof = std::mem::take(&mut self.xof);
        xof.finalize_xof_into(out.as_mut());
    }
}

/// SHAKE256 as a [`HashEngine`].
#[cfg(feature = "sha3")]
pub type DefaultEngine = sha3::Shake256;

/// Digest for Ed448.
#[cfg(feature = "sha3")]
pub type Shake256U114 = XofDigest<sha3::Shake256, U114>;

/// Prehash function for Ed448.
#[cfg(feature = "sha3")]
pub type Shake256U64 = XofDigest<sha3::Shake256, U64>;

#[cfg(all(test, feature = "sha3"))]
mod test {
    use digest::Digest;
    use hex_literal::hex;

    use super::*;
    use crate::constants::DIGEST_LENGTH;

    // test vectors are downloaded from
    // https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/secure-hashing

    const INPUT_64: [u8; 32] =
        hex!("e3ef127eadfafaf40408cebb28705df30b68d99dfa1893507ef3062d85461715");
    const OUTPUT_64: [u8; 64] = hex!(
        "7314002948c057006d4fc21e3e19c258fb5bdd57728fe93c9c6ef265b6d9f559
        ca73da32c427e135ba0db900d9003b19c9cf116f542a760418b1a435ac75ed5a"
    );
    const INPUT_114: [u8; 32] =
        hex!("dc886df3f69c49513de3627e9481db5871e8ee88eb9f99611541930a8bc885e0");
    const OUTPUT_114: [u8; 114] = hex!(
        "00648afbc5e651649db1fd82936b00dbbc122fb4c877860d385c4950d56de7e0
        96d613d7a3f27ed8f26334b0ccc1407b41dccb23dfaa529818d1125cd5348092
        524366b85fabb97c6cd1e6066f459bcc566da87ec9b7ba36792d118ac39a4cce
        f6192bbf3a54af18e57b0c146101f6aeaa82"
    );

    #[test]
    fn hash_all_single_input() {
        let mut output = [0u8; PREHASH_LENGTH];
        DefaultEngine::hash_all(&[&INPUT_64], &mut output).unwrap();
        assert_eq!(output, OUTPUT_64);

        let mut output = [0u8; DIGEST_LENGTH];
        DefaultEngine::hash_all(&[&INPUT_114], &mut output).unwrap();
        assert_eq!(output, OUTPUT_114);
    }

    #[test]
    fn hash_all_concatenates_inputs() {
        let mut output = [0u8; DIGEST_LENGTH];
        DefaultEngine::hash_all(
            &[&INPUT_114[..5], &[], &INPUT_114[5..16], &INPUT_114[16..]],
            &mut output,
        )
        .unwrap();
        assert_eq!(output, OUTPUT_114);
    }

    #[test]
    fn hash_all_without_inputs() {
        // SHAKE256 of the empty string
        let mut output = [0u8; 32];
        DefaultEngine::hash_all(&[], &mut output).unwrap();
        assert_eq!(
            output,
            hex!("46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"),
        );
    }

    #[test]
    fn prehash_matches_shake256_u64() {
        assert_eq!(prehash::<DefaultEngine>(&INPUT_64).unwrap(), OUTPUT_64);
        assert_eq!(
            prehash::<DefaultEngine>(b"abc").unwrap().as_slice(),
            Shake256U64::digest(b"abc").as_slice(),
        );
    }

    #[test]
    fn xof_digest_update_finalize() {
        let mut digest = Shake256U64::new();
        Digest::update(&mut digest, &INPUT_64[0..16]);
        Digest::update(&mut digest, &INPUT_64[16..]);
        assert_eq!(digest.finalize().as_slice(), OUTPUT_64);

        assert_eq!(
            Shake256U114::new_with_prefix(INPUT_114).finalize().as_slice(),
            OUTPUT_114,
        );
    }

    #[test]
    fn xof_digest_finalize_reset() {
        let mut digest = Shake256U114::new_with_prefix(hex!("012345"));
        Digest::reset(&mut digest);
        Digest::update(&mut digest, INPUT_114);
        assert_eq!(digest.finalize_reset().as_slice(), OUTPUT_114);

        // the state is fresh after finalize_reset
        Digest::update(&mut digest, INPUT_114);
        assert_eq!(digest.finalize().as_slice(), OUTPUT_114);
    }

    #[test]
    fn xof_digest_squeeze() {
        let digest = Shake256U64::new_with_prefix(INPUT_64);
        assert_eq!(digest.squeeze().as_slice(), OUTPUT_64);
    }

    #[test]
    fn output_size() {
        assert_eq!(<Shake256U64 as Digest>::output_size(), 64);
        assert_eq!(<Shake256U114 as Digest>::output_size(), 114);
    }
}
