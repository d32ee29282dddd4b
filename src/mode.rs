//! Signature modes.

use crate::constants::PREHASH_LENGTH;
use crate::digest::{prehash, HashEngine};
use crate::error::{Error, Result};

/// How the message is fed into the signature scheme.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Ed448: the message is signed as is.
    Pure,
    /// Ed448ph with a raw message: the message is hashed with
    /// `SHAKE256(message, 64)` first.
    PrehashRaw,
    /// Ed448ph with a message the caller has already hashed with
    /// `SHAKE256(message, 64)`.
    PrehashDigested,
}

impl Mode {
    /// Returns if this is an Ed448ph mode.
    pub fn is_prehashed(self) -> bool {
        !matches!(self, Mode::Pure)
    }

    /// Resolves the message `M'` that goes into the `r` and `k` hashes.
    ///
    /// `buf` receives the prehash in [`Mode::PrehashRaw`].
    pub(crate) fn prepare<'m, H>(
        self,
        message: &'m [u8],
        buf: &'m mut [u8; PREHASH_LENGTH],
    ) -> Result<&'m [u8]>
    where
        H: HashEngine,
    {
        match self {
            Mode::Pure => Ok(message),
            Mode::PrehashRaw => {
                *buf = prehash::<H>(message)?;
                Ok(&buf[..])
            }
            Mode::PrehashDigested => {
                if message.len() != PREHASH_LENGTH {
                    return Err(Error::InvalidPrehashLength);
                }
                Ok(message)
            }
        }
    }
}
