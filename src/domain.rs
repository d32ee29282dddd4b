//! Domain separation.
//!
//! Every hash that derives `r` or `k` starts with
//! `dom4(F, C) = "SigEd448" || octet(F) || octet(OLEN(C)) || C`
//! where `F` is 1 for Ed448ph and 0 otherwise, and `C` is the context.
//! https://datatracker.ietf.org/doc/html/rfc8032#section-2

use crate::constants::{DOM4_TAG, MAX_CONTEXT_LENGTH};
use crate::error::{Error, Result};

/// Domain separator `dom4(F, C)`.
#[derive(Clone, Copy, Debug)]
pub struct Dom4<'a> {
    flags: [u8; 2],
    context: &'a [u8],
}

impl<'a> Dom4<'a> {
    /// Builds a domain separator.
    ///
    /// Fails if `context` is longer than 255 bytes.
    pub fn new(prehashed: bool, context: Option<&'a [u8]>) -> Result<Self> {
        let context = context.unwrap_or(&[]);
        if context.len() > MAX_CONTEXT_LENGTH {
            return Err(Error::InvalidContext);
        }
        Ok(Self {
            flags: [prehashed as u8, context.len() as u8],
            context,
        })
    }

    /// Returns if this is the Ed448ph separator.
    #[cfg(test)]
    pub(crate) fn is_prehashed(&self) -> bool {
        self.flags[0] == 1
    }

    /// Hash inputs for `dom4(F, C) || tail[0] || tail[1] || ...`.
    ///
    /// The fixed tag always comes first.
    pub(crate) fn with_tail<'b>(&'b self, tail: [&'b [u8]; 3]) -> [&'b [u8]; 6] {
        [
            &DOM4_TAG,
            &self.flags,
            self.context,
            tail[0],
            tail[1],
            tail[2],
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn concat(inputs: &[&[u8]]) -> Vec<u8> {
        inputs.iter().flat_map(|i| i.iter().copied()).collect()
    }

    #[test]
    fn pure_without_context() {
        let dom4 = Dom4::new(false, None).unwrap();
        assert!(!dom4.is_prehashed());
        assert_eq!(
            concat(&dom4.with_tail([b"R", b"A", b"M"])),
            b"SigEd448\x00\x00RAM",
        );
    }

    #[test]
    fn prehashed_with_context() {
        let dom4 = Dom4::new(true, Some(&b"foo"[..])).unwrap();
        assert!(dom4.is_prehashed());
        assert_eq!(
            concat(&dom4.with_tail([b"", b"p", b"M"])),
            b"SigEd448\x01\x03foopM",
        );
    }

    #[test]
    fn context_length_limit() {
        let context = [0x61u8; 256];
        assert!(Dom4::new(false, Some(&context[..255])).is_ok());
        assert_eq!(
            Dom4::new(false, Some(&context[..])).unwrap_err(),
            Error::InvalidContext,
        );
        assert_eq!(
            Dom4::new(true, Some(&context[..])).unwrap_err(),
            Error::InvalidContext,
        );
    }

    #[test]
    fn tag_is_sig_ed448() {
        assert_eq!(DOM4_TAG, [0x53, 0x69, 0x67, 0x45, 0x64, 0x34, 0x34, 0x38]);
    }
}
