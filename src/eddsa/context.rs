// Copyright 2015-2016 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

//! Context strings.

use super::instance::Instance;
use crate::error::Error;

/// The longest context string RFC 8032 allows. Its length travels in a
/// single byte of the domain prefix.
pub const MAX_CONTEXT_LEN: usize = 255;

/// A context string that has been checked against an instance.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ContextString {
    bytes: [u8; MAX_CONTEXT_LEN],
    len: u8,
}

impl ContextString {
    /// The empty context.
    pub const EMPTY: Self = Self { bytes: [0u8; MAX_CONTEXT_LEN], len: 0 };

    /// Validates `context` for use with `instance`.
    pub fn new(instance: &Instance, context: &[u8]) -> Result<Self, Error> {
        if context.len() > MAX_CONTEXT_LEN {
            return Err(Error::ContextTooLong { len: context.len() });
        }
        Self::check(instance, context.len())?;

        let mut bytes = [0u8; MAX_CONTEXT_LEN];
        bytes[..context.len()].copy_from_slice(context);
        Ok(Self { bytes, len: context.len() as u8 })
    }

    /// Re-checks an already accepted context against another instance.
    pub(crate) fn revalidate(&self, instance: &Instance) -> Result<(), Error> {
        Self::check(instance, self.len())
    }

    fn check(instance: &Instance, len: usize) -> Result<(), Error> {
        if len == 0 && instance.context_required() {
            return Err(Error::ContextRequired);
        }
        if len != 0 && !instance.accepts_context() {
            return Err(Error::ContextNotAllowed);
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for ContextString {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }
}

derive_debug_self_as_ref_hex_bytes!(ContextString);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eddsa::instance::{ ED25519, ED25519CTX, ED25519PH, ED448, ED448PH };

    #[test]
    fn length_boundary() {
        let max = [0x61u8; MAX_CONTEXT_LEN];
        let ctx = ContextString::new(&ED25519CTX, &max).unwrap();
        assert_eq!(ctx.as_ref(), &max[..]);

        let over = [0x61u8; MAX_CONTEXT_LEN + 1];
        assert_eq!(
            ContextString::new(&ED25519CTX, &over),
            Err(Error::ContextTooLong { len: 256 })
        );
        assert_eq!(
            ContextString::new(&ED448PH, &over),
            Err(Error::ContextTooLong { len: 256 })
        );
    }

    #[test]
    fn ctx_instance_needs_context() {
        assert_eq!(ContextString::new(&ED25519CTX, b""), Err(Error::ContextRequired));
    }

    #[test]
    fn plain_ed25519_refuses_context() {
        assert_eq!(ContextString::new(&ED25519, b"x"), Err(Error::ContextNotAllowed));
        assert!(ContextString::new(&ED25519, b"").unwrap().is_empty());
    }

    #[test]
    fn optional_context() {
        for instance in [&ED25519PH, &ED448, &ED448PH] {
            assert!(ContextString::new(instance, b"").is_ok());
            assert_eq!(ContextString::new(instance, b"foo").unwrap().as_ref(), b"foo");
        }
    }

    #[test]
    fn revalidation() {
        let ctx = ContextString::new(&ED25519PH, b"foo").unwrap();
        assert_eq!(ctx.revalidate(&ED25519), Err(Error::ContextNotAllowed));
        assert_eq!(ContextString::EMPTY.revalidate(&ED25519CTX), Err(Error::ContextRequired));
    }
}
