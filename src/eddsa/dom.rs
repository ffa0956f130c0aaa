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

//! The dom2 and dom4 prefixes of RFC 8032.

use super::{ context::{ ContextString, MAX_CONTEXT_LEN }, instance::Instance };
use crate::ec::Curve;

const DOM2_TAG: &[u8; 32] = b"SigEd25519 no Ed25519 collisions";
const DOM4_TAG: &[u8; 8] = b"SigEd448";

/// Room for the longer tag, the two flag bytes and the longest context.
pub const MAX_DOMAIN_PREFIX_LEN: usize = DOM2_TAG.len() + 2 + MAX_CONTEXT_LEN;

/// The bytes hashed in front of every nonce and challenge input.
///
/// Empty for plain Ed25519. Otherwise `tag || phflag || len(ctx) || ctx`
/// where the tag is `"SigEd25519 no Ed25519 collisions"` (dom2) or
/// `"SigEd448"` (dom4).
#[derive(Clone, Copy)]
pub struct DomainPrefix {
    bytes: [u8; MAX_DOMAIN_PREFIX_LEN],
    len: usize,
}

impl DomainPrefix {
    pub fn new(instance: &Instance, context: &ContextString) -> Self {
        let mut prefix = Self { bytes: [0u8; MAX_DOMAIN_PREFIX_LEN], len: 0 };
        if !instance.domain_separation() {
            return prefix;
        }

        let tag: &[u8] = match instance.curve() {
            Curve::Ed25519 => DOM2_TAG,
            Curve::Ed448 => DOM4_TAG,
        };
        prefix.push(tag);
        prefix.push(&[u8::from(instance.prehash()), context.len() as u8]);
        prefix.push(context.as_ref());
        prefix
    }

    fn push(&mut self, data: &[u8]) {
        self.bytes[self.len..][..data.len()].copy_from_slice(data);
        self.len += data.len();
    }
}

impl AsRef<[u8]> for DomainPrefix {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

derive_debug_self_as_ref_hex_bytes!(DomainPrefix);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eddsa::instance::{ ED25519, ED25519CTX, ED25519PH, ED448, ED448PH };
    use std::vec::Vec;

    fn prefix(instance: &Instance, ctx: &[u8]) -> Vec<u8> {
        let ctx = ContextString::new(instance, ctx).unwrap();
        DomainPrefix::new(instance, &ctx).as_ref().to_vec()
    }

    #[test]
    fn plain_ed25519_is_empty() {
        assert!(prefix(&ED25519, b"").is_empty());
    }

    #[test]
    fn dom2() {
        let mut expected = b"SigEd25519 no Ed25519 collisions".to_vec();
        expected.extend_from_slice(&[0, 3]);
        expected.extend_from_slice(b"foo");
        assert_eq!(prefix(&ED25519CTX, b"foo"), expected);

        let mut expected = b"SigEd25519 no Ed25519 collisions".to_vec();
        expected.extend_from_slice(&[1, 0]);
        assert_eq!(prefix(&ED25519PH, b""), expected);
    }

    #[test]
    fn dom4() {
        assert_eq!(prefix(&ED448, b""), b"SigEd448\x00\x00".to_vec());
        assert_eq!(prefix(&ED448, b"foo"), b"SigEd448\x00\x03foo".to_vec());
        assert_eq!(prefix(&ED448PH, b""), b"SigEd448\x01\x00".to_vec());
    }

    #[test]
    fn longest_context_fits() {
        let ctx = [0xabu8; MAX_CONTEXT_LEN];
        let bytes = prefix(&ED25519PH, &ctx);
        assert_eq!(bytes.len(), MAX_DOMAIN_PREFIX_LEN);
        assert_eq!(bytes[33], 255);
    }
}
