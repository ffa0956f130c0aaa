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

//! Public key signatures: signing and verification.
//!
//! Use the `verify` function to verify signatures, passing a reference to
//! the [`Key`] and the [`Params`] naming the EdDSA instance and context.
//! A [`Verifier`] does the same for a message that arrives in pieces.
//!
//! | Instance     | Curve   | Prehash        | Context       | Signature |
//! |--------------|---------|----------------|---------------|-----------|
//! | `Ed25519`    | Ed25519 | none           | not allowed   | 64 bytes  |
//! | `Ed25519ctx` | Ed25519 | none           | 1..=255 bytes | 64 bytes  |
//! | `Ed25519ph`  | Ed25519 | SHA-512        | 0..=255 bytes | 64 bytes  |
//! | `Ed448`      | Ed448   | none           | 0..=255 bytes | 114 bytes |
//! | `Ed448ph`    | Ed448   | SHAKE256 (64)  | 0..=255 bytes | 114 bytes |
//!
//! # Signing and verifying with Ed25519ph
//!
//! ```
//! use edsign::{ec::Curve, error::Error, signature::{self, Key, Params}};
//!
//! # fn main() -> Result<(), Error> {
//! let key = Key::from_seed(Curve::Ed25519, &[1u8; 32])?;
//! let params = Params::new(&key, "Ed25519ph", b"")?;
//!
//! // Size the buffer first, then sign into it.
//! let len = signature::sign(&key, &params, b"hello", None)?;
//! let mut buf = [0u8; 114];
//! signature::sign(&key, &params, b"hello", Some(&mut buf))?;
//!
//! // Only the public key is needed to verify.
//! let peer = Key::from_public_key(Curve::Ed25519, key.public_key().as_ref())?;
//! assert!(signature::verify(&peer, &params, b"hello", &buf[..len])?);
//! assert!(!signature::verify(&peer, &params, b"hullo", &buf[..len])?);
//! # Ok(())
//! # }
//! ```

pub use crate::{
    ec::Curve,
    eddsa::{
        backend::{ Backend, BackendPolicy },
        context::{ ContextString, MAX_CONTEXT_LEN },
        instance::{ Instance, ED25519, ED25519CTX, ED25519PH, ED448, ED448PH },
        key::{ Key, PublicKey },
        params::Params,
        signing::sign,
        verification::{ verify, Verifier },
    },
};

use crate::ec::MAX_SIGNATURE_LEN;

/// A signature.
#[derive(Clone, Copy)]
pub struct Signature {
    value: [u8; MAX_SIGNATURE_LEN],
    len: usize,
}

impl Signature {
    // Panics if `fill` reports a length longer than the buffer.
    pub(crate) fn new<F>(fill: F) -> Self
    where
        F: FnOnce(&mut [u8; MAX_SIGNATURE_LEN]) -> usize,
    {
        let mut r = Self {
            value: [0; MAX_SIGNATURE_LEN],
            len: 0,
        };
        r.len = fill(&mut r.value);
        r
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.value[..self.len]
    }
}

derive_debug_self_as_ref_hex_bytes!(Signature);
