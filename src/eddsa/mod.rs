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

//! The EdDSA engine: instance selection, context strings, domain separation,
//! signing and (streaming) verification on top of the curve primitives.

pub mod backend;
pub mod context;
pub mod dom;
pub mod instance;
pub mod key;
pub mod params;
pub mod signing;
pub mod verification;

use crate::{ digest, ec::{ Curve, PREHASH_LEN }, error::Error };

/// Hashes `msg` for a prehash instance: SHA-512 for Ed25519ph, 64 bytes of
/// SHAKE256 for Ed448ph.
pub(crate) fn prehash(curve: Curve, msg: &[u8]) -> Result<digest::Digest, Error> {
    check_prehash(digest::digest(curve.prehash_algorithm(), msg))
}

pub(crate) fn check_prehash(digest: digest::Digest) -> Result<digest::Digest, Error> {
    if digest.algorithm().output_len != PREHASH_LEN {
        return Err(Error::PrehashFailed);
    }
    Ok(digest)
}
