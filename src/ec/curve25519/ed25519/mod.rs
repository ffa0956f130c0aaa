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

//! EdDSA signatures over edwards25519.

pub(crate) mod signing;
pub(crate) mod verification;

#[cfg(feature = "dalek-backend")]
pub(crate) mod accelerated;

// Stand-in for builds without `dalek-backend`. Backend selection never picks
// the accelerated path in such builds.
#[cfg(not(feature = "dalek-backend"))]
pub(crate) mod accelerated {
    use super::{ Seed, SIGNATURE_LEN };
    use crate::error;

    pub(crate) fn sign(_: &Seed, _: &[u8]) -> Result<[u8; SIGNATURE_LEN], error::Error> {
        Err(error::Error::SignPrimitiveFailed)
    }

    pub(crate) fn verify(_: &[u8], _: &[u8], _: &[u8]) -> bool {
        false
    }
}

use crate::digest;
use curve25519_dalek::scalar::Scalar;

pub(crate) const SEED_LEN: usize = 32;
pub(crate) const ELEM_LEN: usize = 32;
pub(crate) const SCALAR_LEN: usize = 32;
pub(crate) const SIGNATURE_LEN: usize = ELEM_LEN + SCALAR_LEN;

pub(crate) type Seed = [u8; SEED_LEN];
pub(crate) type PublicKey = [u8; ELEM_LEN];

// Reduces a SHA-512 output modulo the group order.
fn scalar_from_digest(d: &digest::Digest) -> Scalar {
    let mut wide = [0u8; digest::SHA512_OUTPUT_LEN];
    wide.copy_from_slice(d.as_ref());
    Scalar::from_bytes_mod_order_wide(&wide)
}
