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

//! Ed25519 signature verification.

use super::{ scalar_from_digest, ELEM_LEN, SCALAR_LEN, SIGNATURE_LEN };
use crate::digest;
use curve25519_dalek::{
    edwards::{ CompressedEdwardsY, EdwardsPoint },
    scalar::Scalar,
};
use subtle::ConstantTimeEq;

/// Checks `signature` against `public_key`, given the finished challenge
/// hash `SHA-512(dom || R || A || tbs)`.
///
/// The check is cofactorless: `[S]B - [k]A` must encode to exactly the
/// `R` bytes of the signature. An undecodable public key or an unreduced
/// `S` rejects.
pub(crate) fn verify(public_key: &[u8], signature: &[u8], challenge: &digest::Digest) -> bool {
    if signature.len() != SIGNATURE_LEN {
        return false;
    }
    let (r_bytes, s_bytes) = signature.split_at(ELEM_LEN);

    let a = match decode_point(public_key) {
        Some(a) => a,
        None => return false,
    };
    let s = match decode_scalar(s_bytes) {
        Some(s) => s,
        None => return false,
    };
    let k = scalar_from_digest(challenge);

    let r = EdwardsPoint::vartime_double_scalar_mul_basepoint(&k, &(-a), &s);
    r.compress().as_bytes()[..].ct_eq(r_bytes).into()
}

fn decode_point(bytes: &[u8]) -> Option<EdwardsPoint> {
    let bytes: [u8; ELEM_LEN] = bytes.try_into().ok()?;
    CompressedEdwardsY(bytes).decompress()
}

pub(crate) fn decode_scalar(bytes: &[u8]) -> Option<Scalar> {
    let bytes: [u8; SCALAR_LEN] = bytes.try_into().ok()?;
    Scalar::from_canonical_bytes(bytes)
}
