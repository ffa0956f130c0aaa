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

//! Ed448 signing and verification, RFC 8032 section 5.2.
//!
//! Every Ed448 hash is SHAKE256 with 114 bytes of output, and every hash
//! input starts with dom4. The dom4 prefix is built by the caller and passed
//! in as `dom`.

use super::{ point::{ EdwardsPoint, POINT_LEN }, scalar::{ Scalar, SCALAR_LEN, WIDE_LEN } };
use crate::{ digest, error };
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

pub(crate) const SEED_LEN: usize = 57;
pub(crate) const ELEM_LEN: usize = POINT_LEN;
pub(crate) const SIGNATURE_LEN: usize = ELEM_LEN + SCALAR_LEN;

pub(crate) type Seed = [u8; SEED_LEN];
pub(crate) type PublicKey = [u8; ELEM_LEN];

pub(crate) struct ExpandedSecret {
    scalar: Scalar,
    prefix: [u8; 57],
}

impl Drop for ExpandedSecret {
    fn drop(&mut self) {
        self.scalar.zeroize();
        self.prefix.zeroize();
    }
}

/// Expands `seed` and computes the matching public key.
/// `None` only if the public point cannot be encoded, which does not happen
/// for a well-formed scalar.
pub(crate) fn expand(seed: &Seed) -> Option<(ExpandedSecret, PublicKey)> {
    let h = digest::digest(&digest::SHAKE256_114, seed);
    let h = h.as_ref();

    let mut scalar_bytes = [0u8; SCALAR_LEN];
    scalar_bytes.copy_from_slice(&h[..SCALAR_LEN]);
    scalar_bytes[0]  &= 0xfc;
    scalar_bytes[55] |= 0x80;
    scalar_bytes[56]  = 0;
    let scalar = Scalar::from_clamped(&scalar_bytes);
    scalar_bytes.zeroize();

    let mut prefix = [0u8; 57];
    prefix.copy_from_slice(&h[SCALAR_LEN..]);

    let public = EdwardsPoint::mul_base(&scalar).compress()?;

    Some((ExpandedSecret { scalar, prefix }, public))
}

pub(crate) fn sign(
    secret: &ExpandedSecret,
    public: &PublicKey,
    dom: &[u8],
    tbs: &[u8],
) -> Result<[u8; SIGNATURE_LEN], error::Error> {
    let mut r = {
        let mut ctx = digest::Context::new(&digest::SHAKE256_114);
        ctx.update(dom);
        ctx.update(&secret.prefix);
        ctx.update(tbs);
        scalar_from_digest(&ctx.finish())
    };
    let big_r = EdwardsPoint::mul_base(&r)
        .compress()
        .ok_or(error::Error::SignPrimitiveFailed)?;

    let k = {
        let mut ctx = digest::Context::new(&digest::SHAKE256_114);
        ctx.update(dom);
        ctx.update(&big_r);
        ctx.update(public);
        ctx.update(tbs);
        scalar_from_digest(&ctx.finish())
    };
    let s = r.add(&k.mul(&secret.scalar));
    r.zeroize();

    let mut signature = [0u8; SIGNATURE_LEN];
    signature[..ELEM_LEN].copy_from_slice(&big_r);
    signature[ELEM_LEN..].copy_from_slice(&s.to_bytes());
    Ok(signature)
}

/// Checks `signature` against `public_key`, given the finished challenge
/// hash `SHAKE256(dom || R || A || tbs, 114)`.
///
/// Cofactorless, like the Ed25519 check: `[S]B - [k]A` must encode to
/// exactly the `R` bytes. `R` is never decoded on its own, so a
/// non-canonical `R` cannot match.
pub(crate) fn verify(public_key: &[u8], signature: &[u8], challenge: &digest::Digest) -> bool {
    if signature.len() != SIGNATURE_LEN {
        return false;
    }
    let (r_bytes, s_bytes) = signature.split_at(ELEM_LEN);

    let a = match <&[u8; ELEM_LEN]>::try_from(public_key) {
        Ok(bytes) => EdwardsPoint::decompress(bytes),
        Err(_) => None,
    };
    let a = match a {
        Some(a) => a,
        None => return false,
    };

    let s = match <&[u8; SCALAR_LEN]>::try_from(s_bytes) {
        Ok(bytes) => Option::<Scalar>::from(Scalar::from_canonical_bytes(bytes)),
        Err(_) => None,
    };
    let s = match s {
        Some(s) => s,
        None => return false,
    };
    let k = scalar_from_digest(challenge);

    let check = EdwardsPoint::mul_base(&s).add(&a.mul(&k).neg());
    match check.compress() {
        Some(encoded) => encoded[..].ct_eq(r_bytes).into(),
        None => false,
    }
}

fn scalar_from_digest(d: &digest::Digest) -> Scalar {
    let mut wide = [0u8; WIDE_LEN];
    wide.copy_from_slice(d.as_ref());
    Scalar::from_bytes_wide(&wide)
}
