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

//! Deterministic Ed25519 signing with an optional dom2 prefix.

use super::{ scalar_from_digest, PublicKey, Seed, ELEM_LEN, SIGNATURE_LEN };
use crate::digest;
use curve25519_dalek::{ constants, scalar::Scalar };
use zeroize::Zeroize;

/// The expanded form of a seed: the clamped secret scalar and the nonce
/// prefix, as in RFC 8032 section 5.1.5.
pub(crate) struct ExpandedSecret {
    scalar: Scalar,
    prefix: [u8; 32],
}

impl Drop for ExpandedSecret {
    fn drop(&mut self) {
        self.scalar.zeroize();
        self.prefix.zeroize();
    }
}

/// Expands `seed` and computes the matching public key.
pub(crate) fn expand(seed: &Seed) -> (ExpandedSecret, PublicKey) {
    let h = digest::digest(&digest::SHA512, seed);
    let h = h.as_ref();

    let mut scalar_bytes = [0u8; 32];
    scalar_bytes.copy_from_slice(&h[..32]);
    scalar_bytes[0]  &= 248;
    scalar_bytes[31] &=  63;
    scalar_bytes[31] |=  64;

    // Clamped, not reduced. Scalar multiplication accepts the full 255 bits.
    let scalar = Scalar::from_bits(scalar_bytes);
    scalar_bytes.zeroize();

    let mut prefix = [0u8; 32];
    prefix.copy_from_slice(&h[32..]);

    let public = (&scalar * &constants::ED25519_BASEPOINT_TABLE).compress().to_bytes();

    (ExpandedSecret { scalar, prefix }, public)
}

/// Signs `tbs` with `dom` hashed in front of both the nonce input and the
/// challenge input. An empty `dom` gives plain Ed25519.
pub(crate) fn sign(
    secret: &ExpandedSecret,
    public: &PublicKey,
    dom: &[u8],
    tbs: &[u8],
) -> [u8; SIGNATURE_LEN] {
    let mut r = {
        let mut ctx = digest::Context::new(&digest::SHA512);
        ctx.update(dom);
        ctx.update(&secret.prefix);
        ctx.update(tbs);
        scalar_from_digest(&ctx.finish())
    };
    let big_r = (&r * &constants::ED25519_BASEPOINT_TABLE).compress();

    let k = {
        let mut ctx = digest::Context::new(&digest::SHA512);
        ctx.update(dom);
        ctx.update(big_r.as_bytes());
        ctx.update(public);
        ctx.update(tbs);
        scalar_from_digest(&ctx.finish())
    };
    let s = &(&k * &secret.scalar) + &r;
    r.zeroize();

    let mut signature = [0u8; SIGNATURE_LEN];
    signature[..ELEM_LEN].copy_from_slice(big_r.as_bytes());
    signature[ELEM_LEN..].copy_from_slice(s.as_bytes());
    signature
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn rfc8032_test1() {
        let seed = hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
        let (secret, public) = expand(&seed);
        assert_eq!(
            public,
            hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a")
        );
        assert_eq!(
            sign(&secret, &public, &[], &[])[..],
            hex!(
                "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155"
                "5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
            )[..]
        );
    }
}
