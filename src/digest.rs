// Copyright 2015-2019 Brian Smith.
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

//! The hash functions used by EdDSA: SHA-512 for Ed25519 and SHAKE256 for
//! Ed448.
//!
//! SHAKE256 is an extendable-output function. Each output length EdDSA needs
//! is exposed as its own fixed-length `Algorithm`, so callers never pick a
//! length themselves.
//!
//! If all the data is available in a single contiguous slice then the `digest`
//! function should be used. Otherwise, the digest can be calculated in
//! multiple steps using `Context`.

use crate::debug;
use sha2::{ Digest as _, Sha512 };
use sha2::digest::core_api::OutputSizeUser;
use sha2::digest::typenum::Unsigned;
use sha3::Shake256;
use sha3::digest::{ ExtendableOutput, Update, XofReader };


/// A context for multi-step (Init-Update-Finish) digest calculations.
///
/// # Examples
///
/// ```
/// use edsign::digest;
///
/// let one_shot = digest::digest(&digest::SHAKE256_114, b"hello, world");
///
/// let mut ctx = digest::Context::new(&digest::SHAKE256_114);
/// ctx.update(b"hello");
/// ctx.update(b", ");
/// ctx.update(b"world");
/// let multi_part = ctx.finish();
///
/// assert_eq!(&one_shot.as_ref(), &multi_part.as_ref());
/// ```
#[derive(Clone)]
pub struct Context {
    algorithm: &'static Algorithm,
    hash: HashInner,
}

impl Context {
    /// Constructs a new context.
    pub fn new(algorithm: &'static Algorithm) -> Self {
        let hash = (algorithm.init)();
        Self { algorithm, hash }
    }

    /// Updates the digest with all the data in `data`. `update` may be called
    /// zero or more times until `finish` is called. It must not be called
    /// after `finish` has been called.
    pub fn update(&mut self, data: &[u8]) {
        (self.algorithm.update)(&mut self.hash, data);
    }

    /// Finalizes the digest calculation and returns the digest value. `finish`
    /// consumes the context so it cannot be (mis-)used after `finish` has been
    /// called.
    pub fn finish(self) -> Digest {
        let mut value = [0u8; MAX_OUTPUT_LEN];
        (self.algorithm.finish)(self.hash, &mut value[..self.algorithm.output_len]);
        Digest {
            value,
            algorithm: self.algorithm
        }
    }
}

/// Returns the digest of `data` using the given digest algorithm.
pub fn digest(algorithm: &'static Algorithm, data: &[u8]) -> Digest {
    let mut ctx = Context::new(algorithm);
    ctx.update(data);
    ctx.finish()
}

/// A calculated digest value.
///
/// Use `as_ref` to get the value as a `&[u8]`.
#[derive(Clone, Copy)]
pub struct Digest {
    value: [u8; MAX_OUTPUT_LEN],
    algorithm: &'static Algorithm,
}

impl Digest {
    /// The algorithm that was used to calculate the digest value.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.algorithm
    }
}

impl AsRef<[u8]> for Digest {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.value[..self.algorithm.output_len]
    }
}

impl core::fmt::Debug for Digest {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(fmt, "{:?}:", self.algorithm)?;
        debug::write_hex_bytes(fmt, self.as_ref())
    }
}

#[derive(Clone)]
enum HashInner {
    Sha512(Sha512),
    Shake256(Shake256),
}

/// A digest algorithm.
pub struct Algorithm {
    /// The length of a finalized digest.
    pub output_len: usize,

    init: fn() -> HashInner,
    update: fn(hash: &mut HashInner, data: &[u8]),
    finish: fn(hash: HashInner, out: &mut [u8]),

    id: AlgorithmID,
}

#[derive(Debug, Eq, PartialEq)]
enum AlgorithmID {
    SHA512,
    SHAKE256_64,
    SHAKE256_114,
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Algorithm {}

derive_debug_via_id!(Algorithm);

/// SHA-512 as specified in [FIPS 180-4]. Used by every Ed25519 instance, and
/// as the Ed25519ph prehash.
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA512: Algorithm = Algorithm {
    output_len: <<Sha512 as OutputSizeUser>::OutputSize>::USIZE,
    init: sha512_init,
    update: sha512_update,
    finish: sha512_finish,
    id: AlgorithmID::SHA512,
};

fn sha512_init() -> HashInner {
    HashInner::Sha512(Sha512::new())
}

fn sha512_update(hasher: &mut HashInner, data: &[u8]) {
    let hasher = match hasher {
        HashInner::Sha512(hasher) => hasher,
        _ => unreachable!()
    };

    sha2::Digest::update(hasher, data);
}

fn sha512_finish(hasher: HashInner, out: &mut [u8]) {
    let hasher = match hasher {
        HashInner::Sha512(hasher) => hasher,
        _ => unreachable!()
    };

    out.copy_from_slice(&hasher.finalize());
}

/// SHAKE256 as specified in [FIPS 202], read out to 64 bytes. This is the
/// Ed448ph prehash.
///
/// [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf
pub static SHAKE256_64: Algorithm = Algorithm {
    output_len: 64,
    init: shake256_init,
    update: shake256_update,
    finish: shake256_finish,
    id: AlgorithmID::SHAKE256_64,
};

/// SHAKE256 as specified in [FIPS 202], read out to 114 bytes. Ed448 uses
/// this for key expansion, nonce derivation and the challenge.
///
/// [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf
pub static SHAKE256_114: Algorithm = Algorithm {
    output_len: 114,
    init: shake256_init,
    update: shake256_update,
    finish: shake256_finish,
    id: AlgorithmID::SHAKE256_114,
};

fn shake256_init() -> HashInner {
    HashInner::Shake256(Shake256::default())
}

fn shake256_update(hasher: &mut HashInner, data: &[u8]) {
    let hasher = match hasher {
        HashInner::Shake256(hasher) => hasher,
        _ => unreachable!()
    };

    Update::update(hasher, data);
}

// The output length is chosen by the caller through the length of `out`.
fn shake256_finish(hasher: HashInner, out: &mut [u8]) {
    let hasher = match hasher {
        HashInner::Shake256(hasher) => hasher,
        _ => unreachable!()
    };

    hasher.finalize_xof().read(out);
}

/// The maximum output length (`Algorithm::output_len`) of all the algorithms
/// in this module.
pub const MAX_OUTPUT_LEN: usize = 114;

/// The length of the output of SHA-512, in bytes.
pub const SHA512_OUTPUT_LEN: usize = <<Sha512 as OutputSizeUser>::OutputSize>::USIZE;

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use std::format;

    #[test]
    fn sha512_abc() {
        let d = digest(&SHA512, b"abc");
        assert_eq!(d.as_ref().len(), SHA512_OUTPUT_LEN);
        assert_eq!(
            d.as_ref(),
            &hex!(
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
                "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
            )[..]
        );
    }

    #[test]
    fn shake256_lengths_share_a_prefix() {
        let short = digest(&SHAKE256_64, b"");
        let long = digest(&SHAKE256_114, b"");
        assert_eq!(short.as_ref().len(), 64);
        assert_eq!(long.as_ref().len(), 114);
        assert_eq!(short.as_ref(), &long.as_ref()[..64]);
        assert_eq!(
            &short.as_ref()[..32],
            &hex!("46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f")[..]
        );
    }

    #[test]
    fn multi_part_matches_one_shot() {
        let mut ctx = Context::new(&SHA512);
        for chunk in b"the quick brown fox".chunks(3) {
            ctx.update(chunk);
        }
        assert_eq!(ctx.finish().as_ref(), digest(&SHA512, b"the quick brown fox").as_ref());
    }

    #[test]
    fn algorithms_compare_by_id() {
        assert_eq!(SHAKE256_64, SHAKE256_64);
        assert_ne!(SHAKE256_64, SHAKE256_114);
        assert_eq!(format!("{:?}", SHA512), "SHA512");
    }
}
