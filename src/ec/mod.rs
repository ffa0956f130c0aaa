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

//! The two Edwards curves EdDSA is defined over.

use crate::digest;

pub(crate) mod curve25519;
pub(crate) mod curve448;

/// A curve family. Every key and every instance belongs to exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    /// edwards25519, used by Ed25519, Ed25519ctx and Ed25519ph.
    Ed25519,
    /// edwards448, used by Ed448 and Ed448ph.
    Ed448,
}

impl Curve {
    /// Length of a private key seed, in bytes.
    pub const fn seed_len(self) -> usize {
        match self {
            Curve::Ed25519 => curve25519::ed25519::SEED_LEN,
            Curve::Ed448 => curve448::ed448::SEED_LEN,
        }
    }

    /// Length of an encoded public key, in bytes.
    pub const fn public_key_len(self) -> usize {
        match self {
            Curve::Ed25519 => curve25519::ed25519::ELEM_LEN,
            Curve::Ed448 => curve448::ed448::ELEM_LEN,
        }
    }

    /// Length of a signature, in bytes.
    pub const fn signature_len(self) -> usize {
        match self {
            Curve::Ed25519 => curve25519::ed25519::SIGNATURE_LEN,
            Curve::Ed448 => curve448::ed448::SIGNATURE_LEN,
        }
    }

    /// The hash used for key expansion, nonces and challenges.
    pub fn hash_algorithm(self) -> &'static digest::Algorithm {
        match self {
            Curve::Ed25519 => &digest::SHA512,
            Curve::Ed448 => &digest::SHAKE256_114,
        }
    }

    /// The hash applied to the message by the prehash instances.
    pub fn prehash_algorithm(self) -> &'static digest::Algorithm {
        match self {
            Curve::Ed25519 => &digest::SHA512,
            Curve::Ed448 => &digest::SHAKE256_64,
        }
    }
}

/// Length of the prehash output for both curves.
pub const PREHASH_LEN: usize = 64;

/// The largest seed length of any curve.
pub const MAX_SEED_LEN: usize = curve448::ed448::SEED_LEN;

/// The largest public key length of any curve.
pub const MAX_PUBLIC_KEY_LEN: usize = curve448::ed448::ELEM_LEN;

/// The largest signature length of any curve.
pub const MAX_SIGNATURE_LEN: usize = curve448::ed448::SIGNATURE_LEN;
