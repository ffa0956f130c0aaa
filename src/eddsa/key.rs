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

//! EdDSA keys: a public point plus an optional private seed.

use crate::{
    ec::{ curve25519::ed25519, curve448::ed448, Curve, MAX_PUBLIC_KEY_LEN },
    error::KeyRejected,
};
use zeroize::Zeroizing;

/// A key for signing and verifying.
///
/// A key built from a seed can sign and verify. A key built from a public key
/// alone can only verify; signing with it fails with `NoPrivateKey`.
pub struct Key {
    public_key: PublicKey,
    private_key: Option<PrivateKey>,
}

derive_debug_via_field!(Key, stringify!(Key), public_key);

pub(crate) enum PrivateKey {
    Ed25519 {
        // The accelerated path signs from the seed.
        seed: Zeroizing<ed25519::Seed>,
        secret: ed25519::signing::ExpandedSecret,
    },
    Ed448 {
        secret: ed448::ExpandedSecret,
    },
}

impl Key {
    /// Constructs a key from the private key seed `seed` and its public key
    /// `public_key`.
    ///
    /// The private and public keys will be verified to be consistent with each
    /// other. This helps avoid misuse of the key (e.g. accidentally swapping
    /// the private key and public key, or using the wrong private key for the
    /// public key). This also detects any corruption of the public or private
    /// key.
    pub fn from_seed_and_public_key(
        curve: Curve,
        seed: &[u8],
        public_key: &[u8],
    ) -> Result<Self, KeyRejected> {
        let key = Self::from_seed(curve, seed)?;

        // This implicitly verifies that `public_key` is the right length.
        if public_key != key.public_key.as_ref() {
            let err = if public_key.len() != curve.public_key_len() {
                KeyRejected::invalid_encoding()
            } else {
                KeyRejected::inconsistent_components()
            };
            return Err(err);
        }

        Ok(key)
    }

    /// Constructs a key from the private key seed `seed`, 32 bytes for
    /// Ed25519 and 57 bytes for Ed448.
    ///
    /// Since the public key is not given, the public key will be computed from
    /// the private key. It is not possible to detect misuse or corruption of
    /// the private key since the public key isn't given as input.
    pub fn from_seed(curve: Curve, seed: &[u8]) -> Result<Self, KeyRejected> {
        if seed.len() != curve.seed_len() {
            return Err(KeyRejected::wrong_length());
        }

        let (public_key, private_key) = match curve {
            Curve::Ed25519 => {
                let mut bytes = Zeroizing::new([0u8; ed25519::SEED_LEN]);
                bytes.copy_from_slice(seed);
                let (secret, public) = ed25519::signing::expand(&bytes);
                (
                    PublicKey::new(curve, &public),
                    PrivateKey::Ed25519 { seed: bytes, secret },
                )
            }
            Curve::Ed448 => {
                let mut bytes = Zeroizing::new([0u8; ed448::SEED_LEN]);
                bytes.copy_from_slice(seed);
                let (secret, public) = ed448::expand(&bytes)
                    .ok_or_else(KeyRejected::invalid_encoding)?;
                (PublicKey::new(curve, &public), PrivateKey::Ed448 { secret })
            }
        };

        Ok(Self { public_key, private_key: Some(private_key) })
    }

    /// Constructs a verification-only key from an encoded public key.
    ///
    /// Only the length is checked here. A public key that does not decode to
    /// a curve point makes every verification return `false`.
    pub fn from_public_key(curve: Curve, public_key: &[u8]) -> Result<Self, KeyRejected> {
        if public_key.len() != curve.public_key_len() {
            return Err(KeyRejected::invalid_encoding());
        }
        Ok(Self { public_key: PublicKey::new(curve, public_key), private_key: None })
    }

    #[inline]
    pub fn curve(&self) -> Curve {
        self.public_key.curve
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    #[inline]
    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    pub(crate) fn private_key(&self) -> Option<&PrivateKey> {
        self.private_key.as_ref()
    }
}

/// An encoded public key: 32 bytes for Ed25519, 57 bytes for Ed448.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    curve: Curve,
    bytes: [u8; MAX_PUBLIC_KEY_LEN],
}

impl PublicKey {
    fn new(curve: Curve, encoded: &[u8]) -> Self {
        let mut bytes = [0u8; MAX_PUBLIC_KEY_LEN];
        bytes[..encoded.len()].copy_from_slice(encoded);
        Self { curve, bytes }
    }

    #[inline]
    pub fn curve(&self) -> Curve {
        self.curve
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.curve.public_key_len()]
    }
}

derive_debug_self_as_ref_hex_bytes!(PublicKey);

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use std::format;

    const SEED: [u8; 32] = hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    const PUBLIC: [u8; 32] = hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");

    #[test]
    fn derives_public_key() {
        let key = Key::from_seed(Curve::Ed25519, &SEED).unwrap();
        assert_eq!(key.public_key().as_ref(), &PUBLIC[..]);
        assert!(key.has_private_key());
    }

    #[test]
    fn consistency_check() {
        assert!(Key::from_seed_and_public_key(Curve::Ed25519, &SEED, &PUBLIC).is_ok());

        let mut wrong = PUBLIC;
        wrong[0] ^= 1;
        assert_eq!(
            Key::from_seed_and_public_key(Curve::Ed25519, &SEED, &wrong).unwrap_err(),
            KeyRejected::inconsistent_components()
        );
        assert_eq!(
            Key::from_seed_and_public_key(Curve::Ed25519, &SEED, &PUBLIC[..31]).unwrap_err(),
            KeyRejected::invalid_encoding()
        );
    }

    #[test]
    fn lengths_are_checked() {
        assert_eq!(
            Key::from_seed(Curve::Ed448, &SEED).unwrap_err(),
            KeyRejected::wrong_length()
        );
        assert_eq!(
            Key::from_public_key(Curve::Ed448, &PUBLIC).unwrap_err(),
            KeyRejected::invalid_encoding()
        );
        let key = Key::from_public_key(Curve::Ed25519, &PUBLIC).unwrap();
        assert!(!key.has_private_key());
    }

    #[test]
    fn debug_shows_only_the_public_key() {
        let key = Key::from_seed(Curve::Ed25519, &SEED).unwrap();
        let text = format!("{:?}", key);
        assert!(text.contains("d75a9801"));
        assert!(!text.contains("9d61b19d"));
    }
}
