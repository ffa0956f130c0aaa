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

//! Integers modulo the edwards448 group order
//! L = 2^446 - 13818066809895115352007386748515426880336692474882178609894547503885.

use crypto_bigint::{ impl_modulus, modular::constant_mod::Residue, Encoding, U448 };
use subtle::{ ConstantTimeEq, ConstantTimeLess, CtOption };
use zeroize::Zeroize;

const ORDER_HEX: &str =
    "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3";

impl_modulus!(OrderModulus, U448, ORDER_HEX);

const ORDER: U448 = U448::from_be_hex(ORDER_HEX);

type Inner = Residue<OrderModulus, { U448::LIMBS }>;

// 2^448 mod L and 2^896 mod L, for folding a 114-byte hash.
const R448: Inner = Residue::new(&U448::from_be_hex(
    "000000000000000000000000000000000000000000000000000000020cd77058eec492d944a725bf7a4cf635c8e9c2ab721cf5b5529eec34",
));
const R896: Inner = Residue::new(&U448::from_be_hex(
    "3402a939f823b7292052bcb7e4d070af1a9cc14ba3c47c44ae17cf725ee4d8380d66de2388ea18597af32c4bc1b195d9e3539257049b9b60",
));

/// Length of an encoded scalar. The top byte is always zero.
pub(super) const SCALAR_LEN: usize = 57;

/// Length of the hash output reduced into a scalar.
pub(super) const WIDE_LEN: usize = 114;

const LIMB_BYTES: usize = 56;

#[derive(Clone, Copy)]
pub(super) struct Scalar(Inner);

impl Scalar {
    /// Reduces a 114-byte little-endian integer modulo L.
    pub fn from_bytes_wide(bytes: &[u8; WIDE_LEN]) -> Self {
        let lo = U448::from_le_slice(&bytes[..LIMB_BYTES]);
        let mid = U448::from_le_slice(&bytes[LIMB_BYTES..2 * LIMB_BYTES]);
        let mut top = [0u8; LIMB_BYTES];
        top[..WIDE_LEN - 2 * LIMB_BYTES].copy_from_slice(&bytes[2 * LIMB_BYTES..]);
        let hi = U448::from_le_slice(&top);
        top.zeroize();

        let lo = Inner::new(&lo);
        let mid = Inner::new(&mid).mul(&R448);
        let hi = Inner::new(&hi).mul(&R896);
        Self(lo.add(&mid).add(&hi))
    }

    /// Reduces the first 56 bytes of a clamped secret scalar. The clamping
    /// has already cleared the 57th byte.
    pub fn from_clamped(bytes: &[u8; SCALAR_LEN]) -> Self {
        Self(Inner::new(&U448::from_le_slice(&bytes[..LIMB_BYTES])))
    }

    /// Decodes the S half of a signature, rejecting anything >= L.
    pub fn from_canonical_bytes(bytes: &[u8; SCALAR_LEN]) -> CtOption<Self> {
        let n = U448::from_le_slice(&bytes[..LIMB_BYTES]);
        let is_canonical = n.ct_lt(&ORDER) & bytes[LIMB_BYTES].ct_eq(&0);
        CtOption::new(Self(Inner::new(&n)), is_canonical)
    }

    pub fn to_bytes(&self) -> [u8; SCALAR_LEN] {
        let mut out = [0u8; SCALAR_LEN];
        out[..LIMB_BYTES].copy_from_slice(&self.0.retrieve().to_le_bytes());
        out
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0.add(&rhs.0))
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        Self(self.0.mul(&rhs.0))
    }

    /// The canonical value without the zero padding byte. The ladder in
    /// `point` walks its bits.
    pub fn to_unpadded_bytes(&self) -> [u8; LIMB_BYTES] {
        self.0.retrieve().to_le_bytes()
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0 = Inner::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_reduction_of_order_multiple() {
        // L * 2^448 reduces to zero.
        let mut wide = [0u8; WIDE_LEN];
        wide[LIMB_BYTES..2 * LIMB_BYTES].copy_from_slice(&ORDER.to_le_bytes());
        assert_eq!(Scalar::from_bytes_wide(&wide).to_bytes(), [0u8; SCALAR_LEN]);
    }

    #[test]
    fn wide_reduction_small_value() {
        let mut wide = [0u8; WIDE_LEN];
        wide[0] = 5;
        let mut expected = [0u8; SCALAR_LEN];
        expected[0] = 5;
        assert_eq!(Scalar::from_bytes_wide(&wide).to_bytes(), expected);
    }

    #[test]
    fn canonical_bounds() {
        let mut bytes = [0u8; SCALAR_LEN];
        bytes[..LIMB_BYTES].copy_from_slice(&ORDER.to_le_bytes());
        assert!(bool::from(Scalar::from_canonical_bytes(&bytes).is_none()));

        bytes[0] -= 1;
        assert!(bool::from(Scalar::from_canonical_bytes(&bytes).is_some()));

        let mut padded = [0u8; SCALAR_LEN];
        padded[LIMB_BYTES] = 1;
        assert!(bool::from(Scalar::from_canonical_bytes(&padded).is_none()));
    }
}
