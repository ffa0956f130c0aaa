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

//! GF(p) for p = 2^448 - 2^224 - 1.

use crypto_bigint::{ impl_modulus, modular::constant_mod::Residue, Encoding, U448 };
use subtle::{ Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption };

const MODULUS_HEX: &str =
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

impl_modulus!(FieldModulus, U448, MODULUS_HEX);

const MODULUS: U448 = U448::from_be_hex(MODULUS_HEX);

// (p - 3) / 4, the exponent of the combined square root and inversion.
const SQRT_RATIO_EXP: U448 = U448::from_be_hex(
    "3fffffffffffffffffffffffffffffffffffffffffffffffffffffffbfffffffffffffffffffffffffffffffffffffffffffffffffffffff",
);

pub(super) const FIELD_LEN: usize = 56;

#[derive(Clone, Copy)]
pub(super) struct FieldElement(Residue<FieldModulus, { U448::LIMBS }>);

impl FieldElement {
    pub const ZERO: Self = Self(Residue::ZERO);
    pub const ONE: Self = Self(Residue::ONE);

    /// The curve constant d = -39081.
    pub const D: Self = Self(Residue::new(&U448::from_u64(39081)).neg());

    pub const fn from_be_hex(hex: &str) -> Self {
        Self(Residue::new(&U448::from_be_hex(hex)))
    }

    /// Decodes a little-endian element, rejecting values >= p.
    pub fn from_bytes(bytes: &[u8; FIELD_LEN]) -> CtOption<Self> {
        let n = U448::from_le_slice(bytes);
        CtOption::new(Self(Residue::new(&n)), n.ct_lt(&MODULUS))
    }

    pub fn to_bytes(&self) -> [u8; FIELD_LEN] {
        self.0.retrieve().to_le_bytes()
    }

    /// The least significant bit of the canonical encoding, which is the sign
    /// of x in a point encoding.
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0.add(&rhs.0))
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        Self(self.0.sub(&rhs.0))
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        Self(self.0.mul(&rhs.0))
    }

    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    pub fn neg(&self) -> Self {
        Self(self.0.neg())
    }

    pub fn invert(&self) -> CtOption<Self> {
        let (inv, is_some) = self.0.invert();
        CtOption::new(Self(inv), is_some.into())
    }

    /// Returns sqrt(u / v) if it exists, per RFC 8032 section 5.2.3:
    /// x = u^3 * v * (u^5 * v^3)^((p - 3) / 4), accepted when v * x^2 == u.
    pub fn sqrt_ratio(u: &Self, v: &Self) -> CtOption<Self> {
        let u2 = u.square();
        let u3 = u2.mul(u);
        let u5 = u3.mul(&u2);
        let v3 = v.square().mul(v);
        let t = Self(u5.mul(&v3).0.pow(&SQRT_RATIO_EXP));
        let x = u3.mul(v).mul(&t);

        let is_root = v.mul(&x.square()).ct_eq(u);
        CtOption::new(x, is_root)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Residue::conditional_select(&a.0, &b.0, choice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d_encoding() {
        let mut expected = [0xffu8; FIELD_LEN];
        expected[0] = 0x56;
        expected[1] = 0x67;
        expected[28] = 0xfe;
        assert_eq!(FieldElement::D.to_bytes(), expected);
    }

    #[test]
    fn rejects_unreduced() {
        let mut p = [0xffu8; FIELD_LEN];
        p[28] = 0xfe;
        assert!(bool::from(FieldElement::from_bytes(&p).is_none()));

        p[0] = 0xfe;
        let below = FieldElement::from_bytes(&p).unwrap();
        assert_eq!(below.to_bytes(), p);
    }

    #[test]
    fn inverse() {
        let x = FieldElement::from_be_hex(
            "0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001234",
        );
        let inv = x.invert().unwrap();
        assert!(bool::from(x.mul(&inv).ct_eq(&FieldElement::ONE)));
        assert!(bool::from(FieldElement::ZERO.invert().is_none()));
    }

    #[test]
    fn sqrt_ratio_of_square() {
        let x = FieldElement::from_be_hex(
            "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000abcde",
        );
        let v = FieldElement::from_be_hex(
            "0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000007",
        );
        let u = x.square().mul(&v);
        let root = FieldElement::sqrt_ratio(&u, &v).unwrap();
        assert!(bool::from(root.ct_eq(&x) | root.ct_eq(&x.neg())));
    }
}
