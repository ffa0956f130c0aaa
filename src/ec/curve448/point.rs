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

//! edwards448 points in projective coordinates (X : Y : Z), x = X/Z, y = Y/Z.

use super::field::{ FieldElement, FIELD_LEN };
use super::scalar::Scalar;
use subtle::{ Choice, ConditionallySelectable, ConstantTimeEq };

/// Length of an encoded point: 56 bytes of y and one byte holding the sign
/// of x in its top bit.
pub(super) const POINT_LEN: usize = 57;

const SCALAR_BITS: usize = 448;

#[derive(Clone, Copy)]
pub(super) struct EdwardsPoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl EdwardsPoint {
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    /// The generator B from RFC 8032 section 5.2.
    pub const BASEPOINT: Self = Self {
        x: FieldElement::from_be_hex(
            "4f1970c66bed0ded221d15a622bf36da9e146570470f1767ea6de324a3d3a46412ae1af72ab66511433b80e18b00938e2626a82bc70cc05e",
        ),
        y: FieldElement::from_be_hex(
            "693f46716eb6bc248876203756c9c7624bea73736ca3984087789c1e05a0c2d73ad3ff1ce67c39c4fdbd132c4ed7c8ad9808795bf230fa14",
        ),
        z: FieldElement::ONE,
    };

    /// Complete addition, RFC 8032 section 5.2.4. Also valid for P + P.
    pub fn add(&self, other: &Self) -> Self {
        let a = self.z.mul(&other.z);
        let b = a.square();
        let c = self.x.mul(&other.x);
        let d = self.y.mul(&other.y);
        let e = FieldElement::D.mul(&c).mul(&d);
        let f = b.sub(&e);
        let g = b.add(&e);
        let h = self.x.add(&self.y).mul(&other.x.add(&other.y));

        Self {
            x: a.mul(&f).mul(&h.sub(&c).sub(&d)),
            y: a.mul(&g).mul(&d.sub(&c)),
            z: f.mul(&g),
        }
    }

    pub fn double(&self) -> Self {
        self.add(self)
    }

    pub fn neg(&self) -> Self {
        Self { x: self.x.neg(), y: self.y, z: self.z }
    }

    /// `[k]P` by a fixed-length double-and-add-always ladder. The sequence
    /// of operations does not depend on `k`.
    pub fn mul(&self, k: &Scalar) -> Self {
        let bytes = k.to_unpadded_bytes();
        let mut acc = Self::IDENTITY;
        for i in (0..SCALAR_BITS).rev() {
            acc = acc.double();
            let sum = acc.add(self);
            let bit = Choice::from((bytes[i >> 3] >> (i & 7)) & 1);
            acc = Self::conditional_select(&acc, &sum, bit);
        }
        acc
    }

    pub fn mul_base(k: &Scalar) -> Self {
        Self::BASEPOINT.mul(k)
    }

    /// Encodes the point. `None` only for Z = 0, which no point reachable
    /// from valid inputs has.
    pub fn compress(&self) -> Option<[u8; POINT_LEN]> {
        let z_inv = Option::<FieldElement>::from(self.z.invert())?;
        let x = self.x.mul(&z_inv);
        let y = self.y.mul(&z_inv);

        let mut out = [0u8; POINT_LEN];
        out[..FIELD_LEN].copy_from_slice(&y.to_bytes());
        out[FIELD_LEN] = x.is_negative().unwrap_u8() << 7;
        Some(out)
    }

    /// Decodes a point per RFC 8032 section 5.2.3. Only ever applied to
    /// public values, so early returns are fine.
    pub fn decompress(bytes: &[u8; POINT_LEN]) -> Option<Self> {
        if bytes[FIELD_LEN] & 0x7f != 0 {
            return None;
        }
        let x_sign = Choice::from(bytes[FIELD_LEN] >> 7);

        let mut y_bytes = [0u8; FIELD_LEN];
        y_bytes.copy_from_slice(&bytes[..FIELD_LEN]);
        let y = Option::<FieldElement>::from(FieldElement::from_bytes(&y_bytes))?;

        let yy = y.square();
        let u = yy.sub(&FieldElement::ONE);
        let v = FieldElement::D.mul(&yy).sub(&FieldElement::ONE);
        let x = Option::<FieldElement>::from(FieldElement::sqrt_ratio(&u, &v))?;

        if bool::from(x.is_zero() & x_sign) {
            return None;
        }
        let flip = x.is_negative() ^ x_sign;
        let x = FieldElement::conditional_select(&x, &x.neg(), flip);

        Some(Self { x, y, z: FieldElement::ONE })
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    // X1/Z1 == X2/Z2 and Y1/Z1 == Y2/Z2, without inverting.
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z))
            & self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basepoint_round_trips() {
        let encoded = EdwardsPoint::BASEPOINT.compress().unwrap();
        let decoded = EdwardsPoint::decompress(&encoded).unwrap();
        assert!(bool::from(decoded.ct_eq(&EdwardsPoint::BASEPOINT)));
    }

    #[test]
    fn identity_is_neutral() {
        let b = EdwardsPoint::BASEPOINT;
        assert!(bool::from(b.add(&EdwardsPoint::IDENTITY).ct_eq(&b)));
        assert!(bool::from(b.add(&b.neg()).ct_eq(&EdwardsPoint::IDENTITY)));
    }

    #[test]
    fn small_multiples() {
        let mut wide = [0u8; super::super::scalar::WIDE_LEN];
        wide[0] = 3;
        let three = Scalar::from_bytes_wide(&wide);
        let b = EdwardsPoint::BASEPOINT;
        let expected = b.double().add(&b);
        assert!(bool::from(EdwardsPoint::mul_base(&three).ct_eq(&expected)));
    }

    #[test]
    fn rejects_non_point() {
        // y = 2 has no matching x on edwards448.
        let mut bytes = [0u8; POINT_LEN];
        bytes[0] = 2;
        assert!(EdwardsPoint::decompress(&bytes).is_none());
    }
}
