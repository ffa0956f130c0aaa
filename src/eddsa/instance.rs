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

//! The five EdDSA instances of RFC 8032 and the lookup from instance names.

use crate::{ ec::Curve, error::Error };

/// An EdDSA instance: a curve plus the flags that shape the hash inputs.
pub struct Instance {
    name: &'static str,
    curve: Curve,
    prehash: bool,
    context_required: bool,
    domain_separation: bool,
    id: InstanceID,
}

#[derive(Debug, Eq, PartialEq)]
enum InstanceID {
    Ed25519,
    Ed25519ctx,
    Ed25519ph,
    Ed448,
    Ed448ph,
}

impl Instance {
    /// The canonical name, e.g. `"Ed25519ph"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Whether the message is hashed before signing (the `ph` variants).
    #[inline]
    pub fn prehash(&self) -> bool {
        self.prehash
    }

    /// Whether a non-empty context string is mandatory. Only Ed25519ctx.
    #[inline]
    pub fn context_required(&self) -> bool {
        self.context_required
    }

    /// Whether a dom2/dom4 prefix goes in front of every hash input. Only
    /// plain Ed25519 goes without.
    #[inline]
    pub fn domain_separation(&self) -> bool {
        self.domain_separation
    }

    /// Whether a non-empty context string may be used at all.
    #[inline]
    pub fn accepts_context(&self) -> bool {
        self.domain_separation || self.prehash
    }

    /// Length of this instance's signatures.
    #[inline]
    pub fn signature_len(&self) -> usize {
        self.curve.signature_len()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Instance {}

derive_debug_via_id!(Instance);

/// Original Ed25519, no prefix and no context.
pub static ED25519: Instance = Instance {
    name: "Ed25519",
    curve: Curve::Ed25519,
    prehash: false,
    context_required: false,
    domain_separation: false,
    id: InstanceID::Ed25519,
};

/// Ed25519 with a mandatory context string.
pub static ED25519CTX: Instance = Instance {
    name: "Ed25519ctx",
    curve: Curve::Ed25519,
    prehash: false,
    context_required: true,
    domain_separation: true,
    id: InstanceID::Ed25519ctx,
};

/// Ed25519 over the SHA-512 hash of the message.
pub static ED25519PH: Instance = Instance {
    name: "Ed25519ph",
    curve: Curve::Ed25519,
    prehash: true,
    context_required: false,
    domain_separation: true,
    id: InstanceID::Ed25519ph,
};

/// Ed448. dom4 is always applied, with or without a context.
pub static ED448: Instance = Instance {
    name: "Ed448",
    curve: Curve::Ed448,
    prehash: false,
    context_required: false,
    domain_separation: true,
    id: InstanceID::Ed448,
};

/// Ed448 over the 64-byte SHAKE256 hash of the message.
pub static ED448PH: Instance = Instance {
    name: "Ed448ph",
    curve: Curve::Ed448,
    prehash: true,
    context_required: false,
    domain_separation: true,
    id: InstanceID::Ed448ph,
};

/// Every instance, in RFC 8032 order.
pub static ALL: [&Instance; 5] = [&ED25519, &ED25519CTX, &ED25519PH, &ED448, &ED448PH];

/// Looks up `name` (ASCII case-insensitive) and checks that the instance
/// can be used with a key on `curve`.
pub fn resolve(name: &str, curve: Curve) -> Result<&'static Instance, Error> {
    let instance = ALL
        .iter()
        .copied()
        .find(|instance| instance.name.eq_ignore_ascii_case(name))
        .ok_or(Error::UnknownInstance)?;

    if instance.curve != curve {
        return Err(Error::CurveMismatch);
    }

    Ok(instance)
}

/// The instance used when none is named: plain Ed25519 or Ed448.
pub fn base(curve: Curve) -> &'static Instance {
    match curve {
        Curve::Ed25519 => &ED25519,
        Curve::Ed448 => &ED448,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_name() {
        for instance in ALL.iter() {
            assert_eq!(resolve(instance.name(), instance.curve()), Ok(*instance));
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(resolve("ED25519CTX", Curve::Ed25519), Ok(&ED25519CTX));
        assert_eq!(resolve("ed448PH", Curve::Ed448), Ok(&ED448PH));
    }

    #[test]
    fn unknown_name() {
        assert_eq!(resolve("Ed25519x", Curve::Ed25519), Err(Error::UnknownInstance));
        assert_eq!(resolve("", Curve::Ed448), Err(Error::UnknownInstance));
    }

    #[test]
    fn curve_mismatch() {
        assert_eq!(resolve("Ed448", Curve::Ed25519), Err(Error::CurveMismatch));
        assert_eq!(resolve("Ed25519ph", Curve::Ed448), Err(Error::CurveMismatch));
    }

    #[test]
    fn base_instances_have_no_flags() {
        for curve in [Curve::Ed25519, Curve::Ed448] {
            let instance = base(curve);
            assert_eq!(instance.curve(), curve);
            assert!(!instance.prehash());
            assert!(!instance.context_required());
        }
    }

    #[test]
    fn context_acceptance() {
        assert!(!ED25519.accepts_context());
        assert!(ED25519CTX.accepts_context());
        assert!(ED25519PH.accepts_context());
        assert!(ED448.accepts_context());
        assert!(ED448PH.accepts_context());
    }
}
