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

//! Choosing between the portable implementation and an accelerated one.
//!
//! The accelerated Ed25519 path (`ed25519-dalek`, behind the
//! `dalek-backend` feature) only implements plain Ed25519: no domain
//! prefix, no prehash, no context and no streaming. It is picked only when a
//! request needs nothing beyond that. Everything else runs on the portable
//! code, which handles every instance. Both produce identical bytes.

use super::{ context::ContextString, instance::Instance };
use crate::ec::Curve;

/// The implementation that carries out an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Portable,
    Accelerated,
}

/// How the backend is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendPolicy {
    /// Use the accelerated backend whenever it supports the request.
    #[default]
    Auto,
    /// Always use the portable backend.
    PortableOnly,
}

/// The kind of operation a backend is asked to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Sign,
    Verify,
    StreamingVerify,
}

#[cfg_attr(not(feature = "dalek-backend"), allow(dead_code))]
struct Capabilities {
    curve: Curve,
    domain_separation: bool,
    prehash: bool,
    context: bool,
    streaming: bool,
}

#[cfg_attr(not(feature = "dalek-backend"), allow(dead_code))]
impl Capabilities {
    fn supports(&self, operation: Operation, instance: &Instance, context: &ContextString) -> bool {
        instance.curve() == self.curve
            && (self.domain_separation || !instance.domain_separation())
            && (self.prehash || !instance.prehash())
            && (self.context || context.is_empty())
            && (self.streaming || operation != Operation::StreamingVerify)
    }
}

#[cfg(feature = "dalek-backend")]
const ACCELERATED: Option<Capabilities> = Some(Capabilities {
    curve: Curve::Ed25519,
    domain_separation: false,
    prehash: false,
    context: false,
    streaming: false,
});

#[cfg(not(feature = "dalek-backend"))]
const ACCELERATED: Option<Capabilities> = None;

/// Returns the backend that will run `operation` for `instance` and
/// `context` under `policy`.
pub fn select(
    policy: BackendPolicy,
    operation: Operation,
    instance: &Instance,
    context: &ContextString,
) -> Backend {
    let backend = match (policy, &ACCELERATED) {
        (BackendPolicy::Auto, Some(caps)) if caps.supports(operation, instance, context) => {
            Backend::Accelerated
        }
        _ => Backend::Portable,
    };

    tracing::debug!(
        instance = instance.name(),
        ?operation,
        ?policy,
        ?backend,
        "selected backend"
    );
    backend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eddsa::instance::{ ED25519, ED25519CTX, ED25519PH, ED448 };

    fn ctx(instance: &Instance, bytes: &[u8]) -> ContextString {
        ContextString::new(instance, bytes).unwrap()
    }

    #[test]
    fn portable_only_is_honoured() {
        let empty = ctx(&ED25519, b"");
        for operation in [Operation::Sign, Operation::Verify, Operation::StreamingVerify] {
            assert_eq!(
                select(BackendPolicy::PortableOnly, operation, &ED25519, &empty),
                Backend::Portable
            );
        }
    }

    #[test]
    fn unsupported_flags_fall_back() {
        assert_eq!(
            select(BackendPolicy::Auto, Operation::Sign, &ED25519CTX, &ctx(&ED25519CTX, b"a")),
            Backend::Portable
        );
        assert_eq!(
            select(BackendPolicy::Auto, Operation::Verify, &ED25519PH, &ctx(&ED25519PH, b"")),
            Backend::Portable
        );
        assert_eq!(
            select(BackendPolicy::Auto, Operation::Sign, &ED448, &ctx(&ED448, b"")),
            Backend::Portable
        );
        assert_eq!(
            select(BackendPolicy::Auto, Operation::StreamingVerify, &ED25519, &ctx(&ED25519, b"")),
            Backend::Portable
        );
    }

    #[cfg(feature = "dalek-backend")]
    #[test]
    fn plain_ed25519_is_accelerated() {
        let empty = ctx(&ED25519, b"");
        assert_eq!(select(BackendPolicy::Auto, Operation::Sign, &ED25519, &empty), Backend::Accelerated);
        assert_eq!(select(BackendPolicy::Auto, Operation::Verify, &ED25519, &empty), Backend::Accelerated);
    }
}
