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

//! EdDSA verification, one-shot and streaming.
//!
//! A signature that does not verify is reported as `Ok(false)`. Errors are
//! reserved for misuse: wrong signature length, a key on the wrong curve, or
//! a streaming verifier driven out of order.

use super::{
    backend::{ self, Backend, Operation },
    check_prehash,
    key::Key,
    params::Params,
    prehash,
};
use crate::{
    digest,
    ec::{ curve25519::ed25519, curve448::ed448, Curve, MAX_SIGNATURE_LEN },
    error::Error,
};

/// Verifies `signature` over `msg` with the public half of `key`.
#[tracing::instrument(level = "debug", skip_all, fields(instance = params.instance().name()))]
pub fn verify(key: &Key, params: &Params, msg: &[u8], signature: &[u8]) -> Result<bool, Error> {
    params.check_key(key)?;
    check_signature_len(params, signature)?;

    let instance = params.instance();
    let prehashed;
    let tbs = if instance.prehash() {
        prehashed = prehash(instance.curve(), msg)?;
        prehashed.as_ref()
    } else {
        msg
    };
    let public_key = key.public_key().as_ref();

    let backend = backend::select(
        params.backend_policy(),
        Operation::Verify,
        instance,
        params.context_string(),
    );
    let valid = match backend {
        Backend::Accelerated => ed25519::accelerated::verify(public_key, tbs, signature),
        Backend::Portable => {
            let mut challenge = challenge_context(params, public_key, signature);
            challenge.update(tbs);
            check(params.curve(), public_key, signature, challenge)
        }
    };

    tracing::debug!(valid, "verified");
    Ok(valid)
}

/// An incremental verifier, for messages that arrive in pieces.
///
/// `init` takes the signature, `update` feeds message bytes in order, and
/// `finish` gives the result. Feeding the message in any number of chunks
/// gives the same answer as [`verify`] over the whole message.
///
/// ```
/// use edsign::{ec::Curve, signature::{self, Key, Params, Verifier}};
///
/// let key = Key::from_seed(Curve::Ed448, &[9u8; 57]).unwrap();
/// let params = Params::new(&key, "Ed448ph", b"").unwrap();
/// let sig = key.sign(&params, b"streamed message").unwrap();
///
/// let mut verifier = Verifier::new(&key, params).unwrap();
/// verifier.init(sig.as_ref()).unwrap();
/// verifier.update(b"streamed ").unwrap();
/// verifier.update(b"message").unwrap();
/// assert!(verifier.finish().unwrap());
/// ```
pub struct Verifier<'a> {
    key: &'a Key,
    params: Params,
    state: State,
}

derive_debug_via_field!(Verifier<'_>, stringify!(Verifier), params);

enum State {
    Uninitialized,
    Initialized(Session),
    Finalized,
}

struct Session {
    signature: [u8; MAX_SIGNATURE_LEN],
    challenge: digest::Context,
    // Present for the prehash instances; message bytes go here first.
    prehash: Option<digest::Context>,
}

impl<'a> Verifier<'a> {
    pub fn new(key: &'a Key, params: Params) -> Result<Self, Error> {
        params.check_key(key)?;
        Ok(Self { key, params, state: State::Uninitialized })
    }

    /// Captures a copy of `signature` and starts the hash.
    ///
    /// Fails with `SignatureAlreadySet` if a signature was captured before,
    /// even if `finish` has run since; call `reset` first.
    pub fn init(&mut self, signature: &[u8]) -> Result<(), Error> {
        if !matches!(self.state, State::Uninitialized) {
            return Err(Error::SignatureAlreadySet);
        }
        check_signature_len(&self.params, signature)?;

        let instance = self.params.instance();
        match backend::select(
            self.params.backend_policy(),
            Operation::StreamingVerify,
            instance,
            self.params.context_string(),
        ) {
            Backend::Portable => (),
            // No accelerated backend advertises streaming.
            Backend::Accelerated => unreachable!(),
        }

        let mut copy = [0u8; MAX_SIGNATURE_LEN];
        copy[..signature.len()].copy_from_slice(signature);
        let challenge = challenge_context(&self.params, self.key.public_key().as_ref(), signature);
        let prehash = if instance.prehash() {
            Some(digest::Context::new(instance.curve().prehash_algorithm()))
        } else {
            None
        };

        self.state = State::Initialized(Session { signature: copy, challenge, prehash });
        tracing::trace!(instance = instance.name(), "verifier initialized");
        Ok(())
    }

    /// Feeds the next piece of the message.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        match &mut self.state {
            State::Initialized(session) => {
                match &mut session.prehash {
                    Some(prehash) => prehash.update(data),
                    None => session.challenge.update(data),
                }
                Ok(())
            }
            _ => Err(Error::NotInitialized),
        }
    }

    /// Completes the verification. The verifier cannot be fed again until
    /// `reset` and `init` are called.
    #[tracing::instrument(level = "debug", skip_all, fields(instance = self.params.instance().name()))]
    pub fn finish(&mut self) -> Result<bool, Error> {
        let session = match core::mem::replace(&mut self.state, State::Finalized) {
            State::Initialized(session) => session,
            other => {
                self.state = other;
                return Err(Error::NotInitialized);
            }
        };

        let Session { signature, mut challenge, prehash } = session;
        if let Some(prehash) = prehash {
            let digest = check_prehash(prehash.finish())?;
            challenge.update(digest.as_ref());
        }

        let curve = self.params.curve();
        let signature = &signature[..curve.signature_len()];
        let valid = check(curve, self.key.public_key().as_ref(), signature, challenge);

        tracing::debug!(valid, "verified");
        Ok(valid)
    }

    /// Drops any captured signature and hash state.
    pub fn reset(&mut self) {
        self.state = State::Uninitialized;
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

fn check_signature_len(params: &Params, signature: &[u8]) -> Result<(), Error> {
    let expected = params.instance().signature_len();
    if signature.len() != expected {
        return Err(Error::BadSignatureLength { expected, actual: signature.len() });
    }
    Ok(())
}

// Starts `H(dom || R || A || ...)`. The message, or its prehash, follows.
fn challenge_context(params: &Params, public_key: &[u8], signature: &[u8]) -> digest::Context {
    let curve = params.curve();
    let mut ctx = digest::Context::new(curve.hash_algorithm());
    ctx.update(params.domain_prefix().as_ref());
    ctx.update(&signature[..curve.public_key_len()]);
    ctx.update(public_key);
    ctx
}

fn check(curve: Curve, public_key: &[u8], signature: &[u8], challenge: digest::Context) -> bool {
    let challenge = challenge.finish();
    match curve {
        Curve::Ed25519 => ed25519::verification::verify(public_key, signature, &challenge),
        Curve::Ed448 => ed448::verify(public_key, signature, &challenge),
    }
}
