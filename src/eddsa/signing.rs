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

//! EdDSA signing.

use super::{
    backend::{ self, Backend, Operation },
    key::{ Key, PrivateKey },
    params::Params,
    prehash,
};
use crate::{
    ec::{ curve25519::ed25519, curve448::ed448 },
    error::Error,
    signature::Signature,
};

/// Signs `msg` into `out` and returns the signature length.
///
/// With `out == None` nothing is signed and only the required length is
/// returned, so callers can size their buffer first. A buffer that is too
/// small fails with `BufferTooSmall` and is left untouched.
///
/// Checks run in this order: size probe, buffer size, private key present,
/// key curve matches the parameters.
#[tracing::instrument(level = "debug", skip_all, fields(instance = params.instance().name()))]
pub fn sign(key: &Key, params: &Params, msg: &[u8], out: Option<&mut [u8]>) -> Result<usize, Error> {
    let sig_len = params.instance().signature_len();
    let out = match out {
        Some(out) => out,
        None => return Ok(sig_len),
    };
    if out.len() < sig_len {
        return Err(Error::BufferTooSmall { required: sig_len });
    }

    let signature = sign_message(key, params, msg)?;
    out[..sig_len].copy_from_slice(signature.as_ref());
    Ok(sig_len)
}

impl Key {
    /// Returns the signature of the message `msg` under `params`.
    ///
    /// Signing is deterministic: the same key, parameters and message always
    /// give the same signature.
    #[tracing::instrument(level = "debug", skip_all, fields(instance = params.instance().name()))]
    pub fn sign(&self, params: &Params, msg: &[u8]) -> Result<Signature, Error> {
        sign_message(self, params, msg)
    }
}

fn sign_message(key: &Key, params: &Params, msg: &[u8]) -> Result<Signature, Error> {
    let private_key = key.private_key().ok_or(Error::NoPrivateKey)?;
    params.check_key(key)?;

    let instance = params.instance();
    let prehashed;
    let tbs = if instance.prehash() {
        prehashed = prehash(instance.curve(), msg)?;
        prehashed.as_ref()
    } else {
        msg
    };
    let dom = params.domain_prefix();
    let public_key = key.public_key().as_ref();

    match private_key {
        PrivateKey::Ed25519 { seed, secret } => {
            let public_key = <&ed25519::PublicKey>::try_from(public_key)
                .map_err(|_| Error::SignPrimitiveFailed)?;
            let backend = backend::select(
                params.backend_policy(),
                Operation::Sign,
                instance,
                params.context_string(),
            );
            let bytes = match backend {
                Backend::Accelerated => ed25519::accelerated::sign(seed, tbs)?,
                Backend::Portable => ed25519::signing::sign(secret, public_key, dom.as_ref(), tbs),
            };
            Ok(Signature::new(|out| {
                out[..bytes.len()].copy_from_slice(&bytes);
                bytes.len()
            }))
        }
        PrivateKey::Ed448 { secret } => {
            let public_key = <&ed448::PublicKey>::try_from(public_key)
                .map_err(|_| Error::SignPrimitiveFailed)?;
            let bytes = ed448::sign(secret, public_key, dom.as_ref(), tbs)?;
            Ok(Signature::new(|out| {
                out[..bytes.len()].copy_from_slice(&bytes);
                bytes.len()
            }))
        }
    }
}
