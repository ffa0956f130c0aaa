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

//! Ed25519 through `ed25519-dalek`.
//!
//! This path only knows plain, unprefixed Ed25519. Callers must check
//! that neither a domain prefix nor a prehash is in use before picking it.

use super::{ verification::decode_scalar, Seed, ELEM_LEN, SIGNATURE_LEN };
use crate::error;
use ed25519_dalek::{ ExpandedSecretKey, PublicKey, SecretKey, Signature, Verifier };

pub(crate) fn sign(seed: &Seed, msg: &[u8]) -> Result<[u8; SIGNATURE_LEN], error::Error> {
    let secret_key = SecretKey::from_bytes(seed)
        .map_err(|_| error::Error::SignPrimitiveFailed)?;
    let expanded = ExpandedSecretKey::from(&secret_key);
    let public_key = PublicKey::from(&expanded);

    Ok(expanded.sign(msg, &public_key).to_bytes())
}

pub(crate) fn verify(public_key: &[u8], msg: &[u8], signature: &[u8]) -> bool {
    if signature.len() != SIGNATURE_LEN {
        return false;
    }

    // ed25519-dalek lets some unreduced S values through. Reject them so the
    // result never depends on which path ran.
    if decode_scalar(&signature[ELEM_LEN..]).is_none() {
        return false;
    }

    let public_key = match PublicKey::from_bytes(public_key) {
        Ok(public_key) => public_key,
        Err(_) => return false,
    };
    let sig = match Signature::try_from(signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };

    public_key.verify(msg, &sig).is_ok()
}
