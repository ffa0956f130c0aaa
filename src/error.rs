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

//! Error reporting.
//!
//! A verification that simply fails to verify is *not* an error: it is
//! reported as `Ok(false)`. Every variant of [`Error`] means the operation
//! could not be carried out as requested.

/// An error with sign, verify or parameter handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Signing was requested with a key that has no private component.
    #[error("key has no private component")]
    NoPrivateKey,

    /// The instance name is not one of the five EdDSA instances.
    #[error("unknown EdDSA instance")]
    UnknownInstance,

    /// The instance belongs to a different curve than the key.
    #[error("instance does not match the key's curve")]
    CurveMismatch,

    /// A streaming verifier was fed or finalized before `init`.
    #[error("verifier is not initialized")]
    NotInitialized,

    /// A streaming verifier already holds a signature.
    #[error("signature already set")]
    SignatureAlreadySet,

    /// The output buffer cannot hold the signature. Nothing was written.
    #[error("output buffer too small, {required} bytes required")]
    BufferTooSmall { required: usize },

    /// The signature does not have the instance's fixed length.
    #[error("bad signature length {actual}, expected {expected}")]
    BadSignatureLength { expected: usize, actual: usize },

    /// The context string is longer than 255 bytes.
    #[error("context string of {len} bytes is too long")]
    ContextTooLong { len: usize },

    /// The instance needs a non-empty context string.
    #[error("instance requires a context string")]
    ContextRequired,

    /// The instance does not accept a context string.
    #[error("instance does not accept a context string")]
    ContextNotAllowed,

    #[error("message prehash failed")]
    PrehashFailed,

    #[error("signing primitive failed")]
    SignPrimitiveFailed,

    #[error(transparent)]
    KeyRejected(#[from] KeyRejected),
}

/// An error parsing or validating a key.
///
/// The `Display` implementation returns a short reason such as
/// `"InvalidEncoding"`. The set of reasons may grow, so applications should
/// not match on the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct KeyRejected(&'static str);

impl KeyRejected {
    /// The value returned from `<Self as Display>::to_string()`.
    pub fn description_(&self) -> &'static str {
        self.0
    }

    pub(crate) fn inconsistent_components() -> Self {
        KeyRejected("InconsistentComponents")
    }

    pub(crate) fn invalid_encoding() -> Self {
        KeyRejected("InvalidEncoding")
    }

    pub(crate) fn wrong_length() -> Self {
        KeyRejected("WrongLength")
    }
}
