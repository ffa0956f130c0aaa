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

//! Per-operation parameters: instance, context string and backend policy.

use super::{
    backend::BackendPolicy,
    context::ContextString,
    dom::DomainPrefix,
    instance::{ self, Instance },
    key::Key,
};
use crate::{ ec::Curve, error::Error };

/// The parameters of a sign or verify operation.
///
/// `Params` are plain values: clone them to reuse a configuration, change
/// them with the setters. Every setter validates the resulting combination of
/// instance and context, and leaves the parameters untouched on error.
#[derive(Clone, Copy, Debug)]
pub struct Params {
    curve: Curve,
    instance: &'static Instance,
    context: ContextString,
    backend: BackendPolicy,
}

impl Params {
    /// Parameters for `key` with the named instance and a context string.
    ///
    /// ```
    /// use edsign::{ec::Curve, error::Error, signature::{Key, Params}};
    ///
    /// let key = Key::from_seed(Curve::Ed25519, &[1u8; 32]).unwrap();
    /// assert!(Params::new(&key, "ed25519ph", b"").is_ok());
    /// assert_eq!(Params::new(&key, "Ed25519ctx", b"").unwrap_err(), Error::ContextRequired);
    /// assert_eq!(Params::new(&key, "Ed448", b"").unwrap_err(), Error::CurveMismatch);
    /// ```
    pub fn new(key: &Key, instance_name: &str, context: &[u8]) -> Result<Self, Error> {
        let curve = key.curve();
        let instance = instance::resolve(instance_name, curve)?;
        let context = ContextString::new(instance, context)?;
        Ok(Self { curve, instance, context, backend: BackendPolicy::default() })
    }

    /// Parameters for the base instance of `key`'s curve, with no context.
    pub fn base(key: &Key) -> Self {
        let curve = key.curve();
        Self {
            curve,
            instance: instance::base(curve),
            context: ContextString::EMPTY,
            backend: BackendPolicy::default(),
        }
    }

    /// Changes the instance and the context string together.
    ///
    /// A `None` keeps the current value. Both are validated as a pair, so a
    /// switch to Ed25519ctx can come with the context it requires.
    pub fn set(&mut self, instance_name: Option<&str>, context: Option<&[u8]>) -> Result<(), Error> {
        let instance = match instance_name {
            Some(name) => instance::resolve(name, self.curve)?,
            None => self.instance,
        };
        let context = match context {
            Some(bytes) => ContextString::new(instance, bytes)?,
            None => {
                self.context.revalidate(instance)?;
                self.context
            }
        };

        self.instance = instance;
        self.context = context;
        Ok(())
    }

    /// Changes the instance, keeping the current context string.
    pub fn set_instance(&mut self, instance_name: &str) -> Result<(), Error> {
        self.set(Some(instance_name), None)
    }

    /// Changes the context string, keeping the current instance.
    pub fn set_context(&mut self, context: &[u8]) -> Result<(), Error> {
        self.set(None, Some(context))
    }

    /// Chooses how the backend is picked. See [`BackendPolicy`].
    pub fn set_backend_policy(&mut self, policy: BackendPolicy) {
        self.backend = policy;
    }

    /// Builder form of [`Params::set_backend_policy`].
    pub fn with_backend_policy(mut self, policy: BackendPolicy) -> Self {
        self.backend = policy;
        self
    }

    #[inline]
    pub fn curve(&self) -> Curve {
        self.curve
    }

    #[inline]
    pub fn instance(&self) -> &'static Instance {
        self.instance
    }

    #[inline]
    pub fn context(&self) -> &[u8] {
        self.context.as_ref()
    }

    #[inline]
    pub fn backend_policy(&self) -> BackendPolicy {
        self.backend
    }

    pub(crate) fn context_string(&self) -> &ContextString {
        &self.context
    }

    pub(crate) fn domain_prefix(&self) -> DomainPrefix {
        DomainPrefix::new(self.instance, &self.context)
    }

    // Operations take the key and the parameters separately.
    pub(crate) fn check_key(&self, key: &Key) -> Result<(), Error> {
        if key.curve() != self.curve {
            return Err(Error::CurveMismatch);
        }
        Ok(())
    }
}
