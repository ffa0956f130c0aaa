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

//! EdDSA signing and verification for the five RFC 8032 instances:
//! Ed25519, Ed25519ctx, Ed25519ph, Ed448 and Ed448ph.
//!
//! ```
//! use edsign::{signature, signature::{Key, Params}, ec::Curve};
//!
//! let key = Key::from_seed(Curve::Ed25519, &[7u8; 32]).unwrap();
//! let params = Params::new(&key, "Ed25519ctx", b"example").unwrap();
//!
//! let sig = key.sign(&params, b"hello, world").unwrap();
//! assert!(signature::verify(&key, &params, b"hello, world", sig.as_ref()).unwrap());
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

#[macro_use]
mod debug;

pub mod error;
pub mod digest;
pub mod ec;
pub mod eddsa;
pub mod signature;
