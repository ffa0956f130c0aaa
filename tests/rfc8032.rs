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

//! Known-answer tests from RFC 8032, section 7.

use edsign::{
    ec::Curve,
    signature::{ self, Key, Params },
};
use hex_literal::hex;

struct Vector {
    instance: &'static str,
    curve: Curve,
    seed: &'static [u8],
    public_key: &'static [u8],
    context: &'static [u8],
    message: &'static [u8],
    signature: &'static [u8],
}

const VECTORS: &[Vector] = &[
    Vector {
        instance: "Ed25519",
        curve: Curve::Ed25519,
        seed: &hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60"),
        public_key: &hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"),
        context: b"",
        message: b"",
        signature: &hex!(
            "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
        ),
    },
    Vector {
        instance: "Ed25519ctx",
        curve: Curve::Ed25519,
        seed: &hex!("0305334e381af78f141cb666f6199f57bc3495335a256a95bd2a55bf546663f6"),
        public_key: &hex!("dfc9425e4f968f7f0c29f0259cf5f9aed6851c2bb4ad8bfb860cfee0ab248292"),
        context: b"foo",
        message: &hex!("f726936d19c800494e3fdaff20b276a8"),
        signature: &hex!(
            "55a4cc2f70a54e04288c5f4cd1e45a7bb520b36292911876cada7323198dd87a8b36950b95130022907a7fb7c4e9b2d5f6cca685a587b4b21f4b888e4e7edb0d"
        ),
    },
    Vector {
        instance: "Ed25519ph",
        curve: Curve::Ed25519,
        seed: &hex!("833fe62409237b9d62ec77587520911e9a759cec1d19755b7da901b96dca3d42"),
        public_key: &hex!("ec172b93ad5e563bf4932c70e1245034c35467ef2efd4d64ebf819683467e2bf"),
        context: b"",
        message: b"abc",
        signature: &hex!(
            "98a70222f0b8121aa9d30f813d683f809e462b469c7ff87639499bb94e6dae4131f85042463c2a355a2003d062adf5aaa10b8c61e636062aaad11c2a26083406"
        ),
    },
    Vector {
        instance: "Ed448",
        curve: Curve::Ed448,
        seed: &hex!(
            "6c82a562cb808d10d632be89c8513ebf6c929f34ddfa8c9f63c9960ef6e348a3528c8a3fcc2f044e39a3fc5b94492f8f032e7549a20098f95b"
        ),
        public_key: &hex!(
            "5fd7449b59b461fd2ce787ec616ad46a1da1342485a70e1f8a0ea75d80e96778edf124769b46c7061bd6783df1e50f6cd1fa1abeafe8256180"
        ),
        context: b"",
        message: b"",
        signature: &hex!(
            "533a37f6bbe457251f023c0d88f976ae2dfb504a843e34d2074fd823d41a591f2b233f034f628281f2fd7a22ddd47d7828c59bd0a21bfd3980ff0d2028d4b18a9df63e006c5d1c2d345b925d8dc00b4104852db99ac5c7cdda8530a113a0f4dbb61149f05a7363268c71d95808ff2e652600"
        ),
    },
    Vector {
        instance: "Ed448",
        curve: Curve::Ed448,
        seed: &hex!(
            "c4eab05d357007c632f3dbb48489924d552b08fe0c353a0d4a1f00acda2c463afbea67c5e8d2877c5e3bc397a659949ef8021e954e0a12274e"
        ),
        public_key: &hex!(
            "43ba28f430cdff456ae531545f7ecd0ac834a55d9358c0372bfa0c6c6798c0866aea01eb00742802b8438ea4cb82169c235160627b4c3a9480"
        ),
        context: b"foo",
        message: &hex!("03"),
        signature: &hex!(
            "d4f8f6131770dd46f40867d6fd5d5055de43541f8c5e35abbcd001b32a89f7d2151f7647f11d8ca2ae279fb842d607217fce6e042f6815ea000c85741de5c8da1144a6a1aba7f96de42505d7a7298524fda538fccbbb754f578c1cad10d54d0d5428407e85dcbc98a49155c13764e66c3c00"
        ),
    },
    Vector {
        instance: "Ed448ph",
        curve: Curve::Ed448,
        seed: &hex!(
            "833fe62409237b9d62ec77587520911e9a759cec1d19755b7da901b96dca3d42ef7822e0d5104127dc05d6dbefde69e3ab2cec7c867c6e2c49"
        ),
        public_key: &hex!(
            "259b71c19f83ef77a7abd26524cbdb3161b590a48f7d17de3ee0ba9c52beb743c09428a131d6b1b57303d90d8132c276d5ed3d5d01c0f53880"
        ),
        context: b"",
        message: b"abc",
        signature: &hex!(
            "822f6901f7480f3d5f562c592994d9693602875614483256505600bbc281ae381f54d6bce2ea911574932f52a4e6cadd78769375ec3ffd1b801a0d9b3f4030cd433964b6457ea39476511214f97469b57dd32dbc560a9a94d00bff07620464a3ad203df7dc7ce360c3cd3696d9d9fab90f00"
        ),
    },
];

#[test_log::test]
fn sign_matches_known_answers() {
    for v in VECTORS {
        let key = Key::from_seed_and_public_key(v.curve, v.seed, v.public_key).unwrap();
        let params = Params::new(&key, v.instance, v.context).unwrap();

        let sig = key.sign(&params, v.message).unwrap();
        assert_eq!(sig.as_ref(), v.signature, "{}", v.instance);

        let mut out = [0u8; 114];
        let len = signature::sign(&key, &params, v.message, Some(&mut out)).unwrap();
        assert_eq!(&out[..len], v.signature, "{}", v.instance);
    }
}

#[test_log::test]
fn verify_accepts_known_answers() {
    for v in VECTORS {
        let key = Key::from_public_key(v.curve, v.public_key).unwrap();
        let params = Params::new(&key, v.instance, v.context).unwrap();
        assert!(
            signature::verify(&key, &params, v.message, v.signature).unwrap(),
            "{}",
            v.instance
        );
    }
}

#[test]
fn public_keys_derive_from_seeds() {
    for v in VECTORS {
        let key = Key::from_seed(v.curve, v.seed).unwrap();
        assert_eq!(key.public_key().as_ref(), v.public_key, "{}", v.instance);
    }
}

#[test]
fn inconsistent_public_key_is_rejected() {
    let v = &VECTORS[0];
    let other = &VECTORS[1];
    let err = Key::from_seed_and_public_key(v.curve, v.seed, other.public_key).unwrap_err();
    assert_eq!(err.to_string(), "InconsistentComponents");

    let err = Key::from_seed_and_public_key(v.curve, v.seed, &other.public_key[..31]).unwrap_err();
    assert_eq!(err.to_string(), "InvalidEncoding");
}

#[test]
fn single_bit_seed_signs_empty_message() {
    let mut seed = [0u8; 32];
    seed[0] = 1;
    let key = Key::from_seed(Curve::Ed25519, &seed).unwrap();
    assert_eq!(
        key.public_key().as_ref(),
        &hex!("cecc1507dc1ddd7295951c290888f095adb9044d1b73d696e6df065d683bd4fc")[..]
    );

    let params = Params::new(&key, "Ed25519", b"").unwrap();
    let sig = key.sign(&params, b"").unwrap();
    assert_eq!(
        sig.as_ref(),
        &hex!(
            "6c9e53d9cf36b71c2950235f954ade00118285c93209d07c98acc8496ab5fa4c"
            "88b197d0ce46df3402253b1a1d318e264893f033b51bf99ffeff42eb4a4d4302"
        )[..]
    );
    assert!(signature::verify(&key, &params, b"", sig.as_ref()).unwrap());
    assert!(!signature::verify(&key, &params, b"x", sig.as_ref()).unwrap());
}
