//! tests/text_tests.rs
//! URL-safe text wrapping: protect_text / unprotect_text

mod common;

use aesprotect_rs::encoding::{decode_url_safe, encode_url_safe};
use aesprotect_rs::ProtectorError;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;
use common::test_protector;

/// Lowercase text that gzip cannot collapse, so envelope lengths spread out.
fn scrambled_text(len: usize, seed: u32) -> String {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            char::from(b'a' + ((state >> 16) % 26) as u8)
        })
        .collect()
}

#[test]
fn text_roundtrip_with_and_without_purpose() {
    let protector = test_protector();
    let cases = [
        ("hello world", None),
        ("", None),
        ("パスワード123!@#", Some("email-link")),
        ("🔐💻 mixed ascii", Some("session-token")),
    ];

    for (plaintext, purpose) in cases {
        let token = protector.protect_text(plaintext, purpose).unwrap();
        let back = protector.unprotect_text(&token, purpose).unwrap();
        assert_eq!(back.as_deref(), Some(plaintext), "{plaintext:?} / {purpose:?}");
    }
}

#[test]
fn output_never_contains_plus_slash_or_padding() {
    let protector = test_protector();
    // Enough samples that every padding remainder and both remapped characters turn up.
    for i in 0..200 {
        let token = protector
            .protect_text(&scrambled_text(i * 3, i as u32), None)
            .unwrap();
        assert!(
            !token.contains(['+', '/', '=']),
            "unsafe character in {token}"
        );
        assert_ne!(token.len() % 4, 1, "impossible base64 length");
    }
}

#[test]
fn all_padding_remainders_are_restored() {
    let protector = test_protector();
    let mut seen = [false; 4];

    for i in 0..64 {
        let plaintext = scrambled_text(i * 8, i as u32);
        let token = protector.protect_text(&plaintext, None).unwrap();
        seen[token.len() % 4] = true;
        assert_eq!(
            protector.unprotect_text(&token, None).unwrap().as_deref(),
            Some(plaintext.as_str())
        );
    }

    assert!(seen[0] && seen[2] && seen[3], "remainders seen: {seen:?}");
}

#[test]
fn explicitly_padded_token_is_accepted() {
    let protector = test_protector();
    for i in 0..16 {
        let token = protector
            .protect_text(&scrambled_text(i * 8, i as u32), None)
            .unwrap();
        let padded = match token.len() % 4 {
            2 => format!("{token}=="),
            3 => format!("{token}="),
            _ => token.clone(),
        };
        assert!(protector.unprotect_text(&padded, None).unwrap().is_some());
    }
}

#[test]
fn standard_alphabet_token_is_accepted() {
    let protector = test_protector();
    let mut saw_std_symbol = false;

    for i in 0..32 {
        let plaintext = format!("payload-{i}");
        let envelope = protector
            .protect_for(plaintext.as_bytes(), Some("email-link"))
            .unwrap();

        for token in [STANDARD.encode(&envelope), STANDARD_NO_PAD.encode(&envelope)] {
            saw_std_symbol |= token.contains(['+', '/']);
            assert_eq!(
                protector
                    .unprotect_text(&token, Some("email-link"))
                    .unwrap()
                    .as_deref(),
                Some(plaintext.as_str())
            );
        }
    }

    assert!(saw_std_symbol, "no token used '+' or '/'");
}

#[test]
fn empty_text_is_no_value_not_error() {
    let protector = test_protector();
    assert_eq!(protector.unprotect_text("", None).unwrap(), None);
    assert_eq!(protector.unprotect_text("", Some("any")).unwrap(), None);
}

#[test]
fn malformed_base64_is_invalid_data() {
    let protector = test_protector();
    for bad in ["a", "abcde", "not base64!", "ab.cd~"] {
        let err = protector.unprotect_text(bad, None).unwrap_err();
        assert!(matches!(err, ProtectorError::InvalidData(_)), "{bad}");
    }
}

#[test]
fn short_decoded_envelope_is_invalid_data() {
    let protector = test_protector();
    let token = encode_url_safe(&[7u8; 31]);
    assert!(matches!(
        protector.unprotect_text(&token, None),
        Err(ProtectorError::InvalidData(_))
    ));
}

#[test]
fn wrong_purpose_on_text_path_fails_authentication() {
    let protector = test_protector();
    let token = protector.protect_text("scoped", Some("email-link")).unwrap();
    assert!(matches!(
        protector.unprotect_text(&token, Some("session-token")),
        Err(ProtectorError::AuthenticationFailed)
    ));
    assert!(matches!(
        protector.unprotect_text(&token, None),
        Err(ProtectorError::AuthenticationFailed)
    ));
}

#[test]
fn text_form_wraps_byte_form() {
    let protector = test_protector();
    let token = protector.protect_text("bytes inside", None).unwrap();
    let envelope = decode_url_safe(&token).unwrap();
    assert_eq!(protector.unprotect(&envelope).unwrap(), b"bytes inside");

    let envelope = protector.protect(b"bytes outside").unwrap();
    assert_eq!(
        protector
            .unprotect_text(&encode_url_safe(&envelope), None)
            .unwrap()
            .as_deref(),
        Some("bytes outside")
    );
}
