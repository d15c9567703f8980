// tests/codec_tests.rs
use blobcrypt::consts::{IV_LEN, MIN_FRAME_LEN};
use blobcrypt::{decode, encode, Codec, CodecError, Frame, Payload, PayloadKind, TextDecoding};

mod common;

#[test]
fn test_hello_world_text_roundtrip() {
    common::setup();
    let blob = encode("secret", "hello world").unwrap();

    let hex = blob.as_text().expect("text plaintext yields a text frame");
    assert_eq!(hex.len(), 2 * (16 + 11));
    assert!(hex
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

    let decoded = decode("secret", blob).unwrap();
    assert_eq!(decoded, Payload::from("hello world"));
}

#[test]
fn test_wrong_key_returns_garbage_without_error() {
    common::setup();
    let blob = encode("secret", "hello world").unwrap();

    let decoded = decode("wrong", blob).unwrap();
    let text = decoded.into_text().expect("text frame decodes to text");

    assert_ne!(text, "hello world");
    // Lossy decoding can merge a truncated multi-byte sequence into one U+FFFD
    assert!(text.chars().count() <= 11);
    assert!(!text.is_empty());
}

#[test]
fn test_wrong_key_binary_keeps_length() {
    common::setup();
    let plain = b"Attack at dawn!".to_vec();
    let blob = encode("k1", plain.clone()).unwrap();

    let decoded = decode("k2", blob).unwrap();
    let bytes = decoded.into_binary().expect("binary frame decodes to binary");
    assert_eq!(bytes.len(), plain.len());
    assert_ne!(bytes, plain);
}

#[test]
fn test_binary_roundtrip_returns_raw_frame() {
    common::setup();
    let plain: Vec<u8> = (0u8..=255).collect();

    let blob = encode("binary passphrase", plain.clone()).unwrap();
    assert_eq!(blob.kind(), PayloadKind::Binary);
    assert_eq!(blob.len(), IV_LEN + plain.len());

    let decoded = decode("binary passphrase", blob).unwrap();
    assert_eq!(decoded, Payload::Binary(plain));
}

#[test]
fn test_single_byte_plaintext_yields_minimum_frame() {
    let blob = encode("k", vec![0x42u8]).unwrap();
    assert_eq!(blob.len(), MIN_FRAME_LEN);
    assert_eq!(decode("k", blob).unwrap(), Payload::Binary(vec![0x42]));
}

#[test]
fn test_multibyte_text_roundtrip() {
    let value = "naïve café ☕ ünïcödé ✓";
    let blob = encode("κλειδί", value).unwrap();
    assert_eq!(blob.len(), 2 * (IV_LEN + value.len()));
    assert_eq!(decode("κλειδί", blob).unwrap(), Payload::from(value));
}

#[test]
fn test_empty_passphrase_is_accepted() {
    let blob = encode("", "still encrypted").unwrap();
    assert_eq!(decode("", blob).unwrap(), Payload::from("still encrypted"));
}

#[test]
fn test_iv_is_fresh_per_encode() {
    common::setup();
    let a = encode("secret", "same value").unwrap();
    let b = encode("secret", "same value").unwrap();
    assert_ne!(a, b);

    let iv_a = *Frame::from_payload(a.clone()).unwrap().iv();
    let iv_b = *Frame::from_payload(b.clone()).unwrap().iv();
    assert_ne!(iv_a, iv_b);

    assert_eq!(decode("secret", a).unwrap(), Payload::from("same value"));
    assert_eq!(decode("secret", b).unwrap(), Payload::from("same value"));
}

#[test]
fn test_encode_rejects_empty_text_and_binary() {
    let err = encode("secret", "").unwrap_err();
    assert!(matches!(err, CodecError::InvalidInput(_)));

    let err = encode("secret", Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, CodecError::InvalidInput(_)));
}

#[test]
fn test_decode_rejects_empty_blobs() {
    assert!(decode("secret", "").unwrap_err().is_invalid_input());
    assert!(decode("secret", Vec::<u8>::new())
        .unwrap_err()
        .is_invalid_input());
}

#[test]
fn test_decode_rejects_short_frames() {
    // 16 bytes: an IV with no ciphertext
    let iv_only = "00".repeat(IV_LEN);
    assert!(decode("secret", iv_only.as_str())
        .unwrap_err()
        .is_invalid_input());
    assert!(decode("secret", vec![0u8; IV_LEN])
        .unwrap_err()
        .is_invalid_input());

    // 17 hex characters is long as a string but only 8 bytes once decoded
    assert!(decode("secret", "0123456789abcdef0")
        .unwrap_err()
        .is_invalid_input());
}

#[test]
fn test_decode_rejects_malformed_hex() {
    let mut blob = encode("secret", "hello world")
        .unwrap()
        .into_text()
        .unwrap();
    blob.replace_range(0..1, "g");
    let err = decode("secret", blob).unwrap_err();
    assert!(matches!(err, CodecError::InvalidInput(_)));
}

#[test]
fn test_decode_accepts_uppercase_hex() {
    let blob = encode("secret", "shout").unwrap().into_text().unwrap();
    let decoded = decode("secret", blob.to_ascii_uppercase()).unwrap();
    assert_eq!(decoded, Payload::from("shout"));
}

#[test]
fn test_binary_frame_of_text_plaintext_decodes_to_bytes() {
    // The caller picks the representation on decode; hex → raw keeps the bytes
    let hex_blob = encode("secret", "hello world").unwrap().into_text().unwrap();
    let raw = hex::decode(hex_blob).unwrap();

    let decoded = decode("secret", raw).unwrap();
    assert_eq!(decoded, Payload::Binary(b"hello world".to_vec()));
}

#[test]
fn test_tampered_ciphertext_flips_matching_plaintext_bit() {
    let mut raw = encode("secret", b"pay 100".to_vec())
        .unwrap()
        .into_binary()
        .unwrap();
    // '1' (0x31) ^ 0x08 == '9' (0x39)
    raw[IV_LEN + 4] ^= 0x08;

    let decoded = decode("secret", raw).unwrap();
    assert_eq!(decoded, Payload::Binary(b"pay 900".to_vec()));
}

#[test]
fn test_strict_text_decoding_rejects_invalid_utf8() {
    let codec = Codec::new(TextDecoding::Strict);
    // Binary plaintext that is not UTF-8, re-framed as hex text
    let raw = codec
        .encode("secret", Payload::Binary(vec![0xff, 0xfe, 0xfd]))
        .unwrap()
        .into_binary()
        .unwrap();
    let as_text = Payload::Text(hex::encode(raw));

    let err = codec.decode("secret", as_text.clone()).unwrap_err();
    assert!(matches!(err, CodecError::Utf8(_)));

    let lossy = Codec::new(TextDecoding::Lossy).decode("secret", as_text).unwrap();
    assert_eq!(lossy, Payload::from("\u{fffd}\u{fffd}\u{fffd}"));
}

#[test]
fn test_strict_text_decoding_roundtrips_valid_text() {
    let codec = Codec::new(TextDecoding::Strict);
    let blob = codec.encode("secret", Payload::from("plain ascii")).unwrap();
    assert_eq!(
        codec.decode("secret", blob).unwrap(),
        Payload::from("plain ascii")
    );
}

#[test]
fn test_concurrent_encode_decode() {
    common::setup();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let value = format!("thread {i} value");
                let blob = encode("shared key", value.as_str()).unwrap();
                let decoded = decode("shared key", blob).unwrap();
                assert_eq!(decoded, Payload::Text(value));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
