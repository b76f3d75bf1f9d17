//! End-to-end checks through the public API: key generation, encryption,
//! signatures and key files.

use std::sync::OnceLock;

use keccak_rsa::buffer::ByteBuffer;
use keccak_rsa::config::{FileConfig, OAEP_MSG_BYTES};
use keccak_rsa::rsa::{decrypt, encrypt, generate_keypair, sign, verify, RsaKeyPair};
use keccak_rsa::util::{load_key, save_keypair, sign_file, verify_file};
use keccak_rsa::RsaError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn keys() -> &'static (RsaKeyPair, RsaKeyPair) {
    static KEYS: OnceLock<(RsaKeyPair, RsaKeyPair)> = OnceLock::new();
    KEYS.get_or_init(|| {
        let mut rng = StdRng::seed_from_u64(2024);
        (
            generate_keypair(&mut rng).unwrap(),
            generate_keypair(&mut rng).unwrap(),
        )
    })
}

#[test]
fn abc_scenario() {
    let (pair, other) = keys();
    let mut rng = StdRng::seed_from_u64(1);
    let msg = ByteBuffer::from_bytes(b"abc");

    let cipher = encrypt(&msg, &pair.public_key, &mut rng).unwrap();
    let plain = decrypt(&cipher, &pair.secret_key).unwrap();
    assert_eq!(plain.as_bytes(), b"abc");

    let signature = sign(&msg, &pair.secret_key).unwrap();
    assert!(verify(&signature, &msg, &pair.public_key).unwrap());
    assert!(!verify(&signature, &msg, &other.public_key).unwrap());

    let mut tampered = signature.clone();
    tampered.trim_in_place(1);
    tampered.push_byte(signature.as_bytes()[signature.len() - 1].wrapping_add(1));
    assert!(!verify(&tampered, &msg, &pair.public_key).unwrap());
}

#[test]
fn roundtrip_message_lengths() {
    let (pair, _) = keys();
    let mut rng = StdRng::seed_from_u64(2);

    for len in [0usize, 1, 16, 100, OAEP_MSG_BYTES] {
        let bytes: Vec<u8> = (0..len).map(|i| b'A' + (i % 26) as u8).collect();
        let msg = ByteBuffer::from_bytes(&bytes);
        let cipher = encrypt(&msg, &pair.public_key, &mut rng).unwrap();
        assert_eq!(decrypt(&cipher, &pair.secret_key).unwrap(), msg, "length {}", len);
    }
}

#[test]
fn message_length_boundary() {
    let (pair, _) = keys();
    let mut rng = StdRng::seed_from_u64(3);

    let max = ByteBuffer::from_bytes(&[b'z'; OAEP_MSG_BYTES]);
    assert!(encrypt(&max, &pair.public_key, &mut rng).is_ok());

    let over = ByteBuffer::from_bytes(&[b'z'; OAEP_MSG_BYTES + 1]);
    assert!(matches!(
        encrypt(&over, &pair.public_key, &mut rng),
        Err(RsaError::MessageTooLong { .. })
    ));
}

#[test]
fn signature_rejects_other_messages() {
    let (pair, _) = keys();
    let signature = sign(&ByteBuffer::from_bytes(b"message one"), &pair.secret_key).unwrap();

    let others: [&[u8]; 4] = [b"message two", b"message on", b"message one ", b""];
    for other in others {
        let msg = ByteBuffer::from_bytes(other);
        assert!(!verify(&signature, &msg, &pair.public_key).unwrap());
    }
}

#[test]
fn key_files_and_file_signatures() {
    let (pair, other) = keys();
    let dir = tempfile::tempdir().unwrap();
    let config = FileConfig::default();

    let stem = dir.path().join("bob");
    let (pk_path, sk_path) = save_keypair(stem.to_str().unwrap(), pair, &config).unwrap();
    let pk = load_key(&pk_path).unwrap();
    let sk = load_key(&sk_path).unwrap();

    let file = dir.path().join("report.bin");
    std::fs::write(&file, vec![0x42u8; 5000]).unwrap();
    let sig = dir.path().join(config.signature_path("report.bin"));

    sign_file(&sig, &file, &sk).unwrap();
    assert!(verify_file(&sig, &file, &pk).unwrap());
    assert!(!verify_file(&sig, &file, &other.public_key).unwrap());
}
