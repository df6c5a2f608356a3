// tests/core/crypto.rs
use cryptsidian_vault::aliases::SecretKey32;
use cryptsidian_vault::core::{apply_keystream, decrypt_to_vec, encrypt_to_vec};

fn key(byte: u8) -> SecretKey32 {
    SecretKey32::new([byte; 32])
}

#[test]
fn test_keystream_matches_nist_ctr_aes256_vector() {
    // SP 800-38A F.5.5, first two blocks (exercises the counter carry into the next block)
    let raw: [u8; 32] =
        hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")
            .unwrap()
            .try_into()
            .unwrap();
    let iv: [u8; 16] = hex::decode("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff")
        .unwrap()
        .try_into()
        .unwrap();
    let mut buf =
        hex::decode("6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51").unwrap();

    apply_keystream(&SecretKey32::new(raw), &iv, &mut buf);

    assert_eq!(
        hex::encode(&buf),
        "601ec313775789a5b7a7f504bbf3d228f443e3ca4d62b59aca84e990cacaf5c5"
    );
}

#[test]
fn test_encrypt_decrypt_roundtrip_in_memory() {
    let plaintext = b"Attack at dawn!";
    let key = key(7);
    let ciphertext = encrypt_to_vec(plaintext, &key);

    assert_eq!(ciphertext.len(), plaintext.len() + 16);
    assert_ne!(&ciphertext[16..], plaintext.as_slice());
    assert_eq!(decrypt_to_vec(&ciphertext, &key).unwrap(), plaintext);
}

#[test]
fn test_same_plaintext_encrypts_differently_each_time() {
    let key = key(9);
    let a = encrypt_to_vec(b"same bytes", &key);
    let b = encrypt_to_vec(b"same bytes", &key);
    assert_ne!(a[..16], b[..16]);
    assert_ne!(a, b);
}

#[test]
fn test_wrong_key_yields_garbage_not_an_error() {
    let ciphertext = encrypt_to_vec(b"no integrity check here", &key(1));
    let garbage = decrypt_to_vec(&ciphertext, &key(2)).unwrap();
    assert_eq!(garbage.len(), 23);
    assert_ne!(garbage, b"no integrity check here");
}

#[test]
fn test_decrypt_to_vec_rejects_input_shorter_than_iv() {
    assert!(decrypt_to_vec(&[0u8; 15], &key(3)).is_none());
    assert_eq!(decrypt_to_vec(&[0u8; 16], &key(3)).unwrap(), Vec::<u8>::new());
}
