use crate::generate_api_key;

#[test]
fn given_generated_key_then_32_lowercase_hex_chars() {
    let key = generate_api_key();

    assert_eq!(key.len(), 32);
    assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(key, key.to_lowercase());
}

#[test]
fn given_two_generated_keys_then_they_differ() {
    let first = generate_api_key();
    let second = generate_api_key();

    assert_ne!(first, second);
}
