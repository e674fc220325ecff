//! REST API key generation.

use rand::RngCore;

/// Generate a fresh API key: 16 random bytes as 32 lowercase hex chars.
/// Uniqueness is enforced by the database, not here.
pub fn generate_api_key() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);

    let mut key = String::with_capacity(32);
    for byte in bytes {
        key.push_str(&format!("{byte:02x}"));
    }
    key
}
