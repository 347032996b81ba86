use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::debug;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha512;

use crate::BeanError;

/// Length of the derived digest, in bits.
pub const HASH_BIT_SIZE: usize = 512;

/// PBKDF2 iteration count.
pub const ITERATIONS: u32 = 2000;

/// Length of generated salts, in bytes.
pub const SALT_SIZE: usize = 64;

/// Derives the base64 PBKDF2-HMAC-SHA512 digest of `password` with a base64 `salt`.
///
/// # Errors
/// [`BeanError::Digest`] when `salt` is not valid base64.
pub fn encrypt_password_hash(password: &str, salt: &str) -> Result<String, BeanError> {
    let salt = STANDARD
        .decode(salt)
        .map_err(|error| BeanError::Digest(format!("invalid salt: {}", error)))?;

    let mut hash = [0u8; HASH_BIT_SIZE / 8];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), &salt, ITERATIONS, &mut hash);
    Ok(STANDARD.encode(hash))
}

/// Generates a random base64 encoded salt of [`SALT_SIZE`] bytes.
pub fn gen_random_salt() -> String {
    let mut salt = [0u8; SALT_SIZE];
    rand::rng().fill_bytes(&mut salt);
    STANDARD.encode(salt)
}

/// Checks `password` against a digest produced by [`encrypt_password_hash`].
pub fn verify(password: &str, salt: &str, pass_hash: &str) -> Result<bool, BeanError> {
    let matches = encrypt_password_hash(password, salt)? == pass_hash;
    if !matches {
        debug!("Password digest mismatch");
    }
    Ok(matches)
}
