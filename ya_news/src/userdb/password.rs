//! Password hashing with PBKDF2-HMAC-SHA256

use std::num::NonZeroU32;

use ring::pbkdf2;

use super::config::PASSWORD_HASH_ITERATIONS;
use super::errors::UserError;
use crate::utils::{base64url_decode, base64url_encode, gen_random_bytes};

const ALGORITHM_TAG: &str = "pbkdf2_sha256";
const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

pub(crate) fn hash_password(password: &str) -> Result<String, UserError> {
    hash_password_with_iterations(password, *PASSWORD_HASH_ITERATIONS)
}

fn hash_password_with_iterations(password: &str, iterations: u32) -> Result<String, UserError> {
    let iterations = NonZeroU32::new(iterations)
        .ok_or_else(|| UserError::InvalidData("Iteration count must be positive".to_string()))?;
    let salt = gen_random_bytes(SALT_LEN).map_err(|e| UserError::InvalidData(e.to_string()))?;

    let mut hash = [0u8; HASH_LEN];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        iterations,
        &salt,
        password.as_bytes(),
        &mut hash,
    );

    Ok(format!(
        "{ALGORITHM_TAG}${}${}${}",
        iterations,
        base64url_encode(&salt),
        base64url_encode(&hash)
    ))
}

/// Returns false for a wrong password or a malformed stored hash.
pub(crate) fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(tag), Some(iterations), Some(salt), Some(hash), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        tracing::warn!("Malformed password hash");
        return false;
    };

    if tag != ALGORITHM_TAG {
        tracing::warn!("Unsupported password hash algorithm: {}", tag);
        return false;
    }

    let Some(iterations) = iterations.parse::<u32>().ok().and_then(NonZeroU32::new) else {
        return false;
    };
    let (Ok(salt), Ok(hash)) = (base64url_decode(salt), base64url_decode(hash)) else {
        return false;
    };

    pbkdf2::verify(
        pbkdf2::PBKDF2_HMAC_SHA256,
        iterations,
        &salt,
        password.as_bytes(),
        &hash,
    )
    .is_ok()
}
