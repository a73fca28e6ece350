use std::sync::LazyLock;

/// PBKDF2 iteration count used for newly hashed passwords.
///
/// Existing hashes carry their own count, so lowering this only affects new accounts.
pub(super) static PASSWORD_HASH_ITERATIONS: LazyLock<u32> = LazyLock::new(|| {
    std::env::var("YN_PASSWORD_HASH_ITERATIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(100_000)
});
