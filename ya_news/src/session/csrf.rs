use subtle::ConstantTimeEq;

use super::types::CsrfToken;

/// Compare a submitted form token against the session token in constant time
pub fn verify_csrf_token(expected: &CsrfToken, submitted: &str) -> bool {
    if submitted.is_empty() {
        return false;
    }
    expected
        .as_str()
        .as_bytes()
        .ct_eq(submitted.as_bytes())
        .into()
}
