//! Central configuration for the ya_news_axum crate

use std::sync::LazyLock;

/// URL of the login page that anonymous users are sent to
/// Default: "/auth/login/"
pub static YN_LOGIN_URL: LazyLock<String> =
    LazyLock::new(|| std::env::var("YN_LOGIN_URL").unwrap_or_else(|_| "/auth/login/".to_string()));

/// Where to go after login when no usable `next` was given
/// Default: "/"
pub static YN_REDIRECT_AFTER_LOGIN: LazyLock<String> = LazyLock::new(|| {
    std::env::var("YN_REDIRECT_AFTER_LOGIN").unwrap_or_else(|_| "/".to_string())
});
