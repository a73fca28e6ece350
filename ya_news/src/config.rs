//! Central configuration for the ya_news crate

use std::sync::LazyLock;

/// Number of articles listed on the home page
/// Default: 10
pub static NEWS_COUNT_ON_HOME_PAGE: LazyLock<i64> = LazyLock::new(|| {
    std::env::var("YN_NEWS_COUNT_ON_HOME_PAGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|n: &i64| *n > 0)
        .unwrap_or(10)
});
