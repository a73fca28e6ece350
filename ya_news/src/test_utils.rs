//! Shared setup for tests that touch the global stores

use std::sync::Once;

use http::HeaderMap;
use http::header::SET_COOKIE;

use crate::comment::{Comment, CommentStore};
use crate::news::{News, NewsStore};
use crate::userdb::{User, UserStore, hash_password};

/// Load `.env_test` once per test binary and start from an empty database file
pub(crate) fn load_test_env() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        if let Some(db_path) = extract_sqlite_file_path() {
            // Missing file is fine
            let _ = std::fs::remove_file(&db_path);
        }
    });
}

/// Load the test environment and make sure every table exists
pub(crate) async fn init_test_environment() {
    load_test_env();

    if let Err(e) = crate::init().await {
        eprintln!("Warning: Failed to initialize stores: {e}");
    }
}

/// A name that does not collide with ones made by other tests
pub(crate) fn unique_name(prefix: &str) -> String {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!(
        "{prefix}-{}-{n}",
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    )
}

/// An article with two readers: its future comment author and an admin
pub(crate) struct TestFixtures {
    pub(crate) author: User,
    pub(crate) admin: User,
    pub(crate) news: News,
}

impl TestFixtures {
    pub(crate) async fn create() -> Self {
        let author = insert_user("author", false).await;
        let admin = insert_user("admin", true).await;
        let news = NewsStore::insert_news(
            "Заголовок",
            "Текст",
            chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        )
        .await
        .expect("Failed to insert news");

        Self {
            author,
            admin,
            news,
        }
    }

    pub(crate) async fn comment_by_author(&self, text: &str) -> Comment {
        CommentStore::create(self.news.id, &self.author.id, text)
            .await
            .expect("Failed to insert comment")
    }
}

async fn insert_user(prefix: &str, is_admin: bool) -> User {
    let password_hash = hash_password("password").expect("Failed to hash password");
    let user = User {
        is_admin,
        ..User::new(unique_name("id"), unique_name(prefix), password_hash)
    };
    UserStore::insert_user(user)
        .await
        .expect("Failed to insert user")
}

/// Session id carried by the `Set-Cookie` header of a fresh session
pub(crate) fn session_id_from_headers(headers: &HeaderMap) -> String {
    let cookie = headers
        .get(SET_COOKIE)
        .expect("No Set-Cookie header")
        .to_str()
        .expect("Set-Cookie is not ASCII");
    let pair = cookie.split(';').next().unwrap_or_default();
    pair.split_once('=')
        .map(|(_, value)| value.to_string())
        .expect("Malformed Set-Cookie header")
}

fn extract_sqlite_file_path() -> Option<String> {
    let url = std::env::var("GENERIC_DATA_STORE_URL").ok()?;
    let path = url.strip_prefix("sqlite:")?;
    let path = path.strip_prefix("file:").unwrap_or(path);
    let path = path.strip_prefix("//").unwrap_or(path);
    let path = path.split('?').next()?;

    if path.contains(":memory:") {
        None
    } else {
        Some(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            SET_COOKIE,
            "__Host-SessionId=abc123; SameSite=Lax; Secure; HttpOnly; Path=/; Max-Age=600"
                .parse()
                .unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers), "abc123");
    }

    #[test]
    fn test_unique_name_differs() {
        assert_ne!(unique_name("x"), unique_name("x"));
    }
}
