//! Test server shared by every integration test
//!
//! The server runs in its own thread with its own tokio runtime, so it outlives
//! the runtime of any single `#[tokio::test]`.

use std::sync::{LazyLock, mpsc};
use std::thread;

use chrono::NaiveDate;
use ya_news::{
    Comment, Identity, ModerationConfig, News, UserId, create_comment_core, create_news_core,
    create_user_core,
};

pub struct TestServer {
    pub base_url: String,
    _thread_handle: thread::JoinHandle<()>,
}

impl TestServer {
    fn start() -> Self {
        if let Err(e) = dotenvy::from_filename(".env_test") {
            panic!("Missing .env_test file required for testing: {e}");
        }

        // Start from an empty database
        if let Some(path) = std::env::var("GENERIC_DATA_STORE_URL")
            .ok()
            .and_then(|url| url.strip_prefix("sqlite:").map(str::to_string))
        {
            let _ = std::fs::remove_file(path);
        }

        let (tx, rx) = mpsc::channel();
        let thread_handle = thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async move {
                ya_news_axum::init()
                    .await
                    .expect("Failed to initialize stores");

                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind test listener");
                let addr = listener.local_addr().expect("No local address");
                tx.send(addr).expect("Failed to report test server address");

                axum::serve(listener, ya_news_axum::ya_news_router())
                    .await
                    .expect("Test server failed");
            });
        });

        let addr = rx.recv().expect("Test server did not start");
        println!("Test server listening on {addr}");

        Self {
            base_url: format!("http://{addr}"),
            _thread_handle: thread_handle,
        }
    }
}

static TEST_SERVER: LazyLock<TestServer> = LazyLock::new(TestServer::start);

/// Get the shared server, starting it on first use
pub fn test_server() -> &'static TestServer {
    &TEST_SERVER
}

/// A registered user together with the password used to create it
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub password: String,
}

impl TestUser {
    pub fn identity(&self) -> Identity {
        Identity::Authenticated(UserId::new(self.id.clone()))
    }
}

fn unique_name(prefix: &str) -> String {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!(
        "{prefix}-{}-{n}",
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    )
}

pub async fn seed_user(prefix: &str, is_admin: bool) -> TestUser {
    let username = unique_name(prefix);
    let password = "test-password".to_string();
    let user = create_user_core(&username, &password, is_admin)
        .await
        .expect("Failed to create user");

    TestUser {
        id: user.id,
        username,
        password,
    }
}

pub async fn seed_news() -> News {
    create_news_core(
        "Заголовок",
        "Текст новости",
        NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
    )
    .await
    .expect("Failed to create news")
}

pub async fn seed_comment(author: &TestUser, news: &News, text: &str) -> Comment {
    create_comment_core(
        &author.identity(),
        news.id,
        text,
        &ModerationConfig::default(),
    )
    .await
    .expect("Failed to create comment")
}
