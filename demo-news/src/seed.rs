//! Sample users and articles for trying the site locally

use chrono::{Duration, Utc};
use ya_news::{CoordinationError, create_news_core, create_user_core, list_latest_news_core};

const DEMO_USERS: &[(&str, &str, bool)] = &[
    ("author", "author-password", false),
    ("reader", "reader-password", false),
    ("admin", "admin-password", true),
];

pub(crate) async fn seed_demo_data() -> Result<(), CoordinationError> {
    for (username, password, is_admin) in DEMO_USERS {
        match create_user_core(username, password, *is_admin).await {
            Ok(user) => tracing::info!("Created demo user {} ({})", user.username, user.id),
            // Already seeded on an earlier run
            Err(CoordinationError::FieldError { .. }) => {
                tracing::debug!("Demo user {} already exists", username)
            }
            Err(e) => return Err(e),
        }
    }

    if !list_latest_news_core().await?.is_empty() {
        tracing::debug!("News already present, skipping article seed");
        return Ok(());
    }

    let today = Utc::now().date_naive();
    for day in 0..12 {
        let date = today - Duration::days(day);
        create_news_core(
            &format!("Новость {}", day + 1),
            "Просто текст.",
            date,
        )
        .await?;
    }
    tracing::info!("Created demo news");
    Ok(())
}
