use chrono::NaiveDate;

use crate::config::NEWS_COUNT_ON_HOME_PAGE;
use crate::news::{News, NewsStore};

use super::errors::{CoordinationError, FIELD_REQUIRED};

/// Publish an article
///
/// Articles are seeded through the library; the web surface only reads them.
pub async fn create_news_core(
    title: &str,
    text: &str,
    date: NaiveDate,
) -> Result<News, CoordinationError> {
    if title.trim().is_empty() {
        return Err(CoordinationError::field("title", FIELD_REQUIRED).log());
    }
    let news = NewsStore::insert_news(title, text, date).await?;
    tracing::info!(news_id = news.id, "News created");
    Ok(news)
}

/// Load one article or fail with `ResourceNotFound`
pub async fn get_news_core(news_id: i64) -> Result<News, CoordinationError> {
    NewsStore::get_news(news_id)
        .await?
        .ok_or_else(|| CoordinationError::not_found("News", news_id).log())
}

/// Articles for the home page, newest first
pub async fn list_latest_news_core() -> Result<Vec<News>, CoordinationError> {
    Ok(NewsStore::list_latest(*NEWS_COUNT_ON_HOME_PAGE).await?)
}
