use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A published news article
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub text: String,
    /// Publication date shown to readers, newest first on the home page
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl News {
    /// Path of the article's detail page
    pub fn detail_path(&self) -> String {
        news_detail_path(self.id)
    }
}

pub fn news_detail_path(news_id: i64) -> String {
    format!("/news/{news_id}/")
}
