use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub type CommentId = i64;

/// A reader's comment on a news article
///
/// `author_id` and `news_id` are fixed at creation; only `text` ever changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub news_id: i64,
    pub author_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Where to send the reader after the comment was changed
    pub fn comments_anchor_path(&self) -> String {
        format!("{}#comments", crate::news::news_detail_path(self.news_id))
    }
}
