use crate::comment::{
    errors::CommentError,
    types::{Comment, CommentId},
};
use crate::storage::GENERIC_DATA_STORE;

use super::postgres::*;
use super::sqlite::*;

/// Persistence for comments
///
/// Each call is a single statement, so it is atomic on its own.
pub(crate) struct CommentStore;

impl CommentStore {
    pub(crate) async fn init() -> Result<(), CommentError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => create_tables_sqlite(pool).await,
            (_, Some(pool)) => create_tables_postgres(pool).await,
            _ => Err(CommentError::Storage("Unsupported database type".to_string())),
        }
    }

    pub(crate) async fn create(
        news_id: i64,
        author_id: &str,
        text: &str,
    ) -> Result<Comment, CommentError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            insert_comment_sqlite(pool, news_id, author_id, text).await
        } else if let Some(pool) = store.as_postgres() {
            insert_comment_postgres(pool, news_id, author_id, text).await
        } else {
            Err(CommentError::Storage("Unsupported database type".to_string()))
        }
    }

    pub(crate) async fn get(id: CommentId) -> Result<Option<Comment>, CommentError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_comment_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            get_comment_postgres(pool, id).await
        } else {
            Err(CommentError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Replace the text of an existing comment, `NotFound` if it is gone
    pub(crate) async fn update(id: CommentId, text: &str) -> Result<Comment, CommentError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let updated = if let Some(pool) = store.as_sqlite() {
            update_comment_text_sqlite(pool, id, text).await?
        } else if let Some(pool) = store.as_postgres() {
            update_comment_text_postgres(pool, id, text).await?
        } else {
            return Err(CommentError::Storage("Unsupported database type".to_string()));
        };

        updated.ok_or(CommentError::NotFound)
    }

    /// Remove a comment, `NotFound` if no row was deleted
    pub(crate) async fn delete(id: CommentId) -> Result<(), CommentError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let rows = if let Some(pool) = store.as_sqlite() {
            delete_comment_sqlite(pool, id).await?
        } else if let Some(pool) = store.as_postgres() {
            delete_comment_postgres(pool, id).await?
        } else {
            return Err(CommentError::Storage("Unsupported database type".to_string()));
        };

        if rows == 0 {
            return Err(CommentError::NotFound);
        }
        Ok(())
    }

    pub(crate) async fn count() -> Result<i64, CommentError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            count_comments_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            count_comments_postgres(pool).await
        } else {
            Err(CommentError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Comments of one article, oldest first
    pub(crate) async fn list_for_news(news_id: i64) -> Result<Vec<Comment>, CommentError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            list_comments_for_news_sqlite(pool, news_id).await
        } else if let Some(pool) = store.as_postgres() {
            list_comments_for_news_postgres(pool, news_id).await
        } else {
            Err(CommentError::Storage("Unsupported database type".to_string()))
        }
    }
}
