use chrono::NaiveDate;

use crate::news::{errors::NewsError, types::News};
use crate::storage::GENERIC_DATA_STORE;

use super::postgres::*;
use super::sqlite::*;

pub(crate) struct NewsStore;

impl NewsStore {
    pub(crate) async fn init() -> Result<(), NewsError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => create_tables_sqlite(pool).await,
            (_, Some(pool)) => create_tables_postgres(pool).await,
            _ => Err(NewsError::Storage("Unsupported database type".to_string())),
        }
    }

    pub(crate) async fn insert_news(
        title: &str,
        text: &str,
        date: NaiveDate,
    ) -> Result<News, NewsError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            insert_news_sqlite(pool, title, text, date).await
        } else if let Some(pool) = store.as_postgres() {
            insert_news_postgres(pool, title, text, date).await
        } else {
            Err(NewsError::Storage("Unsupported database type".to_string()))
        }
    }

    pub(crate) async fn get_news(id: i64) -> Result<Option<News>, NewsError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_news_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            get_news_postgres(pool, id).await
        } else {
            Err(NewsError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Newest articles first, by publication date
    pub(crate) async fn list_latest(limit: i64) -> Result<Vec<News>, NewsError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            list_latest_sqlite(pool, limit).await
        } else if let Some(pool) = store.as_postgres() {
            list_latest_postgres(pool, limit).await
        } else {
            Err(NewsError::Storage("Unsupported database type".to_string()))
        }
    }
}
