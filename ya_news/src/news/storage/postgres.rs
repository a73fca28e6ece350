use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Postgres};

use crate::news::{errors::NewsError, types::News};
use crate::storage::DB_TABLE_NEWS;

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), NewsError> {
    let table_name = DB_TABLE_NEWS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            text TEXT NOT NULL,
            date DATE NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn insert_news_postgres(
    pool: &Pool<Postgres>,
    title: &str,
    text: &str,
    date: NaiveDate,
) -> Result<News, NewsError> {
    let table_name = DB_TABLE_NEWS.as_str();

    Ok(sqlx::query_as::<_, News>(&format!(
        r#"
        INSERT INTO {table_name} (title, text, date, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#
    ))
    .bind(title)
    .bind(text)
    .bind(date)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?)
}

pub(super) async fn get_news_postgres(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<News>, NewsError> {
    let table_name = DB_TABLE_NEWS.as_str();

    Ok(sqlx::query_as::<_, News>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?)
}

pub(super) async fn list_latest_postgres(
    pool: &Pool<Postgres>,
    limit: i64,
) -> Result<Vec<News>, NewsError> {
    let table_name = DB_TABLE_NEWS.as_str();

    Ok(sqlx::query_as::<_, News>(&format!(
        r#"
        SELECT * FROM {table_name} ORDER BY date DESC, id DESC LIMIT $1
        "#
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?)
}
