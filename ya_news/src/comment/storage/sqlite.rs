use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::comment::{
    errors::CommentError,
    types::{Comment, CommentId},
};
use crate::storage::{DB_TABLE_COMMENTS, DB_TABLE_NEWS, DB_TABLE_USERS};

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();
    let news_table = DB_TABLE_NEWS.as_str();
    let users_table = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            news_id INTEGER NOT NULL REFERENCES {news_table}(id) ON DELETE CASCADE,
            author_id TEXT NOT NULL REFERENCES {users_table}(id) ON DELETE CASCADE,
            text TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        r#"
        CREATE INDEX IF NOT EXISTS idx_{table_name}_news_id ON {table_name}(news_id)
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn insert_comment_sqlite(
    pool: &Pool<Sqlite>,
    news_id: i64,
    author_id: &str,
    text: &str,
) -> Result<Comment, CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();

    Ok(sqlx::query_as::<_, Comment>(&format!(
        r#"
        INSERT INTO {table_name} (news_id, author_id, text, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#
    ))
    .bind(news_id)
    .bind(author_id)
    .bind(text)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?)
}

pub(super) async fn get_comment_sqlite(
    pool: &Pool<Sqlite>,
    id: CommentId,
) -> Result<Option<Comment>, CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();

    Ok(sqlx::query_as::<_, Comment>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?)
}

pub(super) async fn update_comment_text_sqlite(
    pool: &Pool<Sqlite>,
    id: CommentId,
    text: &str,
) -> Result<Option<Comment>, CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();

    Ok(sqlx::query_as::<_, Comment>(&format!(
        r#"
        UPDATE {table_name} SET text = ? WHERE id = ?
        RETURNING *
        "#
    ))
    .bind(text)
    .bind(id)
    .fetch_optional(pool)
    .await?)
}

pub(super) async fn delete_comment_sqlite(
    pool: &Pool<Sqlite>,
    id: CommentId,
) -> Result<u64, CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub(super) async fn count_comments_sqlite(pool: &Pool<Sqlite>) -> Result<i64, CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();

    let (count,): (i64,) = sqlx::query_as(&format!(
        r#"
        SELECT COUNT(*) FROM {table_name}
        "#
    ))
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub(super) async fn list_comments_for_news_sqlite(
    pool: &Pool<Sqlite>,
    news_id: i64,
) -> Result<Vec<Comment>, CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();

    // Timestamps are stored as text with variable precision; AUTOINCREMENT ids follow insertion order
    Ok(sqlx::query_as::<_, Comment>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE news_id = ? ORDER BY id ASC
        "#
    ))
    .bind(news_id)
    .fetch_all(pool)
    .await?)
}
