use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::comment::{
    errors::CommentError,
    types::{Comment, CommentId},
};
use crate::storage::{DB_TABLE_COMMENTS, DB_TABLE_NEWS, DB_TABLE_USERS};

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();
    let news_table = DB_TABLE_NEWS.as_str();
    let users_table = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id BIGSERIAL PRIMARY KEY,
            news_id BIGINT NOT NULL REFERENCES {news_table}(id) ON DELETE CASCADE,
            author_id TEXT NOT NULL REFERENCES {users_table}(id) ON DELETE CASCADE,
            text TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
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

pub(super) async fn insert_comment_postgres(
    pool: &Pool<Postgres>,
    news_id: i64,
    author_id: &str,
    text: &str,
) -> Result<Comment, CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();

    Ok(sqlx::query_as::<_, Comment>(&format!(
        r#"
        INSERT INTO {table_name} (news_id, author_id, text, created_at)
        VALUES ($1, $2, $3, $4)
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

pub(super) async fn get_comment_postgres(
    pool: &Pool<Postgres>,
    id: CommentId,
) -> Result<Option<Comment>, CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();

    Ok(sqlx::query_as::<_, Comment>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?)
}

pub(super) async fn update_comment_text_postgres(
    pool: &Pool<Postgres>,
    id: CommentId,
    text: &str,
) -> Result<Option<Comment>, CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();

    Ok(sqlx::query_as::<_, Comment>(&format!(
        r#"
        UPDATE {table_name} SET text = $1 WHERE id = $2
        RETURNING *
        "#
    ))
    .bind(text)
    .bind(id)
    .fetch_optional(pool)
    .await?)
}

pub(super) async fn delete_comment_postgres(
    pool: &Pool<Postgres>,
    id: CommentId,
) -> Result<u64, CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub(super) async fn count_comments_postgres(pool: &Pool<Postgres>) -> Result<i64, CommentError> {
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

pub(super) async fn list_comments_for_news_postgres(
    pool: &Pool<Postgres>,
    news_id: i64,
) -> Result<Vec<Comment>, CommentError> {
    let table_name = DB_TABLE_COMMENTS.as_str();

    Ok(sqlx::query_as::<_, Comment>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE news_id = $1 ORDER BY created_at ASC, id ASC
        "#
    ))
    .bind(news_id)
    .fetch_all(pool)
    .await?)
}
