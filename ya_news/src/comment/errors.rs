use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum CommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for CommentError {
    fn from(err: sqlx::Error) -> Self {
        CommentError::Storage(err.to_string())
    }
}
