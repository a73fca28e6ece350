use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum NewsError {
    #[error("News not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for NewsError {
    fn from(err: sqlx::Error) -> Self {
        NewsError::Storage(err.to_string())
    }
}
