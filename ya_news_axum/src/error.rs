use http::StatusCode;
use ya_news::CoordinationError;

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Map coordination failures to status codes
///
/// A comment that exists but belongs to someone else is reported as
/// `ResourceNotFound` by the core, so it becomes a plain 404 here too.
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match e {
                CoordinationError::Unauthorized => StatusCode::UNAUTHORIZED,
                CoordinationError::Authentication(_) => StatusCode::UNAUTHORIZED,
                CoordinationError::FieldError { .. } => StatusCode::BAD_REQUEST,
                CoordinationError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string())
        })
    }
}

/// Template rendering failures are server errors
impl<T> IntoResponseError<T> for Result<T, askama::Error> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            tracing::error!("Failed to render template: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
    }
}
