//! Error types for the coordination layer

use thiserror::Error;

use crate::comment::CommentError;
use crate::news::NewsError;
use crate::policy::PolicyError;
use crate::session::SessionError;
use crate::userdb::UserError;
use crate::utils::UtilError;

/// Message used when a required form field is empty
pub const FIELD_REQUIRED: &str = "This field is required.";

/// Errors that can occur while handling a request
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// General coordination error
    #[error("Coordination error: {0}")]
    Coordination(String),

    /// Wrong username or password
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The action needs a signed-in user
    #[error("Unauthorized access")]
    Unauthorized,

    /// Submitted form data failed validation for one field
    #[error("Invalid {field}: {message}")]
    FieldError { field: String, message: String },

    /// Missing resource, or one the requester may not see
    #[error("Resource not found: {resource_type} {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    #[error("Comment error: {0}")]
    CommentError(CommentError),

    #[error("News error: {0}")]
    NewsError(NewsError),

    #[error("User error: {0}")]
    UserError(UserError),

    #[error("Session error: {0}")]
    SessionError(SessionError),

    #[error("Utils error: {0}")]
    UtilsError(UtilError),
}

impl CoordinationError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Coordination(msg) => tracing::error!("Coordination error: {}", msg),
            Self::Authentication(msg) => tracing::warn!("Authentication error: {}", msg),
            Self::Unauthorized => tracing::debug!("Unauthorized access"),
            Self::FieldError { field, message } => {
                tracing::debug!("Invalid {}: {}", field, message)
            }
            Self::ResourceNotFound {
                resource_type,
                resource_id,
            } => tracing::debug!("Resource not found: {} {}", resource_type, resource_id),
            Self::CommentError(err) => tracing::error!("Comment error: {}", err),
            Self::NewsError(err) => tracing::error!("News error: {}", err),
            Self::UserError(err) => tracing::error!("User error: {}", err),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
            Self::UtilsError(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }

    pub(super) fn not_found(resource_type: &str, resource_id: impl ToString) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.to_string(),
            resource_id: resource_id.to_string(),
        }
    }

    pub(super) fn field(field: &str, message: impl Into<String>) -> Self {
        Self::FieldError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Translate a policy denial, naming the comment it concerned
    pub(super) fn from_policy(err: PolicyError, comment_id: impl ToString) -> Self {
        match err {
            PolicyError::RequiresAuthentication => Self::Unauthorized,
            PolicyError::ModerationRejected(message) => Self::field("text", message),
            PolicyError::NotFound => Self::not_found("Comment", comment_id),
        }
        .log()
    }
}

// Custom From implementations that automatically log errors

impl From<CommentError> for CoordinationError {
    fn from(err: CommentError) -> Self {
        let error = Self::CommentError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<NewsError> for CoordinationError {
    fn from(err: NewsError) -> Self {
        let error = Self::NewsError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        let error = Self::UserError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UtilError> for CoordinationError {
    fn from(err: UtilError) -> Self {
        let error = Self::UtilsError(err);
        tracing::error!("{}", error);
        error
    }
}
