use thiserror::Error;

/// Outcome of a denied policy decision
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Anonymous request; the caller sends the user to the login page
    #[error("Authentication required")]
    RequiresAuthentication,

    /// Text failed moderation; carries the message shown next to the field
    #[error("{0}")]
    ModerationRejected(String),

    /// Missing, or present but not owned by the requester
    #[error("Not found")]
    NotFound,
}
