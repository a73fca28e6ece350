use crate::comment::Comment;

use super::errors::PolicyError;
use super::identity::{Identity, UserId};

/// Mutations reserved to a comment's author
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentAction {
    Edit,
    Delete,
}

/// Anyone signed in may attempt to comment; returns the acting user
pub fn authorize_create(identity: &Identity) -> Result<&UserId, PolicyError> {
    match identity {
        Identity::Authenticated(user_id) => Ok(user_id),
        Identity::Anonymous => {
            tracing::debug!("Anonymous comment attempt, authentication required");
            Err(PolicyError::RequiresAuthentication)
        }
    }
}

/// Only the author may edit or delete a comment
///
/// Everyone else, anonymous or signed in, administrators included, gets
/// `NotFound` so the comment's existence is not revealed.
pub fn authorize_mutate(
    identity: &Identity,
    comment: &Comment,
    action: CommentAction,
) -> Result<(), PolicyError> {
    match identity {
        Identity::Authenticated(user_id) if user_id.as_str() == comment.author_id => Ok(()),
        _ => {
            tracing::warn!(
                comment_id = comment.id,
                requester = ?identity.user_id().map(UserId::as_str),
                ?action,
                "Comment mutation denied (not the author)"
            );
            Err(PolicyError::NotFound)
        }
    }
}

/// Replace the comment text; id, author, article and creation time are kept
pub fn apply_edit(comment: Comment, new_text: impl Into<String>) -> Comment {
    Comment {
        text: new_text.into(),
        ..comment
    }
}
