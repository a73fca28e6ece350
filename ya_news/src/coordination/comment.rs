use std::collections::HashMap;

use crate::comment::{Comment, CommentError, CommentId, CommentStore};
use crate::news::NewsStore;
use crate::policy::{
    CommentAction, Identity, ModerationConfig, apply_edit, authorize_create, authorize_mutate,
    moderate,
};
use crate::userdb::UserStore;

use super::errors::{CoordinationError, FIELD_REQUIRED};

/// A comment together with its author's display name
#[derive(Debug, Clone, PartialEq)]
pub struct CommentView {
    pub comment: Comment,
    pub author_name: String,
}

fn check_text(text: &str, moderation: &ModerationConfig) -> Result<(), CoordinationError> {
    if text.trim().is_empty() {
        return Err(CoordinationError::field("text", FIELD_REQUIRED).log());
    }
    moderate(moderation, text).map_err(|e| CoordinationError::from_policy(e, "-"))
}

async fn load_comment(comment_id: CommentId) -> Result<Comment, CoordinationError> {
    CommentStore::get(comment_id)
        .await?
        .ok_or_else(|| CoordinationError::not_found("Comment", comment_id).log())
}

/// Create a comment on an article for the requesting user
///
/// Anonymous requests fail with `Unauthorized` before anything else is
/// looked at. Text that is empty or contains a banned word fails with a
/// `FieldError` on `text` and nothing is stored.
pub async fn create_comment_core(
    identity: &Identity,
    news_id: i64,
    text: &str,
    moderation: &ModerationConfig,
) -> Result<Comment, CoordinationError> {
    let author_id =
        authorize_create(identity).map_err(|e| CoordinationError::from_policy(e, "-"))?;

    if NewsStore::get_news(news_id).await?.is_none() {
        return Err(CoordinationError::not_found("News", news_id).log());
    }

    check_text(text, moderation)?;

    let comment = CommentStore::create(news_id, author_id.as_str(), text).await?;
    tracing::info!(
        comment_id = comment.id,
        news_id,
        author_id = %author_id,
        "Comment created"
    );
    Ok(comment)
}

/// Load a comment the requester is about to edit or delete
///
/// Used to render the edit form and the delete confirmation. Non-authors get
/// `ResourceNotFound`, exactly as for a comment that does not exist.
pub async fn get_comment_for_action(
    identity: &Identity,
    comment_id: CommentId,
    action: CommentAction,
) -> Result<Comment, CoordinationError> {
    let comment = load_comment(comment_id).await?;
    authorize_mutate(identity, &comment, action)
        .map_err(|e| CoordinationError::from_policy(e, comment_id))?;
    Ok(comment)
}

/// Replace the text of the requester's own comment
///
/// The new text goes through the same checks as on creation.
pub async fn edit_comment_core(
    identity: &Identity,
    comment_id: CommentId,
    text: &str,
    moderation: &ModerationConfig,
) -> Result<Comment, CoordinationError> {
    let comment = get_comment_for_action(identity, comment_id, CommentAction::Edit).await?;

    check_text(text, moderation)?;

    let edited = apply_edit(comment, text);
    let stored = CommentStore::update(edited.id, &edited.text)
        .await
        .map_err(|e| match e {
            // Deleted between the ownership check and the update
            CommentError::NotFound => CoordinationError::not_found("Comment", comment_id).log(),
            other => other.into(),
        })?;

    tracing::info!(comment_id, "Comment edited");
    Ok(stored)
}

/// Delete the requester's own comment, returning what was removed
///
/// Deleting a comment that is already gone reports `ResourceNotFound`.
pub async fn delete_comment_core(
    identity: &Identity,
    comment_id: CommentId,
) -> Result<Comment, CoordinationError> {
    let comment = get_comment_for_action(identity, comment_id, CommentAction::Delete).await?;
    apply_delete(&comment).await?;
    Ok(comment)
}

/// Remove an already authorized comment from storage
pub async fn apply_delete(comment: &Comment) -> Result<(), CoordinationError> {
    CommentStore::delete(comment.id).await.map_err(|e| match e {
        CommentError::NotFound => CoordinationError::not_found("Comment", comment.id).log(),
        other => other.into(),
    })?;

    tracing::info!(
        comment_id = comment.id,
        news_id = comment.news_id,
        "Comment deleted"
    );
    Ok(())
}

/// Comments of an article, oldest first, with author names resolved
pub async fn list_comments_core(news_id: i64) -> Result<Vec<CommentView>, CoordinationError> {
    let comments = CommentStore::list_for_news(news_id).await?;

    let mut names: HashMap<String, String> = HashMap::new();
    let mut views = Vec::with_capacity(comments.len());
    for comment in comments {
        let author_name = match names.get(&comment.author_id) {
            Some(name) => name.clone(),
            None => {
                let name = UserStore::get_user(&comment.author_id)
                    .await?
                    .map(|u| u.username)
                    .unwrap_or_default();
                names.insert(comment.author_id.clone(), name.clone());
                name
            }
        };
        views.push(CommentView {
            comment,
            author_name,
        });
    }

    Ok(views)
}

/// Total number of stored comments
pub async fn count_comments_core() -> Result<i64, CoordinationError> {
    Ok(CommentStore::count().await?)
}

/// Look up a single comment without any ownership check
pub async fn get_comment_core(comment_id: CommentId) -> Result<Option<Comment>, CoordinationError> {
    Ok(CommentStore::get(comment_id).await?)
}
