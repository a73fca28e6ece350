use askama::Template;
use axum::{
    extract::{Form, Path, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use ya_news::{
    Comment, CommentAction, CommentId, CoordinationError, MODERATION_CONFIG, delete_comment_core,
    edit_comment_core, get_comment_for_action, news_detail_path,
};

use crate::config::YN_LOGIN_URL;
use crate::error::IntoResponseError;
use crate::session::{AuthUser, found, identity_of};

#[derive(Template)]
#[template(path = "comment_edit.j2")]
struct EditCommentTemplate {
    user: Option<AuthUser>,
    login_url: &'static str,
    comment_id: CommentId,
    text: String,
    error: Option<String>,
    back_path: String,
}

#[derive(Template)]
#[template(path = "comment_delete.j2")]
struct DeleteCommentTemplate {
    user: Option<AuthUser>,
    login_url: &'static str,
    comment: Comment,
    back_path: String,
}

#[derive(Deserialize, Default)]
pub(crate) struct EditForm {
    #[serde(default)]
    text: String,
    #[serde(default)]
    csrf_token: String,
}

#[derive(Deserialize)]
pub(crate) struct DeleteForm {
    #[serde(default)]
    csrf_token: String,
}

fn render_edit(
    user: Option<AuthUser>,
    comment: &Comment,
    text: String,
    error: Option<String>,
) -> Result<Response, (StatusCode, String)> {
    let template = EditCommentTemplate {
        user,
        login_url: YN_LOGIN_URL.as_str(),
        comment_id: comment.id,
        text,
        error,
        back_path: news_detail_path(comment.news_id),
    };
    Ok(Html(template.render().into_response_error()?).into_response())
}

/// Edit form, shown only to the comment's author
pub(crate) async fn edit_comment_page(
    user: Option<AuthUser>,
    Path(comment_id): Path<CommentId>,
) -> Result<Response, (StatusCode, String)> {
    let comment =
        get_comment_for_action(&identity_of(user.as_ref()), comment_id, CommentAction::Edit)
            .await
            .into_response_error()?;

    let text = comment.text.clone();
    render_edit(user, &comment, text, None)
}

pub(crate) async fn edit_comment(
    user: Option<AuthUser>,
    Path(comment_id): Path<CommentId>,
    form: Result<Form<EditForm>, FormRejection>,
) -> Result<Response, (StatusCode, String)> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    if let Some(user) = &user {
        user.verify_form_csrf(&form.csrf_token)?;
    }

    let identity = identity_of(user.as_ref());
    match edit_comment_core(&identity, comment_id, &form.text, &MODERATION_CONFIG).await {
        Ok(comment) => Ok(found(&comment.comments_anchor_path())),
        Err(CoordinationError::FieldError { message, .. }) => {
            let comment = get_comment_for_action(&identity, comment_id, CommentAction::Edit)
                .await
                .into_response_error()?;
            render_edit(user, &comment, form.text, Some(message))
        }
        Err(e) => Err::<Response, _>(e).into_response_error(),
    }
}

/// Delete confirmation, shown only to the comment's author
pub(crate) async fn delete_comment_page(
    user: Option<AuthUser>,
    Path(comment_id): Path<CommentId>,
) -> Result<Response, (StatusCode, String)> {
    let comment = get_comment_for_action(
        &identity_of(user.as_ref()),
        comment_id,
        CommentAction::Delete,
    )
    .await
    .into_response_error()?;

    let template = DeleteCommentTemplate {
        user,
        login_url: YN_LOGIN_URL.as_str(),
        back_path: news_detail_path(comment.news_id),
        comment,
    };
    Ok(Html(template.render().into_response_error()?).into_response())
}

pub(crate) async fn delete_comment(
    user: Option<AuthUser>,
    Path(comment_id): Path<CommentId>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> Result<Response, (StatusCode, String)> {
    if let Some(user) = &user {
        let submitted = form.map(|Form(f)| f.csrf_token).unwrap_or_default();
        user.verify_form_csrf(&submitted)?;
    }

    let comment = delete_comment_core(&identity_of(user.as_ref()), comment_id)
        .await
        .into_response_error()?;
    Ok(found(&comment.comments_anchor_path()))
}
