use askama::Template;
use axum::{
    extract::{Form, Path, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use ya_news::{
    CommentView, CoordinationError, MODERATION_CONFIG, News, create_comment_core, get_news_core,
    list_comments_core, news_detail_path,
};

use crate::config::YN_LOGIN_URL;
use crate::error::IntoResponseError;
use crate::session::{AuthUser, found, identity_of, login_redirect};

#[derive(Template)]
#[template(path = "news_detail.j2")]
struct NewsDetailTemplate {
    user: Option<AuthUser>,
    login_url: &'static str,
    news: News,
    comments: Vec<CommentView>,
    /// Text to put back into the comment form
    text: String,
    error: Option<String>,
}

#[derive(Deserialize, Default)]
pub(crate) struct CommentForm {
    #[serde(default)]
    text: String,
    #[serde(default)]
    csrf_token: String,
}

async fn render_detail(
    user: Option<AuthUser>,
    news_id: i64,
    text: String,
    error: Option<String>,
) -> Result<Response, (StatusCode, String)> {
    let news = get_news_core(news_id).await.into_response_error()?;
    let comments = list_comments_core(news_id).await.into_response_error()?;

    let template = NewsDetailTemplate {
        user,
        login_url: YN_LOGIN_URL.as_str(),
        news,
        comments,
        text,
        error,
    };
    Ok(Html(template.render().into_response_error()?).into_response())
}

pub(crate) async fn news_detail(
    user: Option<AuthUser>,
    Path(news_id): Path<i64>,
) -> Result<Response, (StatusCode, String)> {
    render_detail(user, news_id, String::new(), None).await
}

/// Post a comment; a rejected text re-renders the page with the form filled in
///
/// A missing or unreadable body counts as an empty form, so the policy
/// decides the outcome rather than the body parser.
pub(crate) async fn create_comment(
    user: Option<AuthUser>,
    Path(news_id): Path<i64>,
    form: Result<Form<CommentForm>, FormRejection>,
) -> Result<Response, (StatusCode, String)> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    if let Some(user) = &user {
        user.verify_form_csrf(&form.csrf_token)?;
    }

    let identity = identity_of(user.as_ref());
    match create_comment_core(&identity, news_id, &form.text, &MODERATION_CONFIG).await {
        Ok(comment) => Ok(found(&comment.comments_anchor_path())),
        Err(CoordinationError::Unauthorized) => Ok(login_redirect(&news_detail_path(news_id))),
        Err(CoordinationError::FieldError { message, .. }) => {
            render_detail(user, news_id, form.text, Some(message)).await
        }
        Err(e) => Err::<Response, _>(e).into_response_error(),
    }
}
