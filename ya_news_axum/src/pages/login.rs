use askama::Template;
use axum::{
    extract::{Form, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use ya_news::{CoordinationError, login_core};

use crate::config::{YN_LOGIN_URL, YN_REDIRECT_AFTER_LOGIN};
use crate::error::IntoResponseError;
use crate::session::{AuthUser, found};

#[derive(Template)]
#[template(path = "login.j2")]
struct LoginTemplate {
    user: Option<AuthUser>,
    login_url: &'static str,
    next: String,
    username: String,
    error: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct NextQuery {
    next: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    next: Option<String>,
}

/// Only same-site paths are followed after login
fn redirect_target(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => YN_REDIRECT_AFTER_LOGIN.as_str(),
    }
}

fn render_login(
    next: String,
    username: String,
    error: Option<String>,
) -> Result<Response, (StatusCode, String)> {
    let template = LoginTemplate {
        user: None,
        login_url: YN_LOGIN_URL.as_str(),
        next,
        username,
        error,
    };
    Ok(Html(template.render().into_response_error()?).into_response())
}

pub(super) async fn login(
    user: Option<AuthUser>,
    Query(params): Query<NextQuery>,
) -> Result<Response, (StatusCode, String)> {
    match user {
        Some(_) => Ok(found(redirect_target(params.next.as_deref()))),
        None => render_login(params.next.unwrap_or_default(), String::new(), None),
    }
}

pub(super) async fn login_submit(
    Form(form): Form<LoginForm>,
) -> Result<Response, (StatusCode, String)> {
    match login_core(&form.username, &form.password).await {
        Ok((headers, _)) => {
            let target = redirect_target(form.next.as_deref());
            Ok((headers, found(target)).into_response())
        }
        Err(CoordinationError::Authentication(message)) => {
            render_login(form.next.unwrap_or_default(), form.username, Some(message))
        }
        Err(e) => Err::<Response, _>(e).into_response_error(),
    }
}
