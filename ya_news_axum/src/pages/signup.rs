use askama::Template;
use axum::{
    extract::Form,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use ya_news::{CoordinationError, signup_core};

use crate::config::YN_LOGIN_URL;
use crate::error::IntoResponseError;
use crate::session::{AuthUser, found};

#[derive(Template)]
#[template(path = "signup.j2")]
struct SignupTemplate {
    user: Option<AuthUser>,
    login_url: &'static str,
    username: String,
    error: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct SignupForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password1: String,
    #[serde(default)]
    password2: String,
}

fn render_signup(username: String, error: Option<String>) -> Result<Response, (StatusCode, String)> {
    let template = SignupTemplate {
        user: None,
        login_url: YN_LOGIN_URL.as_str(),
        username,
        error,
    };
    Ok(Html(template.render().into_response_error()?).into_response())
}

pub(super) async fn signup(user: Option<AuthUser>) -> Result<Response, (StatusCode, String)> {
    match user {
        Some(_) => Ok(found("/")),
        None => render_signup(String::new(), None),
    }
}

pub(super) async fn signup_submit(
    Form(form): Form<SignupForm>,
) -> Result<Response, (StatusCode, String)> {
    match signup_core(&form.username, &form.password1, &form.password2).await {
        Ok(_) => Ok(found(YN_LOGIN_URL.as_str())),
        Err(CoordinationError::FieldError { message, .. }) => {
            render_signup(form.username, Some(message))
        }
        Err(e) => Err::<Response, _>(e).into_response_error(),
    }
}
