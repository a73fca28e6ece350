use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use ya_news::{News, list_latest_news_core};

use crate::config::YN_LOGIN_URL;
use crate::error::IntoResponseError;
use crate::session::AuthUser;

#[derive(Template)]
#[template(path = "home.j2")]
struct HomeTemplate {
    user: Option<AuthUser>,
    login_url: &'static str,
    news: Vec<News>,
}

pub(crate) async fn home(user: Option<AuthUser>) -> Result<Response, (StatusCode, String)> {
    let news = list_latest_news_core().await.into_response_error()?;

    let template = HomeTemplate {
        user,
        login_url: YN_LOGIN_URL.as_str(),
        news,
    };
    Ok(Html(template.render().into_response_error()?).into_response())
}
