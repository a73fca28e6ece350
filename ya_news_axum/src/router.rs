//! Router for all news site pages

use axum::{Router, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::pages;

/// Create the router for every page of the site
///
/// - `/` latest news
/// - `/news/{id}/` article with comments, POST to comment
/// - `/edit_comment/{id}/` and `/delete_comment/{id}/` for the author
/// - `/auth/login/`, `/auth/logout/`, `/auth/signup/`
pub fn ya_news_router() -> Router {
    ya_news_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`ya_news_router`] without the HTTP tracing middleware
pub fn ya_news_router_no_trace() -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route(
            "/news/{id}/",
            get(pages::news_detail).post(pages::create_comment),
        )
        .route(
            "/edit_comment/{id}/",
            get(pages::edit_comment_page).post(pages::edit_comment),
        )
        .route(
            "/delete_comment/{id}/",
            get(pages::delete_comment_page).post(pages::delete_comment),
        )
        .nest("/auth", pages::auth_router())
}
