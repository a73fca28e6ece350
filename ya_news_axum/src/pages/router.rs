use axum::{Router, routing::get};

/// Create a router for the login, logout and signup pages
pub(crate) fn router() -> Router<()> {
    Router::new()
        .route("/login/", get(super::login::login).post(super::login::login_submit))
        .route("/logout/", get(super::logout::logout).post(super::logout::logout))
        .route("/signup/", get(super::signup::signup).post(super::signup::signup_submit))
}
