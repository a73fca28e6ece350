//! ya_news_axum - web pages for the ya_news comments library
//!
//! Mount [`ya_news_router`] at the root of an axum application after calling
//! [`init`] once.

mod config;
mod error;
mod pages;
mod router;
mod session;

pub use config::{YN_LOGIN_URL, YN_REDIRECT_AFTER_LOGIN};
pub use error::IntoResponseError;
pub use router::{ya_news_router, ya_news_router_no_trace};
pub use session::AuthUser;

// Re-export the initialization function from the ya_news crate
pub use ya_news::init;
