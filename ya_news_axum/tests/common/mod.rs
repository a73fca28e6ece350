//! Shared helpers for the integration tests

pub mod test_server;

pub use mock_browser::{MockBrowser, location};
pub use test_server::{seed_comment, seed_news, seed_user, test_server};
