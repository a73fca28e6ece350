//! Request-level operations
//!
//! Each function here is one user-visible action. It resolves what it needs
//! from the stores, asks the policy for a decision and persists the outcome.
//!
//! - `comment`: create, edit, delete and list comments
//! - `news`: articles for the home and detail pages
//! - `user`: signup and login
//! - `errors`: the error type shared by all of them

mod comment;
mod errors;
mod news;
mod user;

pub use comment::{
    CommentView, apply_delete, count_comments_core, create_comment_core, delete_comment_core,
    edit_comment_core, get_comment_core, get_comment_for_action, list_comments_core,
};
pub use errors::{CoordinationError, FIELD_REQUIRED};
pub use news::{create_news_core, get_news_core, list_latest_news_core};
pub use user::{create_user_core, login_core, signup_core};
