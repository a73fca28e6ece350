//! ya_news - comments for a news site
//!
//! The crate holds the comment authorization and moderation policy together
//! with the stores, sessions and request-level coordination functions that
//! a web front end needs. The policy itself lives in [`policy`] and is pure;
//! everything that touches storage goes through the `*_core` functions.

mod comment;
mod config;
mod coordination;
mod news;
mod session;
mod storage;
mod userdb;
mod utils;

pub mod policy;

#[cfg(test)]
mod test_utils;

pub use coordination::{
    CommentView, CoordinationError, FIELD_REQUIRED, apply_delete, count_comments_core,
    create_comment_core, create_news_core, create_user_core, delete_comment_core,
    edit_comment_core, get_comment_core, get_comment_for_action, get_news_core,
    list_comments_core, list_latest_news_core, login_core, signup_core,
};

pub use comment::{Comment, CommentError, CommentId};
pub use config::NEWS_COUNT_ON_HOME_PAGE;
pub use news::{News, NewsError, news_detail_path};
pub use userdb::{User, UserError};
pub use utils::UtilError;

pub use policy::{
    CommentAction, Identity, MODERATION_CONFIG, ModerationConfig, PolicyError, UserId,
};

pub use session::{
    CsrfToken, SESSION_COOKIE_NAME, SessionError, User as SessionUser,
    get_user_and_csrf_token_from_session, get_user_from_session, prepare_logout_response,
    verify_csrf_token,
};

/// Initialize the stores, creating tables that do not exist yet
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    storage::init().await?;
    userdb::init().await?;
    news::init().await?;
    comment::init().await?;
    Ok(())
}
