mod config;
mod csrf;
mod errors;
mod session;
mod types;

pub use config::SESSION_COOKIE_NAME;
pub use csrf::verify_csrf_token;
pub use errors::SessionError;
pub use session::{
    create_new_session_with_uid, get_user_and_csrf_token_from_session, get_user_from_session,
    prepare_logout_response,
};
pub use types::{CsrfToken, User};
