use http::HeaderMap;

use crate::session::create_new_session_with_uid;
use crate::userdb::{User, UserStore, hash_password, verify_password};
use crate::utils::gen_random_string;

use super::errors::{CoordinationError, FIELD_REQUIRED};

const USERNAME_TAKEN: &str = "A user with that username already exists.";
const PASSWORDS_DIFFER: &str = "The two password fields didn't match.";
const INVALID_LOGIN: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

/// Register a new reader from the signup form
pub async fn signup_core(
    username: &str,
    password: &str,
    password_confirmation: &str,
) -> Result<User, CoordinationError> {
    if password != password_confirmation {
        return Err(CoordinationError::field("password2", PASSWORDS_DIFFER).log());
    }
    create_user_core(username, password, false).await
}

/// Create a user account with a hashed password
pub async fn create_user_core(
    username: &str,
    password: &str,
    is_admin: bool,
) -> Result<User, CoordinationError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(CoordinationError::field("username", FIELD_REQUIRED).log());
    }
    if password.is_empty() {
        return Err(CoordinationError::field("password", FIELD_REQUIRED).log());
    }
    if UserStore::get_user_by_username(username).await?.is_some() {
        return Err(CoordinationError::field("username", USERNAME_TAKEN).log());
    }

    let id = gen_new_user_id().await?;
    let user = User {
        is_admin,
        ..User::new(id, username.to_string(), hash_password(password)?)
    };

    let user = UserStore::insert_user(user).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "User created");
    Ok(user)
}

/// Check credentials and open a session
///
/// Returns the `Set-Cookie` headers of the new session. Unknown usernames and
/// wrong passwords fail the same way.
pub async fn login_core(
    username: &str,
    password: &str,
) -> Result<(HeaderMap, User), CoordinationError> {
    let user = UserStore::get_user_by_username(username.trim()).await?;

    let Some(user) = user.filter(|u| verify_password(password, &u.password_hash)) else {
        return Err(CoordinationError::Authentication(INVALID_LOGIN.to_string()).log());
    };

    let headers = create_new_session_with_uid(&user.id).await?;
    tracing::debug!(user_id = %user.id, "User logged in");
    Ok((headers, user))
}

// generate a unique user ID, retrying on the unlikely collision
async fn gen_new_user_id() -> Result<String, CoordinationError> {
    for _ in 0..3 {
        let id = gen_random_string(32)?;
        if UserStore::get_user(&id).await?.is_none() {
            return Ok(id);
        }
    }

    Err(CoordinationError::Coordination(
        "Failed to generate a unique user ID after multiple attempts".to_string(),
    )
    .log())
}
