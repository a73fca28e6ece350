use chrono::{Duration, Utc};
use http::header::HeaderMap;

use crate::storage::GENERIC_CACHE_STORE;
use crate::userdb::UserStore;
use crate::utils::{gen_random_string, header_set_cookie};

use super::config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
use super::errors::SessionError;
use super::types::{CsrfToken, StoredSession, User as SessionUser};

const SESSION_PREFIX: &str = "session";

/// Start a session for `user_id` and return the `Set-Cookie` headers for it
pub async fn create_new_session_with_uid(user_id: &str) -> Result<HeaderMap, SessionError> {
    let session_id = gen_random_string(32)?;
    let csrf_token = gen_random_string(32)?;
    let expires_at = Utc::now() + Duration::seconds(*SESSION_COOKIE_MAX_AGE as i64);

    let stored_session = StoredSession {
        user_id: user_id.to_string(),
        csrf_token,
        expires_at,
        ttl: *SESSION_COOKIE_MAX_AGE,
    };

    GENERIC_CACHE_STORE
        .lock()
        .await
        .put_with_ttl(
            SESSION_PREFIX,
            &session_id,
            stored_session.try_into()?,
            *SESSION_COOKIE_MAX_AGE as usize,
        )
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        &session_id,
        *SESSION_COOKIE_MAX_AGE as i64,
    )?;

    tracing::debug!(user_id, "Created new session");
    Ok(headers)
}

/// Expire the session cookie and forget the session
pub async fn prepare_logout_response(cookies: headers::Cookie) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, SESSION_COOKIE_NAME.as_str(), "value", -86400)?;

    if let Some(session_id) = cookies.get(SESSION_COOKIE_NAME.as_str()) {
        delete_session_from_store(session_id).await?;
    }
    Ok(headers)
}

async fn delete_session_from_store(session_id: &str) -> Result<(), SessionError> {
    GENERIC_CACHE_STORE
        .lock()
        .await
        .remove(SESSION_PREFIX, session_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))
}

async fn load_live_session(session_id: &str) -> Result<StoredSession, SessionError> {
    let cached_session = GENERIC_CACHE_STORE
        .lock()
        .await
        .get(SESSION_PREFIX, session_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?
        .ok_or(SessionError::SessionError)?;

    let stored_session: StoredSession = cached_session.try_into()?;

    if stored_session.expires_at < Utc::now() {
        tracing::debug!("Session expired at {}", stored_session.expires_at);
        delete_session_from_store(session_id).await?;
        return Err(SessionError::SessionExpiredError);
    }

    Ok(stored_session)
}

/// Resolve a session cookie to the user it belongs to
pub async fn get_user_from_session(session_id: &str) -> Result<SessionUser, SessionError> {
    let (user, _) = get_user_and_csrf_token_from_session(session_id).await?;
    Ok(user)
}

/// Resolve a session cookie to its user and CSRF token
///
/// The user is re-read from the database, so a deleted account ends the session.
pub async fn get_user_and_csrf_token_from_session(
    session_id: &str,
) -> Result<(SessionUser, CsrfToken), SessionError> {
    let stored_session = load_live_session(session_id).await?;

    let user = UserStore::get_user(&stored_session.user_id)
        .await?
        .ok_or(SessionError::SessionError)?;

    Ok((
        SessionUser::from(user),
        CsrfToken::new(stored_session.csrf_token),
    ))
}
