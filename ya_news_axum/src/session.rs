use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Response},
};
use axum_extra::{TypedHeader, headers};
use chrono::{DateTime, Utc};
use http::{Method, StatusCode, header::LOCATION, request::Parts};

use ya_news::{
    CsrfToken, Identity, SESSION_COOKIE_NAME, SessionUser, UserId,
    get_user_and_csrf_token_from_session, verify_csrf_token,
};

use super::config::YN_LOGIN_URL;

/// Plain `302 Found` redirect
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

/// Send the visitor to the login page, coming back to `next` afterwards
pub(crate) fn login_redirect(next: &str) -> Response {
    // Keep slashes readable, the way `?next=/news/1/` is usually written
    let next = urlencoding::encode(next).replace("%2F", "/");
    let location = format!("{}?next={}", YN_LOGIN_URL.as_str(), next);
    tracing::debug!("Redirecting to {}", location);
    found(&location)
}

pub struct AuthRedirect {
    method: Method,
    next: String,
    /// The session is valid but the request failed the CSRF check
    csrf_rejected: bool,
}

impl AuthRedirect {
    fn new(parts: &Parts) -> Self {
        let next = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string());
        Self {
            method: parts.method.clone(),
            next,
            csrf_rejected: false,
        }
    }

    fn csrf_rejected(parts: &Parts) -> Self {
        Self {
            csrf_rejected: true,
            ..Self::new(parts)
        }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        if self.csrf_rejected {
            (StatusCode::FORBIDDEN, "CSRF token mismatch").into_response()
        } else if self.method == Method::GET {
            login_redirect(&self.next)
        } else {
            tracing::debug!("Unauthorized");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

/// Signed-in user, available as an Axum extractor
///
/// Handlers that also serve anonymous visitors take `Option<AuthUser>`.
/// For POST requests a matching `X-CSRF-Token` header is accepted; form
/// submissions without it must carry the token in a `csrf_token` field,
/// which the handler checks with [`AuthUser::verify_form_csrf`].
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    /// CSRF token of the user's session, echoed into every form
    pub csrf_token: CsrfToken,
    /// Whether CSRF token was verified via header
    pub csrf_via_header_verified: bool,
}

impl AuthUser {
    fn new(session_user: SessionUser, csrf_token: CsrfToken) -> Self {
        Self {
            id: session_user.id,
            username: session_user.username,
            is_admin: session_user.is_admin,
            created_at: session_user.created_at,
            csrf_token,
            csrf_via_header_verified: false,
        }
    }

    /// Check the token submitted in a form body
    pub fn verify_form_csrf(&self, submitted: &str) -> Result<(), (StatusCode, String)> {
        if self.csrf_via_header_verified || verify_csrf_token(&self.csrf_token, submitted) {
            Ok(())
        } else {
            tracing::warn!(user_id = %self.id, "CSRF token mismatch in form submission");
            Err((StatusCode::FORBIDDEN, "CSRF token mismatch".to_string()))
        }
    }
}

impl From<&AuthUser> for Identity {
    fn from(user: &AuthUser) -> Self {
        Identity::Authenticated(UserId::new(user.id.clone()))
    }
}

/// Identity of a request that may or may not be signed in
pub(crate) fn identity_of(user: Option<&AuthUser>) -> Identity {
    user.map(Identity::from).unwrap_or(Identity::Anonymous)
}

impl<B> FromRequestParts<B> for AuthUser
where
    B: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _: &B) -> Result<Self, Self::Rejection> {
        let cookies: TypedHeader<headers::Cookie> = parts.extract().await.map_err(|_| {
            tracing::debug!("No cookies in request");
            AuthRedirect::new(parts)
        })?;

        let session_cookie = cookies.get(SESSION_COOKIE_NAME.as_str()).ok_or_else(|| {
            tracing::debug!("No session cookie: {:?}", SESSION_COOKIE_NAME.as_str());
            AuthRedirect::new(parts)
        })?;

        let (session_user, csrf_token) = get_user_and_csrf_token_from_session(session_cookie)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to get user and csrf token from session: {}", e);
                AuthRedirect::new(parts)
            })?;

        let mut auth_user = AuthUser::new(session_user, csrf_token);

        if parts.method == Method::POST {
            if let Some(header_csrf_token) = parts
                .headers
                .get("X-CSRF-Token")
                .and_then(|h| h.to_str().ok())
            {
                if verify_csrf_token(&auth_user.csrf_token, header_csrf_token) {
                    auth_user.csrf_via_header_verified = true;
                    tracing::trace!("CSRF token via X-CSRF-Token header verified.");
                } else {
                    tracing::error!("CSRF token mismatch (X-CSRF-Token)");
                    return Err(AuthRedirect::csrf_rejected(parts));
                }
            } else {
                let content_type = parts
                    .headers
                    .get(http::header::CONTENT_TYPE)
                    .and_then(|h| h.to_str().ok());

                let is_form_like = content_type.is_some_and(|ct| {
                    ct.starts_with("application/x-www-form-urlencoded")
                        || ct.starts_with("multipart/form-data")
                });

                if !is_form_like {
                    tracing::warn!(
                        "CSRF protection: X-CSRF-Token header missing for POST with non-form Content-Type ('{:?}'). Rejecting.",
                        content_type
                    );
                    return Err(AuthRedirect::csrf_rejected(parts));
                }
            }
        }

        Ok(auth_user)
    }
}

impl<B> OptionalFromRequestParts<B> for AuthUser
where
    B: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &B,
    ) -> Result<Option<Self>, Self::Rejection> {
        // A signed-in visitor failing the CSRF check is not downgraded to anonymous
        match <AuthUser as FromRequestParts<B>>::from_request_parts(parts, state).await {
            Ok(user) => Ok(Some(user)),
            Err(rejection) if rejection.csrf_rejected => Err(rejection),
            Err(_) => Ok(None),
        }
    }
}
