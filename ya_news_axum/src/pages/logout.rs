use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::{TypedHeader, headers};

use ya_news::prepare_logout_response;

use crate::session::found;

/// Clear the session and go back to the home page
pub(super) async fn logout(
    cookies: Option<TypedHeader<headers::Cookie>>,
) -> Result<Response, (StatusCode, String)> {
    let Some(TypedHeader(cookies)) = cookies else {
        return Ok(found("/"));
    };

    let headers = prepare_logout_response(cookies)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::debug!("Logged out, redirecting to /");
    Ok((headers, found("/")).into_response())
}
