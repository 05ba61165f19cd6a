use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};

use crate::core::error::Error;
use crate::core::state::AppState;

/// Pulls the token out of an `Authorization` value. Both a bare token and
/// `Bearer <token>` are accepted.
pub(crate) fn extract_token(value: &str) -> &str {
    let value = value.trim();

    match value.split_once(char::is_whitespace) {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
        _ => value,
    }
}

pub(crate) async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let auth_header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(Error::NoCredentials)?;

    let token = extract_token(auth_header.to_str()?);

    if token.is_empty() {
        return Err(Error::NoCredentials);
    }

    let claims = state.token_controller.verify(token)?;

    tracing::debug!(username = %claims.username, "token verified");

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
