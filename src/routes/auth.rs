use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Json, Query, State};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::{Credentials, QueryPairs};
use crate::types::response::{Token, UserInfo};
use crate::types::user::Claims;

#[instrument(skip_all)]
pub(crate) async fn authenticate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Token>, Error> {
    let credentials: Credentials = serde_json::from_slice(&body)?;

    let token = state.token_controller.issue(&credentials)?;

    tracing::info!(username = %credentials.username, "issued token");

    Ok(Json(Token::new(token)))
}

#[instrument(skip_all)]
pub(crate) async fn user_info(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<UserInfo>, Error> {
    let Query(pairs) = query?;

    // First `token` wins when the parameter is repeated.
    let token = pairs
        .into_iter()
        .find_map(|(key, value)| (key == "token").then_some(value))
        .filter(|token| !token.is_empty())
        .ok_or(Error::NoToken)?;

    let claims = state.token_controller.verify(&token)?;

    Ok(Json(UserInfo::from(claims)))
}

pub(crate) async fn secure_api() -> &'static str {
    "secure API returning information"
}

#[instrument(skip_all)]
pub(crate) async fn whoami(Extension(claims): Extension<Claims>) -> Json<UserInfo> {
    Json(UserInfo::from(claims))
}
