use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::types::response::Message;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Signing secret is missing or blank")]
    MissingSecret,
    #[error("Token lifetime must be at least one minute")]
    InvalidLifetime,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("An authorization header is required")]
    NoCredentials,
    #[error("A token query parameter is required")]
    NoToken,
    #[error("Token is expired")]
    ExpiredJWT,
    #[error("Invalid authorization token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
    #[error("Invalid authorization header")]
    Header(#[from] axum::http::header::ToStrError),
    #[error("Could not sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("Book not found")]
    BookNotFound,
    #[error("{}", .0.body_text())]
    QueryRejection(#[from] QueryRejection),
    #[error("Invalid request body: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Authentication failures keep a 200 status; clients tell them apart by body shape.
        let status = match &self {
            Error::NoCredentials
            | Error::NoToken
            | Error::ExpiredJWT
            | Error::InvalidToken(_)
            | Error::Header(_)
            | Error::QueryRejection(_) => StatusCode::OK,
            Error::BookNotFound => StatusCode::NOT_FOUND,
            Error::Deserialize(_) => StatusCode::BAD_REQUEST,
            Error::Signing(_) | Error::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{:?}", self);
        } else {
            tracing::warn!("{:?}", self);
        }

        (status, Json(Message::new(&self.to_string()))).into_response()
    }
}
