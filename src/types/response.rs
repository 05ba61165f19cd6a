use serde::Serialize;

use crate::types::user::{Claims, Username};

#[derive(Debug, Serialize)]
pub(crate) struct Token {
    pub(crate) token: String,
}

impl Token {
    pub(crate) fn new(token: String) -> Self {
        Self { token }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Message {
    pub(crate) message: String,
}

impl Message {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct UserInfo {
    pub(crate) username: Username,
    pub(crate) password: String,
}

impl From<Claims> for UserInfo {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            password: claims.password,
        }
    }
}
