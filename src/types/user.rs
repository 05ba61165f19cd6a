use serde::{Deserialize, Serialize};

use crate::types::request::Credentials;

pub(crate) type Username = String;

/// Payload carried inside every issued token.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub(crate) struct Claims {
    pub(crate) username: Username,
    pub(crate) password: String,
    pub(crate) exp: usize,
    pub(crate) authorized: bool,
}

impl std::fmt::Debug for Claims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Claims")
            .field("username", &self.username)
            .field("exp", &self.exp)
            .field("authorized", &self.authorized)
            .finish_non_exhaustive()
    }
}

impl Claims {
    pub(crate) fn new(credentials: &Credentials, exp: usize) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            exp,
            authorized: true,
        }
    }
}
