use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct Credentials {
    #[serde(default)]
    pub(crate) username: String,
    #[serde(default)]
    pub(crate) password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Raw query parameters in request order; repeated keys are kept.
pub(crate) type QueryPairs = Vec<(String, String)>;
