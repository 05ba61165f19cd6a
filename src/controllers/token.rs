use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::core::error::Error;
use crate::types::request::Credentials;
use crate::types::user::Claims;

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub(crate) struct TokenController {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl std::fmt::Debug for TokenController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenController")
            .field("algorithm", &ALGORITHM)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

impl TokenController {
    pub(crate) fn new(secret: &str, lifetime_minutes: u32) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime: Duration::minutes(i64::from(lifetime_minutes)),
        }
    }

    pub(crate) fn issue(&self, credentials: &Credentials) -> Result<String, Error> {
        let exp = (Utc::now() + self.lifetime).timestamp() as usize;

        self.sign(&Claims::new(credentials, exp))
    }

    fn sign(&self, claims: &Claims) -> Result<String, Error> {
        jsonwebtoken::encode(&Header::new(ALGORITHM), claims, &self.encoding_key)
            .map_err(Error::Signing)
    }

    pub(crate) fn verify(&self, token: &str) -> Result<Claims, Error> {
        match jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(token_data) => Ok(token_data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(Error::ExpiredJWT),
                _ => Err(Error::InvalidToken(e)),
            },
        }
    }
}
