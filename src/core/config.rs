use config::Config;
use serde::Deserialize;

use crate::core::error::ConfigError;

const ENV_PREFIX: &str = "BOOKSHELF";
const CONFIG_FILE: &str = "bookshelf";

/// Service settings. An optional `bookshelf.toml` is read first, then
/// `BOOKSHELF_*` environment variables override it.
#[derive(Deserialize, Clone)]
pub struct Args {
    pub log_level: String,
    pub port: u16,
    pub secret: String,
    /// Token validity window in minutes.
    pub token_lifetime: u32,
    pub seed_books: bool,
}

impl std::fmt::Debug for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Args")
            .field("log_level", &self.log_level)
            .field("port", &self.port)
            .field("secret", &"<redacted>")
            .field("token_lifetime", &self.token_lifetime)
            .field("seed_books", &self.seed_books)
            .finish()
    }
}

impl Args {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("log_level", "info")?
            .set_default("port", 8000)?
            .set_default("secret", "")?
            .set_default("token_lifetime", 30)?
            .set_default("seed_books", true)?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let args = config.try_deserialize::<Args>()?;
        args.validate()?;

        Ok(args)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        if self.token_lifetime == 0 {
            return Err(ConfigError::InvalidLifetime);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(secret: &str, token_lifetime: u32) -> Args {
        Args {
            log_level: "info".to_string(),
            port: 8000,
            secret: secret.to_string(),
            token_lifetime,
            seed_books: true,
        }
    }

    #[test]
    fn test_blank_secret_rejected() {
        assert!(matches!(
            args("   ", 30).validate(),
            Err(ConfigError::MissingSecret)
        ));
        assert!(matches!(
            args("", 30).validate(),
            Err(ConfigError::MissingSecret)
        ));
    }

    #[test]
    fn test_zero_lifetime_rejected() {
        assert!(matches!(
            args("hunter2", 0).validate(),
            Err(ConfigError::InvalidLifetime)
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let output = format!("{:?}", args("hunter2", 30));
        assert!(!output.contains("hunter2"));
    }
}
