use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// HMAC secret for signing bearer tokens. Injected here (and carried in
    /// `AppState`) so tests can use their own secret and rotation only needs
    /// an environment change.
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let token_ttl_hours = match std::env::var("TOKEN_TTL_HOURS") {
            Ok(value) => value.parse::<i64>().map_err(|err| {
                ConfigError::InvalidEnvVar("TOKEN_TTL_HOURS".to_string(), err.to_string())
            })?,
            Err(_) => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            token_ttl_hours,
        })
    }
}
