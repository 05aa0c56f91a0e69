use std::env;

use thiserror::Error;

pub const DEFAULT_SIGNUP_API_URL: &str = "https://flask-auth-4n0d.onrender.com/user/signup";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid value for {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub signup_api_url: String,
    pub mail: MailConfig,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub server: String,
    pub port: u16,
    pub use_ssl: bool,
    pub username: String,
    pub password: String,
}

impl AppConfig {
    /// Reads all settings once at startup; nothing re-reads the environment
    /// after this.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            signup_api_url: env::var("SIGNUP_API_URL")
                .unwrap_or_else(|_| DEFAULT_SIGNUP_API_URL.to_string()),
            mail: MailConfig::from_env()?,
        })
    }
}

impl MailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: env::var("MAIL_SERVER").map_err(|_| ConfigError::Missing("MAIL_SERVER"))?,
            port: env::var("MAIL_PORT")
                .unwrap_or_else(|_| "465".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("MAIL_PORT"))?,
            use_ssl: env::var("MAIL_USE_SSL")
                .map(|v| parse_bool(&v))
                .unwrap_or(true),
            username: env::var("MAIL_USERNAME")
                .map_err(|_| ConfigError::Missing("MAIL_USERNAME"))?,
            password: env::var("MAIL_PASSWORD")
                .map_err(|_| ConfigError::Missing("MAIL_PASSWORD"))?,
        })
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
