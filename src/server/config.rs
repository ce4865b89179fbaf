use std::net::{IpAddr, SocketAddr};

use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_userinfo_url: String,

    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_redirect_url: required("GOOGLE_REDIRECT_URL")?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            google_userinfo_url: GOOGLE_USERINFO_URL.to_string(),
            host: optional("HOST", DEFAULT_HOST)?
                .parse()
                .map_err(|e: std::net::AddrParseError| invalid("HOST", e.to_string()))?,
            port: optional("PORT", &DEFAULT_PORT.to_string())?
                .parse()
                .map_err(|e: std::num::ParseIntError| invalid("PORT", e.to_string()))?,
        })
    }

    /// Socket address the HTTP listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) => Ok(value),
        Err(std::env::VarError::NotPresent) => Ok(default.to_string()),
        Err(e) => Err(invalid(name, e.to_string())),
    }
}

fn invalid(name: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason,
    }
}
