//! Server configuration from environment.

use solary_core::PortalUrls;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub database_path: String,
    pub database_max_connections: u32,
    pub login_url: String,
    pub signup_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = PortalUrls::default();
        Self {
            server_port: env::var("SOLARY_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            database_path: env::var("SOLARY_DB")
                .unwrap_or_else(|_| "data/solary.db".to_string()),
            database_max_connections: env::var("SOLARY_DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            login_url: env::var("SOLARY_LOGIN_URL").unwrap_or(defaults.login),
            signup_url: env::var("SOLARY_SIGNUP_URL").unwrap_or(defaults.signup),
        }
    }

    /// Portal links rendered into auth/subscription error messages.
    pub fn portal_urls(&self) -> PortalUrls {
        PortalUrls {
            login: self.login_url.clone(),
            signup: self.signup_url.clone(),
        }
    }
}
