use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub locale: LocaleConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale used when a request carries no usable Accept-Language
    pub default_locale: String,
    /// Optional JSON message catalog; unset means no localization
    pub catalog_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .context("SERVER_PORT must be a valid port number")?,
            },
            locale: LocaleConfig {
                default_locale: env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string()),
                catalog_path: env::var("MESSAGE_CATALOG_PATH").ok(),
            },
        })
    }
}
