use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_PROXY_API_BASE: &str = "https://api.vxtwitter.com";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub proxy_api_base: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            proxy_api_base: env::var("PROXY_API_BASE")
                .unwrap_or_else(|_| DEFAULT_PROXY_API_BASE.to_string()),
        })
    }
}
