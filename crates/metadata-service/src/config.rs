//! Configuration management for the Metadata Service
//!
//! Loads configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server host
    pub api_host: String,

    /// API server port
    pub api_port: u16,

    /// Width of the time bucket that seeds the artwork, in milliseconds
    pub seed_window_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            api_host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            api_port: lookup("API_PORT")
                .unwrap_or_else(|| "8084".to_string())
                .parse()
                .context("Invalid API_PORT")?,

            seed_window_ms: lookup("SEED_WINDOW_MS")
                .unwrap_or_else(|| "30000".to_string())
                .parse()
                .context("Invalid SEED_WINDOW_MS")?,
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.api_port == 0 {
            anyhow::bail!("API_PORT must be greater than 0");
        }

        if self.seed_window_ms == 0 {
            anyhow::bail!("SEED_WINDOW_MS must be greater than 0");
        }

        Ok(())
    }

    /// Get the API server address
    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}
