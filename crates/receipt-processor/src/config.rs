//! Configuration management for the Receipt Processor
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
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let config = Config {
            api_host: env::var("RECEIPTS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            api_port: env::var("RECEIPTS_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid RECEIPTS_PORT")?,
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.api_port == 0 {
            anyhow::bail!("RECEIPTS_PORT must be greater than 0");
        }

        if self.api_host.trim().is_empty() {
            anyhow::bail!("RECEIPTS_HOST cannot be empty");
        }

        Ok(())
    }

    /// Get the API server address
    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}
