//! Configuration management for the wallet verifier
//!
//! Loads the verification server location and the wallet provider endpoint
//! from environment variables (and a `.env` file when present). Missing
//! values are collected as diagnostics instead of aborting, so the caller
//! can surface them to the user and carry on.

use std::env;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid environment value: {0}")]
    InvalidValue(String),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}

impl ConfigError {
    /// Message shown to the user for this diagnostic
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::MissingEnvVar(var) if var == "VERIFY_URL" => {
                "URL is not configured. Please contact support.".to_string()
            }
            ConfigError::MissingEnvVar(var) if var == "VERIFY_PORT" => {
                "PORT is not configured. Please contact support.".to_string()
            }
            other => format!("{}. Please contact support.", other),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base URL of the verification server, without port (e.g. `http://localhost`)
    pub verify_url: Option<String>,

    /// Port of the verification server
    pub verify_port: Option<String>,

    /// JSON-RPC endpoint of the wallet provider
    pub wallet_rpc_url: Option<String>,

    /// Refuse to submit a verification when the link carried no token
    pub require_token: bool,

    /// Log level (RUST_LOG)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let require_token = non_empty("REQUIRE_TOKEN")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let log_level = non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string());

        Config {
            verify_url: non_empty("VERIFY_URL"),
            verify_port: non_empty("VERIFY_PORT"),
            wallet_rpc_url: non_empty("WALLET_RPC_URL"),
            require_token,
            log_level,
        }
    }

    /// Check the verification server settings.
    ///
    /// Every problem is reported; none of them stops the widget from running.
    pub fn diagnose(&self) -> Vec<ConfigError> {
        let mut problems = Vec::new();

        if self.verify_url.is_none() {
            problems.push(ConfigError::MissingEnvVar("VERIFY_URL".to_string()));
        }

        match &self.verify_port {
            None => problems.push(ConfigError::MissingEnvVar("VERIFY_PORT".to_string())),
            Some(port) if port.parse::<u16>().is_err() => {
                problems.push(ConfigError::InvalidPort(format!(
                    "VERIFY_PORT must be a valid number, got '{}'",
                    port
                )))
            }
            Some(_) => {}
        }

        problems
    }

    /// Address of the verification endpoint.
    ///
    /// Missing parts are rendered as empty strings, which yields a URL the
    /// HTTP client rejects at send time.
    pub fn verify_endpoint(&self) -> String {
        format!(
            "{}:{}/verify",
            self.verify_url.as_deref().unwrap_or_default().trim_end_matches('/'),
            self.verify_port.as_deref().unwrap_or_default()
        )
    }
}
