//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LEDGERLINE_API_URL` - Base URL of the remote console API
//!   (e.g., `http://localhost:5000/api`)
//!
//! ## Optional
//! - `LEDGERLINE_SESSION_FILE` - Path of the persisted session file
//!   (default: `.ledgerline-session.json` in the working directory)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_SESSION_FILE: &str = ".ledgerline-session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote console API.
    pub api_url: Url,
    /// Path of the file holding the persisted session.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Build a configuration from explicit values.
    #[must_use]
    pub const fn new(api_url: Url, session_file: PathBuf) -> Self {
        Self {
            api_url,
            session_file,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or the
    /// API URL does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = require("LEDGERLINE_API_URL")?;
        let api_url = Url::parse(&raw_url).map_err(|e| {
            ConfigError::InvalidEnvVar("LEDGERLINE_API_URL".to_owned(), e.to_string())
        })?;

        let session_file = std::env::var("LEDGERLINE_SESSION_FILE")
            .map_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from);

        Ok(Self {
            api_url,
            session_file,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_owned()))
}
