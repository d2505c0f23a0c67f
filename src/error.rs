//! Error types for the puppybowl CLI

use thiserror::Error;

/// Result type alias for puppybowl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors raised while talking to the players API.
///
/// `Rejected` and `Empty` carry exactly the text shown to the user, so their
/// `Display` output is the bare message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, broken body...)
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not a players API envelope
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The API answered with `success: false`
    #[error("{0}")]
    Rejected(String),

    /// The collection was empty where at least one player was required
    #[error("No players available.")]
    Empty,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}. Run `puppybowl init` to create one.")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
