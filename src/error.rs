//! Error types for the corsair scanner

use thiserror::Error;

/// Main error type for corsair operations
#[derive(Debug, Error)]
pub enum CorsairError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("invalid target URL '{0}': a scheme and host are required")]
    InvalidTarget(String),

    #[error("invalid origin '{0}': origins must start with http:// or https://, or be 'null'")]
    InvalidOrigin(String),

    #[error("unexpected HTTP status {status} from target")]
    UnexpectedStatus { status: u16 },

    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for corsair operations
pub type Result<T> = std::result::Result<T, CorsairError>;
