//! Error types for Jojigi

use thiserror::Error;

/// Result type alias using Jojigi's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in Jojigi
#[derive(Error, Debug)]
pub enum Error {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    ConfigMissing(String),

    #[error("Gemini API Error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[cfg(feature = "native")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    /// Error message reported by the recommend endpoint
    #[error("{0}")]
    Api(String),
}

impl Error {
    /// HTTP status the handler answers with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::MethodNotAllowed => 405,
            _ => 500,
        }
    }
}
