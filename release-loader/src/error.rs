use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release-loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Ways fetching the release list can fail
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Release endpoint {url} answered with HTTP {status}")]
    Status { status: u16, url: String },

    #[error("Unexpected response shape: expected a JSON array of releases, found {found}")]
    UnexpectedShape { found: String },
}

impl LoaderError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new non-success status error
    pub fn status<S: Into<String>>(status: u16, url: S) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File operation failed: {e}"),
            Self::Http(e) => format!("Could not reach the release server: {e}"),
            Self::UrlParse(e) => format!("Invalid URL: {e}"),
            Self::MalformedBody(e) => format!("The release server sent invalid JSON: {e}"),
            Self::ConfigNotFound { path } => {
                format!("Configuration file not found: {}", path.display())
            }
            Self::InvalidConfig { message } => format!("Invalid configuration: {message}"),
            Self::Status { status, url } => format!("{url} answered with HTTP {status}"),
            Self::UnexpectedShape { found } => {
                format!("Expected a list of releases but received {found}")
            }
        }
    }
}

/// A single release record that could not be turned into a changelog entry
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Release record #{index} skipped: {reason}")]
pub struct RecordError {
    /// Position of the record in the response array
    pub index: usize,
    pub reason: String,
}

impl RecordError {
    pub fn new<S: Into<String>>(index: usize, reason: S) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}
