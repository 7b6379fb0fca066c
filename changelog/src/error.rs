use thiserror::Error;

/// Errors that can occur when building changelog entries
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Invalid release date '{0}': {1}")]
    InvalidDate(String, String),
}
