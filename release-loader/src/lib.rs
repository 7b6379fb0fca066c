//! Release loader - fetches MXP release notes for the changelog
//!
//! Requests the release list once, normalizes every usable record into a
//! changelog entry and falls back to the bundled changelog whenever the
//! live data cannot be used.

// Core modules
pub mod config;
pub mod error;
pub mod traits;

// Main functionality modules
pub mod http;
pub mod loader;
pub mod record;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::{LoaderConfig, DEFAULT_ENDPOINT};
pub use error::{LoaderError, RecordError, Result};
pub use http::GitHubReleaseClient;
pub use loader::{ChangelogState, EntrySource, FetchedReleases, LoadOutcome, ReleaseLoader};
pub use record::{decode_releases, normalize_version, release_date, RawRelease, RecordDecode};
pub use traits::ReleaseSource;

/// Load the changelog from the configured endpoint, falling back to the
/// bundled entries when the client cannot be built or the fetch fails
pub async fn load_changelog(config: &LoaderConfig) -> LoadOutcome {
    match ReleaseLoader::from_config(config) {
        Ok(loader) => loader.load().await,
        Err(error) => {
            tracing::warn!(
                error = %error,
                "Invalid loader configuration, keeping bundled changelog"
            );
            LoadOutcome::bundled()
        }
    }
}
