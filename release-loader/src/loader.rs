use crate::config::LoaderConfig;
use crate::error::{RecordError, Result};
use crate::http::GitHubReleaseClient;
use crate::record::{decode_releases, RecordDecode};
use crate::traits::ReleaseSource;
use changelog::{bundled_entries, ChangelogEntry};
use serde::Serialize;

/// Where the entries of a load outcome came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    /// The changelog bundled with the crate
    #[default]
    Default,
    /// Entries decoded from the release endpoint
    Live,
}

/// Result of one load attempt; always carries something to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadOutcome {
    pub source: EntrySource,
    pub entries: Vec<ChangelogEntry>,
    /// Release records dropped during decoding
    #[serde(skip)]
    pub skipped: Vec<RecordError>,
}

impl LoadOutcome {
    /// Outcome holding the bundled changelog
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            source: EntrySource::Default,
            entries: bundled_entries(),
            skipped: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.source == EntrySource::Live
    }
}

/// Live entries of a successful fetch together with the records that were dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedReleases {
    pub entries: Vec<ChangelogEntry>,
    pub skipped: Vec<RecordError>,
}

/// Turns a release source into changelog entries, falling back to the bundled list
pub struct ReleaseLoader<S: ReleaseSource> {
    source: S,
}

impl ReleaseLoader<GitHubReleaseClient> {
    /// Loader reading from the configured GitHub endpoint
    pub fn from_config(config: &LoaderConfig) -> Result<Self> {
        Ok(Self::new(GitHubReleaseClient::new(config)?))
    }
}

impl<S: ReleaseSource> ReleaseLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches and normalizes the release list, reporting transport and
    /// body failures to the caller
    pub async fn try_load(&self) -> Result<FetchedReleases> {
        let body = self.source.fetch_releases().await?;
        let decoded = decode_releases(&body)?;

        let mut entries = Vec::with_capacity(decoded.len());
        let mut skipped = Vec::new();
        for (index, record) in decoded.into_iter().enumerate() {
            let normalized = match record {
                RecordDecode::Record(release) => release.into_entry(index),
                RecordDecode::Invalid(error) => Err(error),
            };
            match normalized {
                Ok(entry) => entries.push(entry),
                Err(error) => {
                    tracing::warn!(
                        index = error.index,
                        reason = %error.reason,
                        "Skipping release record"
                    );
                    skipped.push(error);
                }
            }
        }

        Ok(FetchedReleases { entries, skipped })
    }

    /// Loads the changelog to display. Never fails: any problem leaves the
    /// bundled changelog in place and is only logged.
    pub async fn load(&self) -> LoadOutcome {
        match self.try_load().await {
            Ok(fetched) if !fetched.entries.is_empty() => {
                tracing::debug!(
                    entries = fetched.entries.len(),
                    skipped = fetched.skipped.len(),
                    "Using live changelog"
                );
                LoadOutcome {
                    source: EntrySource::Live,
                    entries: fetched.entries,
                    skipped: fetched.skipped,
                }
            }
            Ok(fetched) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    skipped = fetched.skipped.len(),
                    "No usable releases returned, keeping bundled changelog"
                );
                LoadOutcome {
                    skipped: fetched.skipped,
                    ..LoadOutcome::bundled()
                }
            }
            Err(error) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    error = %error,
                    "Failed to fetch changelog, keeping bundled changelog"
                );
                LoadOutcome::bundled()
            }
        }
    }
}

/// What a changelog view holds between renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogState {
    pub entries: Vec<ChangelogEntry>,
    pub source: EntrySource,
    pub loading: bool,
}

impl Default for ChangelogState {
    fn default() -> Self {
        Self {
            entries: bundled_entries(),
            source: EntrySource::Default,
            loading: false,
        }
    }
}

impl ChangelogState {
    /// Marks a load as in flight; the displayed entries stay as they are
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replaces the displayed entries with the outcome's and clears the loading flag
    pub fn apply(&mut self, outcome: LoadOutcome) {
        self.entries = outcome.entries;
        self.source = outcome.source;
        self.loading = false;
    }

    /// Runs one load through `loader` and applies its outcome
    pub async fn refresh<S: ReleaseSource>(&mut self, loader: &ReleaseLoader<S>) {
        self.begin_load();
        let outcome = loader.load().await;
        self.apply(outcome);
    }
}
