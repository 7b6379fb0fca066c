use crate::error::{LoaderError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Release-list endpoint queried when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/repos/yafatek/mxp-protocol/releases";

/// Settings for fetching the live release list
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoaderConfig {
    /// URL returning a JSON array of release records
    pub endpoint: String,
    /// Human-facing page listing all releases
    pub releases_page: String,
    /// Request timeout in seconds; the HTTP client default applies when unset
    pub timeout_seconds: Option<u64>,
    /// Sent with every request, GitHub rejects anonymous agents
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            releases_page: changelog::RELEASES_PAGE_URL.to_string(),
            timeout_seconds: None,
            user_agent: format!("mxp-changelog/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl LoaderConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(LoaderError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;

        let config: LoaderConfig = toml::from_str(&content).map_err(|e| {
            LoaderError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parsed endpoint URL; only http and https are accepted
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(LoaderError::invalid_config(format!(
                "Unsupported endpoint scheme '{scheme}' in {}",
                self.endpoint
            ))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.endpoint_url()?;

        if self.user_agent.trim().is_empty() {
            return Err(LoaderError::invalid_config("user_agent must not be empty"));
        }

        if self.timeout_seconds == Some(0) {
            return Err(LoaderError::invalid_config(
                "timeout_seconds must be greater than zero",
            ));
        }

        Ok(())
    }
}
