use crate::config::LoaderConfig;
use crate::error::{LoaderError, Result};
use crate::traits::ReleaseSource;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Release source backed by the GitHub releases API
#[derive(Clone)]
pub struct GitHubReleaseClient {
    client: Client,
    endpoint: Url,
}

impl GitHubReleaseClient {
    /// Create a new client from loader configuration
    pub fn new(config: &LoaderConfig) -> Result<Self> {
        config.validate()?;
        let endpoint = config.endpoint_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|_| {
                LoaderError::invalid_config(format!(
                    "user_agent '{}' is not a valid header value",
                    config.user_agent
                ))
            })?,
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self { client, endpoint })
    }
}

impl ReleaseSource for GitHubReleaseClient {
    async fn fetch_releases(&self) -> Result<String> {
        tracing::debug!(endpoint = %self.endpoint, "Requesting release list");

        let response = self.client.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoaderError::status(status.as_u16(), self.endpoint.as_str()));
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "Release list received");
        Ok(body)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}
