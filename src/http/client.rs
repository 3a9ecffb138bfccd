//! HTTP transport for the Clash Royale API
//!
//! A thin wrapper over `reqwest` that joins paths onto the configured base
//! URL, attaches the API key, retries retryable failures with exponential
//! backoff, honours the client-side rate limiter, and maps non-success
//! statuses to typed errors. The API is read-only, so only GET is exposed.

use super::rate_limit::{RateLimitConfig, RateLimiter};
use crate::auth::ApiKey;
use crate::error::{Error, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default base URL of the official API
pub const DEFAULT_BASE_URL: &str = "https://api.clashroyale.com/v1";

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL all request paths are joined onto
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries for retryable failures
    pub max_retries: u32,
    /// Initial delay for exponential backoff
    pub initial_backoff: Duration,
    /// Maximum delay for exponential backoff
    pub max_backoff: Duration,
    /// Client-side rate limiter; `None` disables it
    pub rate_limit: Option<RateLimitConfig>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(10),
            rate_limit: Some(RateLimitConfig::default()),
            user_agent: format!("clash-royale-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP client bound to one API key
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: HttpConfig,
    api_key: ApiKey,
    rate_limiter: Option<RateLimiter>,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// Fails if the base URL does not parse or the TLS backend cannot be
    /// initialized.
    pub fn new(api_key: ApiKey, config: HttpConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            api_key,
            rate_limiter,
        })
    }

    /// Make a GET request and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let response = self.get(path, query).await?;
        Ok(response.json().await?)
    }

    /// Make a GET request, retrying retryable failures
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Response> {
        let url = self.build_url(path);
        let mut attempt = 0;

        loop {
            if let Some(limiter) = &self.rate_limiter {
                limiter.wait().await;
            }

            let mut req = self.client.get(&url);
            if !query.is_empty() {
                req = req.query(query);
            }
            req = self.api_key.apply(req);

            match req.send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        debug!(%status, %url, "request succeeded");
                        return Ok(response);
                    }

                    if is_retryable_status(status) && attempt < self.config.max_retries {
                        let delay = self.backoff_delay(attempt);
                        warn!(
                            %status,
                            attempt = attempt + 1,
                            retries = self.config.max_retries,
                            ?delay,
                            "retrying after retryable status"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(Error::from_status(status.as_u16(), body));
                }
                Err(err) => {
                    if (err.is_timeout() || err.is_connect()) && attempt < self.config.max_retries {
                        let delay = self.backoff_delay(attempt);
                        warn!(
                            error = %err,
                            attempt = attempt + 1,
                            retries = self.config.max_retries,
                            ?delay,
                            "retrying after connection failure"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(Error::Http(err));
                }
            }
        }
    }

    /// Join a request path onto the base URL.
    ///
    /// Paths are pre-encoded (tags arrive as `%23...`), so plain string
    /// joining is deliberate here.
    fn build_url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Exponential backoff delay for a given attempt, capped at the
    /// configured maximum
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        std::cmp::min(
            self.config.initial_backoff.saturating_mul(factor),
            self.config.max_backoff,
        )
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Statuses worth retrying before giving up
fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}
