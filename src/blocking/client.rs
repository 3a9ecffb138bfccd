//! Blocking API client

use super::resources::{
    Cards, Clans, GlobalTournaments, Leaderboards, Locations, Players, Tournaments,
};
use crate::error::Result;
use crate::http::RateLimitConfig;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Blocking Clash Royale API client.
///
/// Drives the asynchronous [`Client`](crate::Client) on an internal
/// current-thread runtime, so every method blocks the calling thread until
/// the underlying request completes. Do not use it from inside an async
/// context; use the asynchronous client there instead.
#[derive(Debug, Clone)]
pub struct Client {
    pub(super) inner: crate::Client,
    pub(super) runtime: Arc<Runtime>,
}

impl Client {
    /// Create a blocking client with the default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a configuration builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub(super) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Player endpoints
    pub fn players(&self) -> Players<'_> {
        Players::new(self)
    }

    /// Clan endpoints
    pub fn clans(&self) -> Clans<'_> {
        Clans::new(self)
    }

    /// Card catalogue endpoints
    pub fn cards(&self) -> Cards<'_> {
        Cards::new(self)
    }

    /// Location and ranking endpoints
    pub fn locations(&self) -> Locations<'_> {
        Locations::new(self)
    }

    /// Tournament endpoints
    pub fn tournaments(&self) -> Tournaments<'_> {
        Tournaments::new(self)
    }

    /// Global tournament endpoints
    pub fn global_tournaments(&self) -> GlobalTournaments<'_> {
        GlobalTournaments::new(self)
    }

    /// Leaderboard endpoints
    pub fn leaderboards(&self) -> Leaderboards<'_> {
        Leaderboards::new(self)
    }
}

/// Builder for the blocking [`Client`]
#[derive(Default)]
pub struct ClientBuilder {
    inner: crate::ClientBuilder,
}

impl ClientBuilder {
    /// Set the API key (required)
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.inner = self.inner.api_key(key);
        self
    }

    /// Override the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Set the number of transport-level retries
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.inner = self.inner.max_retries(retries);
        self
    }

    /// Set the backoff window for transport-level retries
    #[must_use]
    pub fn backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.inner = self.inner.backoff(initial, max);
        self
    }

    /// Set the client-side rate limit
    #[must_use]
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.inner = self.inner.rate_limit(config);
        self
    }

    /// Disable client-side rate limiting
    #[must_use]
    pub fn no_rate_limit(mut self) -> Self {
        self.inner = self.inner.no_rate_limit();
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.inner = self.inner.user_agent(agent);
        self
    }

    /// Build the client and its internal runtime
    pub fn build(self) -> Result<Client> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Client {
            inner: self.inner.build()?,
            runtime: Arc::new(runtime),
        })
    }
}
