//! Asynchronous API client

use crate::auth::ApiKey;
use crate::error::{Error, Result};
use crate::http::{ApiClient, HttpConfig, RateLimitConfig};
use crate::resources::{
    Cards, Clans, GlobalTournaments, Leaderboards, Locations, Players, Tournaments,
};
use std::time::Duration;

/// Asynchronous Clash Royale API client.
///
/// Cheap to clone; all clones share the connection pool and rate limiter.
///
/// ```rust,ignore
/// use clash_royale::{Client, ClanSearchParams, ListOptions};
///
/// let client = Client::new(std::env::var("CLASH_ROYALE_API_KEY")?)?;
///
/// let player = client.players().get("#9G9JL8QU").await?;
/// println!("{} has {} trophies", player.name, player.trophies);
///
/// let mut clans = client.clans().search(
///     ClanSearchParams::name("Reddit"),
///     ListOptions::new().limit(10),
/// )?;
/// let top = clans.first().await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: ApiClient,
}

impl Client {
    /// Create a client with the default configuration.
    ///
    /// Returns `InvalidApiKey` if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a configuration builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Player endpoints
    pub fn players(&self) -> Players<'_> {
        Players::new(&self.http)
    }

    /// Clan endpoints
    pub fn clans(&self) -> Clans<'_> {
        Clans::new(&self.http)
    }

    /// Card catalogue endpoints
    pub fn cards(&self) -> Cards<'_> {
        Cards::new(&self.http)
    }

    /// Location and ranking endpoints
    pub fn locations(&self) -> Locations<'_> {
        Locations::new(&self.http)
    }

    /// Tournament endpoints
    pub fn tournaments(&self) -> Tournaments<'_> {
        Tournaments::new(&self.http)
    }

    /// Global tournament endpoints
    pub fn global_tournaments(&self) -> GlobalTournaments<'_> {
        GlobalTournaments::new(&self.http)
    }

    /// Leaderboard endpoints
    pub fn leaderboards(&self) -> Leaderboards<'_> {
        Leaderboards::new(&self.http)
    }
}

/// Builder for [`Client`]
///
/// No `Debug` impl: the builder briefly holds the raw API key.
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    config: HttpConfig,
}

impl ClientBuilder {
    /// Set the API key (required)
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the base URL, e.g. to point at the RoyaleAPI proxy
    /// (`https://proxy.royaleapi.dev/v1`)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the number of transport-level retries
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set the backoff window for transport-level retries
    #[must_use]
    pub fn backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Set the client-side rate limit
    #[must_use]
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable client-side rate limiting
    #[must_use]
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<Client> {
        let key = ApiKey::new(self.api_key.ok_or(Error::InvalidApiKey)?)?;
        Ok(Client {
            http: ApiClient::new(key, self.config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_empty_api_key() {
        assert!(matches!(Client::new(""), Err(Error::InvalidApiKey)));
        assert!(matches!(
            Client::builder().build(),
            Err(Error::InvalidApiKey)
        ));
    }

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .api_key("test-key")
            .base_url("https://proxy.royaleapi.dev/v1")
            .timeout(Duration::from_secs(5))
            .no_rate_limit()
            .build()
            .unwrap();

        // Resource handles are available once construction succeeds.
        let _ = client.players();
        let _ = client.clans();
        let _ = client.leaderboards();
    }

    #[test]
    fn test_client_builder_rejects_bad_base_url() {
        let err = Client::builder()
            .api_key("test-key")
            .base_url("::not a url::")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
