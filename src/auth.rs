//! API key authentication
//!
//! The Clash Royale API authenticates every request with a static bearer
//! token created on the developer portal. The key is validated once at
//! client construction and attached to each outgoing request.

use crate::error::{Error, Result};
use reqwest::RequestBuilder;

/// A validated Clash Royale API key.
///
/// Rejects empty or whitespace-only keys at construction so a
/// misconfigured client fails before the first request.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key, rejecting empty values
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::InvalidApiKey);
        }
        Ok(Self(key))
    }

    /// Attach the key to a request as a bearer Authorization header
    pub(crate) fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.bearer_auth(&self.0)
    }
}

// Keep the key out of logs and debug output.
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_accepts_non_empty() {
        assert!(ApiKey::new("eyJ0eXAiOiJKV1Qi").is_ok());
    }

    #[test]
    fn test_api_key_rejects_empty() {
        assert!(matches!(ApiKey::new(""), Err(Error::InvalidApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(Error::InvalidApiKey)));
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
