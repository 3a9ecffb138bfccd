//! Player endpoints

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{Battle, Player, UpcomingChest};
use crate::types::encode_tag;

/// Player-related endpoints
#[derive(Debug, Clone, Copy)]
pub struct Players<'a> {
    http: &'a ApiClient,
}

impl<'a> Players<'a> {
    pub(crate) fn new(http: &'a ApiClient) -> Self {
        Self { http }
    }

    /// Get a player profile by tag
    pub async fn get(&self, tag: &str) -> Result<Player> {
        self.http
            .get_json(&format!("/players/{}", encode_tag(tag)), &[])
            .await
    }

    /// Get a player's recent battles
    pub async fn battle_log(&self, tag: &str) -> Result<Vec<Battle>> {
        self.http
            .get_json(&format!("/players/{}/battlelog", encode_tag(tag)), &[])
            .await
    }

    /// Get a player's upcoming chest cycle
    pub async fn upcoming_chests(&self, tag: &str) -> Result<Vec<UpcomingChest>> {
        let page: crate::models::Page<UpcomingChest> = self
            .http
            .get_json(&format!("/players/{}/upcomingchests", encode_tag(tag)), &[])
            .await?;
        Ok(page.items)
    }
}
