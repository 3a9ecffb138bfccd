//! Leaderboard endpoints

use super::paginate;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{Leaderboard, LeaderboardPlayer, Page};
use crate::pagination::{ListOptions, PaginatedList};

/// Leaderboard endpoints
#[derive(Debug, Clone, Copy)]
pub struct Leaderboards<'a> {
    http: &'a ApiClient,
}

impl<'a> Leaderboards<'a> {
    pub(crate) fn new(http: &'a ApiClient) -> Self {
        Self { http }
    }

    /// List the available leaderboards
    pub async fn list(&self) -> Result<Vec<Leaderboard>> {
        let page: Page<Leaderboard> = self.http.get_json("/leaderboards", &[]).await?;
        Ok(page.items)
    }

    /// Get the players on a leaderboard
    pub fn get(
        &self,
        leaderboard_id: u64,
        options: ListOptions,
    ) -> Result<PaginatedList<LeaderboardPlayer>> {
        paginate(
            self.http,
            format!("/leaderboard/{leaderboard_id}"),
            Vec::new(),
            options,
        )
    }
}
