//! Tournament endpoints

use super::paginate;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{Tournament, TournamentHeader};
use crate::pagination::{ListOptions, PaginatedList};
use crate::types::encode_tag;

/// Tournament-related endpoints
#[derive(Debug, Clone, Copy)]
pub struct Tournaments<'a> {
    http: &'a ApiClient,
}

impl<'a> Tournaments<'a> {
    pub(crate) fn new(http: &'a ApiClient) -> Self {
        Self { http }
    }

    /// Get a tournament by tag
    pub async fn get(&self, tag: &str) -> Result<Tournament> {
        self.http
            .get_json(&format!("/tournaments/{}", encode_tag(tag)), &[])
            .await
    }

    /// Search tournaments by name
    pub fn search(
        &self,
        name: &str,
        options: ListOptions,
    ) -> Result<PaginatedList<TournamentHeader>> {
        paginate(
            self.http,
            "/tournaments",
            vec![("name".to_string(), name.to_string())],
            options,
        )
    }
}
