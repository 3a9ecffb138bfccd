//! Card endpoints

use super::paginate;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::Card;
use crate::pagination::{ListOptions, PaginatedList};

/// Card catalogue endpoints
#[derive(Debug, Clone, Copy)]
pub struct Cards<'a> {
    http: &'a ApiClient,
}

impl<'a> Cards<'a> {
    pub(crate) fn new(http: &'a ApiClient) -> Self {
        Self { http }
    }

    /// List all available cards
    pub fn list(&self, options: ListOptions) -> Result<PaginatedList<Card>> {
        paginate(self.http, "/cards", Vec::new(), options)
    }
}
