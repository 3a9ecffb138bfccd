//! Global tournament endpoints

use super::paginate;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::GlobalTournament;
use crate::pagination::{ListOptions, PaginatedList};

/// Global tournament endpoints
#[derive(Debug, Clone, Copy)]
pub struct GlobalTournaments<'a> {
    http: &'a ApiClient,
}

impl<'a> GlobalTournaments<'a> {
    pub(crate) fn new(http: &'a ApiClient) -> Self {
        Self { http }
    }

    /// List scheduled global tournaments
    pub fn list(&self, options: ListOptions) -> Result<PaginatedList<GlobalTournament>> {
        paginate(self.http, "/globaltournaments", Vec::new(), options)
    }
}
