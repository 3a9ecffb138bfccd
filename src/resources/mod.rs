//! Per-resource request builders
//!
//! Each resource is a lightweight handle borrowed from the
//! [`Client`](crate::Client). Listing endpoints return a
//! [`PaginatedList`](crate::pagination::PaginatedList) driven by
//! [`PagedEndpoint`], the crate's fetch collaborator: one GET per page
//! with the cursor in `after` and the page size in `limit`.

mod cards;
mod clans;
mod global_tournaments;
mod leaderboards;
mod locations;
mod players;
mod tournaments;

pub use cards::Cards;
pub use clans::{ClanSearchParams, Clans};
pub use global_tournaments::GlobalTournaments;
pub use leaderboards::Leaderboards;
pub use locations::Locations;
pub use players::Players;
pub use tournaments::Tournaments;

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::Page;
use crate::pagination::{FetchPage, FetchedPage, ListOptions, PageRequest, PaginatedList};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Fetch collaborator for one cursor-paginated endpoint.
///
/// Owns a clone of the transport plus the endpoint path and its fixed
/// query parameters; each call appends the page's `after`/`limit`
/// parameters, issues the GET and unwraps the page envelope.
pub(crate) struct PagedEndpoint<T> {
    http: ApiClient,
    path: String,
    query: Vec<(String, String)>,
    _item: PhantomData<fn() -> T>,
}

impl<T> PagedEndpoint<T> {
    pub(crate) fn new(http: &ApiClient, path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            http: http.clone(),
            path: path.into(),
            query,
            _item: PhantomData,
        }
    }
}

#[async_trait]
impl<T> FetchPage<T> for PagedEndpoint<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&mut self, request: PageRequest) -> Result<FetchedPage<T>> {
        let mut query = self.query.clone();
        query.push(("limit".to_string(), request.page_size.to_string()));
        if let Some(cursor) = request.cursor {
            query.push(("after".to_string(), cursor));
        }

        let page: Page<T> = self.http.get_json(&self.path, &query).await?;
        let next_cursor = page.after_cursor().map(str::to_string);
        Ok(FetchedPage {
            items: page.items,
            next_cursor,
        })
    }
}

/// Build a paginated list over one endpoint
pub(crate) fn paginate<T>(
    http: &ApiClient,
    path: impl Into<String>,
    query: Vec<(String, String)>,
    options: ListOptions,
) -> Result<PaginatedList<T>>
where
    T: DeserializeOwned + Clone + Send + 'static,
{
    PaginatedList::new(PagedEndpoint::new(http, path, query), options)
}
