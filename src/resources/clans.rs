//! Clan endpoints

use super::paginate;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{Clan, ClanHeader, ClanMember, CurrentRiverRace, RiverRaceLogEntry};
use crate::pagination::{ListOptions, PaginatedList};
use crate::types::{encode_tag, to_query_pairs};
use serde::Serialize;

/// Filters for clan search.
///
/// At least one filter must be given or the API rejects the request with
/// a 400. Serialized as camelCase query parameters.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanSearchParams {
    pub name: Option<String>,
    pub location_id: Option<u64>,
    pub min_members: Option<u32>,
    pub max_members: Option<u32>,
    pub min_score: Option<u32>,
}

impl ClanSearchParams {
    /// Search by (partial) clan name
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Restrict to a location
    #[must_use]
    pub fn location_id(mut self, id: u64) -> Self {
        self.location_id = Some(id);
        self
    }

    /// Require at least this many members
    #[must_use]
    pub fn min_members(mut self, members: u32) -> Self {
        self.min_members = Some(members);
        self
    }

    /// Require at most this many members
    #[must_use]
    pub fn max_members(mut self, members: u32) -> Self {
        self.max_members = Some(members);
        self
    }

    /// Require at least this clan score
    #[must_use]
    pub fn min_score(mut self, score: u32) -> Self {
        self.min_score = Some(score);
        self
    }
}

/// Clan-related endpoints
#[derive(Debug, Clone, Copy)]
pub struct Clans<'a> {
    http: &'a ApiClient,
}

impl<'a> Clans<'a> {
    pub(crate) fn new(http: &'a ApiClient) -> Self {
        Self { http }
    }

    /// Get a clan profile by tag
    pub async fn get(&self, tag: &str) -> Result<Clan> {
        self.http
            .get_json(&format!("/clans/{}", encode_tag(tag)), &[])
            .await
    }

    /// Search clans by name and/or filters
    pub fn search(
        &self,
        params: ClanSearchParams,
        options: ListOptions,
    ) -> Result<PaginatedList<ClanHeader>> {
        paginate(self.http, "/clans", to_query_pairs(&params)?, options)
    }

    /// List the members of a clan
    pub fn members(&self, tag: &str, options: ListOptions) -> Result<PaginatedList<ClanMember>> {
        paginate(
            self.http,
            format!("/clans/{}/members", encode_tag(tag)),
            Vec::new(),
            options,
        )
    }

    /// Get the clan's currently running river race
    pub async fn current_river_race(&self, tag: &str) -> Result<CurrentRiverRace> {
        self.http
            .get_json(&format!("/clans/{}/currentriverrace", encode_tag(tag)), &[])
            .await
    }

    /// Get the clan's river race log
    pub fn river_race_log(
        &self,
        tag: &str,
        options: ListOptions,
    ) -> Result<PaginatedList<RiverRaceLogEntry>> {
        paginate(
            self.http,
            format!("/clans/{}/riverracelog", encode_tag(tag)),
            Vec::new(),
            options,
        )
    }
}
