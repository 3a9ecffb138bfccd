//! Location, ranking and season endpoints

use super::paginate;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{
    ClanRanking, LeagueSeason, LeagueSeasonV2, Location, PlayerPathOfLegendRanking, PlayerRanking,
    PlayerSeasonRanking,
};
use crate::pagination::{ListOptions, PaginatedList};

/// Location and ranking endpoints
#[derive(Debug, Clone, Copy)]
pub struct Locations<'a> {
    http: &'a ApiClient,
}

impl<'a> Locations<'a> {
    pub(crate) fn new(http: &'a ApiClient) -> Self {
        Self { http }
    }

    /// List all locations
    pub fn list(&self, options: ListOptions) -> Result<PaginatedList<Location>> {
        paginate(self.http, "/locations", Vec::new(), options)
    }

    /// Get a location by id
    pub async fn get(&self, location_id: u64) -> Result<Location> {
        self.http
            .get_json(&format!("/locations/{location_id}"), &[])
            .await
    }

    /// Get clan rankings for a location
    pub fn clan_rankings(
        &self,
        location_id: u64,
        options: ListOptions,
    ) -> Result<PaginatedList<ClanRanking>> {
        paginate(
            self.http,
            format!("/locations/{location_id}/rankings/clans"),
            Vec::new(),
            options,
        )
    }

    /// Get player rankings for a location
    pub fn player_rankings(
        &self,
        location_id: u64,
        options: ListOptions,
    ) -> Result<PaginatedList<PlayerRanking>> {
        paginate(
            self.http,
            format!("/locations/{location_id}/rankings/players"),
            Vec::new(),
            options,
        )
    }

    /// Get clan war rankings for a location
    pub fn clan_war_rankings(
        &self,
        location_id: u64,
        options: ListOptions,
    ) -> Result<PaginatedList<ClanRanking>> {
        paginate(
            self.http,
            format!("/locations/{location_id}/rankings/clanwars"),
            Vec::new(),
            options,
        )
    }

    /// Get Path of Legend player rankings for a location
    pub fn path_of_legend_player_rankings(
        &self,
        location_id: u64,
        options: ListOptions,
    ) -> Result<PaginatedList<PlayerPathOfLegendRanking>> {
        paginate(
            self.http,
            format!("/locations/{location_id}/pathoflegend/players"),
            Vec::new(),
            options,
        )
    }

    /// Get Path of Legend rankings for a past season
    pub fn path_of_legend_season_rankings(
        &self,
        season_id: &str,
        options: ListOptions,
    ) -> Result<PaginatedList<PlayerPathOfLegendRanking>> {
        paginate(
            self.http,
            format!("/locations/global/pathoflegend/{season_id}/rankings/players"),
            Vec::new(),
            options,
        )
    }

    /// Get player rankings for a past league season
    pub fn season_player_rankings(
        &self,
        season_id: &str,
        options: ListOptions,
    ) -> Result<PaginatedList<PlayerSeasonRanking>> {
        paginate(
            self.http,
            format!("/locations/global/seasons/{season_id}/rankings/players"),
            Vec::new(),
            options,
        )
    }

    /// Get a league season by its date code (e.g. `2024-12`)
    pub async fn season(&self, season_id: &str) -> Result<LeagueSeason> {
        self.http
            .get_json(&format!("/locations/global/seasons/{season_id}"), &[])
            .await
    }

    /// List league seasons from the legacy endpoint
    #[deprecated(note = "the seasons endpoint returns incomplete data; use seasons_v2")]
    pub fn seasons(&self, options: ListOptions) -> Result<PaginatedList<LeagueSeason>> {
        paginate(self.http, "/locations/global/seasons", Vec::new(), options)
    }

    /// List league seasons from the V2 endpoint
    pub fn seasons_v2(&self, options: ListOptions) -> Result<PaginatedList<LeagueSeasonV2>> {
        paginate(self.http, "/locations/global/seasonsV2", Vec::new(), options)
    }
}
