//! Blocking resource handles
//!
//! Thin wrappers over the async resources: plain requests are driven to
//! completion on the client's runtime; listing endpoints wrap the shared
//! [`PagedEndpoint`] collaborator in a `block_on` adapter and feed the
//! blocking `PaginatedList`.

use super::client::Client;
use crate::error::Result;
use crate::models::{
    Battle, Card, Clan, ClanHeader, ClanMember, ClanRanking, CurrentRiverRace, GlobalTournament,
    Leaderboard, LeaderboardPlayer, LeagueSeason, LeagueSeasonV2, Location, Player,
    PlayerPathOfLegendRanking, PlayerRanking, PlayerSeasonRanking, RiverRaceLogEntry, Tournament,
    TournamentHeader, UpcomingChest,
};
use crate::pagination::blocking::{FetchPageBlocking, PaginatedList};
use crate::pagination::{FetchPage, FetchedPage, ListOptions, PageRequest};
use crate::resources::{ClanSearchParams, PagedEndpoint};
use crate::types::{encode_tag, to_query_pairs};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Drives the async fetch collaborator to completion per page
struct BlockingEndpoint<T> {
    runtime: Arc<Runtime>,
    inner: PagedEndpoint<T>,
}

impl<T> FetchPageBlocking<T> for BlockingEndpoint<T>
where
    T: DeserializeOwned + Send + 'static,
{
    fn fetch_page(&mut self, request: PageRequest) -> Result<FetchedPage<T>> {
        self.runtime.block_on(self.inner.fetch_page(request))
    }
}

impl Client {
    fn paginate<T>(
        &self,
        path: impl Into<String>,
        query: Vec<(String, String)>,
        options: ListOptions,
    ) -> Result<PaginatedList<T>>
    where
        T: DeserializeOwned + Clone + Send + 'static,
    {
        let endpoint = BlockingEndpoint {
            runtime: Arc::clone(&self.runtime),
            inner: PagedEndpoint::new(&self.inner.http, path, query),
        };
        PaginatedList::new(endpoint, options)
    }
}

/// Player-related endpoints (blocking)
#[derive(Debug, Clone, Copy)]
pub struct Players<'a> {
    client: &'a Client,
}

impl<'a> Players<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get a player profile by tag
    pub fn get(&self, tag: &str) -> Result<Player> {
        self.client.block_on(self.client.inner.players().get(tag))
    }

    /// Get a player's recent battles
    pub fn battle_log(&self, tag: &str) -> Result<Vec<Battle>> {
        self.client
            .block_on(self.client.inner.players().battle_log(tag))
    }

    /// Get a player's upcoming chest cycle
    pub fn upcoming_chests(&self, tag: &str) -> Result<Vec<UpcomingChest>> {
        self.client
            .block_on(self.client.inner.players().upcoming_chests(tag))
    }
}

/// Clan-related endpoints (blocking)
#[derive(Debug, Clone, Copy)]
pub struct Clans<'a> {
    client: &'a Client,
}

impl<'a> Clans<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get a clan profile by tag
    pub fn get(&self, tag: &str) -> Result<Clan> {
        self.client.block_on(self.client.inner.clans().get(tag))
    }

    /// Search clans by name and/or filters
    pub fn search(
        &self,
        params: ClanSearchParams,
        options: ListOptions,
    ) -> Result<PaginatedList<ClanHeader>> {
        self.client
            .paginate("/clans", to_query_pairs(&params)?, options)
    }

    /// List the members of a clan
    pub fn members(&self, tag: &str, options: ListOptions) -> Result<PaginatedList<ClanMember>> {
        let path = format!("/clans/{}/members", encode_tag(tag));
        self.client.paginate(path, Vec::new(), options)
    }

    /// Get the clan's currently running river race
    pub fn current_river_race(&self, tag: &str) -> Result<CurrentRiverRace> {
        self.client
            .block_on(self.client.inner.clans().current_river_race(tag))
    }

    /// Get the clan's river race log
    pub fn river_race_log(
        &self,
        tag: &str,
        options: ListOptions,
    ) -> Result<PaginatedList<RiverRaceLogEntry>> {
        let path = format!("/clans/{}/riverracelog", encode_tag(tag));
        self.client.paginate(path, Vec::new(), options)
    }
}

/// Card catalogue endpoints (blocking)
#[derive(Debug, Clone, Copy)]
pub struct Cards<'a> {
    client: &'a Client,
}

impl<'a> Cards<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List all available cards
    pub fn list(&self, options: ListOptions) -> Result<PaginatedList<Card>> {
        self.client.paginate("/cards", Vec::new(), options)
    }
}

/// Location and ranking endpoints (blocking)
#[derive(Debug, Clone, Copy)]
pub struct Locations<'a> {
    client: &'a Client,
}

impl<'a> Locations<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List all locations
    pub fn list(&self, options: ListOptions) -> Result<PaginatedList<Location>> {
        self.client.paginate("/locations", Vec::new(), options)
    }

    /// Get a location by id
    pub fn get(&self, location_id: u64) -> Result<Location> {
        self.client
            .block_on(self.client.inner.locations().get(location_id))
    }

    /// Get clan rankings for a location
    pub fn clan_rankings(
        &self,
        location_id: u64,
        options: ListOptions,
    ) -> Result<PaginatedList<ClanRanking>> {
        self.client.paginate(
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
        self.client.paginate(
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
        self.client.paginate(
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
        self.client.paginate(
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
        self.client.paginate(
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
        self.client.paginate(
            format!("/locations/global/seasons/{season_id}/rankings/players"),
            Vec::new(),
            options,
        )
    }

    /// Get a league season by its date code (e.g. `2024-12`)
    pub fn season(&self, season_id: &str) -> Result<LeagueSeason> {
        self.client
            .block_on(self.client.inner.locations().season(season_id))
    }

    /// List league seasons from the legacy endpoint
    #[deprecated(note = "the seasons endpoint returns incomplete data; use seasons_v2")]
    pub fn seasons(&self, options: ListOptions) -> Result<PaginatedList<LeagueSeason>> {
        self.client
            .paginate("/locations/global/seasons", Vec::new(), options)
    }

    /// List league seasons from the V2 endpoint
    pub fn seasons_v2(&self, options: ListOptions) -> Result<PaginatedList<LeagueSeasonV2>> {
        self.client
            .paginate("/locations/global/seasonsV2", Vec::new(), options)
    }
}

/// Tournament endpoints (blocking)
#[derive(Debug, Clone, Copy)]
pub struct Tournaments<'a> {
    client: &'a Client,
}

impl<'a> Tournaments<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get a tournament by tag
    pub fn get(&self, tag: &str) -> Result<Tournament> {
        self.client
            .block_on(self.client.inner.tournaments().get(tag))
    }

    /// Search tournaments by name
    pub fn search(&self, name: &str, options: ListOptions) -> Result<PaginatedList<TournamentHeader>> {
        self.client.paginate(
            "/tournaments",
            vec![("name".to_string(), name.to_string())],
            options,
        )
    }
}

/// Global tournament endpoints (blocking)
#[derive(Debug, Clone, Copy)]
pub struct GlobalTournaments<'a> {
    client: &'a Client,
}

impl<'a> GlobalTournaments<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List scheduled global tournaments
    pub fn list(&self, options: ListOptions) -> Result<PaginatedList<GlobalTournament>> {
        self.client.paginate("/globaltournaments", Vec::new(), options)
    }
}

/// Leaderboard endpoints (blocking)
#[derive(Debug, Clone, Copy)]
pub struct Leaderboards<'a> {
    client: &'a Client,
}

impl<'a> Leaderboards<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the available leaderboards
    pub fn list(&self) -> Result<Vec<Leaderboard>> {
        self.client.block_on(self.client.inner.leaderboards().list())
    }

    /// Get the players on a leaderboard
    pub fn get(
        &self,
        leaderboard_id: u64,
        options: ListOptions,
    ) -> Result<PaginatedList<LeaderboardPlayer>> {
        self.client.paginate(
            format!("/leaderboard/{leaderboard_id}"),
            Vec::new(),
            options,
        )
    }
}
