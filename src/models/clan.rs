//! Clan, clan member and river race models

use super::common::{compact_time, Arena};
use super::location::Location;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A full clan profile
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clan {
    pub tag: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub clan_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub badge_id: Option<u64>,
    #[serde(default)]
    pub clan_score: Option<u32>,
    #[serde(default)]
    pub clan_war_trophies: Option<u32>,
    #[serde(default)]
    pub required_trophies: Option<u32>,
    #[serde(default)]
    pub donations_per_week: Option<u32>,
    #[serde(default)]
    pub location: Option<Location>,
    pub members: u32,
    #[serde(default)]
    pub member_list: Vec<ClanMember>,
}

/// A clan as returned by clan search (no member list or description)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanHeader {
    pub tag: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub clan_type: Option<String>,
    #[serde(default)]
    pub badge_id: Option<u64>,
    #[serde(default)]
    pub clan_score: Option<u32>,
    #[serde(default)]
    pub required_trophies: Option<u32>,
    #[serde(default)]
    pub location: Option<Location>,
    pub members: u32,
}

/// A member of a clan
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanMember {
    pub tag: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub exp_level: Option<u32>,
    pub trophies: u32,
    #[serde(default)]
    pub arena: Option<Arena>,
    pub clan_rank: u32,
    #[serde(default)]
    pub previous_clan_rank: Option<u32>,
    #[serde(default)]
    pub donations: Option<u32>,
    #[serde(default)]
    pub donations_received: Option<u32>,
    #[serde(default, with = "compact_time::option")]
    pub last_seen: Option<DateTime<Utc>>,
}

/// The clan's currently running river race
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRiverRace {
    #[serde(default)]
    pub state: Option<String>,
    pub clan: RiverRaceClan,
    #[serde(default)]
    pub clans: Vec<RiverRaceClan>,
    #[serde(default)]
    pub section_index: Option<u32>,
    #[serde(default)]
    pub period_index: Option<u32>,
    #[serde(default)]
    pub period_type: Option<String>,
}

/// A clan's standing inside a river race
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiverRaceClan {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub fame: Option<u32>,
    #[serde(default)]
    pub repair_points: Option<u32>,
    #[serde(default)]
    pub period_points: Option<u32>,
    #[serde(default)]
    pub clan_score: Option<u32>,
}

/// One finished river race in the clan's log
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiverRaceLogEntry {
    #[serde(default)]
    pub season_id: Option<u32>,
    #[serde(default)]
    pub section_index: Option<u32>,
    #[serde(default, with = "compact_time::option")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub standings: Vec<RiverRaceStanding>,
}

/// Final placement of one clan in a logged river race
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiverRaceStanding {
    pub rank: u32,
    #[serde(default)]
    pub trophy_change: Option<i32>,
    pub clan: RiverRaceClan,
}
