//! Leaderboard models

use super::location::RankingClan;
use serde::Deserialize;

/// An available leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub id: u64,
    pub name: String,
}

/// A player's position on a leaderboard
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPlayer {
    pub tag: String,
    pub name: String,
    pub rank: u32,
    pub score: i64,
    #[serde(default)]
    pub clan: Option<RankingClan>,
}
