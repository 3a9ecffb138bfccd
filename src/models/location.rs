//! Location, ranking and league season models

use super::common::{compact_time, Arena};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A location (country or region)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub is_country: Option<bool>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// Clan summary embedded in a ranking entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingClan {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub badge_id: Option<u64>,
}

/// A clan's position in a location ranking
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanRanking {
    pub tag: String,
    pub name: String,
    pub rank: u32,
    #[serde(default)]
    pub previous_rank: Option<u32>,
    #[serde(default)]
    pub clan_score: Option<u32>,
    #[serde(default)]
    pub badge_id: Option<u64>,
    #[serde(default)]
    pub members: Option<u32>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// A player's position in a location ranking
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    pub tag: String,
    pub name: String,
    pub rank: u32,
    #[serde(default)]
    pub previous_rank: Option<u32>,
    #[serde(default)]
    pub trophies: Option<u32>,
    #[serde(default)]
    pub exp_level: Option<u32>,
    #[serde(default)]
    pub arena: Option<Arena>,
    #[serde(default)]
    pub clan: Option<RankingClan>,
}

/// A player's position in a Path of Legend ranking
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPathOfLegendRanking {
    pub tag: String,
    pub name: String,
    pub rank: u32,
    pub elo_rating: u32,
    #[serde(default)]
    pub clan: Option<RankingClan>,
}

/// A player's position in a past season's ranking
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonRanking {
    pub tag: String,
    pub name: String,
    pub rank: u32,
    pub trophies: u32,
    #[serde(default)]
    pub exp_level: Option<u32>,
    #[serde(default)]
    pub clan: Option<RankingClan>,
}

/// A league season from the legacy seasons endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSeason {
    #[serde(default)]
    pub id: Option<String>,
}

/// A league season from the V2 seasons endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSeasonV2 {
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default, with = "compact_time::option")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "compact_time::option")]
    pub end_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location() {
        let location: Location = serde_json::from_value(json!({
            "id": 57000094,
            "name": "France",
            "isCountry": true,
            "countryCode": "FR"
        }))
        .unwrap();

        assert_eq!(location.id, 57000094);
        assert_eq!(location.country_code.as_deref(), Some("FR"));
    }

    #[test]
    fn test_path_of_legend_ranking() {
        let ranking: PlayerPathOfLegendRanking = serde_json::from_value(json!({
            "tag": "#AAA",
            "name": "one",
            "rank": 1,
            "eloRating": 2012,
            "clan": { "tag": "#X", "name": "x" }
        }))
        .unwrap();

        assert_eq!(ranking.elo_rating, 2012);
        assert_eq!(ranking.clan.unwrap().tag, "#X");
    }
}
