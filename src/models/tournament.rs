//! Tournament models

use super::common::compact_time;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A tournament as returned by tournament search
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentHeader {
    pub tag: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub tournament_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub max_capacity: Option<u32>,
    #[serde(default)]
    pub player_limit: Option<u32>,
    #[serde(default)]
    pub level_cap: Option<u32>,
    #[serde(default, with = "compact_time::option")]
    pub created_time: Option<DateTime<Utc>>,
}

/// A full tournament profile, including its member list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub tag: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub tournament_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub max_capacity: Option<u32>,
    #[serde(default, with = "compact_time::option")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub members_list: Vec<TournamentMember>,
}

/// A participant of a tournament
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentMember {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub rank: Option<u32>,
}

/// A scheduled global tournament
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalTournament {
    pub tag: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, with = "compact_time::option")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "compact_time::option")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub max_losses: Option<u32>,
    #[serde(default)]
    pub max_top_reward_rank: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tournament_with_members() {
        let tournament: Tournament = serde_json::from_value(json!({
            "tag": "#TOUR1",
            "name": "Friday Night",
            "type": "open",
            "status": "inProgress",
            "capacity": 42,
            "maxCapacity": 100,
            "createdTime": "20240503T170000.000Z",
            "membersList": [
                { "tag": "#AAA", "name": "one", "score": 12, "rank": 1 }
            ]
        }))
        .unwrap();

        assert_eq!(tournament.status.as_deref(), Some("inProgress"));
        assert_eq!(tournament.members_list[0].rank, Some(1));
        assert!(tournament.created_time.is_some());
    }
}
