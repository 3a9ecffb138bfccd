//! Player profile, battle log and chest cycle models

use super::card::Card;
use super::common::{compact_time, Arena, Badge, GameMode};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A player profile
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub tag: String,
    pub name: String,
    pub exp_level: u32,
    pub trophies: u32,
    #[serde(default)]
    pub best_trophies: Option<u32>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub battle_count: Option<u32>,
    #[serde(default)]
    pub three_crown_wins: Option<u32>,
    #[serde(default)]
    pub challenge_cards_won: Option<u32>,
    #[serde(default)]
    pub tournament_battle_count: Option<u32>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub donations: Option<u32>,
    #[serde(default)]
    pub donations_received: Option<u32>,
    #[serde(default)]
    pub clan: Option<PlayerClan>,
    #[serde(default)]
    pub arena: Option<Arena>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub current_favourite_card: Option<Card>,
}

/// Clan summary embedded in a player profile
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerClan {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub badge_id: Option<u64>,
}

/// One entry of a player's battle log
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    #[serde(rename = "type")]
    pub battle_type: String,
    #[serde(with = "compact_time")]
    pub battle_time: DateTime<Utc>,
    #[serde(default)]
    pub arena: Option<Arena>,
    #[serde(default)]
    pub game_mode: Option<GameMode>,
    #[serde(default)]
    pub is_ladder_tournament: Option<bool>,
    pub team: Vec<BattlePlayer>,
    pub opponent: Vec<BattlePlayer>,
}

/// A participant in one battle
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlePlayer {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub starting_trophies: Option<u32>,
    #[serde(default)]
    pub trophy_change: Option<i32>,
    pub crowns: u32,
    #[serde(default)]
    pub king_tower_hit_points: Option<u32>,
    #[serde(default)]
    pub clan: Option<PlayerClan>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// One chest in the upcoming chest cycle
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingChest {
    pub index: u32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_from_camel_case_json() {
        let player: Player = serde_json::from_value(json!({
            "tag": "#9G9JL8QU",
            "name": "Ruben",
            "expLevel": 14,
            "trophies": 6543,
            "bestTrophies": 7012,
            "threeCrownWins": 1204,
            "clan": { "tag": "#2Q8CCP0", "name": "Reddit Alpha", "badgeId": 16000000 },
            "arena": { "id": 54000013, "name": "Legendary Arena" }
        }))
        .unwrap();

        assert_eq!(player.tag, "#9G9JL8QU");
        assert_eq!(player.exp_level, 14);
        assert_eq!(player.best_trophies, Some(7012));
        assert_eq!(player.three_crown_wins, Some(1204));
        assert_eq!(player.clan.unwrap().name, "Reddit Alpha");
        assert!(player.cards.is_empty());
    }

    #[test]
    fn test_battle_log_entry() {
        let battle: Battle = serde_json::from_value(json!({
            "type": "PvP",
            "battleTime": "20240507T181530.000Z",
            "gameMode": { "id": 72000006, "name": "Ladder" },
            "team": [{ "tag": "#AAA", "name": "a", "crowns": 3 }],
            "opponent": [{ "tag": "#BBB", "name": "b", "crowns": 1, "trophyChange": -29 }]
        }))
        .unwrap();

        assert_eq!(battle.battle_type, "PvP");
        assert_eq!(battle.team[0].crowns, 3);
        assert_eq!(battle.opponent[0].trophy_change, Some(-29));
    }
}
