//! Typed API response models
//!
//! All models deserialize from the API's camelCase JSON; timestamps use
//! the API's compact format (see `common::compact_time`). Fields the API
//! only returns in some contexts are `Option` or default to empty.

mod card;
mod clan;
mod common;
mod leaderboard;
mod location;
mod player;
mod tournament;

pub use card::Card;
pub use clan::{
    Clan, ClanHeader, ClanMember, CurrentRiverRace, RiverRaceClan, RiverRaceLogEntry,
    RiverRaceStanding,
};
pub use common::{Arena, Badge, Cursors, GameMode, IconUrls, Page, Paging};
pub use leaderboard::{Leaderboard, LeaderboardPlayer};
pub use location::{
    ClanRanking, LeagueSeason, LeagueSeasonV2, Location, PlayerPathOfLegendRanking, PlayerRanking,
    PlayerSeasonRanking, RankingClan,
};
pub use player::{Battle, BattlePlayer, Player, PlayerClan, UpcomingChest};
pub use tournament::{GlobalTournament, Tournament, TournamentHeader, TournamentMember};
