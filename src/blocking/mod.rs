//! Blocking client
//!
//! A synchronous facade over the async client, in the spirit of
//! `reqwest::blocking`: the same resources and models, with every
//! network-touching call blocking the current thread. Listing endpoints
//! return the blocking
//! [`PaginatedList`](crate::pagination::blocking::PaginatedList).

mod client;
mod resources;

pub use client::{Client, ClientBuilder};
pub use resources::{
    Cards, Clans, GlobalTournaments, Leaderboards, Locations, Players, Tournaments,
};
