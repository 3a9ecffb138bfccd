//! # clash-royale
//!
//! Typed client for the [Clash Royale API](https://developer.clashroyale.com),
//! async-first with a blocking facade.
//!
//! ## Features
//!
//! - **Typed endpoints**: players, clans, cards, locations, tournaments,
//!   global tournaments and leaderboards as serde models
//! - **Lazy pagination**: listing endpoints return a [`PaginatedList`]
//!   that fetches cursor pages on demand — iterate, index, slice or
//!   bulk-fetch with at most one request per page
//! - **Robust transport**: retry with exponential backoff, client-side
//!   rate limiting, typed errors per API status
//! - **Blocking variant**: the same surface under [`blocking`], driven on
//!   an internal runtime
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clash_royale::{Client, ClanSearchParams, ListOptions};
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> clash_royale::Result<()> {
//!     let client = Client::new(std::env::var("CLASH_ROYALE_API_KEY").unwrap())?;
//!
//!     let player = client.players().get("#9G9JL8QU").await?;
//!     println!("{}: {} trophies", player.name, player.trophies);
//!
//!     let mut clans = client.clans().search(
//!         ClanSearchParams::name("Reddit").min_members(40),
//!         ListOptions::new().limit(25),
//!     )?;
//!     let mut stream = clans.stream();
//!     while let Some(clan) = stream.try_next().await? {
//!         println!("{} ({} members)", clan.name, clan.members);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Tag normalization and query-parameter helpers
pub mod types;

/// API key authentication
pub mod auth;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Lazy cursor pagination
pub mod pagination;

/// Typed API response models
pub mod models;

/// Per-resource request builders
pub mod resources;

/// Blocking client facade
pub mod blocking;

mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::ApiKey;
pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use models::*;
pub use pagination::{ListOptions, PaginatedList};
pub use resources::ClanSearchParams;
pub use types::normalize_tag;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
