//! HTTP transport module
//!
//! Retrying, rate-limited GET transport with typed status errors. The
//! pagination engine never sees this layer directly; it goes through the
//! fetch collaborator built on top of it.

mod client;
mod rate_limit;

pub use client::{ApiClient, HttpConfig, DEFAULT_BASE_URL};
pub use rate_limit::{RateLimitConfig, RateLimiter};
