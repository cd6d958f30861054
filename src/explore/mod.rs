//! Daily explore feed.
//!
//! ```text
//! date → seed ─┐
//!              ├→ shuffle each pool (seed + offset) → cap → interleave by template
//! pools ───────┘
//! ```
//!
//! Everything in here is synchronous and pure: no I/O, no shared state.

pub mod composer;
pub mod seed;
pub mod shuffle;

pub use composer::{
    compose_feed, CapOverrides, CategoryCaps, ContentCategory, ContentPools, ExploreOptions,
    FeedEntry, DEFAULT_TEMPLATE, MAX_ITERATIONS,
};
pub use seed::{derive_daily_seed, derive_daily_seed_with, today_seed, DailySeed};
pub use shuffle::{shuffle_with_seed, Mulberry32};
