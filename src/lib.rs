//! # Ria
//!
//! A daily discovery feed for Aveiro: regional products, stories, places
//! and the user's own moodboards, mixed into one list that stays the same
//! for the whole day and changes the next.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Gateway → ContentPools ─┐
//!                                    ├→ compose_feed → CLI
//! Store (moodboards, likes) ────────┘
//! ```
//!
//! - [`explore`]: daily seed, seeded shuffle and feed composition
//! - [`gateway`]: Wikipedia, Wikimedia Commons and OpenStreetMap clients
//! - [`store`]: SQLite persistence for moodboards and likes
//!
//! ## Quick Start
//!
//! ```bash
//! # Today's feed
//! ria explore
//!
//! # The feed of another day, without touching the network
//! ria explore --date 2026-10-19 --offline
//!
//! # Save a product to a new board
//! ria moodboard create "Doces da Ria"
//! ria moodboard add <id> ovos-moles
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the store,
/// fetcher, content gateway and liked-products library.
pub mod app;

/// Command-line interface using clap.
///
/// - `explore [--seed N] [--date YYYY-MM-DD] [--offline]` - Compose the daily feed
/// - `seed [--date]` - Show a day's seed
/// - `products`, `stories`, `places [--types]` - Browse content
/// - `moodboard ...`, `like ...` - Manage saved content
pub mod cli;

/// Configuration loaded from `~/.config/ria/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Product`](domain::Product), [`Story`](domain::Story), [`Place`](domain::Place)
/// - [`Moodboard`](domain::Moodboard) with its [`SavedProduct`](domain::SavedProduct)s
/// - [`LikedProduct`](domain::LikedProduct)
pub mod domain;

/// Broadcast of the liked-products list after each change.
pub mod events;

/// Deterministic daily feed composition.
pub mod explore;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for GET and form POST
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Content sources and bundled fallback data.
pub mod gateway;

/// Text, image and OSM tag cleanup.
pub mod normalizer;

/// SQLite persistence layer.
///
/// - [`Store`](store::Store): Trait defining storage operations
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;
