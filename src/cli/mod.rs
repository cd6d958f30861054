pub mod commands;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ria")]
#[command(about = "Daily discovery feed for Aveiro", long_about = None)]
pub struct Cli {
    /// Database file (default: <data dir>/ria/ria.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose today's explore feed
    Explore {
        /// Use this seed instead of the date's
        #[arg(long)]
        seed: Option<u32>,

        /// Compose the feed of another day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Use bundled content only
        #[arg(long)]
        offline: bool,
    },
    /// Show the seed and label for a day
    Seed {
        /// Day to derive (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List the featured products
    Products,
    /// List the stories feed
    Stories,
    /// List places around Aveiro
    Places {
        /// Comma separated place types (loja, restaurante, historico)
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,
    },
    /// Manage moodboards
    Moodboard {
        #[command(subcommand)]
        action: MoodboardAction,
    },
    /// Manage liked products
    Like {
        #[command(subcommand)]
        action: LikeAction,
    },
}

#[derive(Subcommand)]
pub enum MoodboardAction {
    /// Create a moodboard
    Create {
        title: String,

        /// Accent color, e.g. "#EE448D"
        #[arg(long)]
        color: Option<String>,
    },
    /// List moodboards
    List,
    /// Show a moodboard and its products
    Show { id: String },
    /// Add a product to a moodboard
    Add { id: String, product: String },
    /// Remove a product from a moodboard
    Remove { id: String, product: String },
    /// Delete a moodboard
    Delete { id: String },
    /// Rename a moodboard
    Rename { id: String, title: String },
    /// Set the cover image of a moodboard
    Cover { id: String, url: String },
}

#[derive(Subcommand)]
pub enum LikeAction {
    /// Like or unlike a product
    Toggle { product: String },
    /// Unlike a product
    Remove { product: String },
    /// List liked products
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explore() {
        let cli = Cli::parse_from(["ria", "explore", "--date", "2026-10-19", "--offline"]);
        match cli.command {
            Commands::Explore { seed, date, offline } => {
                assert_eq!(seed, None);
                assert_eq!(date, NaiveDate::from_ymd_opt(2026, 10, 19));
                assert!(offline);
            }
            _ => panic!("expected explore"),
        }
    }

    #[test]
    fn test_parse_place_types() {
        let cli = Cli::parse_from(["ria", "--db", "/tmp/x.db", "places", "--types", "loja,restaurante"]);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
        match cli.command {
            Commands::Places { types } => assert_eq!(types, vec!["loja", "restaurante"]),
            _ => panic!("expected places"),
        }
    }

    #[test]
    fn test_parse_moodboard_add() {
        let cli = Cli::parse_from(["ria", "moodboard", "add", "abc", "ovos-moles"]);
        assert!(matches!(
            cli.command,
            Commands::Moodboard {
                action: MoodboardAction::Add { .. }
            }
        ));
    }
}
