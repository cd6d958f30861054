use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ria::app::AppContext;
use ria::cli::{commands, Cli, Commands, LikeAction, MoodboardAction};
use ria::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(cli.db, config)?;

    match cli.command {
        Commands::Explore {
            seed,
            date,
            offline,
        } => {
            commands::explore(&ctx, seed, date, offline).await?;
        }
        Commands::Seed { date } => {
            commands::seed(&ctx, date)?;
        }
        Commands::Products => {
            commands::list_products(&ctx).await?;
        }
        Commands::Stories => {
            commands::list_stories(&ctx).await?;
        }
        Commands::Places { types } => {
            commands::list_places(&ctx, &types).await?;
        }
        Commands::Moodboard { action } => match action {
            MoodboardAction::Create { title, color } => {
                commands::create_moodboard(&ctx, &title, color.as_deref())?;
            }
            MoodboardAction::List => {
                commands::list_moodboards(&ctx)?;
            }
            MoodboardAction::Show { id } => {
                commands::show_moodboard(&ctx, &id)?;
            }
            MoodboardAction::Add { id, product } => {
                commands::add_to_moodboard(&ctx, &id, &product).await?;
            }
            MoodboardAction::Remove { id, product } => {
                commands::remove_from_moodboard(&ctx, &id, &product)?;
            }
            MoodboardAction::Delete { id } => {
                commands::delete_moodboard(&ctx, &id)?;
            }
            MoodboardAction::Rename { id, title } => {
                commands::rename_moodboard(&ctx, &id, &title)?;
            }
            MoodboardAction::Cover { id, url } => {
                commands::set_moodboard_cover(&ctx, &id, &url)?;
            }
        },
        Commands::Like { action } => match action {
            LikeAction::Toggle { product } => {
                commands::toggle_like(&ctx, &product).await?;
            }
            LikeAction::Remove { product } => {
                commands::remove_like(&ctx, &product)?;
            }
            LikeAction::List => {
                commands::list_likes(&ctx)?;
            }
        },
    }

    Ok(())
}
