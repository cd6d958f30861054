use chrono::{Local, NaiveDate};

use crate::app::{AppContext, Result, RiaError};
use crate::domain::{LikedProduct, PlaceType, SavedProduct};
use crate::explore::{compose_feed, derive_daily_seed_with, DailySeed, FeedEntry};
use crate::store::Store;

fn daily_seed(ctx: &AppContext, date: Option<NaiveDate>) -> DailySeed {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let explore = &ctx.config.explore;
    derive_daily_seed_with(date, &explore.locale, &explore.label_format)
}

fn describe(entry: &FeedEntry) -> String {
    match entry {
        FeedEntry::Product(p) => format!("{} · {}", p.subtitle, p.location),
        FeedEntry::Story(s) => format!("{} · {}", s.date, s.summary),
        FeedEntry::Place(p) => format!("{} · {}", p.kind.as_str(), p.description),
        FeedEntry::Moodboard(m) => format!("{} produtos", m.count()),
    }
}

pub async fn explore(
    ctx: &AppContext,
    seed: Option<u32>,
    date: Option<NaiveDate>,
    offline: bool,
) -> Result<()> {
    let daily = daily_seed(ctx, date);
    let seed = seed.unwrap_or(daily.seed);

    let moodboards = ctx.store.get_all_moodboards()?;
    let pools = ctx.gateway.explore_pools(moodboards, offline).await;
    let feed = compose_feed(&pools, &ctx.config.explore.options(seed));

    println!("{} (seed {})", daily.label, seed);

    if feed.is_empty() {
        println!("Nothing to explore");
        return Ok(());
    }

    for (position, entry) in feed.iter().enumerate() {
        println!(
            "{:>2}. [{}] {}\n    {}",
            position + 1,
            entry.category(),
            entry.display_title(),
            describe(entry)
        );
    }

    Ok(())
}

pub fn seed(ctx: &AppContext, date: Option<NaiveDate>) -> Result<()> {
    let daily = daily_seed(ctx, date);
    println!("{}\n  key:  {}\n  seed: {}", daily.label, daily.key, daily.seed);
    Ok(())
}

pub async fn list_products(ctx: &AppContext) -> Result<()> {
    let products = ctx.gateway.fetch_hero_products().await;

    for product in products {
        let liked = if ctx.library.is_liked(&product.id)? { "♥" } else { " " };
        println!(
            "{} {} ({})\n  {}\n  {}",
            liked, product.title, product.id, product.subtitle, product.image
        );
        if let Some(attribution) = &product.image_attribution {
            println!("  Imagem: {}", attribution);
        }
    }

    Ok(())
}

pub async fn list_stories(ctx: &AppContext) -> Result<()> {
    let stories = ctx.gateway.fetch_stories_feed().await;

    for story in stories {
        println!("{} · {} ({})\n  {}", story.date, story.title, story.id, story.summary);
        if let Some(url) = &story.source_url {
            println!("  {}", url);
        }
    }

    Ok(())
}

pub async fn list_places(ctx: &AppContext, types: &[String]) -> Result<()> {
    let types: Vec<PlaceType> = if types.is_empty() {
        PlaceType::ALL.to_vec()
    } else {
        types
            .iter()
            .map(|t| t.parse::<PlaceType>().map_err(RiaError::Other))
            .collect::<Result<_>>()?
    };

    let places = ctx.gateway.fetch_places_catalog(&types).await;

    if places.is_empty() {
        println!("No places found");
        return Ok(());
    }

    for place in places {
        println!(
            "[{}] {}\n  {}",
            place.kind.as_str(),
            place.name,
            place.address.as_deref().unwrap_or(&place.description)
        );
    }

    Ok(())
}

pub fn create_moodboard(ctx: &AppContext, title: &str, color: Option<&str>) -> Result<()> {
    let id = ctx.store.create_moodboard(title, color)?;
    println!("Created moodboard: {} ({})", title, id);
    Ok(())
}

pub fn list_moodboards(ctx: &AppContext) -> Result<()> {
    let moodboards = ctx.store.get_all_moodboards()?;

    if moodboards.is_empty() {
        println!("No moodboards");
        return Ok(());
    }

    for board in moodboards {
        println!("{} ({} products)\n  {}", board.title, board.count(), board.id);
    }

    Ok(())
}

pub fn show_moodboard(ctx: &AppContext, id: &str) -> Result<()> {
    let board = ctx
        .store
        .get_moodboard(id)?
        .ok_or_else(|| RiaError::MoodboardNotFound(id.to_string()))?;

    println!("{}", board.title);
    if let Some(cover) = &board.cover_image {
        println!("  Capa: {}", cover);
    }
    for product in &board.products {
        println!("  - {} ({})", product.title, product.id);
    }

    Ok(())
}

pub async fn add_to_moodboard(ctx: &AppContext, id: &str, product_id: &str) -> Result<()> {
    let product = ctx.gateway.fetch_product_by_id(product_id).await?;

    if ctx
        .store
        .add_product_to_moodboard(id, &SavedProduct::from(&product))?
    {
        println!("Added {} to {}", product.title, id);
    } else {
        println!("{} is already on {}", product.title, id);
    }

    Ok(())
}

pub fn remove_from_moodboard(ctx: &AppContext, id: &str, product_id: &str) -> Result<()> {
    ctx.store.remove_product_from_moodboard(id, product_id)?;
    println!("Removed {} from {}", product_id, id);
    Ok(())
}

pub fn delete_moodboard(ctx: &AppContext, id: &str) -> Result<()> {
    ctx.store.delete_moodboard(id)?;
    println!("Deleted moodboard: {}", id);
    Ok(())
}

pub fn rename_moodboard(ctx: &AppContext, id: &str, title: &str) -> Result<()> {
    ctx.store.update_moodboard_title(id, title)?;
    println!("Renamed {} to {}", id, title);
    Ok(())
}

pub fn set_moodboard_cover(ctx: &AppContext, id: &str, url: &str) -> Result<()> {
    ctx.store.update_moodboard_cover(id, url)?;
    println!("Updated cover of {}", id);
    Ok(())
}

pub async fn toggle_like(ctx: &AppContext, product_id: &str) -> Result<()> {
    if ctx.library.is_liked(product_id)? {
        return remove_like(ctx, product_id);
    }

    let product = ctx.gateway.fetch_product_by_id(product_id).await?;

    if ctx.library.toggle_like(&LikedProduct::from(&product))? {
        println!("Liked {}", product.title);
    } else {
        println!("Unliked {}", product.title);
    }

    Ok(())
}

pub fn remove_like(ctx: &AppContext, product_id: &str) -> Result<()> {
    ctx.library.remove_like(product_id)?;
    println!("Unliked {}", product_id);
    Ok(())
}

pub fn list_likes(ctx: &AppContext) -> Result<()> {
    let liked = ctx.library.liked()?;

    if liked.is_empty() {
        println!("No liked products");
        return Ok(());
    }

    for product in liked {
        println!(
            "{} ({})\n  liked {}",
            product.title,
            product.id,
            product.liked_at.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_toggle_unlikes_without_catalogue_lookup() {
        let ctx = AppContext::in_memory(Config::default()).unwrap();
        ctx.library
            .toggle_like(&LikedProduct::new("bolo-caseiro", "Bolo caseiro", "img"))
            .unwrap();

        toggle_like(&ctx, "bolo-caseiro").await.unwrap();
        assert!(!ctx.library.is_liked("bolo-caseiro").unwrap());
    }

    #[tokio::test]
    async fn test_toggle_unknown_product_is_not_found() {
        let ctx = AppContext::in_memory(Config::default()).unwrap();
        assert!(matches!(
            toggle_like(&ctx, "bolo-caseiro").await,
            Err(RiaError::ProductNotFound(_))
        ));
    }
}
