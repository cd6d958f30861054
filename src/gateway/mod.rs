pub mod catalog;
pub mod commons;
pub mod fallback;
pub mod overpass;
pub mod wikipedia;

use std::sync::Arc;

use futures::future::join_all;

use crate::app::{Result, RiaError};
use crate::config::NetworkConfig;
use crate::domain::{Moodboard, Place, PlaceType, Product, Story};
use crate::explore::ContentPools;
use crate::fetcher::Fetcher;
use crate::normalizer::{resolve_image_source, sanitize_image_url};

use catalog::{ProductSource, StorySource, PRODUCT_SOURCES, STORY_SOURCES};
use commons::{CommonsClient, CommonsImage};
use overpass::OverpassClient;
use wikipedia::{WikipediaClient, WikipediaSummary};

/// Builds products, stories and places from Wikipedia, Wikimedia Commons
/// and OpenStreetMap, falling back to the curated catalogue.
pub struct ContentGateway {
    wikipedia: WikipediaClient,
    commons: CommonsClient,
    overpass: OverpassClient,
}

/// Image chosen for a card and the attribution that goes with it.
struct ResolvedImage {
    url: String,
    attribution: Option<String>,
}

fn resolve_image(
    fallback_image: &str,
    commons: Option<&CommonsImage>,
    summary: Option<&WikipediaSummary>,
) -> ResolvedImage {
    let commons_url = commons.map(|c| c.url.as_str());
    let url = resolve_image_source(&[
        Some(fallback_image),
        commons_url,
        summary.and_then(|s| s.thumbnail.as_deref()),
    ]);

    let used_commons = sanitize_image_url(commons_url).as_deref() == Some(url.as_str());
    let attribution = if used_commons {
        commons.and_then(|c| c.attribution.clone())
    } else {
        None
    };

    ResolvedImage { url, attribution }
}

impl ContentGateway {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, config: &NetworkConfig) -> Self {
        Self {
            wikipedia: WikipediaClient::new(fetcher.clone(), config.wikipedia_endpoint.clone()),
            commons: CommonsClient::new(
                fetcher.clone(),
                config.commons_endpoint.clone(),
                config.image_width,
            ),
            overpass: OverpassClient::new(fetcher, config),
        }
    }

    async fn summary(&self, title: &str) -> Option<WikipediaSummary> {
        match self.wikipedia.summary(title).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Wikipedia summary failed for {}: {}", title, e);
                None
            }
        }
    }

    async fn build_product(&self, source: &ProductSource) -> Product {
        let (summary, image) = tokio::join!(
            self.summary(source.wiki_title),
            self.commons.search_image(source.commons_search)
        );

        let resolved = resolve_image(source.fallback_image, image.as_ref(), summary.as_ref());

        let mut product = Product::new(source.id, source.fallback_title, source.category);
        product.subtitle = source.fallback_subtitle.to_string();
        product.description = source.fallback_description.to_string();
        product.location = source.location.to_string();
        product.tags = source.tags.iter().map(|t| t.to_string()).collect();
        product.image = resolved.url;
        product.image_attribution = resolved.attribution;

        if let Some(summary) = summary {
            product.title = summary.title;
            if let Some(description) = summary.description {
                product.subtitle = description;
            }
            if let Some(extract) = summary.extract {
                product.description = extract;
            }
            product.source_url = summary.url;
        }

        product
    }

    async fn build_story(&self, source: &StorySource) -> Story {
        let summary_lookup = async {
            match source.wiki_title {
                Some(title) => self.summary(title).await,
                None => None,
            }
        };
        let (summary, image) = tokio::join!(
            summary_lookup,
            self.commons.search_image(source.commons_search)
        );

        let resolved = resolve_image(source.fallback_image, image.as_ref(), summary.as_ref());

        let mut story = Story::new(source.id, source.fallback_title, source.category);
        story.date = source.date_label.to_string();
        story.summary = source.fallback_summary.to_string();
        story.image = resolved.url;
        story.media_attribution = resolved.attribution;

        if let Some(summary) = summary {
            story.title = summary.title;
            if let Some(extract) = summary.extract {
                story.summary = extract;
            }
            story.source_url = summary.url;
        }

        story
    }

    pub async fn fetch_hero_products(&self) -> Vec<Product> {
        join_all(PRODUCT_SOURCES.iter().map(|s| self.build_product(s))).await
    }

    pub async fn fetch_stories_feed(&self) -> Vec<Story> {
        join_all(STORY_SOURCES.iter().map(|s| self.build_story(s))).await
    }

    /// Places of the requested types; other types are filtered out.
    pub async fn fetch_places_catalog(&self, types: &[PlaceType]) -> Vec<Place> {
        self.overpass
            .places_by_types(types)
            .await
            .into_iter()
            .filter(|place| types.contains(&place.kind))
            .collect()
    }

    pub async fn fetch_product_by_id(&self, id: &str) -> Result<Product> {
        if let Some(source) = catalog::product_source(id) {
            return Ok(self.build_product(source).await);
        }

        fallback::products()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| RiaError::ProductNotFound(id.to_string()))
    }

    pub async fn fetch_story_by_id(&self, id: &str) -> Result<Story> {
        if let Some(source) = catalog::story_source(id) {
            return Ok(self.build_story(source).await);
        }

        fallback::stories()
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| RiaError::StoryNotFound(id.to_string()))
    }

    /// Everything the explore feed draws from. Empty collections are
    /// replaced with bundled data; `offline` skips the network entirely.
    pub async fn explore_pools(&self, moodboards: Vec<Moodboard>, offline: bool) -> ContentPools {
        let moodboards = if moodboards.is_empty() {
            fallback::sample_moodboards()
        } else {
            moodboards
        };

        if offline {
            return ContentPools {
                products: fallback::products(),
                stories: fallback::stories(),
                places: fallback::places(),
                moodboards,
            };
        }

        let (products, stories, places) = tokio::join!(
            self.fetch_hero_products(),
            self.fetch_stories_feed(),
            self.fetch_places_catalog(&PlaceType::ALL)
        );

        let products = or_fallback(products, fallback::products, "products");
        let stories = or_fallback(stories, fallback::stories, "stories");
        let places = or_fallback(places, fallback::places, "places");

        tracing::info!(
            "Explore pools: {} products, {} stories, {} places, {} moodboards",
            products.len(),
            stories.len(),
            places.len(),
            moodboards.len()
        );

        ContentPools {
            products,
            stories,
            places,
            moodboards,
        }
    }
}

fn or_fallback<T>(items: Vec<T>, bundled: fn() -> Vec<T>, label: &str) -> Vec<T> {
    if items.is_empty() {
        tracing::debug!("No live {}, using bundled data", label);
        bundled()
    } else {
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::FetchResponse;
    use async_trait::async_trait;

    /// Fails every request, like a device without connectivity.
    struct OfflineFetcher;

    #[async_trait]
    impl Fetcher for OfflineFetcher {
        async fn get(&self, url: &str) -> Result<FetchResponse> {
            Err(RiaError::Other(format!("offline: {}", url)))
        }

        async fn post_form(&self, url: &str, _body: String) -> Result<FetchResponse> {
            Err(RiaError::Other(format!("offline: {}", url)))
        }
    }

    fn offline_gateway() -> ContentGateway {
        let config = NetworkConfig {
            retry_backoff_ms: 0,
            ..Default::default()
        };
        ContentGateway::new(Arc::new(OfflineFetcher), &config)
    }

    fn commons(url: &str) -> CommonsImage {
        CommonsImage {
            url: url.to_string(),
            original_url: url.to_string(),
            attribution: Some("Ana • CC BY 4.0".into()),
            description_url: None,
            width: None,
            height: None,
        }
    }

    #[test]
    fn test_resolve_image_prefers_fallback() {
        let image = commons("https://commons/a.jpg");
        let resolved = resolve_image("https://bundled/a.jpg", Some(&image), None);
        assert_eq!(resolved.url, "https://bundled/a.jpg");
        assert!(resolved.attribution.is_none());
    }

    #[test]
    fn test_resolve_image_attributes_commons() {
        let image = commons(" https://commons/a.jpg ");
        let resolved = resolve_image("", Some(&image), None);
        assert_eq!(resolved.url, "https://commons/a.jpg");
        assert_eq!(resolved.attribution, Some("Ana • CC BY 4.0".into()));
    }

    #[test]
    fn test_resolve_image_default() {
        let resolved = resolve_image("<img>", None, None);
        assert_eq!(resolved.url, crate::normalizer::DEFAULT_IMAGE);
    }

    #[tokio::test]
    async fn test_products_fall_back_to_catalogue_fields() {
        let gateway = offline_gateway();
        let products = gateway.fetch_hero_products().await;

        assert_eq!(products.len(), PRODUCT_SOURCES.len());
        let ovos = &products[0];
        assert_eq!(ovos.id, "ovos-moles");
        assert_eq!(ovos.title, "Ovos Moles de Aveiro");
        assert_eq!(ovos.subtitle, "Doçaria conventual");
        assert!(ovos.source_url.is_none());
        assert_eq!(ovos.tags.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_by_id() {
        let gateway = offline_gateway();

        let story = gateway.fetch_story_by_id("segredos-moliceiros").await.unwrap();
        assert_eq!(story.date, "03 Jan 2026");

        assert!(matches!(
            gateway.fetch_product_by_id("bacalhau").await,
            Err(RiaError::ProductNotFound(_))
        ));
        assert!(matches!(
            gateway.fetch_story_by_id("nada").await,
            Err(RiaError::StoryNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_explore_pools_fill_empty_collections() {
        let gateway = offline_gateway();
        let pools = gateway.explore_pools(Vec::new(), false).await;

        assert_eq!(pools.products.len(), PRODUCT_SOURCES.len());
        assert_eq!(pools.stories.len(), STORY_SOURCES.len());
        assert_eq!(pools.places, fallback::places());
        assert_eq!(pools.moodboards.len(), 3);
    }

    #[tokio::test]
    async fn test_explore_pools_offline_keeps_user_moodboards() {
        let gateway = offline_gateway();
        let board = Moodboard::new("Fim de semana", None);
        let pools = gateway.explore_pools(vec![board.clone()], true).await;

        assert_eq!(pools.products, fallback::products());
        assert_eq!(pools.moodboards, vec![board]);
    }
}
