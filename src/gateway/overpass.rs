use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::app::Result;
use crate::config::NetworkConfig;
use crate::domain::{Place, PlaceType};
use crate::fetcher::Fetcher;
use crate::gateway::catalog::{place_type_filters, BoundingBox, AVEIRO_BOUNDING_BOX};
use crate::normalizer::{format_address, infer_place_type, split_filter};

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    id: i64,
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<Center>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct Center {
    lat: f64,
    lon: f64,
}

pub struct OverpassClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    endpoint: String,
    fallback_endpoint: String,
    attempts: u32,
    backoff: Duration,
    ttl: Duration,
    bbox: BoundingBox,
    filters: Vec<(PlaceType, Vec<String>)>,
    cache: Mutex<HashMap<String, (Instant, Vec<Place>)>>,
}

impl OverpassClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, config: &NetworkConfig) -> Self {
        Self {
            fetcher,
            endpoint: config.overpass_endpoint.clone(),
            fallback_endpoint: config.overpass_fallback_endpoint.clone(),
            attempts: config.overpass_attempts.max(1),
            backoff: config.retry_backoff(),
            ttl: config.places_cache_ttl(),
            bbox: AVEIRO_BOUNDING_BOX,
            filters: place_type_filters(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn cache_key(types: &[PlaceType]) -> String {
        let mut names: Vec<&str> = types.iter().map(PlaceType::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names.join("|")
    }

    fn selector(filter: &str, bbox: &str) -> String {
        let (key, value) = split_filter(filter);
        let matcher = match value {
            None | Some("*") | Some("") => format!("[\"{}\"]", key),
            Some(value) => format!("[\"{}\"=\"{}\"]", key, value),
        };

        ["node", "way", "relation"]
            .iter()
            .map(|geometry| format!("{}{}({});", geometry, matcher, bbox))
            .collect()
    }

    /// Overpass QL for every filter of the requested types.
    pub fn build_query(&self, types: &[PlaceType]) -> String {
        if types.is_empty() {
            return String::new();
        }

        let bbox = self.bbox.to_overpass();
        let selectors: String = types
            .iter()
            .flat_map(|t| {
                self.filters
                    .iter()
                    .filter(move |(place_type, _)| place_type == t)
                    .flat_map(|(_, filters)| filters.iter())
            })
            .map(|filter| Self::selector(filter, &bbox))
            .collect();

        format!("[out:json][timeout:180];({});out center qt;", selectors)
    }

    /// Places of the given types around Aveiro. Never fails: after every
    /// endpoint has been tried the result is empty.
    pub async fn places_by_types(&self, types: &[PlaceType]) -> Vec<Place> {
        if types.is_empty() {
            return Vec::new();
        }

        let key = Self::cache_key(types);
        if let Some(cached) = self.cached(&key) {
            tracing::debug!("Places cache hit for {}", key);
            return cached;
        }

        let query = self.build_query(types);
        let body: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("data", &query)
            .finish();

        for attempt in 1..=self.attempts {
            match self.request(&self.endpoint, &body, types).await {
                Ok(places) => {
                    self.store(key, &places);
                    return places;
                }
                Err(e) => {
                    tracing::warn!("Overpass request attempt {} failed: {}", attempt, e);
                    if attempt < self.attempts {
                        tokio::time::sleep(self.backoff * attempt).await;
                    }
                }
            }
        }

        tracing::warn!(
            "Overpass failed after {} attempts, trying {}",
            self.attempts,
            self.fallback_endpoint
        );

        match self.request(&self.fallback_endpoint, &body, types).await {
            Ok(places) => {
                tracing::info!("Alternative Overpass endpoint succeeded");
                self.store(key, &places);
                places
            }
            Err(e) => {
                tracing::error!("Alternative Overpass endpoint also failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn request(&self, endpoint: &str, body: &str, types: &[PlaceType]) -> Result<Vec<Place>> {
        let response = self.fetcher.post_form(endpoint, body.to_string()).await?;
        let data: OverpassResponse = serde_json::from_slice(&response.body)?;

        Ok(data
            .elements
            .into_iter()
            .filter_map(|element| self.to_place(element, types))
            .collect())
    }

    fn to_place(&self, element: OverpassElement, types: &[PlaceType]) -> Option<Place> {
        let (latitude, longitude) = match (element.lat, element.lon, &element.center) {
            (Some(lat), Some(lon), _) => (lat, lon),
            (_, _, Some(center)) => (center.lat, center.lon),
            _ => return None,
        };

        let tags = element.tags;
        let kind = infer_place_type(types, &self.filters, &tags);
        let name = tags
            .get("name")
            .or_else(|| tags.get("addr:street"))
            .cloned()
            .unwrap_or_else(|| "Local sem nome".to_string());

        let mut place = Place::new(element.id.to_string(), name, kind);
        if let Some(description) = tags.get("description") {
            place.description = description.clone();
        }
        place.latitude = latitude;
        place.longitude = longitude;
        place.address = format_address(&tags);
        place.source_url = tags
            .get("wikidata")
            .map(|id| format!("https://www.wikidata.org/wiki/{}", id));

        let mut keys: Vec<String> = tags.into_keys().collect();
        keys.sort();
        place.tags = keys;

        Some(place)
    }

    fn cached(&self, key: &str) -> Option<Vec<Place>> {
        let cache = self.cache.lock().ok()?;
        cache
            .get(key)
            .filter(|(stored_at, _)| stored_at.elapsed() < self.ttl)
            .map(|(_, places)| places.clone())
    }

    fn store(&self, key: String, places: &[Place]) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, (Instant::now(), places.to_vec()));
        }
    }
}
