use serde::Deserialize;
use std::time::Duration;

/// Settings for the content APIs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Request timeout in seconds (default: 12)
    pub timeout_secs: u64,

    pub user_agent: String,

    /// Base of the page summary REST endpoint; the title is appended as a path segment
    pub wikipedia_endpoint: String,

    pub commons_endpoint: String,

    pub overpass_endpoint: String,

    /// Tried once after every attempt on the primary endpoint failed
    pub overpass_fallback_endpoint: String,

    /// Attempts against the primary Overpass endpoint (default: 3)
    pub overpass_attempts: u32,

    /// Linear backoff step between Overpass attempts in milliseconds (default: 2000)
    pub retry_backoff_ms: u64,

    /// How long place results stay cached in seconds (default: 300)
    pub places_cache_ttl_secs: u64,

    /// Width requested for Commons thumbnails (default: 1200)
    pub image_width: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 12,
            user_agent: "RemarAoTacho/1.0".to_string(),
            wikipedia_endpoint: "https://pt.wikipedia.org/api/rest_v1/page/summary".to_string(),
            commons_endpoint: "https://commons.wikimedia.org/w/api.php".to_string(),
            overpass_endpoint: "https://overpass-api.de/api/interpreter".to_string(),
            overpass_fallback_endpoint: "https://overpass.kumi.systems/api/interpreter".to_string(),
            overpass_attempts: 3,
            retry_backoff_ms: 2000,
            places_cache_ttl_secs: 300,
            image_width: 1200,
        }
    }
}

impl NetworkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    pub fn places_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.places_cache_ttl_secs)
    }

    /// Point every endpoint at one base URL (used against mock servers)
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            wikipedia_endpoint: format!("{}/api/rest_v1/page/summary", base),
            commons_endpoint: format!("{}/w/api.php", base),
            overpass_endpoint: format!("{}/api/interpreter", base),
            overpass_fallback_endpoint: format!("{}/fallback/interpreter", base),
            retry_backoff_ms: 0,
            ..Default::default()
        }
    }
}
