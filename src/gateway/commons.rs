use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use url::Url;

use crate::app::Result;
use crate::fetcher::Fetcher;
use crate::normalizer::{build_attribution, MetadataValue};

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryPages>,
}

#[derive(Debug, Deserialize)]
struct QueryPages {
    pages: HashMap<String, QueryPage>,
}

#[derive(Debug, Deserialize)]
struct QueryPage {
    index: Option<i64>,
    #[serde(default)]
    imageinfo: Vec<ImageInfo>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    url: String,
    thumburl: Option<String>,
    descriptionurl: Option<String>,
    extmetadata: Option<HashMap<String, MetadataValue>>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommonsImage {
    /// Thumbnail at the requested width when available
    pub url: String,
    pub original_url: String,
    pub attribution: Option<String>,
    pub description_url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

pub struct CommonsClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    endpoint: String,
    target_width: u32,
}

impl CommonsClient {
    pub fn new(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        endpoint: impl Into<String>,
        target_width: u32,
    ) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
            target_width,
        }
    }

    pub fn search_url(&self, term: &str) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)?;
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("generator", "search")
            .append_pair("gsrlimit", "1")
            .append_pair("gsrsearch", term)
            .append_pair("prop", "imageinfo")
            .append_pair("iiprop", "url|extmetadata|dimensions")
            .append_pair("iiurlwidth", &self.target_width.to_string())
            .append_pair("format", "json")
            .append_pair("origin", "*");
        Ok(url)
    }

    /// Try each term in order and return the first image found.
    pub async fn search_image(&self, terms: &[&str]) -> Option<CommonsImage> {
        for term in terms.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            match self.query(term).await {
                Ok(Some(image)) => return Some(image),
                Ok(None) => {
                    tracing::debug!("No Commons image for \"{}\"", term);
                }
                Err(e) => {
                    tracing::warn!("Commons image lookup failed for \"{}\": {}", term, e);
                }
            }
        }
        None
    }

    async fn query(&self, term: &str) -> Result<Option<CommonsImage>> {
        let url = self.search_url(term)?;
        let response = self.fetcher.get(url.as_str()).await?;

        if !response.is_json() {
            return Ok(None);
        }

        let data: QueryResponse = serde_json::from_slice(&response.body)?;
        let Some(query) = data.query else {
            return Ok(None);
        };

        let mut pages: Vec<QueryPage> = query.pages.into_values().collect();
        pages.sort_by_key(|p| p.index.unwrap_or(0));

        let image = pages
            .into_iter()
            .find_map(|page| page.imageinfo.into_iter().next());

        Ok(image.map(|info| CommonsImage {
            attribution: build_attribution(info.extmetadata.as_ref()),
            url: info.thumburl.unwrap_or_else(|| info.url.clone()),
            original_url: info.url,
            description_url: info.descriptionurl,
            width: info.width,
            height: info.height,
        }))
    }
}
