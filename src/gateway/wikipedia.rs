use std::sync::Arc;

use serde::Deserialize;
use url::Url;

use crate::app::{Result, RiaError};
use crate::fetcher::Fetcher;
use crate::normalizer::strip_html;

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    title: String,
    displaytitle: Option<String>,
    extract: Option<String>,
    description: Option<String>,
    thumbnail: Option<Thumbnail>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    mobile: Option<PageUrl>,
}

#[derive(Debug, Deserialize)]
struct PageUrl {
    page: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WikipediaSummary {
    pub title: String,
    pub description: Option<String>,
    pub extract: Option<String>,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
}

pub struct WikipediaClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    endpoint: String,
}

impl WikipediaClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, endpoint: impl Into<String>) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
        }
    }

    /// Summary URL for `title`; whitespace runs become underscores.
    pub fn summary_url(&self, title: &str) -> Result<Url> {
        let mapped = title.split_whitespace().collect::<Vec<_>>().join("_");
        let mut url = Url::parse(&self.endpoint)?;
        url.path_segments_mut()
            .map_err(|_| RiaError::Config(format!("Invalid Wikipedia endpoint: {}", self.endpoint)))?
            .pop_if_empty()
            .push(&mapped);
        Ok(url)
    }

    /// `Ok(None)` when the page answered with something other than JSON.
    pub async fn summary(&self, title: &str) -> Result<Option<WikipediaSummary>> {
        let url = self.summary_url(title)?;
        let response = self.fetcher.get(url.as_str()).await?;

        if !response.is_json() {
            tracing::debug!("Wikipedia summary for {} is not JSON", title);
            return Ok(None);
        }

        let data: SummaryResponse = serde_json::from_slice(&response.body)?;
        let raw_title = data.displaytitle.as_deref().unwrap_or(&data.title);

        Ok(Some(WikipediaSummary {
            title: strip_html(raw_title),
            description: data.description,
            extract: data.extract,
            url: data.content_urls.and_then(|u| u.mobile).map(|m| m.page),
            thumbnail: data.thumbnail.map(|t| t.source),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkConfig;
    use crate::fetcher::http_fetcher::HttpFetcher;
    use httpmock::prelude::*;

    fn client(endpoint: &str) -> WikipediaClient {
        let fetcher = Arc::new(HttpFetcher::new(&NetworkConfig::default()).unwrap());
        WikipediaClient::new(fetcher, endpoint)
    }

    #[test]
    fn test_summary_url_maps_whitespace_and_encodes() {
        let client = client("https://pt.wikipedia.org/api/rest_v1/page/summary");
        let url = client.summary_url("  Pão de   Ló ").unwrap();
        assert_eq!(
            url.as_str(),
            "https://pt.wikipedia.org/api/rest_v1/page/summary/P%C3%A3o_de_L%C3%B3"
        );
    }

    #[test]
    fn test_summary_url_trailing_slash() {
        let client = client("https://pt.wikipedia.org/api/rest_v1/page/summary/");
        let url = client.summary_url("Moliceiro").unwrap();
        assert_eq!(
            url.as_str(),
            "https://pt.wikipedia.org/api/rest_v1/page/summary/Moliceiro"
        );
    }

    #[tokio::test]
    async fn test_summary_parses_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/rest_v1/page/summary/Ovos_moles");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "title": "Ovos moles",
                        "displaytitle": "<span>Ovos moles de Aveiro</span>",
                        "description": "doce conventual",
                        "extract": "Os ovos moles são...",
                        "thumbnail": {"source": "https://upload.example/ovos.jpg"},
                        "content_urls": {"mobile": {"page": "https://pt.m.wikipedia.org/wiki/Ovos_moles"}}
                    }));
            })
            .await;

        let client = client(&server.url("/api/rest_v1/page/summary"));
        let summary = client.summary("Ovos moles").await.unwrap().unwrap();

        assert_eq!(summary.title, "Ovos moles de Aveiro");
        assert_eq!(summary.description, Some("doce conventual".into()));
        assert_eq!(summary.thumbnail, Some("https://upload.example/ovos.jpg".into()));
        assert_eq!(
            summary.url,
            Some("https://pt.m.wikipedia.org/wiki/Ovos_moles".into())
        );
    }

    #[tokio::test]
    async fn test_non_json_response_is_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/rest_v1/page/summary/Raia");
                then.status(200)
                    .header("content-type", "text/html")
                    .body("<html></html>");
            })
            .await;

        let client = client(&server.url("/api/rest_v1/page/summary"));
        assert!(client.summary("Raia").await.unwrap().is_none());
    }
}
