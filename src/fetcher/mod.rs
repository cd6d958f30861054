pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

impl FetchResponse {
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false)
    }
}

#[async_trait]
pub trait Fetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse>;

    /// POST an `application/x-www-form-urlencoded` body.
    async fn post_form(&self, url: &str, body: String) -> Result<FetchResponse>;
}
