use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedProduct {
    pub id: String,
    pub title: String,
    pub image: String,
    pub description: Option<String>,
    pub extract: Option<String>,
    pub thumbnail: Option<String>,
    pub liked_at: DateTime<Utc>,
}

impl LikedProduct {
    pub fn new(id: impl Into<String>, title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
            description: None,
            extract: None,
            thumbnail: None,
            liked_at: Utc::now(),
        }
    }
}

impl From<&Product> for LikedProduct {
    fn from(product: &Product) -> Self {
        let mut liked = Self::new(&product.id, &product.title, &product.image);
        liked.description = Some(product.subtitle.clone()).filter(|s| !s.is_empty());
        liked.extract = Some(product.description.clone()).filter(|s| !s.is_empty());
        liked
    }
}
