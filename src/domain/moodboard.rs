use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::Product;

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Product snapshot stored inside a moodboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProduct {
    pub id: String,
    pub title: String,
    pub image: String,
}

impl From<&Product> for SavedProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            image: product.image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moodboard {
    pub id: String,
    pub title: String,
    pub accent_color: Option<String>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub products: Vec<SavedProduct>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Moodboard {
    pub fn new(title: impl Into<String>, accent_color: Option<String>) -> Self {
        let title = title.into();
        let now = Utc::now();
        Self {
            id: Self::generate_id(&title, now),
            title,
            accent_color,
            cover_image: None,
            description: None,
            products: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Generate a short unique ID from the title and creation instant
    pub fn generate_id(title: &str, created_at: DateTime<Utc>) -> String {
        let sequence = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let mut hasher = Sha256::new();
        hasher.update(title.as_bytes());
        hasher.update(created_at.to_rfc3339().as_bytes());
        hasher.update(sequence.to_le_bytes());
        let digest = hex::encode(hasher.finalize());
        digest[..16].to_string()
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.products.iter().any(|p| p.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let now = Utc::now();
        let id1 = Moodboard::generate_id("Doces", now);
        let id2 = Moodboard::generate_id("Doces", now);
        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 16);
        assert!(id1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_new_moodboard_is_empty() {
        let board = Moodboard::new("Tons de Sal", Some("#98CB4F".into()));
        assert_eq!(board.count(), 0);
        assert!(board.cover_image.is_none());
        assert_eq!(board.created_at, board.updated_at);
    }

    #[test]
    fn test_contains() {
        let mut board = Moodboard::new("Doces", None);
        board.products.push(SavedProduct {
            id: "ovos-moles".into(),
            title: "Ovos Moles".into(),
            image: "https://example.com/ovos.jpg".into(),
        });
        assert!(board.contains("ovos-moles"));
        assert!(!board.contains("pao-lo-ovar"));
    }
}
