use std::sync::Arc;

use tokio::sync::broadcast;

use crate::app::Result;
use crate::domain::LikedProduct;
use crate::events::LikeEvents;
use crate::store::{SqliteStore, Store};

/// Like mutations that keep subscribers in sync with the store.
pub struct Library {
    store: Arc<SqliteStore>,
    events: LikeEvents,
}

impl Library {
    pub fn new(store: Arc<SqliteStore>, events: LikeEvents) -> Self {
        Self { store, events }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Vec<LikedProduct>> {
        self.events.subscribe()
    }

    pub fn liked(&self) -> Result<Vec<LikedProduct>> {
        self.store.get_liked_products()
    }

    pub fn is_liked(&self, product_id: &str) -> Result<bool> {
        self.store.is_liked(product_id)
    }

    /// Returns whether the product is liked after the call.
    pub fn toggle_like(&self, product: &LikedProduct) -> Result<bool> {
        let liked = self.store.toggle_like(product)?;
        self.notify()?;
        Ok(liked)
    }

    pub fn remove_like(&self, product_id: &str) -> Result<()> {
        self.store.remove_like(product_id)?;
        self.notify()
    }

    fn notify(&self) -> Result<()> {
        let snapshot = self.store.get_liked_products()?;
        let delivered = self.events.publish(snapshot);
        tracing::debug!("Liked products published to {} subscribers", delivered);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Library {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        Library::new(store, LikeEvents::default())
    }

    #[tokio::test]
    async fn test_toggle_publishes_snapshot() {
        let library = library();
        let mut updates = library.subscribe();

        let product = LikedProduct::new("ovos-moles", "Ovos Moles", "img");
        assert!(library.toggle_like(&product).unwrap());

        let snapshot = updates.recv().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "ovos-moles");

        assert!(!library.toggle_like(&product).unwrap());
        assert!(updates.recv().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_like_publishes_even_when_absent() {
        let library = library();
        let mut updates = library.subscribe();

        library.remove_like("nada").unwrap();
        assert!(updates.recv().await.unwrap().is_empty());
    }

    #[test]
    fn test_liked_reads_store() {
        let library = library();
        library
            .toggle_like(&LikedProduct::new("raia", "Raia", "img"))
            .unwrap();
        assert!(library.is_liked("raia").unwrap());
        assert_eq!(library.liked().unwrap().len(), 1);
    }
}
