//! Change notifications for liked products.
//!
//! Subscribers get the full liked list after every change, so a late
//! subscriber only needs the most recent message to be in sync.

use tokio::sync::broadcast;

use crate::domain::LikedProduct;

pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub struct LikeEvents {
    sender: broadcast::Sender<Vec<LikedProduct>>,
}

impl Default for LikeEvents {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl LikeEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Vec<LikedProduct>> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the snapshot.
    pub fn publish(&self, snapshot: Vec<LikedProduct>) -> usize {
        // send only fails when there are no receivers
        self.sender.send(snapshot).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_subscribers() {
        let events = LikeEvents::default();
        assert_eq!(events.publish(Vec::new()), 0);
    }

    #[tokio::test]
    async fn test_subscribers_receive_snapshots() {
        let events = LikeEvents::new(4);
        let mut first = events.subscribe();
        let mut second = events.subscribe();
        assert_eq!(events.subscriber_count(), 2);

        let liked = vec![LikedProduct::new("ovos-moles", "Ovos Moles", "img")];
        assert_eq!(events.publish(liked.clone()), 2);

        assert_eq!(first.recv().await.unwrap(), liked);
        assert_eq!(second.recv().await.unwrap(), liked);
    }

    #[test]
    fn test_dropped_subscriber_is_unregistered() {
        let events = LikeEvents::default();
        let receiver = events.subscribe();
        assert_eq!(events.subscriber_count(), 1);
        drop(receiver);
        assert_eq!(events.subscriber_count(), 0);
    }
}
