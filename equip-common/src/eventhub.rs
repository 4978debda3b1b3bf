//! eventhub

use tokio::sync::broadcast;

/// Small broadcast hub. Publishers never block; subscribers that lag past the
/// channel capacity lose the oldest events.
#[derive(Debug, Clone)]
pub struct EventHub<T> {
    tx: broadcast::Sender<T>,
}

impl<T: Clone> EventHub<T> {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.tx.subscribe()
    }

    /// Publishes an event, returning how many subscribers saw it. An event
    /// with no subscribers is dropped silently.
    pub fn publish(&self, event: T) -> usize {
        self.tx.send(event).unwrap_or(0)
    }
}

impl<T: Clone> Default for EventHub<T> {
    fn default() -> Self {
        Self::new(16)
    }
}
