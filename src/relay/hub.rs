//! Fan-out of translated messages to every connected client.

use tokio::sync::broadcast;
use tracing::debug;

use super::events::ServerEvent;

/// Broadcast hub shared by all socket connections.
///
/// Each connection holds its own receiver; a receiver that falls more than
/// `capacity` events behind skips the oldest ones.
pub struct ChatHub {
    tx: broadcast::Sender<ServerEvent>,
}

impl ChatHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Subscribe to all future broadcasts.
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.tx.subscribe()
    }

    /// Send an event to every subscriber.
    ///
    /// Returns the number of subscribers reached. No subscribers is not an
    /// error; the event is simply dropped.
    pub fn broadcast(&self, event: ServerEvent) -> usize {
        match self.tx.send(event) {
            Ok(count) => count,
            Err(_) => {
                debug!("Broadcast dropped, no connected clients");
                0
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
