//! Shutdown coordination for the gateway.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that background revalidation tasks and
/// the HTTP server subscribe to. Triggering it cancels pending work;
/// the page cache needs no flushing (it is in-process only).
#[derive(Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of tasks still listening.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_count_tracks_subscribers() {
        let shutdown = Shutdown::new();
        assert_eq!(shutdown.listener_count(), 0);

        let rx = shutdown.subscribe();
        assert_eq!(shutdown.listener_count(), 1);

        drop(rx);
        assert_eq!(shutdown.listener_count(), 0);
    }
}
