use tokio::sync::broadcast;

/// Fan-out channel for state-change notifications.
///
/// Publishing never blocks. Subscribers that fall behind by more than
/// `capacity` events observe `RecvError::Lagged` and should resync from a
/// snapshot.
pub struct EventBus<E: Clone> {
    sender: broadcast::Sender<E>,
}

impl<E: Clone> EventBus<E> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: E) -> usize {
        let delivered = self.sender.send(event).unwrap_or(0);
        tracing::trace!(delivered, "event published");
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
