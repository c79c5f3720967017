//! Shutdown coordination.
//!
//! The server holds one receiver; the notice is sent once, when an OS signal
//! (or any other awaited event) arrives.

use std::future::Future;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// One-shot shutdown notice for the serving tasks.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver that resolves once [`Shutdown::trigger`] is called.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Notify all subscribers. Does nothing if nobody listens.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of tasks still subscribed.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Spawn a task that triggers shutdown once `event` completes.
    ///
    /// Takes ownership so the sender lives exactly as long as the watcher.
    pub fn trigger_on<F>(self, event: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(async move {
            event.await;
            tracing::info!(
                receivers = self.receiver_count(),
                "Stopping culture resolution service"
            );
            self.trigger();
        })
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
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_trigger_reaches_subscribers() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.subscribe();
        assert_eq!(shutdown.receiver_count(), 2);

        shutdown.trigger();
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }

    #[test]
    fn test_trigger_without_subscribers() {
        Shutdown::default().trigger();
    }

    #[tokio::test]
    async fn test_trigger_on_waits_for_event() {
        let shutdown = Shutdown::new();
        let mut server = shutdown.subscribe();
        let (fire, event) = oneshot::channel::<()>();

        let watcher = shutdown.trigger_on(async move {
            let _ = event.await;
        });
        assert!(server.try_recv().is_err());

        fire.send(()).unwrap();
        watcher.await.unwrap();
        assert!(server.recv().await.is_ok());
    }
}
