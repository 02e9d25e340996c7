//! In-memory notice bus for the driver and tests.

use std::sync::{Mutex, mpsc};

use crate::bus::{NoticeBus, Subscription};

#[derive(Debug)]
pub enum InMemoryBusError {
    /// Publish failed due to internal lock poisoning.
    Poisoned,
}

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Best-effort fan-out
/// - At-least-once acceptable (subscribers must be idempotent)
#[derive(Debug)]
pub struct InMemoryNoticeBus<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryNoticeBus<M> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M> Default for InMemoryNoticeBus<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> NoticeBus<M> for InMemoryNoticeBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self
            .subscribers
            .lock()
            .map_err(|_| InMemoryBusError::Poisoned)?;

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(message.clone()).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // If the lock is poisoned, we still return a subscription;
        // it just won't receive messages until the process restarts.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_each_receive_published_messages() {
        let bus: InMemoryNoticeBus<String> = InMemoryNoticeBus::new();
        let sub_a = bus.subscribe();
        let sub_b = bus.subscribe();

        bus.publish("cargo received".to_string()).unwrap();

        assert_eq!(sub_a.recv().unwrap(), "cargo received");
        assert_eq!(sub_b.recv().unwrap(), "cargo received");
    }

    #[test]
    fn messages_arrive_in_publication_order() {
        let bus: InMemoryNoticeBus<u32> = InMemoryNoticeBus::new();
        let sub = bus.subscribe();

        for n in 1..=3 {
            bus.publish(n).unwrap();
        }

        assert_eq!(sub.try_recv().unwrap(), 1);
        assert_eq!(sub.try_recv().unwrap(), 2);
        assert_eq!(sub.try_recv().unwrap(), 3);
        assert!(sub.try_recv().is_err());
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_publish() {
        let bus: InMemoryNoticeBus<u32> = InMemoryNoticeBus::new();
        let sub = bus.subscribe();
        drop(bus.subscribe());

        bus.publish(7).unwrap();
        assert_eq!(sub.recv().unwrap(), 7);
    }
}
