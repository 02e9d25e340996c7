//! Notice publishing/subscription abstraction (mechanics only).
//!
//! A pub/sub mechanism for distributing notices to consumers (loggers,
//! displays, auditing). The contract is intentionally lightweight:
//!
//! - **Transport-agnostic**: works with in-memory channels or anything else.
//! - **Broadcast semantics**: each subscriber gets a copy of every notice.
//! - **At-least-once acceptable**: consumers must tolerate duplicates.
//! - **No persistence**: the bus distributes, the aggregates own state.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to a notice stream.
///
/// Each subscription gets a copy of all notices published to the bus after
/// the subscription was taken. Designed for single-threaded consumption.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Domain-agnostic notice bus (pub/sub abstraction).
///
/// `publish()` can fail (e.g. a poisoned lock); failures surface to the
/// caller, which may retry safely because domain state was already
/// committed before publication.
pub trait NoticeBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> NoticeBus<M> for Arc<B>
where
    B: NoticeBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
