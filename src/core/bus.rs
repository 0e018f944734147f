//! # Bus contract.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::BusError;
use crate::events::Event;
use crate::listeners::{InterceptorRef, ListenerRef};

/// Communication component for systems to propagate occurrences within
/// themselves.
#[async_trait]
pub trait Bus: Send + Sync {
    /// Propagates `event` to the subscribers of its topic (if any).
    ///
    /// Suspends until one worker of the topic is ready to receive; returns
    /// after the hand-off, before the listener execution finishes.
    async fn publish(&self, ctx: CancellationToken, event: Event) -> Result<(), BusError>;

    /// Registers `listener` on the given `topic`. The listener is executed
    /// every time a matching [`Event`] is published, wrapped in the local
    /// `interceptors` and the globally configured ones.
    ///
    /// Bus operations may be concurrent: a subscription is only guaranteed
    /// to receive events published after the registration returned, and the
    /// worker may still be starting at that point — publish-after-subscribe
    /// coordination is the caller's obligation.
    async fn subscribe(
        &self,
        ctx: CancellationToken,
        topic: &str,
        listener: ListenerRef,
        interceptors: Vec<InterceptorRef>,
    ) -> Result<(), BusError>;
}
