//! # Listener contract.
//!
//! A [`Listener`] is executed once per delivered event by the topic's worker
//! task. The bus hands it a [`CancellationToken`] derived from the
//! publish-time token and bounded by the configured execution timeout;
//! implementations should treat a cancelled token as a request to wind down
//! promptly — cancellation is cooperative.
//!
//! [`ListenerFn`] wraps a closure `F: Fn(CancellationToken, Event) -> Fut`,
//! producing a fresh future per delivery, so no shared mutable state is
//! required between executions; if shared state is needed, move an
//! `Arc<...>` into the closure explicitly.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ListenerError;
use crate::events::Event;

/// Shared handle to a listener.
pub type ListenerRef = Arc<dyn Listener>;

/// Handler invoked per delivered event.
///
/// Called from a topic-dedicated worker task. May itself be long-running;
/// the token reports cancellation once the execution timeout expires or the
/// publisher's token is cancelled.
#[async_trait]
pub trait Listener: Send + Sync + 'static {
    /// Handles a single delivered event.
    ///
    /// The returned error is dropped by the engine; wrap the listener in an
    /// interceptor to observe it.
    async fn call(&self, ctx: CancellationToken, event: Event) -> Result<(), ListenerError>;
}

/// Function-backed listener implementation.
pub struct ListenerFn<F> {
    f: F,
}

impl<F> ListenerFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenerFn::arc`] when you immediately need a
    /// [`ListenerRef`].
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the listener and returns it as a shared handle.
    ///
    /// # Example
    /// ```
    /// use tokio_util::sync::CancellationToken;
    /// use topicbus::{Event, ListenerError, ListenerFn, ListenerRef};
    ///
    /// let listener: ListenerRef =
    ///     ListenerFn::arc(|_ctx: CancellationToken, _event: Event| async move {
    ///         Ok::<_, ListenerError>(())
    ///     });
    /// # drop(listener);
    /// ```
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> Listener for ListenerFn<F>
where
    F: Fn(CancellationToken, Event) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ListenerError>> + Send + 'static,
{
    async fn call(&self, ctx: CancellationToken, event: Event) -> Result<(), ListenerError> {
        (self.f)(ctx, event).await
    }
}
