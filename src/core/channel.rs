//! # ChannelBus: channel-backed bus engine.
//!
//! ## Architecture
//! ```text
//!  publish(ctx, event)                subscribe(ctx, topic, listener, locals)
//!        │                                  │
//!        │ route lookup (read lock)         │ route create/extend (write lock)
//!        ▼                                  ▼
//!  [topic channel, rendezvous] ◄─ clone ─ worker task (one per subscription)
//!        │                                  │
//!        │ send suspends until a            │ recv → execute under timeout
//!        │ worker is ready                  │ (child token, panic contained)
//!        ▼                                  ▼
//!   returns after hand-off           loops until the channel closes
//!
//!  shutdown(ctx):
//!    closed flag → wait admitted ops → wait dispatches → drop channels → join workers
//! ```
//!
//! ## Rules
//! - A topic route is created by the first subscription; a topic with no
//!   subscribers rejects publishes with [`BusError::NoSubscribers`].
//! - Each published event is consumed by exactly one worker of its topic
//!   (work-queue semantics), and exactly one completion is tracked per
//!   publish, so the drain barrier matches actual deliveries.
//! - [`ChannelBus::shutdown`] is the only way to release worker tasks; a
//!   bus that is never shut down leaks one task per subscription.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::BusConfig;
use crate::core::bus::Bus;
use crate::core::dispatch::{self, Dispatch};
use crate::core::flight::InFlight;
use crate::error::BusError;
use crate::events::Event;
use crate::lifecycle::{BoxError, Shutdown};
use crate::listeners::{compose, InterceptorRef, ListenerRef};

/// Routing entry for one topic.
struct TopicRoute {
    sender: flume::Sender<Dispatch>,
    receiver: flume::Receiver<Dispatch>,
    workers: usize,
}

/// Channel-backed implementation of the [`Bus`] contract.
///
/// Uses one rendezvous (zero-capacity) channel per topic, shared by every
/// worker subscribed to that topic: publishing hands the event to exactly
/// one ready worker, and a slow or absent consumer stalls the publisher.
///
/// Do not forget to call [`ChannelBus::shutdown`] to gracefully finish all
/// in-flight work and release the worker tasks.
pub struct ChannelBus {
    config: BusConfig,
    routes: RwLock<HashMap<String, TopicRoute>>,
    /// Admitted publish/subscribe calls still on the calling task.
    ops: Arc<InFlight>,
    /// Dispatched listener executions not yet completed.
    dispatches: Arc<InFlight>,
    closed: AtomicBool,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl ChannelBus {
    /// Allocates a new bus with the given configuration.
    #[must_use]
    pub fn new(config: BusConfig) -> Self {
        Self {
            config,
            routes: RwLock::new(HashMap::new()),
            ops: InFlight::new(),
            dispatches: InFlight::new(),
            closed: AtomicBool::new(false),
            workers: Mutex::new(Vec::new()),
        }
    }

    /// Propagates `event` to the subscribers of its topic.
    ///
    /// Returns [`BusError::NoSubscribers`] if no route exists for the
    /// event's topic, without blocking. Otherwise suspends until one worker
    /// takes the event and returns right after the hand-off; listener
    /// execution continues in the background and its outcome never reaches
    /// the publisher.
    pub async fn publish(&self, ctx: CancellationToken, event: Event) -> Result<(), BusError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(BusError::Closed);
        }
        let _op = self.ops.admit();

        let sender = {
            let routes = self.routes.read().await;
            match routes.get(event.topic()) {
                Some(route) => route.sender.clone(),
                None => return Err(BusError::NoSubscribers),
            }
        };

        // Exactly one worker will consume this event, so exactly one
        // completion is tracked for the drain barrier.
        let dispatch = Dispatch {
            ctx,
            event,
            guard: self.dispatches.admit(),
        };
        sender
            .send_async(dispatch)
            .await
            .map_err(|_| BusError::Closed)
    }

    /// Registers `listener` on `topic` and spawns its dedicated worker.
    ///
    /// The local `interceptors` wrap the raw listener first and the global
    /// set from [`BusConfig`] wraps the result, so the global chain executes
    /// first at runtime.
    ///
    /// Returns right after registration: the worker may not be ready to
    /// receive yet, so a publish racing this call from another task may
    /// still see [`BusError::NoSubscribers`] — publish-after-subscribe
    /// coordination is the caller's obligation.
    pub async fn subscribe(
        &self,
        _ctx: CancellationToken,
        topic: &str,
        listener: ListenerRef,
        interceptors: Vec<InterceptorRef>,
    ) -> Result<(), BusError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(BusError::Closed);
        }
        let _op = self.ops.admit();

        let receiver = {
            let mut routes = self.routes.write().await;
            let route = routes.entry(topic.to_string()).or_insert_with(|| {
                let (sender, receiver) = flume::bounded(0);
                TopicRoute {
                    sender,
                    receiver,
                    workers: 0,
                }
            });
            route.workers += 1;
            route.receiver.clone()
        };

        let effective = compose(listener, &interceptors, &self.config.interceptors);
        let timeout = self.config.effective_listener_timeout();
        let handle = tokio::spawn(dispatch::worker_loop(receiver, effective, timeout));
        self.workers.lock().await.push(handle);
        Ok(())
    }

    /// Stops in-flight processes gracefully.
    ///
    /// Marks the bus closed (every subsequent call gets
    /// [`BusError::Closed`]), then returns [`BusError::Canceled`] if `ctx`
    /// is already cancelled — the bus stays closed even though the drain was
    /// skipped. Otherwise waits for admitted publish/subscribe calls to
    /// return, then for every dispatched listener execution to complete (by
    /// success, error, timeout, or contained panic), then drops all topic
    /// channels and joins the worker tasks.
    pub async fn shutdown(&self, ctx: CancellationToken) -> Result<(), BusError> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Err(BusError::Closed);
        }
        if ctx.is_cancelled() {
            return Err(BusError::Canceled);
        }

        self.ops.settled().await;
        self.dispatches.settled().await;

        // Dropping the routes drops the last live senders; workers drain
        // what is left and exit their receive loops.
        self.routes.write().await.clear();
        let workers = std::mem::take(&mut *self.workers.lock().await);
        for worker in workers {
            let _ = worker.await;
        }
        Ok(())
    }

    /// Number of live workers subscribed to `topic`.
    pub async fn subscriber_count(&self, topic: &str) -> usize {
        self.routes
            .read()
            .await
            .get(topic)
            .map_or(0, |route| route.workers)
    }
}

#[async_trait]
impl Bus for ChannelBus {
    async fn publish(&self, ctx: CancellationToken, event: Event) -> Result<(), BusError> {
        ChannelBus::publish(self, ctx, event).await
    }

    async fn subscribe(
        &self,
        ctx: CancellationToken,
        topic: &str,
        listener: ListenerRef,
        interceptors: Vec<InterceptorRef>,
    ) -> Result<(), BusError> {
        ChannelBus::subscribe(self, ctx, topic, listener, interceptors).await
    }
}

#[async_trait]
impl Shutdown for ChannelBus {
    async fn shutdown(&self, ctx: CancellationToken) -> Result<(), BoxError> {
        ChannelBus::shutdown(self, ctx).await.map_err(Into::into)
    }
}
