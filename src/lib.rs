//! # topicbus
//!
//! **topicbus** is an in-process publish/subscribe event bus for Rust.
//!
//! Components of a single running process exchange occurrence notifications
//! through topic-keyed channels without holding references to each other.
//! The crate is an embedded building block: no wire format, no persistence,
//! no CLI surface.
//!
//! ## Architecture
//! ```text
//!  publisher ── publish(ctx, Event) ──► ChannelBus
//!                                           │  routing table: topic → channel
//!                     ┌─────────────────────┼─────────────────────┐
//!                     ▼                     ▼                     ▼
//!             [topic "orders"]      [topic "users"]       [topic "audit"]
//!                     │
//!                     │  one rendezvous channel per topic, shared by
//!                     │  every worker subscribed to that topic
//!             ┌───────┴────────┐
//!             ▼                ▼
//!         worker #1        worker #2       (one per subscription)
//!             │                │
//!       interceptors → listener            bounded by listener_timeout,
//!             │                            panics contained, errors visible
//!             ▼                            to interceptors only
//!       loops until shutdown closes the channel
//! ```
//!
//! ## Delivery contract
//! - **At most one consumer per published event per topic**: subscribing two
//!   listeners to the same topic makes them compete for events, not fan out.
//! - **Synchronous hand-off**: `publish` suspends until a worker is ready to
//!   receive; a slow or absent consumer stalls the publisher (natural
//!   backpressure, no buffering).
//! - **Best-effort**: no persistence, no redelivery, no ordering guarantees
//!   across topics or across workers of one topic.
//! - **Graceful shutdown**: [`ChannelBus::shutdown`] drains admitted calls
//!   and in-flight listener executions before releasing worker tasks — and
//!   is the only way to release them.
//!
//! ## Features
//! | Area              | Description                                            | Key types / traits                              |
//! |-------------------|--------------------------------------------------------|-------------------------------------------------|
//! | **Bus engine**    | Topic routing, dispatch workers, graceful shutdown.    | [`Bus`], [`ChannelBus`]                         |
//! | **Listeners**     | Per-event handlers with cooperative cancellation.      | [`Listener`], [`ListenerFn`], [`ListenerRef`]   |
//! | **Interceptors**  | Chain-of-responsibility middleware around listeners.   | [`Interceptor`], [`InterceptorFn`]              |
//! | **Configuration** | Execution timeout and the global interceptor chain.    | [`BusConfig`]                                   |
//! | **Lifecycle**     | Start/shutdown vocabulary for process components.      | [`Start`], [`Shutdown`]                         |
//! | **Collaborators** | Time-sortable IDs, rule-based structure validation.    | [`IdFactory`], [`UuidFactory`], [`RulesValidator`] |
//!
//! ## Optional features
//! - `logging`: exports [`LogInterceptor`], a tracing-backed delivery logger.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use topicbus::{BusConfig, ChannelBus, Event, ListenerError, ListenerFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = BusConfig::default();
//!     config.listener_timeout = Duration::from_secs(5);
//!     let bus = ChannelBus::new(config);
//!
//!     bus.subscribe(
//!         CancellationToken::new(),
//!         "org.acme.users",
//!         ListenerFn::arc(|_ctx: CancellationToken, event: Event| async move {
//!             println!("received: {}", String::from_utf8_lossy(event.message()));
//!             Ok::<_, ListenerError>(())
//!         }),
//!         Vec::new(),
//!     )
//!     .await?;
//!
//!     let event = Event::new()
//!         .with_topic("org.acme.users")
//!         .with_message(b"user registered".to_vec());
//!     bus.publish(CancellationToken::new(), event).await?;
//!
//!     bus.shutdown(CancellationToken::new()).await?;
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;
mod events;
mod identifier;
mod lifecycle;
mod listeners;
mod validation;

// ---- Public re-exports ----

pub use config::BusConfig;
pub use core::{Bus, ChannelBus};
pub use error::{BusError, ListenerError};
pub use events::Event;
pub use identifier::{IdError, IdFactory, UuidFactory};
pub use lifecycle::{BoxError, Shutdown, Start};
pub use listeners::{
    Interceptor, InterceptorFn, InterceptorRef, Listener, ListenerFn, ListenerRef,
};
pub use validation::{RulesValidator, ValidateStruct, ValidationError};

// Optional: expose the built-in tracing interceptor (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogInterceptor;
