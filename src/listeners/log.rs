//! # LogInterceptor — tracing-backed delivery logging.
//!
//! A ready-made [`Interceptor`] that records every delivery before handing
//! it to the wrapped listener and records the listener's error, if any. Use
//! it as a global interceptor for uniform delivery logs, or attach it to a
//! single subscription.
//!
//! The engine itself never logs listener errors; this interceptor is the
//! supported way to put them on record.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::events::Event;
use crate::listeners::{Interceptor, ListenerFn, ListenerRef};

/// Delivery-logging interceptor.
#[derive(Default)]
pub struct LogInterceptor;

impl LogInterceptor {
    /// Constructs a new [`LogInterceptor`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Interceptor for LogInterceptor {
    fn wrap(&self, next: ListenerRef) -> ListenerRef {
        ListenerFn::arc(move |ctx: CancellationToken, event: Event| {
            let next = Arc::clone(&next);
            async move {
                tracing::info!(
                    topic = event.topic(),
                    bytes = event.message().len(),
                    "executing listener"
                );
                let res = next.call(ctx, event).await;
                if let Err(err) = &res {
                    tracing::error!(error = %err, label = err.as_label(), "listener error");
                }
                res
            }
        })
    }
}
