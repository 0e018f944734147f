//! # Dispatch: worker loop and bounded listener execution.
//!
//! Each subscription owns one worker task receiving from its topic's
//! rendezvous channel. A received [`Dispatch`] carries the publish-time
//! token, the event, and the completion guard; the guard drops on every exit
//! path, so the shutdown drain barrier never waits on a dispatch that
//! already ended — by success, by error, by timeout, or by contained panic.
//!
//! ## Rules
//! - One worker processes its received events strictly sequentially.
//! - The listener runs with a child of the publish-time token; on timeout
//!   the child is cancelled and the dispatch counts as complete.
//! - Panics are contained here and never propagate past the worker loop.
//! - The listener's returned error is dropped — observing it is interceptor
//!   business.

use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::core::flight::FlightGuard;
use crate::events::Event;
use crate::listeners::ListenerRef;

/// One unit of delivery handed from a publisher to a worker.
pub(crate) struct Dispatch {
    pub(crate) ctx: CancellationToken,
    pub(crate) event: Event,
    pub(crate) guard: FlightGuard,
}

/// Receives from `incoming` until the channel is closed and drained.
pub(crate) async fn worker_loop(
    incoming: flume::Receiver<Dispatch>,
    listener: ListenerRef,
    timeout: Duration,
) {
    while let Ok(dispatch) = incoming.recv_async().await {
        execute(dispatch, &listener, timeout).await;
    }
}

/// Executes one dispatch under the configured timeout.
async fn execute(dispatch: Dispatch, listener: &ListenerRef, timeout: Duration) {
    let Dispatch { ctx, event, guard } = dispatch;
    // Held to the end of the dispatch, unwinding included.
    let _guard = guard;

    let child = ctx.child_token();
    let topic = event.topic().to_string();
    let run = AssertUnwindSafe(listener.call(child.clone(), event)).catch_unwind();

    match time::timeout(timeout, run).await {
        Ok(Ok(_listener_result)) => {}
        Ok(Err(panic_err)) => {
            tracing::warn!(topic = %topic, panic = ?panic_err, "listener panicked");
        }
        Err(_elapsed) => {
            child.cancel();
            tracing::debug!(topic = %topic, ?timeout, "listener execution timed out");
        }
    }
}
