//! # In-flight work tracking.
//!
//! [`InFlight`] counts admitted units of work; [`FlightGuard`] releases one
//! unit on drop, panics included. [`InFlight::settled`] is the drain
//! barrier: it resolves once the count reaches zero.
//!
//! Two instances gate the engine's shutdown: one for admitted
//! publish/subscribe calls, one for dispatched listener executions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Counter of in-flight work units.
#[derive(Default)]
pub(crate) struct InFlight {
    count: AtomicUsize,
    drained: Notify,
}

impl InFlight {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Admits one unit of work. The returned guard releases it on drop.
    pub(crate) fn admit(self: &Arc<Self>) -> FlightGuard {
        self.count.fetch_add(1, Ordering::AcqRel);
        FlightGuard {
            tracker: Arc::clone(self),
        }
    }

    /// Resolves once every admitted unit has been released.
    ///
    /// Units admitted after this resolves are not waited for; the engine
    /// gates admission (the closed flag) before relying on the barrier.
    pub(crate) async fn settled(&self) {
        loop {
            if self.count.load(Ordering::Acquire) == 0 {
                return;
            }
            let drained = self.drained.notified();
            // Re-check: the last guard may have dropped between the load
            // above and registering the waiter.
            if self.count.load(Ordering::Acquire) == 0 {
                return;
            }
            drained.await;
        }
    }
}

/// Releases one admitted unit when dropped.
pub(crate) struct FlightGuard {
    tracker: Arc<InFlight>,
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        if self.tracker.count.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.tracker.drained.notify_waiters();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn settled_resolves_immediately_when_idle() {
        let tracker = InFlight::new();
        tracker.settled().await;
    }

    #[tokio::test]
    async fn settled_waits_for_all_guards() {
        let tracker = InFlight::new();
        let first = tracker.admit();
        let second = tracker.admit();

        let waiter = {
            let tracker = Arc::clone(&tracker);
            tokio::spawn(async move { tracker.settled().await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());
        drop(first);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());
        drop(second);

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("barrier did not release")
            .unwrap();
    }

    #[tokio::test]
    async fn guard_is_released_on_panic() {
        let tracker = InFlight::new();
        let guard = tracker.admit();
        let handle = tokio::spawn(async move {
            let _guard = guard;
            panic!("unit of work exploded");
        });
        let _ = handle.await;
        tracker.settled().await;
    }
}
