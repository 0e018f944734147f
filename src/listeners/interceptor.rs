//! # Interceptor contract: chain-of-responsibility around listeners.
//!
//! An [`Interceptor`] wraps a [`ListenerRef`] and returns another, letting
//! cross-cutting behavior ride along every delivery without touching the
//! listener itself. Wrapping must be side-effect-free: effects belong to the
//! returned listener's execution, not to composition time.
//!
//! ## Composition order
//! The bus wraps subscription-local interceptors around the raw listener
//! first and then wraps the globally configured set around the result. The
//! global chain is therefore outermost and executes first at runtime; within
//! each list, later entries wrap further out than earlier ones.

use std::sync::Arc;

use super::listener::ListenerRef;

/// Shared handle to an interceptor.
pub type InterceptorRef = Arc<dyn Interceptor>;

/// Middleware wrapping a listener to add cross-cutting behavior.
pub trait Interceptor: Send + Sync + 'static {
    /// Wraps `next`, returning the augmented listener.
    ///
    /// Must not perform side effects itself; the returned listener carries
    /// them when it executes.
    fn wrap(&self, next: ListenerRef) -> ListenerRef;
}

/// Function-backed interceptor implementation.
pub struct InterceptorFn<F> {
    f: F,
}

impl<F> InterceptorFn<F> {
    /// Creates a new function-backed interceptor.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the interceptor and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<F> Interceptor for InterceptorFn<F>
where
    F: Fn(ListenerRef) -> ListenerRef + Send + Sync + 'static,
{
    fn wrap(&self, next: ListenerRef) -> ListenerRef {
        (self.f)(next)
    }
}

/// Builds the effective listener for one subscription.
///
/// Local interceptors wrap the raw listener first, then the global set wraps
/// the result, which makes the global chain execute first at runtime.
pub(crate) fn compose(
    listener: ListenerRef,
    local: &[InterceptorRef],
    global: &[InterceptorRef],
) -> ListenerRef {
    let mut chain = listener;
    for interceptor in local {
        chain = interceptor.wrap(chain);
    }
    for interceptor in global {
        chain = interceptor.wrap(chain);
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListenerError;
    use crate::events::Event;
    use crate::listeners::ListenerFn;
    use tokio_util::sync::CancellationToken;

    fn noop() -> ListenerRef {
        ListenerFn::arc(|_ctx: CancellationToken, _event: Event| async move {
            Ok::<_, ListenerError>(())
        })
    }

    // Interceptor that ignores `next` and substitutes a fixed listener;
    // whichever wrapper sits outermost decides the final chain.
    fn replace_with(listener: ListenerRef) -> InterceptorRef {
        InterceptorFn::arc(move |_next: ListenerRef| -> ListenerRef { Arc::clone(&listener) })
    }

    #[test]
    fn compose_without_interceptors_returns_the_listener() {
        let listener = noop();
        let chain = compose(Arc::clone(&listener), &[], &[]);
        assert!(Arc::ptr_eq(&listener, &chain));
    }

    #[test]
    fn global_interceptors_wrap_outside_local_ones() {
        let local = noop();
        let global = noop();
        let chain = compose(
            noop(),
            &[replace_with(Arc::clone(&local))],
            &[replace_with(Arc::clone(&global))],
        );
        assert!(Arc::ptr_eq(&chain, &global));
    }
}
