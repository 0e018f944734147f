//! Listener and interceptor contracts.
//!
//! A [`Listener`] handles one delivered event; an [`Interceptor`] wraps a
//! listener to add cross-cutting behavior (logging, metrics, error
//! translation) in chain-of-responsibility style.

mod interceptor;
mod listener;
#[cfg(feature = "logging")]
mod log;

pub use interceptor::{Interceptor, InterceptorFn, InterceptorRef};
pub use listener::{Listener, ListenerFn, ListenerRef};
#[cfg(feature = "logging")]
pub use log::LogInterceptor;

pub(crate) use interceptor::compose;
