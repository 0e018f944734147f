//! # Bus configuration.
//!
//! [`BusConfig`] centralizes engine settings: the bounded listener execution
//! timeout and the global interceptor chain applied to every subscription.
//!
//! ## Sentinel values
//! - `listener_timeout = Duration::ZERO` → use
//!   [`BusConfig::DEFAULT_LISTENER_TIMEOUT`] (30 s)
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use topicbus::BusConfig;
//!
//! let mut config = BusConfig::default();
//! config.listener_timeout = Duration::from_secs(5);
//!
//! assert_eq!(config.effective_listener_timeout(), Duration::from_secs(5));
//! ```

use std::time::Duration;

use crate::listeners::InterceptorRef;

/// Configuration for a bus instance.
///
/// All fields are public; `Default` yields the zero sentinel for the timeout
/// and an empty global chain. Prefer [`BusConfig::effective_listener_timeout`]
/// over reading the raw field to avoid sprinkling sentinel checks around.
#[derive(Clone, Default)]
pub struct BusConfig {
    /// Upper bound for a single listener execution.
    ///
    /// `Duration::ZERO` selects [`BusConfig::DEFAULT_LISTENER_TIMEOUT`]. On
    /// expiry the listener's token is cancelled and the dispatch counts as
    /// complete; the listener body itself is only cancelled cooperatively.
    pub listener_timeout: Duration,

    /// Global interceptors applied to every subscription.
    ///
    /// Wrapped outside the subscription-local interceptors, so this chain
    /// executes first at runtime.
    pub interceptors: Vec<InterceptorRef>,
}

impl BusConfig {
    /// Listener execution bound used when `listener_timeout` is left at zero.
    pub const DEFAULT_LISTENER_TIMEOUT: Duration = Duration::from_secs(30);

    /// Returns the effective listener timeout, resolving the zero sentinel.
    #[inline]
    #[must_use]
    pub fn effective_listener_timeout(&self) -> Duration {
        if self.listener_timeout == Duration::ZERO {
            Self::DEFAULT_LISTENER_TIMEOUT
        } else {
            self.listener_timeout
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_resolves_to_default() {
        let config = BusConfig::default();
        assert_eq!(
            config.effective_listener_timeout(),
            BusConfig::DEFAULT_LISTENER_TIMEOUT
        );
    }

    #[test]
    fn explicit_timeout_is_respected() {
        let mut config = BusConfig::default();
        config.listener_timeout = Duration::from_millis(250);
        assert_eq!(
            config.effective_listener_timeout(),
            Duration::from_millis(250)
        );
    }
}
