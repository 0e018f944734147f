//! Error types used by the bus engine and listeners.
//!
//! This module defines two main error enums:
//!
//! - [`BusError`] — errors returned by bus operations themselves.
//! - [`ListenerError`] — errors produced by listener executions; the engine
//!   discards them after the interceptor chain has seen them.
//!
//! Both types provide `as_label` helpers producing short stable strings for
//! logs and metrics.

use thiserror::Error;

/// # Errors produced by bus operations.
///
/// These are the only failures a publisher or subscriber ever observes from
/// the engine; listener failures never surface here.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BusError {
    /// The bus has begun or completed closing; the call was rejected.
    ///
    /// Non-retryable against the same instance.
    #[error("bus is closed")]
    Closed,

    /// The published event's topic has no registered subscribers.
    ///
    /// Retryable after a future subscription, but the bus offers no
    /// readiness notification — coordination is the caller's concern.
    #[error("no subscribers are registered")]
    NoSubscribers,

    /// Shutdown was entered with an already-cancelled token.
    ///
    /// The bus is closed regardless; only the drain was skipped.
    #[error("shutdown context already cancelled")]
    Canceled,
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use topicbus::BusError;
    ///
    /// assert_eq!(BusError::Closed.as_label(), "bus_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::Closed => "bus_closed",
            BusError::NoSubscribers => "bus_no_subscribers",
            BusError::Canceled => "bus_shutdown_canceled",
        }
    }
}

/// # Errors produced by listener executions.
///
/// A listener's error never reaches the publisher: the engine drops it once
/// the interceptor chain has had its chance to observe or translate it.
/// Attach a logging interceptor if you need these on record.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ListenerError {
    /// Listener execution failed.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Listener observed its token cancelled and wound down early.
    #[error("context cancelled")]
    Canceled,
}

impl ListenerError {
    /// Convenience constructor for [`ListenerError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        ListenerError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use topicbus::ListenerError;
    ///
    /// assert_eq!(ListenerError::fail("boom").as_label(), "listener_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::Fail { .. } => "listener_failed",
            ListenerError::Canceled => "listener_canceled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ListenerError::Fail { error } => format!("error: {error}"),
            ListenerError::Canceled => "context cancelled".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_error_display() {
        assert_eq!(BusError::Closed.to_string(), "bus is closed");
        assert_eq!(
            BusError::NoSubscribers.to_string(),
            "no subscribers are registered"
        );
    }

    #[test]
    fn listener_error_labels_and_messages() {
        let err = ListenerError::fail("downstream rejected");
        assert_eq!(err.as_label(), "listener_failed");
        assert_eq!(err.as_message(), "error: downstream rejected");
        assert_eq!(ListenerError::Canceled.as_label(), "listener_canceled");
    }
}
