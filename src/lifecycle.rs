//! # Process-lifecycle capabilities.
//!
//! Shared vocabulary for long-running components of a process: [`Start`] for
//! things that spin up background work, [`Shutdown`] for things that must
//! wind it down gracefully.
//!
//! The bus engine implements [`Shutdown`]; [`Start`] is part of the same
//! contract surface for components started alongside it.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Boxed error for lifecycle trait objects.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Starting capability.
///
/// Useful for components that need to start a long-running background
/// process.
#[async_trait]
pub trait Start: Send + Sync {
    /// Starts the specific component.
    async fn start(&self, ctx: CancellationToken) -> Result<(), BoxError>;
}

/// Stopping capability.
///
/// Useful for components that need to stop a long-running background
/// process, draining whatever is in flight.
#[async_trait]
pub trait Shutdown: Send + Sync {
    /// Stops the specific component.
    async fn shutdown(&self, ctx: CancellationToken) -> Result<(), BoxError>;
}
