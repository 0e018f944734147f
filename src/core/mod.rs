//! Bus engine: routing, dispatch, and lifecycle.
//!
//! The public API from this module is the [`Bus`] contract and its
//! channel-backed implementation [`ChannelBus`].
//!
//! Internal modules:
//! - [`channel`]: topic routing table, subscription registration, shutdown;
//! - [`dispatch`]: per-subscription worker loop and bounded execution;
//! - [`flight`]: in-flight tracking gating the shutdown drain barrier.

mod bus;
mod channel;
mod dispatch;
mod flight;

pub use bus::Bus;
pub use channel::ChannelBus;
