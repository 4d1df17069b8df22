//! API client for snipbin.
//!
//! Wraps the four HTTP endpoints with a per-slug response cache that is
//! invalidated on mutation, plus a polling watcher that refetches a thread
//! on a fixed interval. "Live updates" in this system are nothing more than
//! that refetch loop.

mod client;
mod error;
mod watch;

pub use client::{LockAck, ThreadClient};
pub use error::ClientError;
pub use watch::{watch_thread, watch_thread_with_interval};
