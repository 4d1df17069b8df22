//! Shared constants for snipbin.
//!
//! Centralizes magic numbers so the crates don't drift apart.

/// Number of characters in a thread slug.
pub const SLUG_LENGTH: usize = 4;

/// Alphabet a slug is drawn from: lowercase alphanumeric, 36 symbols.
/// 36^4 gives roughly 1.68M distinct slugs.
pub const SLUG_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// How many fresh slugs to try when an insert hits a uniqueness conflict.
pub const SLUG_MAX_ATTEMPTS: u32 = 5;

/// Language tag applied when the caller does not specify one.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Client polling interval for thread refresh, in seconds.
pub const POLL_INTERVAL_SECS: u64 = 3;

/// Default port for the HTTP API server.
pub const DEFAULT_PORT: u16 = 3001;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;
