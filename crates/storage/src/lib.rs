//! Storage layer for snipbin
//!
//! A `ThreadStore` trait with two backends: PostgreSQL (production) and an
//! in-memory store used by tests and ephemeral serving. All consistency —
//! slug uniqueness, the atomicity of the lock flip, the thread-plus-first-
//! message transaction — is delegated to the backend.

mod error;
mod memory;
mod migrations;
mod pg_storage;
mod traits;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
pub use traits::ThreadStore;
