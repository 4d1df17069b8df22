//! Service layer for snipbin
//!
//! Centralizes business rules between HTTP handlers and storage: input
//! validation, the lock check for new messages, and slug regeneration on
//! uniqueness conflicts.

mod error;
mod thread_service;

pub use error::ServiceError;
pub use thread_service::ThreadService;
