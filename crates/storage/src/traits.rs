//! The data-access seam between the service layer and a concrete backend.

use async_trait::async_trait;
use snipbin_core::{Message, Thread};

use crate::error::StorageError;

/// Typed query surface over the `threads` / `messages` table pair.
///
/// Implementations must enforce slug uniqueness (surfacing conflicts as
/// [`StorageError::Duplicate`]) and referential integrity of
/// `Message::thread_id`. The lock check for new messages is a service-layer
/// rule, not a store rule.
#[async_trait]
pub trait ThreadStore: Send + Sync {
    /// Insert a thread row plus its first message in a single transaction,
    /// so a thread never exists with zero messages.
    async fn create_thread(
        &self,
        slug: &str,
        content: &str,
        language: &str,
    ) -> Result<Thread, StorageError>;

    /// Look up a thread by its public slug.
    async fn get_thread_by_slug(&self, slug: &str) -> Result<Option<Thread>, StorageError>;

    /// Messages of a thread in append order (creation time, id as tiebreak).
    async fn get_messages(&self, thread_id: i32) -> Result<Vec<Message>, StorageError>;

    /// Append a message. `is_code` is always stored true; this system never
    /// creates a free-text message variant.
    async fn create_message(
        &self,
        thread_id: i32,
        content: &str,
        language: &str,
    ) -> Result<Message, StorageError>;

    /// Flip `locked` to true in a single atomic statement. Returns the
    /// updated row, or `None` when no thread has that slug.
    async fn lock_thread(&self, slug: &str) -> Result<Option<Thread>, StorageError>;
}
