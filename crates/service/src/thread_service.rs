use std::sync::Arc;

use snipbin_core::{
    CreatedThread, DEFAULT_LANGUAGE, Message, SLUG_MAX_ATTEMPTS, Thread, ThreadWithMessages,
    generate_slug,
};
use snipbin_storage::{StorageError, ThreadStore};

use crate::ServiceError;

/// Domain operations over snippet threads.
///
/// Holds the store handle explicitly (no module-level singleton); handlers
/// share one instance via `Arc`.
pub struct ThreadService {
    store: Arc<dyn ThreadStore>,
}

impl ThreadService {
    #[must_use]
    pub fn new(store: Arc<dyn ThreadStore>) -> Self {
        Self { store }
    }

    /// Create a thread with its first message and hand back the share link
    /// data. Slug collisions are retried with a fresh slug, bounded by
    /// `SLUG_MAX_ATTEMPTS`; anything else propagates.
    pub async fn create_thread(
        &self,
        initial_content: &str,
        language: Option<&str>,
    ) -> Result<CreatedThread, ServiceError> {
        validate_content(initial_content)?;
        let language = language.unwrap_or(DEFAULT_LANGUAGE);

        let mut attempt = 1;
        loop {
            let slug = generate_slug();
            match self.store.create_thread(&slug, initial_content, language).await {
                Ok(thread) => {
                    return Ok(CreatedThread { slug: thread.slug, thread_id: thread.id });
                },
                Err(e) if e.is_duplicate() && attempt < SLUG_MAX_ATTEMPTS => {
                    tracing::debug!(slug, attempt, "slug collision, regenerating");
                    attempt += 1;
                },
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Thread plus its messages in append order.
    pub async fn get_thread(&self, slug: &str) -> Result<ThreadWithMessages, ServiceError> {
        let thread = self.require_thread(slug).await?;
        let messages = self.store.get_messages(thread.id).await?;
        Ok(ThreadWithMessages { thread, messages })
    }

    /// Append a message to an unlocked thread.
    pub async fn add_message(
        &self,
        slug: &str,
        content: &str,
        language: Option<&str>,
    ) -> Result<Message, ServiceError> {
        validate_content(content)?;
        let thread = self.require_thread(slug).await?;
        if thread.locked {
            return Err(ServiceError::ThreadLocked(slug.to_owned()));
        }
        let language = language.unwrap_or(DEFAULT_LANGUAGE);
        Ok(self.store.create_message(thread.id, content, language).await?)
    }

    /// Flip the lock flag. One-way; there is no unlock operation.
    pub async fn lock_thread(&self, slug: &str) -> Result<Thread, ServiceError> {
        self.store
            .lock_thread(slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    async fn require_thread(&self, slug: &str) -> Result<Thread, ServiceError> {
        self.store
            .get_thread_by_slug(slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }
}

fn validate_content(content: &str) -> Result<(), ServiceError> {
    if content.trim().is_empty() {
        return Err(ServiceError::InvalidInput("Content is required".to_owned()));
    }
    Ok(())
}

fn not_found(slug: &str) -> ServiceError {
    ServiceError::Storage(StorageError::NotFound { entity: "thread", id: slug.to_owned() })
}
