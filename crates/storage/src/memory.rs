//! In-memory `ThreadStore` backend.
//!
//! Mirrors the PostgreSQL semantics the rest of the system relies on: slug
//! uniqueness surfaces as [`StorageError::Duplicate`], message inserts check
//! the thread exists, and ids are assigned sequentially. Used by unit tests
//! and by `snipbin serve --ephemeral`.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use snipbin_core::{Message, Thread};

use crate::error::StorageError;
use crate::traits::ThreadStore;

#[derive(Debug, Default)]
struct Inner {
    threads: Vec<Thread>,
    messages: Vec<Message>,
    next_thread_id: i32,
    next_message_id: i32,
}

#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                threads: Vec::new(),
                messages: Vec::new(),
                next_thread_id: 1,
                next_message_id: 1,
            }),
        }
    }

    fn lock_inner(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned mutex means a panic mid-insert; the data is append-only
        // records, still safe to read.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_message(inner: &mut Inner, thread_id: i32, content: &str, language: &str) -> Message {
    let message = Message {
        id: inner.next_message_id,
        thread_id,
        content: content.to_owned(),
        language: language.to_owned(),
        is_code: true,
        created_at: Utc::now(),
    };
    inner.next_message_id += 1;
    inner.messages.push(message.clone());
    message
}

#[async_trait]
impl ThreadStore for MemoryStore {
    async fn create_thread(
        &self,
        slug: &str,
        content: &str,
        language: &str,
    ) -> Result<Thread, StorageError> {
        let mut inner = self.lock_inner();
        if inner.threads.iter().any(|t| t.slug == slug) {
            return Err(StorageError::Duplicate(format!("slug '{slug}' already exists")));
        }
        let thread = Thread {
            id: inner.next_thread_id,
            slug: slug.to_owned(),
            locked: false,
            created_at: Utc::now(),
        };
        inner.next_thread_id += 1;
        inner.threads.push(thread.clone());
        insert_message(&mut inner, thread.id, content, language);
        Ok(thread)
    }

    async fn get_thread_by_slug(&self, slug: &str) -> Result<Option<Thread>, StorageError> {
        Ok(self.lock_inner().threads.iter().find(|t| t.slug == slug).cloned())
    }

    async fn get_messages(&self, thread_id: i32) -> Result<Vec<Message>, StorageError> {
        // Insertion order is creation order; ids are monotonic.
        Ok(self
            .lock_inner()
            .messages
            .iter()
            .filter(|m| m.thread_id == thread_id)
            .cloned()
            .collect())
    }

    async fn create_message(
        &self,
        thread_id: i32,
        content: &str,
        language: &str,
    ) -> Result<Message, StorageError> {
        let mut inner = self.lock_inner();
        if !inner.threads.iter().any(|t| t.id == thread_id) {
            return Err(StorageError::NotFound { entity: "thread", id: thread_id.to_string() });
        }
        Ok(insert_message(&mut inner, thread_id, content, language))
    }

    async fn lock_thread(&self, slug: &str) -> Result<Option<Thread>, StorageError> {
        let mut inner = self.lock_inner();
        match inner.threads.iter_mut().find(|t| t.slug == slug) {
            Some(thread) => {
                thread.locked = true;
                Ok(Some(thread.clone()))
            },
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_thread_inserts_first_message() {
        let store = MemoryStore::new();
        let thread = store.create_thread("a1b2", "print('hi')", "python").await.unwrap();
        assert_eq!(thread.slug, "a1b2");
        assert!(!thread.locked);

        let messages = store.get_messages(thread.id).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "print('hi')");
        assert_eq!(messages[0].language, "python");
        assert!(messages[0].is_code);
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected() {
        let store = MemoryStore::new();
        store.create_thread("dup0", "a", "javascript").await.unwrap();
        let err = store.create_thread("dup0", "b", "javascript").await.unwrap_err();
        assert!(err.is_duplicate());
    }

    #[tokio::test]
    async fn messages_keep_append_order() {
        let store = MemoryStore::new();
        let thread = store.create_thread("ord0", "first", "javascript").await.unwrap();
        store.create_message(thread.id, "second", "javascript").await.unwrap();
        store.create_message(thread.id, "third", "rust").await.unwrap();

        let contents: Vec<_> = store
            .get_messages(thread.id)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.content)
            .collect();
        assert_eq!(contents, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn message_requires_existing_thread() {
        let store = MemoryStore::new();
        let err = store.create_message(99, "body", "javascript").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { entity: "thread", .. }));
    }

    #[tokio::test]
    async fn lock_is_terminal_and_reported() {
        let store = MemoryStore::new();
        store.create_thread("lck0", "a", "javascript").await.unwrap();
        let locked = store.lock_thread("lck0").await.unwrap().unwrap();
        assert!(locked.locked);
        // Locking again stays locked; no unlock path exists.
        let again = store.lock_thread("lck0").await.unwrap().unwrap();
        assert!(again.locked);
        assert!(store.lock_thread("nope").await.unwrap().is_none());
    }
}
