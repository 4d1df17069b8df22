#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use snipbin_core::{CreatedThread, Message, ThreadWithMessages};
use tokio::sync::Mutex;

use crate::error::ClientError;

/// Acknowledgement body of `POST /api/lock/{slug}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockAck {
    pub success: bool,
    pub locked: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the snipbin API.
///
/// Reads through [`ThreadClient::thread`] are served from a per-slug cache
/// of the last fetched response; any successful mutation on a slug drops its
/// cache entry so the next read refetches.
pub struct ThreadClient {
    http: reqwest::Client,
    base_url: String,
    cache: Mutex<HashMap<String, ThreadWithMessages>>,
}

impl ThreadClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http: reqwest::Client::new(), base_url, cache: Mutex::new(HashMap::new()) }
    }

    /// `POST /api/threads` — create a thread with its first snippet.
    pub async fn create_thread(
        &self,
        initial_content: &str,
        language: Option<&str>,
    ) -> Result<CreatedThread, ClientError> {
        let mut body = serde_json::json!({ "initialContent": initial_content });
        if let Some(lang) = language {
            body["language"] = serde_json::json!(lang);
        }
        let response = self
            .http
            .post(format!("{}/api/threads", self.base_url))
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    /// Cached read: returns the last fetched state of the thread, fetching
    /// only when no cached entry exists.
    pub async fn thread(&self, slug: &str) -> Result<ThreadWithMessages, ClientError> {
        if let Some(cached) = self.cache.lock().await.get(slug) {
            return Ok(cached.clone());
        }
        self.fetch_thread(slug).await
    }

    /// `GET /api/threads/{slug}` — always hits the network and refreshes the
    /// cache entry.
    pub async fn fetch_thread(&self, slug: &str) -> Result<ThreadWithMessages, ClientError> {
        let response =
            self.http.get(format!("{}/api/threads/{slug}", self.base_url)).send().await?;
        let thread: ThreadWithMessages = decode(response).await?;
        self.cache.lock().await.insert(slug.to_owned(), thread.clone());
        Ok(thread)
    }

    /// `POST /api/messages/{slug}` — append a snippet; invalidates the
    /// cached thread on success.
    pub async fn send_message(
        &self,
        slug: &str,
        content: &str,
        language: Option<&str>,
    ) -> Result<Message, ClientError> {
        let mut body = serde_json::json!({ "content": content });
        if let Some(lang) = language {
            body["language"] = serde_json::json!(lang);
        }
        let response = self
            .http
            .post(format!("{}/api/messages/{slug}", self.base_url))
            .json(&body)
            .send()
            .await?;
        let message: Message = decode(response).await?;
        self.invalidate(slug).await;
        Ok(message)
    }

    /// `POST /api/lock/{slug}` — lock the thread for good; invalidates the
    /// cached thread on success.
    pub async fn lock_thread(&self, slug: &str) -> Result<LockAck, ClientError> {
        let response =
            self.http.post(format!("{}/api/lock/{slug}", self.base_url)).send().await?;
        let ack: LockAck = decode(response).await?;
        self.invalidate(slug).await;
        Ok(ack)
    }

    async fn invalidate(&self, slug: &str) {
        self.cache.lock().await.remove(slug);
    }
}

/// Decode a success body, or surface the server's `{"error"}` message as
/// [`ClientError::Api`].
async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_owned(),
    };
    Err(ClientError::Api { status: status.as_u16(), message })
}
