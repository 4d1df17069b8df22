use thiserror::Error;

/// Client-side error: transport failure or a decoded API error body.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout, or body decoding failure.
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status and an `{"error"}` body.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// Whether the server reported the thread as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Whether the server refused the write because the thread is locked.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Api { status: 403, .. })
    }
}
