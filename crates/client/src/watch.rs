//! Polling-based "live" thread updates.
//!
//! No push channel exists; the watcher refetches the full thread on a fixed
//! interval and reports when the message list grows. Polling stops once the
//! thread reports locked, since a locked thread can never change again.

use std::time::Duration;

use snipbin_core::{POLL_INTERVAL_SECS, ThreadWithMessages};

use crate::client::ThreadClient;
use crate::error::ClientError;

/// Watch a thread at the standard 3-second interval. Calls `on_update` with
/// the initial state and again after every observed change; returns the
/// final state once the thread is locked.
pub async fn watch_thread<F>(
    client: &ThreadClient,
    slug: &str,
    on_update: F,
) -> Result<ThreadWithMessages, ClientError>
where
    F: FnMut(&ThreadWithMessages),
{
    watch_thread_with_interval(client, slug, Duration::from_secs(POLL_INTERVAL_SECS), on_update)
        .await
}

/// Same as [`watch_thread`] with a caller-chosen interval.
pub async fn watch_thread_with_interval<F>(
    client: &ThreadClient,
    slug: &str,
    interval: Duration,
    mut on_update: F,
) -> Result<ThreadWithMessages, ClientError>
where
    F: FnMut(&ThreadWithMessages),
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut last: Option<ThreadWithMessages> = None;

    loop {
        ticker.tick().await;
        let thread = client.fetch_thread(slug).await?;
        if thread_changed(last.as_ref(), &thread) {
            on_update(&thread);
        }
        if thread.thread.locked {
            tracing::debug!(slug, "thread locked, stopping watch");
            return Ok(thread);
        }
        last = Some(thread);
    }
}

/// Whether a refetched thread shows something the previous snapshot didn't.
/// Messages are append-only, so a grown list or a flipped lock flag are the
/// only possible changes.
fn thread_changed(prev: Option<&ThreadWithMessages>, next: &ThreadWithMessages) -> bool {
    match prev {
        None => true,
        Some(prev) => {
            next.messages.len() > prev.messages.len()
                || next.thread.locked != prev.thread.locked
        },
    }
}
