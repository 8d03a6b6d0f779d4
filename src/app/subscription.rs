// SPDX-License-Identifier: MPL-2.0
//! Iced subscription that follows the toast provider's revisions.
//!
//! Expiries happen on the provider's timers, outside of `App::update`. The
//! subscription forwards every revision bump as [`Message::ToastsChanged`] so
//! the view is refreshed as soon as a toast leaves the store.

use super::Message;
use iced::futures::{SinkExt, Stream};
use iced::stream;
use iced::Subscription;
use std::hash::{Hash, Hasher};
use tokio::sync::watch;

/// Subscription data for toast revisions.
///
/// Hashes to a constant so iced keeps a single stream alive across calls;
/// receivers handed over on later calls are dropped unused.
struct ToastChanges(watch::Receiver<u64>);

impl Hash for ToastChanges {
    fn hash<H: Hasher>(&self, state: &mut H) {
        "toast-changes".hash(state);
    }
}

/// Creates a subscription emitting a message whenever the provider changes.
pub fn toast_changes(changes: watch::Receiver<u64>) -> Subscription<Message> {
    Subscription::run_with(ToastChanges(changes), revision_stream)
}

fn revision_stream(data: &ToastChanges) -> impl Stream<Item = Message> {
    let mut changes = data.0.clone();
    stream::channel(1, async move |mut output| {
        while let Some(revision) = next_revision(&mut changes).await {
            if output.send(Message::ToastsChanged(revision)).await.is_err() {
                break;
            }
        }
    })
}

/// Waits for the next revision. Returns `None` once the provider is gone.
pub(super) async fn next_revision(changes: &mut watch::Receiver<u64>) -> Option<u64> {
    changes.changed().await.ok()?;
    Some(*changes.borrow_and_update())
}
