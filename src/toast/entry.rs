// SPDX-License-Identifier: MPL-2.0
//! Toast payloads, identifiers and active entries.

use super::kind::ToastKind;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Identifier of an active toast: wall-clock milliseconds since the UNIX epoch
/// at enqueue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Hands out time-based ids for one store.
///
/// Two toasts enqueued within the same millisecond would collide, so a
/// timestamp at or below the last issued id is bumped to `last + 1`. Ids stay
/// strictly increasing within a store; they are not unique across stores.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub(crate) fn next(&mut self) -> ToastId {
        self.next_at(now_millis())
    }

    pub(crate) fn next_at(&mut self, millis: u64) -> ToastId {
        let id = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(id);
        ToastId(id)
    }
}

fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

/// What a caller asks to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastPayload {
    kind: ToastKind,
    message: String,
    dismiss_time: Option<Duration>,
}

impl ToastPayload {
    pub fn new(kind: impl Into<ToastKind>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            dismiss_time: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    /// Overrides the provider's default dismiss delay for this toast.
    #[must_use]
    pub fn dismiss_after(mut self, delay: Duration) -> Self {
        self.dismiss_time = Some(delay);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &ToastKind {
        &self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn dismiss_time(&self) -> Option<Duration> {
        self.dismiss_time
    }

    /// Per-toast override if set, otherwise `default`.
    #[must_use]
    pub fn effective_delay(&self, default: Duration) -> Duration {
        self.dismiss_time.unwrap_or(default)
    }
}

/// An active toast. Entries are never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    id: ToastId,
    payload: ToastPayload,
    delay: Duration,
    created_at: Instant,
}

impl ToastEntry {
    pub(crate) fn new(id: ToastId, payload: ToastPayload, default_delay: Duration) -> Self {
        let delay = payload.effective_delay(default_delay);
        Self {
            id,
            payload,
            delay,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> &ToastKind {
        self.payload.kind()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.payload.message()
    }

    #[must_use]
    pub fn payload(&self) -> &ToastPayload {
        &self.payload
    }

    /// Delay after which this entry removes itself.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Creation time on the tokio clock that also drives the removal timer.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Time left before expiry, saturating at zero.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.delay.saturating_sub(self.created_at.elapsed())
    }
}
