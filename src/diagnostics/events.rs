// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle events recorded by a provider.

use crate::toast::{ToastId, ToastKind};
use tokio::time::Instant;

/// What happened to a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEventKind {
    /// A toast entered the active list.
    Enqueued { id: ToastId, kind: ToastKind },
    /// A toast was removed by an explicit dismissal.
    Dismissed { id: ToastId },
    /// A toast was removed because its delay elapsed.
    Expired { id: ToastId },
    /// The provider was torn down; `dropped` toasts were still active.
    Unmounted { dropped: usize },
}

/// A lifecycle event with its capture time.
#[derive(Debug, Clone)]
pub struct ToastEvent {
    /// When the event was captured (monotonic).
    pub at: Instant,
    pub kind: ToastEventKind,
}

impl ToastEvent {
    /// Creates an event stamped with the current instant.
    #[must_use]
    pub fn new(kind: ToastEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }

    /// Returns the toast this event refers to, if any.
    #[must_use]
    pub fn toast_id(&self) -> Option<ToastId> {
        match &self.kind {
            ToastEventKind::Enqueued { id, .. }
            | ToastEventKind::Dismissed { id }
            | ToastEventKind::Expired { id } => Some(*id),
            ToastEventKind::Unmounted { .. } => None,
        }
    }
}
