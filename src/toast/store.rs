// SPDX-License-Identifier: MPL-2.0
//! The ordered collection of active toasts.
//!
//! `Store` only keeps state; scheduling lives in the provider. Each slot can
//! carry the abort handle of its removal timer so that a dismissal cancels the
//! pending task instead of leaving it to fire into an empty slot.

use super::entry::{IdGenerator, ToastEntry, ToastId, ToastPayload};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::task::AbortHandle;

#[derive(Debug)]
struct Slot {
    entry: ToastEntry,
    timer: Option<AbortHandle>,
}

impl Slot {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Active toasts, newest first, at most one per id.
#[derive(Debug, Default)]
pub struct Store {
    slots: VecDeque<Slot>,
    ids: IdGenerator,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entry for `payload` at the front of the list.
    pub fn enqueue(&mut self, payload: ToastPayload, default_delay: Duration) -> &ToastEntry {
        let entry = ToastEntry::new(self.ids.next(), payload, default_delay);
        self.slots.push_front(Slot { entry, timer: None });
        &self.slots[0].entry
    }

    /// Associates the removal timer of `id`. Returns `false` if `id` is not active.
    pub fn attach_timer(&mut self, id: ToastId, timer: AbortHandle) -> bool {
        match self.slot_mut(id) {
            Some(slot) => {
                slot.cancel_timer();
                slot.timer = Some(timer);
                true
            }
            None => {
                timer.abort();
                false
            }
        }
    }

    /// Removes `id` and cancels its pending timer.
    pub fn dismiss(&mut self, id: ToastId) -> Option<ToastEntry> {
        let mut slot = self.take(id)?;
        slot.cancel_timer();
        Some(slot.entry)
    }

    /// Removes `id` on behalf of its own timer, which has already fired.
    pub fn expire(&mut self, id: ToastId) -> Option<ToastEntry> {
        self.take(id).map(|slot| slot.entry)
    }

    /// Removes every entry and cancels all pending timers. Returns how many were active.
    pub fn clear(&mut self) -> usize {
        let count = self.slots.len();
        for mut slot in self.slots.drain(..) {
            slot.cancel_timer();
        }
        count
    }

    /// Iterates over active entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &ToastEntry> {
        self.slots.iter().map(|slot| &slot.entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot_mut(&mut self, id: ToastId) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|slot| slot.entry.id() == id)
    }

    fn take(&mut self, id: ToastId) -> Option<Slot> {
        let pos = self.slots.iter().position(|slot| slot.entry.id() == id)?;
        self.slots.remove(pos)
    }
}
