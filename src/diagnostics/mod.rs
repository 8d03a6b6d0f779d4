// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for toast lifecycles.
//!
//! Every provider keeps a memory-bounded history of what happened to its
//! toasts (enqueued, dismissed, expired, unmounted). The history is meant for
//! debugging overlays and tests; it is never persisted.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with fixed capacity
//! - [`ToastEvent`]: A timestamped lifecycle event

mod buffer;
mod events;

pub use buffer::CircularBuffer;
pub use events::{ToastEvent, ToastEventKind};
