// SPDX-License-Identifier: MPL-2.0
//! Toast notification core.
//!
//! Toasts are short-lived messages that remove themselves after a delay.
//! This module holds the state and timing; rendering lives in
//! [`crate::ui::toast`].
//!
//! # Components
//!
//! - [`kind`] - `ToastKind` with per-kind accent colors
//! - [`entry`] - `ToastPayload`, `ToastId` and immutable `ToastEntry`
//! - [`store`] - `Store`, the newest-first list of active entries
//! - [`provider`] - `Provider` (owns timers and teardown) and `Dispatcher`
//!
//! # Usage
//!
//! ```no_run
//! use iced_toast::toast::{Provider, ProviderConfig, ToastPayload};
//! use std::time::Duration;
//!
//! # async fn demo() -> iced_toast::error::Result<()> {
//! let provider = Provider::current(ProviderConfig::new(Duration::from_secs(2)))?;
//! let dispatcher = provider.dispatcher();
//!
//! let id = dispatcher.dispatch_toast(ToastPayload::success("Saved"));
//! assert_eq!(provider.toasts().len(), 1);
//! # let _ = id;
//! # Ok(())
//! # }
//! ```

pub mod entry;
pub mod kind;
pub mod provider;
pub mod store;

pub use entry::{ToastEntry, ToastId, ToastPayload};
pub use kind::ToastKind;
pub use provider::{Dispatcher, Provider, ProviderConfig};
pub use store::Store;
