// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification widget for the Iced GUI framework.
//!
//! A [`toast::Provider`] holds the active toasts and removes each one after a
//! configurable delay; consumers show and dismiss toasts through a
//! [`toast::Dispatcher`], and [`ui::toast::Toaster`] renders them as an
//! overlay.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod toast;
pub mod ui;
