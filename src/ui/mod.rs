// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toast`] - Toast overlay and default toast card
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast;
