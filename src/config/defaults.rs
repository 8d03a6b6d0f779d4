// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Dismiss**: Auto-dismiss delay and its bounds
//! - **Diagnostics**: Event history capacity

// ==========================================================================
// Dismiss Defaults
// ==========================================================================

/// Default delay before a toast removes itself (in milliseconds).
pub const DEFAULT_DISMISS_TIME_MS: u64 = 2000;

/// Minimum configurable default delay (in milliseconds).
pub const MIN_DISMISS_TIME_MS: u64 = 100;

/// Maximum configurable default delay (in milliseconds).
pub const MAX_DISMISS_TIME_MS: u64 = 60_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of lifecycle events kept by a provider before the oldest are evicted.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DISMISS_TIME_MS > 0);
    assert!(MIN_DISMISS_TIME_MS <= DEFAULT_DISMISS_TIME_MS);
    assert!(DEFAULT_DISMISS_TIME_MS <= MAX_DISMISS_TIME_MS);
    assert!(DEFAULT_EVENT_CAPACITY > 0);
};
