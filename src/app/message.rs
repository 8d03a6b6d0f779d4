// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast::ToastKind;
use crate::ui::toast;
use tokio::runtime::Handle;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a sample toast of the given kind with the default delay.
    Show(ToastKind),
    /// Show a sample toast that stays for [`super::LONG_TOAST_DELAY`].
    ShowLong,
    Toast(toast::Message),
    /// The provider's toasts changed (revision number attached).
    ToastsChanged(u64),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug)]
pub struct Flags {
    /// Runtime the toast timers are spawned on.
    pub runtime: Handle,
    /// Default dismiss delay override in milliseconds (`--dismiss-ms`).
    pub dismiss_ms: Option<u64>,
    /// Config directory override (`--config-dir`).
    /// Takes precedence over the `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
