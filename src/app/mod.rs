// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toast widget in an iced window.
//!
//! The `App` owns a toast [`Provider`] and hands a [`Dispatcher`] to its
//! buttons. The provider's timers run on the tokio runtime passed in through
//! [`Flags`]; the view reads a snapshot refreshed after every message,
//! including the revision messages emitted when a timer removes a toast.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, ThemeMode};
use crate::toast::{Dispatcher, Provider, ToastEntry, ToastKind, ToastPayload};
use crate::ui::toast::{self, Toaster};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Delay used by the "Long toast" button.
pub const LONG_TOAST_DELAY: Duration = Duration::from_secs(10);

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 760;

pub struct App {
    provider: Provider,
    dispatcher: Dispatcher,
    toaster: Toaster,
    /// Snapshot of the provider's toasts, refreshed after each update.
    visible: Vec<ToastEntry>,
    theme_mode: ThemeMode,
    shown: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("provider", &self.provider)
            .field("visible", &self.visible.len())
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));

        let mut toasts = config.toasts.clone();
        if let Some(ms) = flags.dismiss_ms {
            toasts.dismiss_time_ms = Some(ms);
        }

        let provider = Provider::new(toasts.provider_config(), flags.runtime);
        let toaster = Toaster::new().position(toasts.position.unwrap_or_default());

        let mut app = Self {
            dispatcher: provider.dispatcher(),
            provider,
            toaster,
            visible: Vec::new(),
            theme_mode: config.general.theme_mode,
            shown: 0,
        };

        if let Some(warning) = warning {
            app.dispatcher.dispatch_toast(
                ToastPayload::warning(format!("Using default settings: {warning}"))
                    .dismiss_after(LONG_TOAST_DELAY),
            );
        }
        app.refresh();

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.visible.len() {
            0 => "Iced Toast".to_string(),
            n => format!("Iced Toast ({n} active)"),
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::toast_changes(self.provider.subscribe())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(kind) => {
                let text = self.next_sample_text(&kind);
                self.dispatcher
                    .dispatch_toast(ToastPayload::new(kind, text));
            }
            Message::ShowLong => {
                let text = format!(
                    "{} (stays {}s)",
                    self.next_sample_text(&ToastKind::Info),
                    LONG_TOAST_DELAY.as_secs()
                );
                self.dispatcher
                    .dispatch_toast(ToastPayload::info(text).dismiss_after(LONG_TOAST_DELAY));
            }
            Message::Toast(toast::Message::Dismiss(id)) => {
                self.dispatcher.dismiss_toast(id);
            }
            Message::ToastsChanged(_revision) => {}
        }

        self.refresh();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toaster: &self.toaster,
            visible: &self.visible,
            dismiss_time_ms: self.provider.config().dismiss_time().as_millis(),
        })
    }

    fn refresh(&mut self) {
        self.visible = self.provider.toasts();
    }

    fn next_sample_text(&mut self, kind: &ToastKind) -> String {
        self.shown += 1;
        format!("{kind} toast #{}", self.shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_app(dismiss_ms: Option<u64>) -> App {
        let dir = tempdir().expect("failed to create temp dir");
        let (app, _task) = App::new(Flags {
            runtime: tokio::runtime::Handle::current(),
            dismiss_ms,
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        });
        app
    }

    #[tokio::test(start_paused = true)]
    async fn show_message_adds_toast_to_view_snapshot() {
        let mut app = test_app(None);
        assert!(app.visible.is_empty());

        let _ = app.update(Message::Show(ToastKind::Success));
        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.visible[0].kind(), &ToastKind::Success);
        assert_eq!(app.title(), "Iced Toast (1 active)");
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_message_removes_toast() {
        let mut app = test_app(None);
        let _ = app.update(Message::Show(ToastKind::Error));
        let id = app.visible[0].id();

        let _ = app.update(Message::Toast(toast::Message::Dismiss(id)));
        assert!(app.visible.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_revision_refreshes_view() {
        let mut app = test_app(Some(500));
        let _ = app.update(Message::Show(ToastKind::Info));
        let _ = app.update(Message::ShowLong);
        assert_eq!(app.visible.len(), 2);

        let mut changes = app.provider.subscribe();
        let _ = changes.borrow_and_update();
        tokio::time::sleep(Duration::from_millis(501)).await;

        let revision = subscription::next_revision(&mut changes)
            .await
            .expect("provider is still alive");
        let _ = app.update(Message::ToastsChanged(revision));
        assert_eq!(app.visible.len(), 1);
        assert!(app.visible[0].message().contains("stays"));
        assert_eq!(app.title(), "Iced Toast (1 active)");
    }

    #[tokio::test(start_paused = true)]
    async fn cli_dismiss_override_is_applied() {
        let app = test_app(Some(750));
        assert_eq!(
            app.provider.config().dismiss_time(),
            Duration::from_millis(750)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn corrupted_config_is_reported_as_toast() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("settings.toml"), "[toasts\n")
            .expect("failed to write config");

        let (app, _task) = App::new(Flags {
            runtime: tokio::runtime::Handle::current(),
            dismiss_ms: None,
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        });

        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.visible[0].kind(), &ToastKind::Warning);
    }
}
