// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle: scheduling, dismissal and teardown.
//!
//! A [`Provider`] owns the toast state for one surface. Consumers receive a
//! [`Dispatcher`] instead of the provider itself; the dispatcher only holds a
//! weak reference, so it turns into a no-op once the provider is gone.
//!
//! Every enqueue spawns one removal timer on the provider's tokio runtime.
//! Timers reach the state through a `Weak` pointer and re-check the mount
//! flag under the lock, so nothing is mutated after [`Provider::unmount`].

use super::entry::{ToastEntry, ToastId, ToastPayload};
use super::store::Store;
use crate::config::{DEFAULT_DISMISS_TIME_MS, DEFAULT_EVENT_CAPACITY};
use crate::diagnostics::{CircularBuffer, ToastEvent, ToastEventKind};
use crate::error::Result;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Provider settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderConfig {
    dismiss_time: Duration,
}

impl ProviderConfig {
    #[must_use]
    pub fn new(dismiss_time: Duration) -> Self {
        Self { dismiss_time }
    }

    /// Delay applied to toasts that do not carry their own.
    #[must_use]
    pub fn dismiss_time(&self) -> Duration {
        self.dismiss_time
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DISMISS_TIME_MS))
    }
}

struct State {
    mounted: bool,
    store: Store,
    events: CircularBuffer<ToastEvent>,
}

struct Shared {
    config: ProviderConfig,
    runtime: Handle,
    state: Mutex<State>,
    revision: watch::Sender<u64>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump_revision(&self) {
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    fn enqueue(self: &Arc<Self>, payload: ToastPayload) -> Option<ToastId> {
        let mut state = self.lock();
        if !state.mounted {
            log::debug!("Dropping toast dispatched after unmount: {}", payload.message());
            return None;
        }

        let entry = state.store.enqueue(payload, self.config.dismiss_time);
        let (id, delay, kind) = (entry.id(), entry.delay(), entry.kind().clone());

        // Spawned while the lock is held so the timer cannot observe the
        // store before its slot exists.
        let weak = Arc::downgrade(self);
        let timer = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(shared) = weak.upgrade() {
                shared.expire(id);
            }
        });
        state.store.attach_timer(id, timer.abort_handle());

        log::debug!("Enqueued {id} ({kind}), dismissing in {delay:?}");
        state
            .events
            .push(ToastEvent::new(ToastEventKind::Enqueued { id, kind }));
        drop(state);

        self.bump_revision();
        Some(id)
    }

    fn dismiss(&self, id: ToastId) -> bool {
        let mut state = self.lock();
        if !state.mounted || state.store.dismiss(id).is_none() {
            return false;
        }
        log::debug!("Dismissed {id}");
        state
            .events
            .push(ToastEvent::new(ToastEventKind::Dismissed { id }));
        drop(state);

        self.bump_revision();
        true
    }

    fn expire(&self, id: ToastId) {
        let mut state = self.lock();
        if !state.mounted {
            log::debug!("Ignoring expiry of {id} after unmount");
            return;
        }
        if state.store.expire(id).is_none() {
            return;
        }
        log::debug!("Expired {id}");
        state
            .events
            .push(ToastEvent::new(ToastEventKind::Expired { id }));
        drop(state);

        self.bump_revision();
    }

    fn unmount(&self) {
        let mut state = self.lock();
        if !state.mounted {
            return;
        }
        state.mounted = false;
        let dropped = state.store.clear();
        log::debug!("Toast provider unmounted with {dropped} active toast(s)");
        state
            .events
            .push(ToastEvent::new(ToastEventKind::Unmounted { dropped }));
        drop(state);

        self.bump_revision();
    }
}

/// Owner of the active toasts for one surface.
///
/// Dropping the provider unmounts it.
pub struct Provider {
    shared: Arc<Shared>,
}

impl Provider {
    /// Creates a provider whose removal timers run on `runtime`.
    ///
    /// The runtime must have its time driver enabled (`enable_time()` or
    /// `enable_all()` on the builder). Without it every removal timer panics
    /// inside its task and toasts only leave through explicit dismissal.
    #[must_use]
    pub fn new(config: ProviderConfig, runtime: Handle) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                config,
                runtime,
                state: Mutex::new(State {
                    mounted: true,
                    store: Store::new(),
                    events: CircularBuffer::new(DEFAULT_EVENT_CAPACITY),
                }),
                revision,
            }),
        }
    }

    /// Creates a provider on the tokio runtime of the calling context.
    ///
    /// Fails with [`crate::error::Error::Runtime`] outside a runtime. The
    /// same time-driver requirement as [`Provider::new`] applies.
    pub fn current(config: ProviderConfig) -> Result<Self> {
        Ok(Self::new(config, Handle::try_current()?))
    }

    #[must_use]
    pub fn config(&self) -> ProviderConfig {
        self.shared.config
    }

    /// Returns a handle consumers use to show and dismiss toasts.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Shows a toast. Returns `None` once the provider has been unmounted.
    pub fn dispatch_toast(&self, payload: ToastPayload) -> Option<ToastId> {
        self.shared.enqueue(payload)
    }

    /// Removes `id` now. Returns `false` if it was not active.
    pub fn dismiss_toast(&self, id: ToastId) -> bool {
        self.shared.dismiss(id)
    }

    /// Snapshot of the active toasts, newest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<ToastEntry> {
        self.shared.lock().store.entries().cloned().collect()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.shared.lock().store.is_empty()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.shared.lock().mounted
    }

    /// Lifecycle history, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<ToastEvent> {
        self.shared.lock().events.iter().cloned().collect()
    }

    /// Revision counter bumped after every change to the active toasts.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    /// Tears the provider down: cancels pending timers, drops active toasts
    /// and turns every dispatcher into a no-op. Calling it again does nothing.
    pub fn unmount(&self) {
        self.shared.unmount();
    }
}

impl Drop for Provider {
    fn drop(&mut self) {
        self.shared.unmount();
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("Provider")
            .field("config", &self.shared.config)
            .field("mounted", &state.mounted)
            .field("active", &state.store.len())
            .finish()
    }
}

/// Consumer handle to a [`Provider`].
///
/// `Dispatcher::default()` is detached: every call is a no-op, matching what a
/// consumer outside any provider gets.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    shared: Weak<Shared>,
}

impl Dispatcher {
    /// Shows a toast. Returns `None` if the provider is gone or unmounted.
    pub fn dispatch_toast(&self, payload: ToastPayload) -> Option<ToastId> {
        self.shared.upgrade()?.enqueue(payload)
    }

    /// Removes `id` now. Returns `false` if it was not active or the provider is gone.
    pub fn dismiss_toast(&self, id: ToastId) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| shared.dismiss(id))
    }

    /// Whether a live, mounted provider is behind this handle.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| shared.lock().mounted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    fn provider(default_ms: u64) -> Provider {
        Provider::current(ProviderConfig::new(Duration::from_millis(default_ms)))
            .expect("tests run inside a tokio runtime")
    }

    fn visible_ids(provider: &Provider) -> Vec<ToastId> {
        provider.toasts().iter().map(ToastEntry::id).collect()
    }

    #[test]
    fn current_fails_outside_runtime() {
        assert!(Provider::current(ProviderConfig::default()).is_err());
    }

    #[test]
    fn default_config_uses_default_dismiss_time() {
        assert_eq!(
            ProviderConfig::default().dismiss_time(),
            Duration::from_millis(DEFAULT_DISMISS_TIME_MS)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn dispatched_toast_is_visible_immediately() {
        let provider = provider(2000);
        let id = provider
            .dispatch_toast(ToastPayload::success("ok"))
            .expect("mounted provider accepts toasts");

        assert_eq!(visible_ids(&provider), vec![id]);
        assert!(provider.has_toasts());
    }

    #[tokio::test(start_paused = true)]
    async fn toast_expires_after_default_delay() {
        let provider = provider(2000);
        provider.dispatch_toast(ToastPayload::success("ok"));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(provider.toasts().len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(provider.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn per_toast_override_wins_over_default() {
        let provider = provider(2000);
        provider.dispatch_toast(ToastPayload::info("quick").dismiss_after(Duration::from_millis(10)));
        let slow = provider.dispatch_toast(ToastPayload::info("slow")).unwrap();

        tokio::time::sleep(Duration::from_millis(11)).await;
        assert_eq!(visible_ids(&provider), vec![slow]);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_override_expires_on_next_turn() {
        let provider = provider(2000);
        let id = provider
            .dispatch_toast(ToastPayload::info("blink").dismiss_after(Duration::ZERO))
            .unwrap();
        assert_eq!(visible_ids(&provider), vec![id]);

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(provider.toasts().is_empty());
        let last = provider.events().last().map(|event| event.kind.clone());
        assert_eq!(last, Some(ToastEventKind::Expired { id }));
    }

    #[test]
    fn timers_run_on_injected_runtime_with_time_driver() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .expect("failed to build runtime");
        let provider = Provider::new(
            ProviderConfig::new(Duration::from_millis(20)),
            runtime.handle().clone(),
        );
        let mut changes = provider.subscribe();

        provider.dispatch_toast(ToastPayload::success("background"));
        let _ = changes.borrow_and_update();
        runtime.block_on(async {
            tokio::time::timeout(Duration::from_secs(5), changes.changed())
                .await
                .expect("timer fired before timeout")
                .expect("provider still alive");
        });
        assert!(provider.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_removes_before_timer_and_cancels_it() {
        let provider = provider(2000);
        let id = provider.dispatch_toast(ToastPayload::error("boom")).unwrap();

        assert!(provider.dismiss_toast(id));
        assert!(provider.toasts().is_empty());
        assert!(!provider.dismiss_toast(id));

        tokio::time::sleep(Duration::from_millis(2500)).await;
        let expired = provider
            .events()
            .iter()
            .any(|event| matches!(event.kind, ToastEventKind::Expired { .. }));
        assert!(!expired, "cancelled timer must not fire");
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_unknown_id_is_noop() {
        let provider = provider(2000);
        provider.dispatch_toast(ToastPayload::info("stay"));
        let before = *provider.subscribe().borrow();

        assert!(!provider.dismiss_toast(ToastId::from_millis(1)));
        assert_eq!(provider.toasts().len(), 1);
        assert_eq!(*provider.subscribe().borrow(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_kind_is_accepted() {
        let provider = provider(2000);
        provider.dispatch_toast(ToastPayload::new("sparkles", "yay"));

        let toasts = provider.toasts();
        assert_eq!(toasts[0].kind(), &ToastKind::Other("sparkles".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_timers_and_blocks_mutation() {
        let provider = provider(2000);
        let dispatcher = provider.dispatcher();
        provider.dispatch_toast(ToastPayload::warning("pending"));

        provider.unmount();
        assert!(!provider.is_mounted());
        assert!(provider.toasts().is_empty());
        let revision = *provider.subscribe().borrow();

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(dispatcher.dispatch_toast(ToastPayload::info("late")).is_none());
        assert!(provider.dispatch_toast(ToastPayload::info("late")).is_none());
        assert!(provider.toasts().is_empty());
        assert_eq!(*provider.subscribe().borrow(), revision);

        provider.unmount();
        let unmounts = provider
            .events()
            .iter()
            .filter(|event| matches!(event.kind, ToastEventKind::Unmounted { .. }))
            .count();
        assert_eq!(unmounts, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_after_unmount_is_ignored() {
        let provider = provider(2000);
        let id = provider.dispatch_toast(ToastPayload::info("x")).unwrap();
        provider.unmount();

        // A timer that slipped past cancellation lands here.
        provider.shared.expire(id);
        let last = provider.events().last().map(|event| event.kind.clone());
        assert_eq!(last, Some(ToastEventKind::Unmounted { dropped: 1 }));
    }

    #[tokio::test(start_paused = true)]
    async fn detached_dispatcher_is_noop() {
        let dispatcher = Dispatcher::default();
        assert!(!dispatcher.is_connected());
        assert!(dispatcher.dispatch_toast(ToastPayload::info("nobody")).is_none());
        assert!(!dispatcher.dismiss_toast(ToastId::from_millis(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn dispatcher_reaches_provider_until_dropped() {
        let provider = provider(2000);
        let dispatcher = provider.dispatcher();
        assert!(dispatcher.is_connected());

        let id = dispatcher
            .dispatch_toast(ToastPayload::success("via dispatcher"))
            .unwrap();
        assert_eq!(visible_ids(&provider), vec![id]);
        assert!(dispatcher.dismiss_toast(id));

        drop(provider);
        assert!(!dispatcher.is_connected());
        assert!(dispatcher.dispatch_toast(ToastPayload::info("gone")).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn revision_advances_on_each_change() {
        let provider = provider(100);
        let mut changes = provider.subscribe();
        let start = *changes.borrow_and_update();

        let id = provider.dispatch_toast(ToastPayload::info("a")).unwrap();
        assert!(changes.has_changed().unwrap());
        assert_eq!(*changes.borrow_and_update(), start + 1);

        provider.dismiss_toast(id);
        assert_eq!(*changes.borrow_and_update(), start + 2);

        provider.dispatch_toast(ToastPayload::info("b"));
        let _ = changes.borrow_and_update();
        changes.changed().await.expect("provider still alive");
        assert_eq!(*changes.borrow(), start + 4);
        assert!(provider.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn events_record_lifecycle_in_order() {
        let provider = provider(50);
        let kept = provider.dispatch_toast(ToastPayload::info("kept")).unwrap();
        let closed = provider.dispatch_toast(ToastPayload::error("closed")).unwrap();
        provider.dismiss_toast(closed);
        tokio::time::sleep(Duration::from_millis(60)).await;

        let kinds: Vec<ToastEventKind> =
            provider.events().into_iter().map(|event| event.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ToastEventKind::Enqueued {
                    id: kept,
                    kind: ToastKind::Info
                },
                ToastEventKind::Enqueued {
                    id: closed,
                    kind: ToastKind::Error
                },
                ToastEventKind::Dismissed { id: closed },
                ToastEventKind::Expired { id: kept },
            ]
        );
    }
}
