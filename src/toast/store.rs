use dioxus::logger::tracing::{debug, warn};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::Scheduler;
use crate::observer::{ListenerSet, Subscription};

pub const DEFAULT_TOAST_TTL_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Lenient lookup for severities coming from loosely typed call sites.
    /// Unrecognised names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
            Severity::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub severity: Severity,
    /// Zero keeps the toast until it is dismissed.
    pub ttl_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastOptions {
    pub title: String,
    pub description: Option<String>,
    pub severity: Option<Severity>,
    pub ttl_ms: Option<u64>,
}

impl ToastOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).severity(Severity::Success)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).severity(Severity::Error)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).severity(Severity::Info)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = Some(ttl_ms);
        self
    }
}

struct StoreInner {
    toasts: RefCell<Vec<Toast>>,
    listeners: ListenerSet<Vec<Toast>>,
    scheduler: Rc<dyn Scheduler>,
    default_ttl_ms: u64,
}

/// Owner of the active toast collection. Cloning yields another handle to
/// the same store.
#[derive(Clone)]
pub struct ToastStore {
    inner: Rc<StoreInner>,
}

impl ToastStore {
    pub fn new(scheduler: Rc<dyn Scheduler>, default_ttl_ms: u64) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                toasts: RefCell::new(Vec::new()),
                listeners: ListenerSet::new(),
                scheduler,
                default_ttl_ms,
            }),
        }
    }

    pub fn notify(&self, options: ToastOptions) -> String {
        let severity = options.severity.unwrap_or_default();
        let ttl_ms = options.ttl_ms.unwrap_or(self.inner.default_ttl_ms);
        let title = if options.title.trim().is_empty() {
            warn!("toast created without a title; using {}", severity.label());
            severity.label().to_string()
        } else {
            options.title
        };
        let description = options.description.filter(|d| !d.trim().is_empty());

        let toast = Toast {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            description,
            severity,
            ttl_ms,
        };
        let id = toast.id.clone();
        debug!(id = %id, severity = ?severity, ttl_ms, "toast added: {}", toast.title);

        self.inner.toasts.borrow_mut().push(toast);
        self.emit();

        if ttl_ms > 0 {
            let weak: Weak<StoreInner> = Rc::downgrade(&self.inner);
            let expired_id = id.clone();
            self.inner.scheduler.schedule(
                ttl_ms,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        ToastStore { inner }.dismiss(&expired_id);
                    }
                }),
            );
        }

        id
    }

    /// Removes the toast if it is still active. Unknown ids are ignored, so
    /// a manual dismiss and a TTL expiry for the same toast never conflict.
    pub fn dismiss(&self, id: &str) {
        let removed = {
            let mut toasts = self.inner.toasts.borrow_mut();
            let before = toasts.len();
            toasts.retain(|toast| toast.id != id);
            toasts.len() != before
        };

        if removed {
            debug!(id, "toast removed");
            self.emit();
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&Vec<Toast>) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    pub fn active(&self) -> Vec<Toast> {
        self.inner.toasts.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.toasts.borrow().is_empty()
    }

    fn emit(&self) {
        let snapshot = self.active();
        self.inner.listeners.emit(&snapshot);
    }
}

impl PartialEq for ToastStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ManualScheduler;
    use std::cell::Cell;

    fn store_with_clock() -> (ToastStore, Rc<ManualScheduler>) {
        let clock = Rc::new(ManualScheduler::default());
        let store = ToastStore::new(clock.clone(), DEFAULT_TOAST_TTL_MS);
        (store, clock)
    }

    #[test]
    fn notify_applies_defaults() {
        let (store, clock) = store_with_clock();
        let id = store.notify(ToastOptions::new("Saved"));

        let active = store.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, id);
        assert_eq!(active[0].severity, Severity::Info);
        assert_eq!(active[0].ttl_ms, DEFAULT_TOAST_TTL_MS);
        assert_eq!(active[0].description, None);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn toasts_keep_insertion_order_and_unique_ids() {
        let (store, _clock) = store_with_clock();
        let first = store.notify(ToastOptions::info("one"));
        let second = store.notify(ToastOptions::error("two"));
        let third = store.notify(ToastOptions::success("three"));

        let titles: Vec<_> = store.active().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
    }

    #[test]
    fn blank_title_falls_back_to_severity_label() {
        let (store, _clock) = store_with_clock();
        store.notify(ToastOptions::error("   "));
        assert_eq!(store.active()[0].title, "Error");
    }

    #[test]
    fn unknown_severity_names_map_to_info() {
        assert_eq!(Severity::from_name("default"), Severity::Info);
        assert_eq!(Severity::from_name("warning"), Severity::Info);
        assert_eq!(Severity::from_name("Success"), Severity::Success);
        assert_eq!(Severity::from_name(" error "), Severity::Error);
    }

    #[test]
    fn subscribers_receive_full_collection_synchronously() {
        let (store, _clock) = store_with_clock();
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let seen = sizes.clone();
        let _sub = store.subscribe(move |toasts| seen.borrow_mut().push(toasts.len()));

        let id = store.notify(ToastOptions::new("a"));
        store.notify(ToastOptions::new("b"));
        store.dismiss(&id);

        assert_eq!(*sizes.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn ttl_expiry_removes_exactly_that_toast() {
        let (store, clock) = store_with_clock();
        store.notify(ToastOptions::new("short").ttl_ms(1000));
        let long = store.notify(ToastOptions::new("long").ttl_ms(5000));

        clock.advance(999);
        assert_eq!(store.len(), 2);
        clock.advance(1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.active()[0].id, long);

        clock.advance(4000);
        assert!(store.is_empty());
    }

    #[test]
    fn zero_ttl_persists_until_dismissed() {
        let (store, clock) = store_with_clock();
        let id = store.notify(ToastOptions::new("sticky").ttl_ms(0));
        assert_eq!(clock.pending(), 0);

        clock.advance(60_000);
        assert_eq!(store.len(), 1);

        store.dismiss(&id);
        assert!(store.is_empty());
    }

    #[test]
    fn dismiss_before_expiry_fires_a_single_removal() {
        let (store, clock) = store_with_clock();
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let _sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        let id = store.notify(ToastOptions::new("race"));
        store.dismiss(&id);
        store.dismiss(&id);
        clock.advance(DEFAULT_TOAST_TTL_MS);

        assert!(store.is_empty());
        assert_eq!(changes.get(), 2);
    }

    #[test]
    fn dismiss_after_expiry_is_a_no_op() {
        let (store, clock) = store_with_clock();
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let _sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        let id = store.notify(ToastOptions::new("late"));
        clock.advance(DEFAULT_TOAST_TTL_MS + 1);
        assert!(store.is_empty());

        store.dismiss(&id);
        assert!(store.is_empty());
        assert_eq!(changes.get(), 2);
    }

    #[test]
    fn dismiss_unknown_id_is_silent() {
        let (store, _clock) = store_with_clock();
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let _sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.dismiss("missing");
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn unsubscribed_listener_misses_same_turn_notify() {
        let (store, _clock) = store_with_clock();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let sub = store.subscribe(move |_| counter.set(counter.get() + 1));
        sub.unsubscribe();

        store.notify(ToastOptions::new("after"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn active_count_matches_notifies_minus_effective_removals() {
        let (store, clock) = store_with_clock();
        let a = store.notify(ToastOptions::new("a").ttl_ms(100));
        let _b = store.notify(ToastOptions::new("b").ttl_ms(200));
        let c = store.notify(ToastOptions::new("c").ttl_ms(0));
        let _d = store.notify(ToastOptions::new("d").ttl_ms(0));

        store.dismiss(&a);
        store.dismiss(&c);
        store.dismiss(&c);
        clock.advance(500);

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn listener_may_notify_reentrantly() {
        let (store, _clock) = store_with_clock();
        let nested = store.clone();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let _sub = store.subscribe(move |toasts| {
            if !flag.get() && toasts.len() == 1 {
                flag.set(true);
                nested.notify(ToastOptions::new("follow-up"));
            }
        });

        store.notify(ToastOptions::new("first"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn pending_expiry_after_store_drop_is_harmless() {
        let (store, clock) = store_with_clock();
        store.notify(ToastOptions::new("orphan"));
        drop(store);
        clock.advance(DEFAULT_TOAST_TTL_MS);
    }
}
