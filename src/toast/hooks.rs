use dioxus::prelude::*;

use super::{Toast, ToastStore};

/// Mirrors the shared toast store into a signal for the calling component.
pub fn use_toast_feed() -> Signal<Vec<Toast>> {
    let store = use_context::<ToastStore>();
    let feed = use_signal(|| store.active());

    let subscription = use_hook(move || {
        store.subscribe(move |toasts| {
            let mut feed = feed;
            feed.set(toasts.clone());
        })
    });
    use_drop(move || subscription.unsubscribe());

    feed
}
