use dioxus::prelude::*;

use super::{MultiShare, SelectionSnapshot};

/// The shared selection controller plus a signal that re-renders the caller
/// whenever the selection or its busy flag changes.
pub fn use_multi_share() -> (MultiShare, Signal<SelectionSnapshot>) {
    let controller = use_context::<MultiShare>();
    let snapshot = use_signal(|| controller.snapshot());

    let subscription = {
        let controller = controller.clone();
        use_hook(move || {
            controller.subscribe(move |next| {
                let mut snapshot = snapshot;
                snapshot.set(next.clone());
            })
        })
    };
    use_drop(move || subscription.unsubscribe());

    (controller, snapshot)
}
