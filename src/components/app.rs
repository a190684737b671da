use dioxus::core::spawn_forever;
use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

use crate::components::{MultiShareBar, Toaster, TrackListView};
use crate::config::load_config;
use crate::share::{
    default_clipboard, shortcut_for, use_multi_share, KeyPress, MultiShare, Shortcut,
};
use crate::toast::{RuntimeScheduler, ToastStore};
use crate::tracks::load_demo_tracks;

/// Runs the toolbar shortcut for a key press. Returns whether the press was
/// consumed so the caller can suppress the browser default.
fn handle_shortcut(controller: &MultiShare, press: &KeyPress) -> bool {
    let action = shortcut_for(press, controller.selected().len(), controller.is_loading());
    match action {
        Some(Shortcut::Cancel) => {
            debug!("shortcut: cancel selection");
            controller.clear();
            true
        }
        Some(Shortcut::Share) => {
            debug!("shortcut: share selection");
            let controller = controller.clone();
            let _ = spawn_forever(async move {
                controller.share_selected().await;
            });
            true
        }
        None => false,
    }
}

#[component]
pub fn AppShell() -> Element {
    let config = use_hook(load_config);
    let toasts = use_hook({
        let ttl = config.toast_ttl_ms;
        move || ToastStore::new(Rc::new(RuntimeScheduler), ttl)
    });
    let controller = use_hook({
        let config = config.clone();
        let toasts = toasts.clone();
        move || MultiShare::new(config.max_selection, config.brand, toasts, default_clipboard())
    });

    use_context_provider(|| config.clone());
    use_context_provider(|| toasts.clone());
    use_context_provider(|| controller.clone());

    // Shortcuts work regardless of focus in the browser.
    #[cfg(target_arch = "wasm32")]
    use_hook({
        let controller = controller.clone();
        move || {
            let Some(win) = window() else {
                return;
            };
            let runtime = Runtime::current();
            let key_cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                let _guard = RuntimeGuard::new(runtime.clone());
                let press = KeyPress {
                    key: e.key(),
                    ctrl: e.ctrl_key(),
                    meta: e.meta_key(),
                    shift: e.shift_key(),
                };
                if handle_shortcut(&controller, &press) {
                    e.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
            let _ = win.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            key_cb.forget();
        }
    });

    rsx! {
        div { class: "app-container min-h-screen text-white",
            main { class: "max-w-3xl mx-auto px-4 py-8",
                SharePage {}
            }
            Toaster {}
        }
    }
}

#[component]
fn SharePage() -> Element {
    let (controller, selection) = use_multi_share();
    let snapshot = selection();
    let tracks = use_hook(|| {
        load_demo_tracks().unwrap_or_else(|e| {
            error!("Failed to load demo catalogue: {e}");
            Vec::new()
        })
    });

    let on_share = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn(async move {
                controller.share_selected().await;
            });
        }
    };
    let on_cancel = {
        let controller = controller.clone();
        move |_| controller.clear()
    };
    let on_clear_all = {
        let controller = controller.clone();
        move |_| controller.clear()
    };
    let on_select_all = {
        let controller = controller.clone();
        let tracks = tracks.clone();
        move |_| controller.select_all(&tracks)
    };
    // Native renderers have no window-level listener; the toolbar handles keys itself.
    let on_key_down = {
        let controller = controller.clone();
        move |evt: KeyboardEvent| {
            if cfg!(target_arch = "wasm32") {
                return;
            }
            let modifiers = evt.modifiers();
            let press = KeyPress {
                key: evt.key().to_string(),
                ctrl: modifiers.ctrl(),
                meta: modifiers.meta(),
                shift: modifiers.shift(),
            };
            if handle_shortcut(&controller, &press) {
                evt.prevent_default();
            }
        }
    };

    rsx! {
        TrackListView { tracks }
        MultiShareBar {
            selected_count: snapshot.count(),
            is_loading: snapshot.is_loading,
            has_reached_limit: snapshot.has_reached_limit(),
            max_limit: snapshot.max_limit,
            on_share,
            on_cancel,
            on_select_all,
            on_clear_all,
            on_key_down,
        }
    }
}
