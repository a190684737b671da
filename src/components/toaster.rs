use dioxus::prelude::*;

use crate::components::Icon;
use crate::config::ShareConfig;
use crate::timing::delay_ms;
use crate::toast::{use_toast_feed, Severity, Toast, ToastStore};

fn severity_style(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Success => ("bg-emerald-600", "check-circle"),
        Severity::Error => ("bg-red-600", "alert-circle"),
        Severity::Info => ("bg-sky-600", "info"),
    }
}

/// Stack of active toasts, newest at the bottom.
#[component]
pub fn Toaster() -> Element {
    let store = use_context::<ToastStore>();
    let config = use_context::<ShareConfig>();
    let toasts = use_toast_feed();
    let on_dismiss = use_callback(move |id: String| store.dismiss(&id));
    let leave_ms = config.dismiss_animation_ms;

    rsx! {
        div {
            class: "toaster fixed bottom-4 right-4 z-[100] flex flex-col gap-2 pointer-events-none",
            aria_live: "polite",
            aria_atomic: "true",
            for toast in toasts() {
                div { key: "{toast.id}", class: "pointer-events-auto",
                    ToastCard { toast: toast.clone(), leave_ms, on_dismiss }
                }
            }
        }
    }
}

#[component]
pub fn ToastCard(toast: Toast, leave_ms: u64, on_dismiss: EventHandler<String>) -> Element {
    let mut is_visible = use_signal(|| false);
    let mut is_leaving = use_signal(|| false);

    // Flip after mount so the enter transition runs.
    use_effect(move || is_visible.set(true));

    let on_close = {
        let id = toast.id.clone();
        move |_| {
            if is_leaving() {
                return;
            }
            is_leaving.set(true);
            let id = id.clone();
            spawn(async move {
                delay_ms(leave_ms).await;
                on_dismiss.call(id);
            });
        }
    };

    let (bg, icon) = severity_style(toast.severity);
    let motion = if is_visible() && !is_leaving() {
        "translate-x-0 opacity-100"
    } else {
        "translate-x-full opacity-0"
    };

    rsx! {
        div {
            class: "toast-card flex items-start gap-3 min-w-[300px] max-w-[420px] p-4 rounded-lg shadow-lg transition-all duration-300 ease-out {bg} {motion}",
            role: "alert",
            div { class: "flex-shrink-0 mt-0.5 text-white",
                Icon { name: icon.to_string(), class: "w-5 h-5".to_string() }
            }
            div { class: "flex-1 space-y-1",
                p { class: "text-sm font-semibold text-white", "{toast.title}" }
                if let Some(description) = toast.description.clone() {
                    p { class: "text-sm text-white/90", "{description}" }
                }
            }
            button {
                class: "flex-shrink-0 text-white/80 hover:text-white transition-colors",
                aria_label: "Close notification",
                onclick: on_close,
                Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ManualScheduler, ToastOptions};
    use dioxus::core::{generation, needs_update, NoOpMutations};
    use std::rc::Rc;

    thread_local! {
        static STORE: ToastStore = ToastStore::new(Rc::new(ManualScheduler::default()), 0);
    }

    fn harness() -> Element {
        use_context_provider(ShareConfig::default);
        use_context_provider(|| STORE.with(|store| store.clone()));
        if generation() == 0 {
            needs_update();
        }
        rsx! { Toaster {} }
    }

    #[test]
    fn toaster_survives_rerenders_with_active_toasts() {
        let id = STORE.with(|store| store.notify(ToastOptions::error("Failed to copy")));

        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        dom.render_immediate(&mut NoOpMutations);

        dom.in_runtime(|| {
            STORE.with(|store| {
                assert_eq!(store.len(), 1);
                store.dismiss(&id);
                assert!(store.is_empty());
            })
        });
    }

    #[test]
    fn stack_positioning_ships_with_the_stylesheet() {
        let css = include_str!("../../assets/styling/app.css");
        let rule = css
            .split(".toaster {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .unwrap_or_default();
        assert!(rule.contains("position: fixed"));
        assert!(rule.contains("bottom: 1rem"));
        assert!(rule.contains("right: 1rem"));
    }
}
