use dioxus::prelude::*;

use crate::components::Icon;
use crate::utils::track_count_label;

const GHOST_BUTTON: &str = "text-zinc-300 hover:text-white hover:bg-zinc-800/60 font-semibold px-3 py-2 rounded-full text-sm transition-colors disabled:opacity-50";

/// Floating toolbar shown while at least one track is selected.
#[component]
pub fn MultiShareBar(
    selected_count: usize,
    on_share: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_select_all: Option<EventHandler<()>>,
    on_clear_all: Option<EventHandler<()>>,
    #[props(default)] is_loading: bool,
    #[props(default)] has_reached_limit: bool,
    #[props(default = crate::config::DEFAULT_MAX_SELECTION)] max_limit: usize,
    #[props(default)] on_key_down: Option<EventHandler<KeyboardEvent>>,
) -> Element {
    if selected_count == 0 {
        return rsx! {};
    }

    let badge = if has_reached_limit {
        "bg-red-500"
    } else {
        "bg-amber-500"
    };
    let share_label = format!(
        "Share {selected_count} selected track{}",
        if selected_count == 1 { "" } else { "s" }
    );

    rsx! {
        div {
            class: "multi-share-bar fixed bottom-4 left-1/2 -translate-x-1/2 z-50 bg-zinc-900 shadow-2xl rounded-2xl border-2 border-amber-500 px-4 sm:px-6 py-3 sm:py-4 flex flex-col sm:flex-row items-center gap-3 sm:gap-4 max-w-[95vw]",
            role: "toolbar",
            aria_label: "Multi-track selection toolbar",
            tabindex: "-1",
            onkeydown: move |evt| {
                if let Some(handler) = on_key_down {
                    handler.call(evt);
                }
            },

            div { class: "flex items-center gap-2",
                div { class: "w-8 h-8 rounded-full flex items-center justify-center transition-colors duration-200 {badge}",
                    span { class: "text-white font-bold text-sm", "{selected_count}" }
                }
                div { class: "flex flex-col",
                    span { class: "text-white font-semibold text-sm sm:text-base",
                        "{track_count_label(selected_count)}"
                    }
                    if has_reached_limit {
                        span { class: "text-xs text-red-400", "Max {max_limit} reached" }
                    }
                }
            }

            div { class: "hidden sm:block w-px h-10 bg-zinc-700" }

            div { class: "flex items-center gap-2 w-full sm:w-auto",
                if let Some(handler) = on_select_all {
                    button {
                        class: GHOST_BUTTON,
                        disabled: is_loading,
                        aria_label: "Select all tracks",
                        onclick: move |_| handler.call(()),
                        Icon { name: "check-double".to_string(), class: "w-3 h-3 mr-2 inline".to_string() }
                        "Select All"
                    }
                }
                if let Some(handler) = on_clear_all {
                    button {
                        class: GHOST_BUTTON,
                        disabled: is_loading,
                        aria_label: "Clear all selections",
                        onclick: move |_| handler.call(()),
                        Icon { name: "x-circle".to_string(), class: "w-3 h-3 mr-2 inline".to_string() }
                        "Clear All"
                    }
                }

                button {
                    class: "bg-amber-500 hover:bg-amber-400 text-white font-semibold px-4 sm:px-6 py-2 rounded-full text-sm sm:text-base transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed flex-1 sm:flex-none",
                    disabled: is_loading,
                    aria_label: "{share_label}",
                    onclick: move |_| on_share.call(()),
                    if is_loading {
                        Icon { name: "spinner".to_string(), class: "w-4 h-4 mr-2 inline".to_string() }
                        "Copying..."
                    } else {
                        Icon { name: "share".to_string(), class: "w-4 h-4 mr-2 inline".to_string() }
                        "Share Selected"
                    }
                }

                button {
                    class: GHOST_BUTTON,
                    disabled: is_loading,
                    aria_label: "Cancel selection",
                    onclick: move |_| on_cancel.call(()),
                    Icon { name: "x".to_string(), class: "w-4 h-4 sm:mr-2 inline".to_string() }
                    span { class: "hidden sm:inline", "Cancel" }
                }
            }

            div { class: "hidden lg:flex items-center text-xs text-zinc-400 ml-2",
                kbd { class: "px-2 py-1 bg-zinc-800 rounded", "Esc" }
                span { class: "mx-1", "to cancel" }
                kbd { class: "px-2 py-1 bg-zinc-800 rounded ml-2", "Ctrl/⌘ ⇧ S" }
                span { class: "mx-1", "to share" }
            }
        }
    }
}
