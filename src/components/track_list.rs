use dioxus::prelude::*;

use crate::components::Icon;
use crate::share::use_multi_share;
use crate::tracks::Track;

#[component]
pub fn TrackListView(tracks: Vec<Track>) -> Element {
    let (controller, selection) = use_multi_share();

    let on_select_all = {
        let controller = controller.clone();
        let tracks = tracks.clone();
        move |_| controller.select_all(&tracks)
    };

    let snapshot = selection();

    rsx! {
        div { class: "space-y-6 pb-32",
            header { class: "page-header flex items-center justify-between gap-4",
                div {
                    h1 { class: "page-title text-2xl font-bold text-white", "Trending tracks" }
                    p { class: "text-sm text-zinc-400",
                        "Pick up to {snapshot.max_limit} tracks and share them in one go."
                    }
                }
                button {
                    class: "px-3 py-2 rounded-full text-sm text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors",
                    disabled: snapshot.is_loading,
                    onclick: on_select_all,
                    "Select all"
                }
            }

            if tracks.is_empty() {
                p { class: "text-zinc-500", "No tracks available." }
            }

            div { class: "space-y-1",
                for (index, track) in tracks.iter().cloned().enumerate() {
                    TrackRow {
                        key: "{track.id}",
                        index: index + 1,
                        selected: snapshot.is_selected(track.id),
                        disabled: snapshot.is_loading,
                        track: track.clone(),
                        on_toggle: {
                            let controller = controller.clone();
                            move |(track, included): (Track, bool)| controller.select(track, included)
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn TrackRow(
    track: Track,
    index: usize,
    selected: bool,
    disabled: bool,
    on_toggle: EventHandler<(Track, bool)>,
) -> Element {
    let row_class = if selected {
        "w-full flex items-center gap-4 p-3 rounded-xl bg-amber-500/10 transition-colors cursor-pointer"
    } else {
        "w-full flex items-center gap-4 p-3 rounded-xl hover:bg-zinc-800/50 transition-colors cursor-pointer"
    };
    let toggle = {
        let track = track.clone();
        move || {
            if !disabled {
                on_toggle.call((track.clone(), !selected));
            }
        }
    };
    let toggle_from_row = toggle.clone();
    let toggle_from_box = toggle;

    rsx! {
        div {
            class: "{row_class}",
            onclick: move |_| toggle_from_row(),
            input {
                r#type: "checkbox",
                class: "w-4 h-4 accent-amber-500",
                checked: selected,
                disabled: disabled,
                aria_label: "Select {track.display_name()}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    toggle_from_box();
                },
            }
            span { class: "w-6 text-sm text-zinc-500", "{index}" }
            div { class: "w-10 h-10 rounded bg-zinc-800 flex items-center justify-center text-zinc-500",
                Icon { name: "music".to_string(), class: "w-5 h-5".to_string() }
            }
            div { class: "flex-1 min-w-0",
                p { class: "text-sm font-medium text-white truncate", "{track.display_name()}" }
                p { class: "text-xs text-zinc-400 truncate", "{track.display_artist()}" }
            }
            if track.spotify_url().is_some() {
                span { class: "text-xs text-emerald-400", "Spotify" }
            }
        }
    }
}
