use dioxus::logger::tracing::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

use super::clipboard::{copy_to_clipboard, ClipboardBackend};
use super::format::format_tracks_for_sharing;
use super::selection::{SelectAllOutcome, SelectOutcome, SelectionState};
use crate::observer::{ListenerSet, Subscription};
use crate::toast::{ToastOptions, ToastStore};
use crate::tracks::Track;
use crate::utils::{track_count_label, track_word};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied(usize),
    Failed,
    NothingSelected,
    NothingToShare,
    Busy,
}

/// Read-only view of the selection handed to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSnapshot {
    pub tracks: Vec<Track>,
    pub is_loading: bool,
    pub max_limit: usize,
}

impl SelectionSnapshot {
    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    pub fn has_reached_limit(&self) -> bool {
        self.tracks.len() >= self.max_limit
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.tracks.iter().any(|t| t.id == id)
    }
}

struct Inner {
    state: RefCell<SelectionState>,
    listeners: ListenerSet<SelectionSnapshot>,
    toasts: ToastStore,
    clipboard: Rc<dyn ClipboardBackend>,
    brand: String,
}

/// Multi-track selection and the share workflow built on it.
#[derive(Clone)]
pub struct MultiShare {
    inner: Rc<Inner>,
}

impl MultiShare {
    pub fn new(
        max_selection: usize,
        brand: impl Into<String>,
        toasts: ToastStore,
        clipboard: Rc<dyn ClipboardBackend>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(SelectionState::new(max_selection)),
                listeners: ListenerSet::new(),
                toasts,
                clipboard,
                brand: brand.into(),
            }),
        }
    }

    pub fn select(&self, track: Track, included: bool) {
        let outcome = self.inner.state.borrow_mut().select(track, included);
        match outcome {
            SelectOutcome::Added | SelectOutcome::Removed => self.emit(),
            SelectOutcome::Unchanged => {}
            SelectOutcome::LimitReached => {
                let max = self.max_limit();
                self.inner.toasts.notify(
                    ToastOptions::error("Selection limit reached")
                        .description(format!("You can only select up to {max} tracks at once")),
                );
            }
        }
    }

    pub fn select_all(&self, tracks: &[Track]) {
        let outcome = self.inner.state.borrow_mut().select_all(tracks);
        self.emit();
        match outcome {
            SelectAllOutcome::Truncated { limit } => {
                self.inner.toasts.notify(
                    ToastOptions::info("Selection limit applied")
                        .description(format!("Selected first {limit} tracks (limit reached)")),
                );
            }
            SelectAllOutcome::Selected(count) => {
                self.inner.toasts.notify(
                    ToastOptions::success("All tracks selected")
                        .description(format!("{} selected", track_count_label(count))),
                );
            }
        }
    }

    pub fn clear(&self) {
        let changed = {
            let mut state = self.inner.state.borrow_mut();
            let changed = !state.is_empty();
            state.clear();
            changed
        };
        if changed {
            self.emit();
        }
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.inner.state.borrow().contains(id)
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading()
    }

    pub fn has_reached_limit(&self) -> bool {
        self.inner.state.borrow().has_reached_limit()
    }

    pub fn max_limit(&self) -> usize {
        self.inner.state.borrow().max_selection()
    }

    pub fn selected(&self) -> Vec<Track> {
        self.inner.state.borrow().tracks().to_vec()
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        let state = self.inner.state.borrow();
        SelectionSnapshot {
            tracks: state.tracks().to_vec(),
            is_loading: state.is_loading(),
            max_limit: state.max_selection(),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&SelectionSnapshot) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    /// Formats the selection, copies it and reports the result as a toast.
    /// The selection is cleared only when the copy succeeded. While a share
    /// is in flight further calls return `ShareOutcome::Busy`.
    pub async fn share_selected(&self) -> ShareOutcome {
        let tracks = {
            let mut state = self.inner.state.borrow_mut();
            if state.is_loading() {
                debug!("share already in flight");
                return ShareOutcome::Busy;
            }
            if state.is_empty() {
                return ShareOutcome::NothingSelected;
            }
            state.set_loading(true);
            state.tracks().to_vec()
        };
        self.emit();

        info!("sharing {}", track_count_label(tracks.len()));
        let outcome = self.copy_tracks(&tracks).await;

        {
            let mut state = self.inner.state.borrow_mut();
            if outcome == ShareOutcome::Copied(tracks.len()) {
                state.clear();
            }
            state.set_loading(false);
        }
        self.emit();
        outcome
    }

    async fn copy_tracks(&self, tracks: &[Track]) -> ShareOutcome {
        let text = format_tracks_for_sharing(tracks, &self.inner.brand);
        if text.is_empty() {
            self.inner.toasts.notify(
                ToastOptions::error("No content to share")
                    .description("Please select tracks with valid information"),
            );
            return ShareOutcome::NothingToShare;
        }

        if copy_to_clipboard(&*self.inner.clipboard, &text).await {
            let count = tracks.len();
            self.inner.toasts.notify(
                ToastOptions::success("Links copied!").description(format!(
                    "{count} {} copied to clipboard",
                    track_word(count)
                )),
            );
            ShareOutcome::Copied(count)
        } else {
            warn!("share failed: clipboard write unsuccessful");
            self.inner.toasts.notify(
                ToastOptions::error("Failed to copy").description("Please try again"),
            );
            ShareOutcome::Failed
        }
    }

    fn emit(&self) {
        let snapshot = self.snapshot();
        self.inner.listeners.emit(&snapshot);
    }
}

impl PartialEq for MultiShare {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
