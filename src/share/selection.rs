use crate::tracks::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Added,
    Removed,
    /// Nothing changed: the track was already in (or already absent from)
    /// the selection.
    Unchanged,
    LimitReached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllOutcome {
    Selected(usize),
    Truncated { limit: usize },
}

/// Ordered set of selected tracks, unique by id, capped at `max_selection`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    tracks: Vec<Track>,
    max_selection: usize,
    is_loading: bool,
}

impl SelectionState {
    pub fn new(max_selection: usize) -> Self {
        Self {
            tracks: Vec::new(),
            max_selection: max_selection.max(1),
            is_loading: false,
        }
    }

    pub fn select(&mut self, track: Track, included: bool) -> SelectOutcome {
        if !included {
            let before = self.tracks.len();
            self.tracks.retain(|t| t.id != track.id);
            return if self.tracks.len() == before {
                SelectOutcome::Unchanged
            } else {
                SelectOutcome::Removed
            };
        }

        if self.has_reached_limit() {
            return SelectOutcome::LimitReached;
        }
        if self.contains(track.id) {
            return SelectOutcome::Unchanged;
        }
        self.tracks.push(track);
        SelectOutcome::Added
    }

    /// Replaces the selection with the first `max_selection` distinct tracks.
    pub fn select_all(&mut self, tracks: &[Track]) -> SelectAllOutcome {
        let mut picked: Vec<Track> = Vec::with_capacity(self.max_selection.min(tracks.len()));
        let mut truncated = false;
        for track in tracks {
            if picked.iter().any(|t| t.id == track.id) {
                continue;
            }
            if picked.len() == self.max_selection {
                truncated = true;
                break;
            }
            picked.push(track.clone());
        }
        let count = picked.len();
        self.tracks = picked;

        if truncated {
            SelectAllOutcome::Truncated {
                limit: self.max_selection,
            }
        } else {
            SelectAllOutcome::Selected(count)
        }
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn contains(&self, id: u64) -> bool {
        self.tracks.iter().any(|t| t.id == id)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn max_selection(&self) -> usize {
        self.max_selection
    }

    pub fn has_reached_limit(&self) -> bool {
        self.tracks.len() >= self.max_selection
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}
