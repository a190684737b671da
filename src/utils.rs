/// Utility helpers for NextSound Share

/// "track" or "tracks" depending on the count.
pub fn track_word(count: usize) -> &'static str {
    if count == 1 {
        "track"
    } else {
        "tracks"
    }
}

/// Count with its noun, e.g. "1 track" or "3 tracks".
pub fn track_count_label(count: usize) -> String {
    format!("{count} {}", track_word(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralises_track_counts() {
        assert_eq!(track_count_label(0), "0 tracks");
        assert_eq!(track_count_label(1), "1 track");
        assert_eq!(track_count_label(12), "12 tracks");
    }
}
