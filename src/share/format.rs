use crate::tracks::Track;

/// Formats tracks into a plain-text message suitable for pasting into chat.
///
/// An empty slice produces an empty string. Otherwise the message starts
/// with a header line, followed by one numbered entry per track; entries
/// are separated by a blank line and carry an indented Spotify link when
/// the track has one.
pub fn format_tracks_for_sharing(tracks: &[Track], brand: &str) -> String {
    if tracks.is_empty() {
        return String::new();
    }

    let header = if tracks.len() == 1 {
        format!("Check out this track from {brand}:")
    } else {
        format!("Check out these {} tracks from {brand}:", tracks.len())
    };

    let entries: Vec<String> = tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let line = format!(
                "{}. {} - {}",
                index + 1,
                track.display_name(),
                track.display_artist()
            );
            match track.spotify_url() {
                Some(url) => format!("{line}\n   {url}"),
                None => line,
            }
        })
        .collect();

    format!("{header}\n\n{}", entries.join("\n\n"))
}
