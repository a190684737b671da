//! Track records as delivered by the catalogue API, plus the bundled demo
//! catalogue used by the track list view.

use serde::{Deserialize, Serialize};

const DEMO_CATALOGUE: &str = include_str!("../assets/tracks.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Track {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "originalTitle")]
    pub original_title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default, alias = "externalUrls")]
    pub external_urls: Option<ExternalUrls>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Track {
    pub fn display_name(&self) -> &str {
        non_blank(&self.name)
            .or_else(|| non_blank(&self.original_title))
            .unwrap_or("Unknown Track")
    }

    pub fn display_artist(&self) -> &str {
        non_blank(&self.artist).unwrap_or("Unknown Artist")
    }

    pub fn spotify_url(&self) -> Option<&str> {
        self.external_urls
            .as_ref()
            .and_then(|urls| non_blank(&urls.spotify))
    }
}

pub fn load_demo_tracks() -> Result<Vec<Track>, serde_json::Error> {
    serde_json::from_str(DEMO_CATALOGUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_name_then_original_title() {
        let mut track = Track {
            id: 1,
            original_title: Some("Original".into()),
            ..Track::default()
        };
        assert_eq!(track.display_name(), "Original");

        track.name = Some("Renamed".into());
        assert_eq!(track.display_name(), "Renamed");

        track.name = Some("  ".into());
        track.original_title = None;
        assert_eq!(track.display_name(), "Unknown Track");
        assert_eq!(track.display_artist(), "Unknown Artist");
    }

    #[test]
    fn parses_catalogue_records() {
        let json = r#"[{
            "id": 42,
            "name": "Night Drive",
            "artist": "Glass Coast",
            "external_urls": { "spotify": "https://open.spotify.com/track/abc" }
        }, { "id": 43, "original_title": "Untitled" }]"#;

        let tracks: Vec<Track> = serde_json::from_str(json).expect("valid json");
        assert_eq!(tracks[0].spotify_url(), Some("https://open.spotify.com/track/abc"));
        assert_eq!(tracks[1].display_name(), "Untitled");
        assert_eq!(tracks[1].spotify_url(), None);
    }

    #[test]
    fn demo_catalogue_is_valid() {
        let tracks = load_demo_tracks().expect("bundled catalogue parses");
        assert!(tracks.len() > 10);
    }
}
