//! Shapes of the `user.getrecenttracks` JSON response.
//!
//! Only the fields the widget reads are modeled; everything else is ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RecentTracksResponse {
    pub recenttracks: Option<RecentTracks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentTracks {
    pub track: Option<OneOrMany<RawTrack>>,
}

/// Last.fm collapses single-element lists into a bare object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    // Must come first: derived struct impls also accept sequences.
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// The first element, which Last.fm orders as the most recent.
    pub fn first(&self) -> Option<&T> {
        match self {
            OneOrMany::Many(items) => items.first(),
            OneOrMany::One(item) => Some(item),
        }
    }
}

/// A text value that is either a bare string or wrapped as `{"#text": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TextField {
    Plain(String),
    Wrapped {
        #[serde(rename = "#text", default)]
        text: String,
    },
}

impl TextField {
    pub fn text(&self) -> &str {
        match self {
            TextField::Plain(text) => text,
            TextField::Wrapped { text } => text,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTrack {
    pub artist: Option<TextField>,
    pub name: Option<TextField>,
    pub album: Option<TextField>,
    pub image: Option<Vec<RawImage>>,
    pub url: Option<String>,
    #[serde(rename = "@attr")]
    pub attr: Option<TrackAttr>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    #[serde(rename = "#text", default)]
    pub text: String,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAttr {
    pub nowplaying: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_field_shapes() {
        let plain: TextField = serde_json::from_value(json!("Radiohead")).unwrap();
        assert_eq!(plain.text(), "Radiohead");

        let wrapped: TextField =
            serde_json::from_value(json!({"mbid": "a74b1b7f", "#text": "Radiohead"})).unwrap();
        assert_eq!(wrapped.text(), "Radiohead");

        let empty: TextField = serde_json::from_value(json!({"mbid": ""})).unwrap();
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn test_track_as_object_or_array() {
        let one: RecentTracks = serde_json::from_value(json!({
            "track": {"name": "Only"}
        }))
        .unwrap();
        assert!(matches!(one.track, Some(OneOrMany::One(_))));

        let many: RecentTracks = serde_json::from_value(json!({
            "track": [{"name": "First"}, {"name": "Second"}]
        }))
        .unwrap();
        let first = many.track.as_ref().and_then(|t| t.first()).unwrap();
        assert_eq!(first.name.as_ref().unwrap().text(), "First");
    }

    #[test]
    fn test_empty_track_list_has_no_first() {
        let empty: OneOrMany<RawTrack> = serde_json::from_value(json!([])).unwrap();
        assert!(empty.first().is_none());
    }
}
