use serde::Serialize;
use serde_json::Value;

use super::models::{RawImage, RawTrack, RecentTracksResponse};

/// Index of the "large" variant in Last.fm's small/medium/large/extralarge list.
const LARGE_IMAGE_INDEX: usize = 2;
const MEDIUM_IMAGE_INDEX: usize = 1;

/// Track shape the widget renders, independent of which source produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalTrack {
    pub artist: String,
    pub title: String,
    pub album: String,
    /// Empty when the source had no usable image.
    pub image_url: String,
    pub page_url: String,
    pub is_now_playing: bool,
}

/// Normalize an untyped JSON body, as returned by any of the sources.
pub fn normalize_value(value: Value) -> Option<CanonicalTrack> {
    let response: RecentTracksResponse = serde_json::from_value(value).ok()?;
    normalize(&response)
}

/// Pick the most recent track out of a response and flatten it.
///
/// Returns `None` when `recenttracks.track` is missing or empty, or when the
/// most recent track lacks an artist, name or album.
pub fn normalize(response: &RecentTracksResponse) -> Option<CanonicalTrack> {
    let track = response.recenttracks.as_ref()?.track.as_ref()?.first()?;
    flatten(track)
}

fn flatten(track: &RawTrack) -> Option<CanonicalTrack> {
    Some(CanonicalTrack {
        artist: track.artist.as_ref()?.text().to_string(),
        title: track.name.as_ref()?.text().to_string(),
        album: track.album.as_ref()?.text().to_string(),
        image_url: select_image(track.image.as_deref()),
        page_url: track.url.clone().unwrap_or_default(),
        is_now_playing: track
            .attr
            .as_ref()
            .and_then(|attr| attr.nowplaying.as_deref())
            == Some("true"),
    })
}

/// Large image when it has a URL, otherwise the medium one, otherwise empty.
fn select_image(images: Option<&[RawImage]>) -> String {
    let Some(images) = images else {
        return String::new();
    };

    match images.get(LARGE_IMAGE_INDEX) {
        Some(large) if !large.text.is_empty() => large.text.clone(),
        _ => images
            .get(MEDIUM_IMAGE_INDEX)
            .map(|medium| medium.text.clone())
            .unwrap_or_default(),
    }
}
