use thiserror::Error;
use tracing::warn;

use super::targets::WidgetTargets;
use crate::lastfm::CanonicalTrack;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("music widget targets not found: {0}")]
    MissingTargets(String),
}

/// Write `track` into the widget slots.
///
/// Without a track only the loading indicator is hidden and whatever was
/// displayed before stays. If a required slot is missing nothing is touched.
pub fn render(
    track: Option<&CanonicalTrack>,
    targets: &mut WidgetTargets,
) -> Result<(), RenderError> {
    let missing = targets.missing_required();
    if !missing.is_empty() {
        let missing = missing.join(", ");
        warn!("Music widget elements not found: {}", missing);
        return Err(RenderError::MissingTargets(missing));
    }

    if let Some(loading) = targets.loading.as_mut() {
        loading.hidden = true;
    }

    let Some(track) = track else {
        return Ok(());
    };

    let (Some(art), Some(artist), Some(title)) = (
        targets.art.as_mut(),
        targets.artist.as_mut(),
        targets.title.as_mut(),
    ) else {
        return Ok(());
    };

    if !track.image_url.is_empty() {
        art.src = Some(track.image_url.clone());
        art.alt = Some(format!("{} by {}", track.album, track.artist));
    }

    artist.text = track.artist.clone();
    artist.title = Some(format!("Artist: {}", track.artist));

    title.text = track.title.clone();
    title.href = Some(track.page_url.clone());
    title.title = Some(format!("{} by {}", track.title, track.artist));

    if let Some(heading) = targets.heading.as_mut() {
        heading.text = if track.is_now_playing {
            "now playing:"
        } else {
            "recently played:"
        }
        .to_string();
    }

    Ok(())
}
