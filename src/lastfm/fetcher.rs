use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, warn};

use super::http::{FetchError, HttpGetter, ReqwestGetter};
use super::normalize::{normalize_value, CanonicalTrack};
use super::source::TrackSource;
use crate::config::LastFmSettings;

/// Walks the configured sources in order until one yields a track.
pub struct TrackFetcher {
    http: Arc<dyn HttpGetter>,
    target_url: String,
    sources: Vec<TrackSource>,
}

impl TrackFetcher {
    pub fn new(settings: &LastFmSettings) -> Result<Self> {
        let http = ReqwestGetter::new(settings.request_timeout_sec)?;
        Ok(Self::with_getter(
            Arc::new(http),
            settings.recent_tracks_url(),
            settings.sources.clone(),
        ))
    }

    pub fn with_getter(
        http: Arc<dyn HttpGetter>,
        target_url: String,
        sources: Vec<TrackSource>,
    ) -> Self {
        Self {
            http,
            target_url,
            sources,
        }
    }

    pub fn sources(&self) -> &[TrackSource] {
        &self.sources
    }

    /// Try every source once, in order, and return the first valid track.
    ///
    /// Failures never escape: each one is logged and the next source is tried.
    pub async fn fetch(&self) -> Option<CanonicalTrack> {
        for source in &self.sources {
            match self.try_source(source).await {
                Ok(Some(track)) => {
                    debug!(
                        "Got track \"{}\" by {} from {}",
                        track.title,
                        track.artist,
                        source.label()
                    );
                    return Some(track);
                }
                Ok(None) => {
                    warn!("Last.fm source {} returned no track data", source.label());
                }
                Err(e) => {
                    warn!("Last.fm source {} failed: {}", source.label(), e);
                }
            }
        }

        warn!("All Last.fm sources failed");
        None
    }

    async fn try_source(
        &self,
        source: &TrackSource,
    ) -> Result<Option<CanonicalTrack>, FetchError> {
        let url = source.request_url(&self.target_url);
        let body = self.http.get_json(&url).await?;
        let body = source.unwrap_body(body)?;
        Ok(normalize_value(body))
    }
}
