//! Last.fm recent-track retrieval for the now-playing widget.
//!
//! The fetcher walks an ordered list of sources (direct API call, then CORS
//! relays) and returns the first response that normalizes into a track.

mod fetcher;
mod http;
mod models;
mod normalize;
mod source;

pub use fetcher::TrackFetcher;
pub use http::{FetchError, HttpGetter, ReqwestGetter};
pub use models::{
    OneOrMany, RawImage, RawTrack, RecentTracks, RecentTracksResponse, TextField, TrackAttr,
};
pub use normalize::{normalize, normalize_value, CanonicalTrack};
pub use source::{default_sources, TrackSource, ALLORIGINS_PROXY, CORSPROXY_PROXY};
