//! Site Widgets Library
//!
//! Two independent pipelines behind the site's small dynamic pieces:
//! - a now-playing widget fed by Last.fm recent tracks
//! - a sleep timeline whose bars are colored from a hue model

pub mod config;
pub mod lastfm;
pub mod timeline;
pub mod widget;

// Re-export commonly used types for convenience
pub use config::{AppConfig, CliConfig, FileConfig, LastFmSettings};
pub use lastfm::{CanonicalTrack, TrackFetcher};
pub use timeline::{present, Segment, TimeRecord};
pub use widget::{render, WidgetTargets};
