mod file_config;

pub use file_config::{FileConfig, LastFmFileConfig, ProxyFileConfig, TimelineFileConfig};

use crate::lastfm::{default_sources, TrackSource};
use crate::timeline::TimelineAssets;
use anyhow::{bail, Result};

pub const DEFAULT_LASTFM_API_BASE: &str = "https://ws.audioscrobbler.com/2.0/";
pub const DEFAULT_LASTFM_USER: &str = "larrasket";
pub const DEFAULT_REFRESH_INTERVAL_SEC: u64 = 300;
pub const DEFAULT_TIMELINE_CONTAINER: &str = "mytimeline";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub user: Option<String>,
    pub api_key: Option<String>,
    pub refresh_interval_sec: u64,
    pub timeline_container: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            user: None,
            api_key: None,
            refresh_interval_sec: DEFAULT_REFRESH_INTERVAL_SEC,
            timeline_container: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub refresh_interval_sec: u64,

    /// `None` when no API key was given; only the now-playing widget needs it.
    pub lastfm: Option<LastFmSettings>,
    pub timeline: TimelineSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LastFmSettings {
    pub api_base: String,
    pub user: String,
    pub api_key: String,
    /// Unset means the HTTP client's default.
    pub request_timeout_sec: Option<u64>,
    /// Direct call first, then relays, in order of preference.
    pub sources: Vec<TrackSource>,
}

impl LastFmSettings {
    /// Settings for `user` with the default endpoint and relay chain.
    pub fn new(user: &str, api_key: &str) -> Self {
        Self {
            api_base: DEFAULT_LASTFM_API_BASE.to_string(),
            user: user.to_string(),
            api_key: api_key.to_string(),
            request_timeout_sec: None,
            sources: default_sources(),
        }
    }

    /// The `user.getrecenttracks` call every source ends up fetching.
    pub fn recent_tracks_url(&self) -> String {
        format!(
            "{}?method=user.getrecenttracks&user={}&api_key={}&format=json&limit=1",
            self.api_base,
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.api_key)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSettings {
    pub container: String,
    pub assets: TimelineAssets,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let refresh_interval_sec = file
            .refresh_interval_sec
            .unwrap_or(cli.refresh_interval_sec);
        if refresh_interval_sec == 0 {
            bail!("refresh_interval_sec must be greater than zero");
        }

        let lastfm_file = file.lastfm.unwrap_or_default();
        let api_key = lastfm_file.api_key.or_else(|| cli.api_key.clone());

        let lastfm = match api_key {
            Some(api_key) => {
                if api_key.trim().is_empty() {
                    bail!("api_key must not be empty");
                }

                let api_base = lastfm_file
                    .api_base
                    .unwrap_or_else(|| DEFAULT_LASTFM_API_BASE.to_string());
                if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
                    bail!("api_base is not an http(s) URL: {}", api_base);
                }

                let user = lastfm_file
                    .user
                    .or_else(|| cli.user.clone())
                    .unwrap_or_else(|| DEFAULT_LASTFM_USER.to_string());

                let sources = match lastfm_file.proxies {
                    Some(proxies) => {
                        let mut sources = vec![TrackSource::Direct];
                        for proxy in proxies {
                            if proxy.url.trim().is_empty() {
                                bail!("proxy url must not be empty");
                            }
                            sources.push(TrackSource::Proxy {
                                prefix: proxy.url,
                                encode_target: proxy.encode,
                                unwrap_contents: proxy.unwrap,
                            });
                        }
                        sources
                    }
                    None => default_sources(),
                };

                Some(LastFmSettings {
                    api_base,
                    user,
                    api_key,
                    request_timeout_sec: lastfm_file.request_timeout_sec,
                    sources,
                })
            }
            None => None,
        };

        let timeline_file = file.timeline.unwrap_or_default();
        let defaults = TimelineAssets::default();
        let timeline = TimelineSettings {
            container: timeline_file
                .container
                .or_else(|| cli.timeline_container.clone())
                .unwrap_or_else(|| DEFAULT_TIMELINE_CONTAINER.to_string()),
            assets: TimelineAssets {
                script_url: timeline_file.script_url.unwrap_or(defaults.script_url),
                stylesheet_url: timeline_file
                    .stylesheet_url
                    .unwrap_or(defaults.stylesheet_url),
            },
        };

        Ok(Self {
            refresh_interval_sec,
            lastfm,
            timeline,
        })
    }
}
