use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub refresh_interval_sec: Option<u64>,

    // Feature configs
    pub lastfm: Option<LastFmFileConfig>,
    pub timeline: Option<TimelineFileConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct LastFmFileConfig {
    pub api_base: Option<String>,
    pub user: Option<String>,
    pub api_key: Option<String>,
    pub request_timeout_sec: Option<u64>,
    /// Relays tried after the direct call, in order. Replaces the default list when present.
    pub proxies: Option<Vec<ProxyFileConfig>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProxyFileConfig {
    /// Prefix the target URL is appended to.
    pub url: String,
    #[serde(default)]
    pub encode: bool,
    /// The relay wraps the payload in a `contents` string field.
    #[serde(default)]
    pub unwrap: bool,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct TimelineFileConfig {
    pub container: Option<String>,
    pub script_url: Option<String>,
    pub stylesheet_url: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
