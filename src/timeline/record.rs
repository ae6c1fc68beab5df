use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

/// What a timeline record measured.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Category {
    Sleep,
    Awake,
    Unknown,
    Other(String),
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sleep" => Category::Sleep,
            "awake" => Category::Awake,
            // the exporter writes "unkown"
            "unkown" | "unknown" => Category::Unknown,
            _ => Category::Other(value),
        }
    }
}

/// One row of the exported sleep log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeRecord {
    #[serde(rename = "Start")]
    pub start: DateTime<Utc>,
    #[serde(rename = "End")]
    pub end: DateTime<Utc>,
    /// Duration in nanoseconds.
    #[serde(rename = "Total")]
    pub total_nanos: i64,
    #[serde(rename = "Type")]
    pub category: Category,
}

pub fn parse_records(json: &str) -> Result<Vec<TimeRecord>> {
    serde_json::from_str(json).context("Failed to parse timeline records")
}

pub fn load_records(path: &Path) -> Result<Vec<TimeRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read timeline records: {:?}", path))?;
    parse_records(&content)
}
