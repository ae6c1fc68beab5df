//! Standalone HTML page that replays the timeline calls against `links.Timeline`.

use anyhow::{Context, Result};
use serde_json::Value;

use super::adapter::{TimelineBackend, TimelineOptions};
use super::segment::Segment;

/// Where the page loads the timeline library from.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineAssets {
    pub script_url: String,
    pub stylesheet_url: String,
}

impl Default for TimelineAssets {
    fn default() -> Self {
        Self {
            script_url: "timeline.js".to_string(),
            stylesheet_url: "timeline.css".to_string(),
        }
    }
}

const PAGE_STYLE: &str = "\
    .requirement { border: 1px solid #a6a6a6; background-color: #f2f2f2; }
    .bar { position: absolute; bottom: 0; left: 0; width: 100%; text-align: center; color: #4d4d4d; }
    div.timeline-event, div.timeline-event-content { padding: 0; margin: 0; }";

/// Records the calls made by `present` and turns them into a page.
#[derive(Debug, Default)]
pub struct HtmlTimeline {
    assets: TimelineAssets,
    container: Option<String>,
    options: Option<TimelineOptions>,
    items: Vec<Segment>,
    zooms: Vec<f64>,
}

impl HtmlTimeline {
    pub fn new(assets: TimelineAssets) -> Self {
        Self {
            assets,
            ..Default::default()
        }
    }

    pub fn render_page(&self) -> Result<String> {
        let container = self
            .container
            .as_deref()
            .context("Timeline was never created")?;
        let options = self.options.clone().unwrap_or_default();

        let container_json = script_json(&Value::String(container.to_string()))?;
        let options_json = script_json(&serde_json::to_value(&options)?)?;
        let items_json = script_json(&serde_json::to_value(&self.items)?)?;

        let mut zoom_calls = String::new();
        for level in &self.zooms {
            zoom_calls.push_str(&format!("      timeline.zoom({});\n", level));
        }

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <title>Sleep timeline</title>
    <link rel="stylesheet" type="text/css" href="{stylesheet}">
    <script type="text/javascript" src="{script}"></script>
    <style>
{style}
    </style>
  </head>
  <body>
    <div id="{container_attr}"></div>
    <script type="text/javascript">
      var items = {items}.map(function (item) {{
        item.start = new Date(item.start);
        item.end = new Date(item.end);
        return item;
      }});
      var options = {options};
      var timeline = new links.Timeline(document.getElementById({container}), options);
      timeline.draw(items);
{zooms}    </script>
  </body>
</html>
"#,
            stylesheet = escape_attr(&self.assets.stylesheet_url),
            script = escape_attr(&self.assets.script_url),
            style = PAGE_STYLE,
            container_attr = escape_attr(container),
            items = items_json,
            options = options_json,
            container = container_json,
            zooms = zoom_calls,
        ))
    }
}

impl TimelineBackend for HtmlTimeline {
    fn create(&mut self, container: &str, options: &TimelineOptions) {
        self.container = Some(container.to_string());
        self.options = Some(options.clone());
        self.items.clear();
        self.zooms.clear();
    }

    fn draw(&mut self, segments: &[Segment]) {
        self.items = segments.to_vec();
    }

    fn zoom(&mut self, level: f64) {
        self.zooms.push(level);
    }
}

/// JSON that is safe to inline in a `<script>` block.
fn script_json(value: &Value) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}

fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
