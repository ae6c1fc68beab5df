//! Sleep timeline: records → colored segments → `links.Timeline`.

mod adapter;
mod color;
mod html;
mod record;
mod segment;

pub use adapter::{
    present, TimelineBackend, TimelineHandle, TimelineOptions, INITIAL_ZOOM, VIEW_ZOOM,
};
pub use color::{hsv_to_rgb, to_color};
pub use html::{HtmlTimeline, TimelineAssets};
pub use record::{load_records, parse_records, Category, TimeRecord};
pub use segment::{
    actual_height, bar_style, base_hue, build, build_all, requirement_height, BarStyle, Segment,
    SEGMENT_GROUP,
};
