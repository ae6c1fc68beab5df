//! Turns sleep-log records into timeline items.
//!
//! Every item carries two stacked markers: a "requirement" div whose height
//! grows with the recorded minutes, and a colored "bar" div whose height and
//! hue come from the duration in hours.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::color::to_color;
use super::record::{Category, TimeRecord};

pub const SEGMENT_GROUP: &str = "hours";

const NANOS_PER_MINUTE: f64 = 6e10;
/// Minutes at which the requirement marker reaches full height.
const MAX_MINUTES: f64 = 20.0;

const BAR_SATURATION: f64 = 0.95;
const BAR_VALUE: f64 = 0.95;
const BORDER_SATURATION: f64 = 0.90;
const BORDER_VALUE: f64 = 0.90;

/// One timeline item, in the shape the timeline library consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub group: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Requirement marker followed by the actual-value marker.
    pub content: String,
}

/// Heights (px) and colors of the two markers.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
    pub requirement_height: i64,
    pub actual_height: i64,
    pub hue: f64,
    pub color: String,
    pub border_color: String,
}

/// Duration in minutes, rounded to two decimals. All derived values use the
/// rounded number; `text` is its display form ("60.00").
#[derive(Debug, Clone, PartialEq)]
struct Minutes {
    value: f64,
    text: String,
}

impl Minutes {
    fn from_nanos(total_nanos: i64) -> Option<Self> {
        let minutes = total_nanos as f64 / NANOS_PER_MINUTE;
        if minutes <= 0.0 {
            return None;
        }
        let text = to_fixed(minutes, 2);
        let value = text.parse().ok()?;
        Some(Self { value, text })
    }

    fn hours(&self) -> f64 {
        self.value / 60.0
    }
}

/// Fixed-point text with `digits` decimals, ties rounded away from zero.
///
/// Rounds on the exact binary value, so `0.125` gives `"0.13"` while `1.005`
/// (stored just below) gives `"1.00"`.
pub fn to_fixed(x: f64, digits: usize) -> String {
    if !x.is_finite() {
        return x.to_string();
    }

    // Every finite f64 has at most 1074 fractional digits, so this is exact
    let exact = format!("{:.1100}", x.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            int_len += 1;
        }
    }

    let (int_digits, frac_digits) = kept.split_at(int_len);
    let mut text = String::with_capacity(kept.len() + 2);
    if x.is_sign_negative() && x != 0.0 {
        text.push('-');
    }
    text.extend(int_digits.iter().map(|d| *d as char));
    if digits > 0 {
        text.push('.');
        text.extend(frac_digits.iter().map(|d| *d as char));
    }
    text
}

pub fn requirement_height(minutes: f64) -> i64 {
    ((minutes / MAX_MINUTES).clamp(0.0, 1.0) * 80.0 + 20.0).round() as i64
}

/// Height of the colored bar; driven by the duration rounded to whole hours.
pub fn actual_height(minutes: f64) -> i64 {
    let hours = (minutes / 60.0).round();
    ((hours / MAX_MINUTES) * 70.0 + 20.0).round() as i64
}

/// Hue between 24 and 96 before any category override.
pub fn base_hue(actual_height: i64) -> f64 {
    (actual_height as f64).clamp(20.0, 80.0) * 1.2
}

pub fn bar_style(minutes: f64, category: &Category) -> BarStyle {
    let requirement_height = requirement_height(minutes);
    let actual_height = actual_height(minutes);
    let hue = match category {
        Category::Sleep => 120.0,
        Category::Awake => 60.0,
        Category::Unknown => 0.0,
        Category::Other(_) => base_hue(actual_height),
    };

    BarStyle {
        requirement_height,
        actual_height,
        hue,
        color: to_color(hue, BAR_SATURATION, BAR_VALUE),
        border_color: to_color(hue, BORDER_SATURATION, BORDER_VALUE),
    }
}

/// Build the timeline item for one record; `None` for non-positive durations.
pub fn build(record: &TimeRecord) -> Option<Segment> {
    let minutes = Minutes::from_nanos(record.total_nanos)?;
    let style = bar_style(minutes.value, &record.category);
    let hours = minutes.hours();

    let (requirement_title, actual_title, actual_text) = match &record.category {
        Category::Sleep => (
            format!("Sleep time: {} hours", hours),
            format!("Actual: {} hours", hours),
            format!("{} hours ", to_fixed(hours, 1)),
        ),
        Category::Awake => (
            format!("awake time: {} minutes minutes", minutes.text),
            format!("Actual: {} hours", hours),
            format!("{} minutes ", to_fixed(minutes.value, 1)),
        ),
        Category::Unknown => (
            format!("Sleep time: {} uncertain hours hours", hours),
            format!("Actual: {} uncertain hours", hours),
            format!("{} uncertain hours ", to_fixed(hours, 1)),
        ),
        Category::Other(_) => (
            format!("Minimum requirement: {} minutes", minutes.text),
            format!("Actual: {} hours", hours),
            minutes.text.clone(),
        ),
    };

    let requirement = format!(
        "<div class=\"requirement\" style=\"height:{}px;\" title=\"{}\"></div>",
        style.requirement_height, requirement_title
    );
    let actual = format!(
        "<div class=\"bar\" style=\"height:{}px;background-color: {};border-top: 2px solid {};\"  title=\"{}\">{}</div>",
        style.actual_height, style.color, style.border_color, actual_title, actual_text
    );

    Some(Segment {
        group: SEGMENT_GROUP.to_string(),
        start: record.start,
        end: record.end,
        content: requirement + &actual,
    })
}

/// Build items for every record, in order, skipping dropped ones.
pub fn build_all(records: &[TimeRecord]) -> Vec<Segment> {
    records.iter().filter_map(build).collect()
}
