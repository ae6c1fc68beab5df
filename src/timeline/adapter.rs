use serde::Serialize;

use super::segment::Segment;

/// Zoom applied right after drawing; immediately superseded by `VIEW_ZOOM`.
pub const INITIAL_ZOOM: f64 = 100.0;
pub const VIEW_ZOOM: f64 = 31.0;

/// Display options handed to the timeline library.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineOptions {
    pub width: String,
    pub height: String,
    pub style: String,
    pub stack_events: bool,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "300px".to_string(),
            style: "box".to_string(),
            stack_events: false,
        }
    }
}

/// The drawing library the segments are handed to.
pub trait TimelineBackend {
    fn create(&mut self, container: &str, options: &TimelineOptions);
    fn draw(&mut self, segments: &[Segment]);
    fn zoom(&mut self, level: f64);
}

/// A drawn timeline, owned by whoever called `present`.
pub struct TimelineHandle<B: TimelineBackend> {
    backend: B,
    container: String,
    segment_count: usize,
}

impl<B: TimelineBackend> TimelineHandle<B> {
    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

/// Create the view over `container`, draw every segment at once and set the zoom.
pub fn present<B: TimelineBackend>(
    mut backend: B,
    segments: &[Segment],
    container: &str,
) -> TimelineHandle<B> {
    backend.create(container, &TimelineOptions::default());
    backend.draw(segments);
    backend.zoom(INITIAL_ZOOM);
    backend.zoom(VIEW_ZOOM);

    TimelineHandle {
        backend,
        container: container.to_string(),
        segment_count: segments.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingBackend {
        calls: Vec<String>,
    }

    impl TimelineBackend for RecordingBackend {
        fn create(&mut self, container: &str, options: &TimelineOptions) {
            self.calls
                .push(format!("create {} {}", container, options.height));
        }

        fn draw(&mut self, segments: &[Segment]) {
            self.calls.push(format!("draw {}", segments.len()));
        }

        fn zoom(&mut self, level: f64) {
            self.calls.push(format!("zoom {}", level));
        }
    }

    #[test]
    fn test_present_call_order() {
        let handle = present(RecordingBackend::default(), &[], "mytimeline");

        assert_eq!(handle.container(), "mytimeline");
        assert_eq!(handle.segment_count(), 0);
        assert_eq!(
            handle.into_backend().calls,
            vec!["create mytimeline 300px", "draw 0", "zoom 100", "zoom 31"]
        );
    }

    #[test]
    fn test_options_serialize_for_library() {
        let json = serde_json::to_value(TimelineOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "width": "100%",
                "height": "300px",
                "style": "box",
                "stackEvents": false
            })
        );
    }
}
