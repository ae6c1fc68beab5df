//! Common test infrastructure
//!
//! Spawns a local axum server that stands in for the Last.fm API and both
//! CORS relays, so the fetcher can be exercised over real HTTP.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{FakeLastFm, Behavior};
//!
//! #[tokio::test]
//! async fn test_direct() {
//!     let server = FakeLastFm::spawn(Behavior::track("Title"), Behavior::Status(500), Behavior::Status(500)).await;
//!     let fetcher = server.fetcher();
//! }
//! ```

mod server;

pub use server::{recent_tracks_body, Behavior, FakeLastFm};
