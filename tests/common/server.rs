//! Fake Last.fm server lifecycle management

use axum::extract::{Query, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use site_widgets::config::LastFmSettings;
use site_widgets::lastfm::TrackSource;
use site_widgets::TrackFetcher;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TEST_USER: &str = "larrasket";
pub const TEST_API_KEY: &str = "test-key";

/// How one fake endpoint answers.
#[derive(Clone, Debug)]
pub enum Behavior {
    Status(u16),
    Json(Value),
}

impl Behavior {
    pub fn track(title: &str) -> Self {
        Behavior::Json(recent_tracks_body(title))
    }
}

pub fn recent_tracks_body(title: &str) -> Value {
    json!({
        "recenttracks": {
            "track": [{
                "artist": { "mbid": "", "#text": "Portishead" },
                "name": title,
                "album": { "mbid": "", "#text": "Dummy" },
                "image": [
                    { "size": "small", "#text": "https://img/s.jpg" },
                    { "size": "medium", "#text": "https://img/m.jpg" },
                    { "size": "large", "#text": "https://img/l.jpg" }
                ],
                "url": "https://www.last.fm/music/Portishead",
                "@attr": { "nowplaying": "true" }
            }],
            "@attr": { "user": TEST_USER }
        }
    })
}

struct FakeState {
    direct: Behavior,
    allorigins: Behavior,
    corsproxy: Behavior,
    direct_hits: AtomicUsize,
    allorigins_hits: AtomicUsize,
    corsproxy_hits: AtomicUsize,
    relayed_targets: Mutex<Vec<String>>,
}

/// Fake API + relays on a random port. The server task dies with the runtime.
pub struct FakeLastFm {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeLastFm {
    pub async fn spawn(direct: Behavior, allorigins: Behavior, corsproxy: Behavior) -> Self {
        let state = Arc::new(FakeState {
            direct,
            allorigins,
            corsproxy,
            direct_hits: AtomicUsize::new(0),
            allorigins_hits: AtomicUsize::new(0),
            corsproxy_hits: AtomicUsize::new(0),
            relayed_targets: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/2.0/", get(direct_handler))
            .route("/allorigins/get", get(allorigins_handler))
            .route("/corsproxy/", get(corsproxy_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn settings(&self) -> LastFmSettings {
        LastFmSettings {
            api_base: format!("{}/2.0/", self.base_url),
            user: TEST_USER.to_string(),
            api_key: TEST_API_KEY.to_string(),
            request_timeout_sec: Some(5),
            sources: vec![
                TrackSource::Direct,
                TrackSource::Proxy {
                    prefix: format!("{}/allorigins/get?url=", self.base_url),
                    encode_target: true,
                    unwrap_contents: true,
                },
                TrackSource::Proxy {
                    prefix: format!("{}/corsproxy/?", self.base_url),
                    encode_target: false,
                    unwrap_contents: false,
                },
            ],
        }
    }

    pub fn fetcher(&self) -> TrackFetcher {
        TrackFetcher::new(&self.settings()).unwrap()
    }

    pub fn direct_hits(&self) -> usize {
        self.state.direct_hits.load(Ordering::SeqCst)
    }

    pub fn allorigins_hits(&self) -> usize {
        self.state.allorigins_hits.load(Ordering::SeqCst)
    }

    pub fn corsproxy_hits(&self) -> usize {
        self.state.corsproxy_hits.load(Ordering::SeqCst)
    }

    /// Target URLs the relays were asked to fetch, in request order.
    pub fn relayed_targets(&self) -> Vec<String> {
        self.state.relayed_targets.lock().unwrap().clone()
    }
}

fn respond(behavior: &Behavior) -> Response {
    match behavior {
        Behavior::Status(code) => (
            StatusCode::from_u16(*code).unwrap(),
            "fake upstream error",
        )
            .into_response(),
        Behavior::Json(body) => Json(body.clone()).into_response(),
    }
}

async fn direct_handler(State(state): State<Arc<FakeState>>) -> Response {
    state.direct_hits.fetch_add(1, Ordering::SeqCst);
    respond(&state.direct)
}

async fn allorigins_handler(
    State(state): State<Arc<FakeState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.allorigins_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(target) = params.get("url") {
        state.relayed_targets.lock().unwrap().push(target.clone());
    }
    match &state.allorigins {
        Behavior::Json(body) => Json(json!({
            "contents": body.to_string(),
            "status": { "http_code": 200 }
        }))
        .into_response(),
        other => respond(other),
    }
}

async fn corsproxy_handler(
    State(state): State<Arc<FakeState>>,
    RawQuery(query): RawQuery,
) -> Response {
    state.corsproxy_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(target) = query {
        state.relayed_targets.lock().unwrap().push(target);
    }
    respond(&state.corsproxy)
}
