//! Fetch → render cycles: one on load, then one per interval.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::renderer::render;
use super::targets::WidgetTargets;
use crate::lastfm::TrackFetcher;

/// Called with the slots after every successful render.
pub type RenderHook = Arc<dyn Fn(&WidgetTargets) + Send + Sync>;

/// First cycle: show the loading indicator, then fetch and render.
pub async fn load_initial(
    fetcher: &TrackFetcher,
    targets: &Mutex<WidgetTargets>,
    on_render: &RenderHook,
) {
    targets.lock().await.show_loading();
    refresh(fetcher, targets, on_render).await;
}

/// One fetch → render cycle. Render errors are already logged by `render`.
pub async fn refresh(
    fetcher: &TrackFetcher,
    targets: &Mutex<WidgetTargets>,
    on_render: &RenderHook,
) {
    let track = fetcher.fetch().await;
    let mut targets = targets.lock().await;
    if render(track.as_ref(), &mut targets).is_ok() {
        on_render(&*targets);
    }
}

/// Re-run the cycle every `interval`, forever.
///
/// Each tick runs in its own task and is not awaited by the next one, so a
/// slow cycle may overlap the following tick.
pub async fn run_refresh_loop(
    fetcher: Arc<TrackFetcher>,
    targets: Arc<Mutex<WidgetTargets>>,
    interval: Duration,
    on_render: RenderHook,
) {
    info!("Refreshing now-playing widget every {:?}", interval);

    let mut ticker = tokio::time::interval(interval);

    // Skip the first immediate tick, the initial load already ran
    ticker.tick().await;

    loop {
        ticker.tick().await;
        debug!("Now-playing refresh tick");

        let fetcher = fetcher.clone();
        let targets = targets.clone();
        let on_render = on_render.clone();
        tokio::spawn(async move {
            refresh(&fetcher, &targets, &on_render).await;
        });
    }
}
