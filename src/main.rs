use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use site_widgets::config::{AppConfig, CliConfig, FileConfig, DEFAULT_REFRESH_INTERVAL_SEC};
use site_widgets::timeline::{self, HtmlTimeline};
use site_widgets::widget::{self, RenderHook, WidgetTargets};
use site_widgets::TrackFetcher;

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the CLI ones.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetches the most recent Last.fm track and prints the music widget HTML.
    NowPlaying {
        /// Last.fm user whose recent tracks are shown.
        #[clap(long)]
        user: Option<String>,

        /// Last.fm API key.
        #[clap(long)]
        api_key: Option<String>,

        /// Keep running and re-fetch periodically.
        #[clap(long)]
        watch: bool,

        /// Seconds between re-fetches when watching.
        #[clap(long, default_value_t = DEFAULT_REFRESH_INTERVAL_SEC)]
        refresh_interval_sec: u64,
    },

    /// Renders a timeline page from a JSON list of sleep records.
    Timeline {
        /// JSON file with `Start`, `End`, `Total` and `Type` fields per record.
        #[clap(value_parser = parse_path)]
        records: PathBuf,

        /// Where to write the page. Prints to stdout when omitted.
        #[clap(short, long, value_parser = parse_path)]
        output: Option<PathBuf>,

        /// Id of the element the timeline is drawn into.
        #[clap(long)]
        container: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    match cli_args.command {
        Command::NowPlaying {
            user,
            api_key,
            watch,
            refresh_interval_sec,
        } => {
            let cli = CliConfig {
                user,
                api_key,
                refresh_interval_sec,
                ..Default::default()
            };
            let config = AppConfig::resolve(&cli, file_config)?;
            run_now_playing(config, watch).await
        }
        Command::Timeline {
            records,
            output,
            container,
        } => {
            let cli = CliConfig {
                timeline_container: container,
                ..Default::default()
            };
            let config = AppConfig::resolve(&cli, file_config)?;
            run_timeline(config, &records, output.as_deref())
        }
    }
}

async fn run_now_playing(config: AppConfig, watch: bool) -> Result<()> {
    let lastfm = config
        .lastfm
        .context("api_key must be specified via --api-key or in config file")?;

    info!(
        "Fetching recent tracks for {} ({} sources)",
        lastfm.user,
        lastfm.sources.len()
    );
    let fetcher = Arc::new(TrackFetcher::new(&lastfm)?);
    let targets = Arc::new(Mutex::new(WidgetTargets::standard()));
    let on_render: RenderHook = Arc::new(|targets: &WidgetTargets| {
        println!("{}", targets.to_html());
    });

    widget::load_initial(&fetcher, &targets, &on_render).await;

    if !watch {
        return Ok(());
    }

    let interval = Duration::from_secs(config.refresh_interval_sec);
    tokio::select! {
        _ = widget::run_refresh_loop(fetcher, targets, interval, on_render) => Ok(()),
        result = tokio::signal::ctrl_c() => {
            info!("Stopping now-playing refresh");
            result.context("Failed to listen for ctrl-c")
        }
    }
}

fn run_timeline(config: AppConfig, records: &Path, output: Option<&Path>) -> Result<()> {
    let records = timeline::load_records(records)?;
    let segments = timeline::build_all(&records);
    info!(
        "Built {} timeline segments from {} records",
        segments.len(),
        records.len()
    );

    let handle = timeline::present(
        HtmlTimeline::new(config.timeline.assets.clone()),
        &segments,
        &config.timeline.container,
    );
    let page = handle.backend().render_page()?;

    match output {
        Some(path) => {
            std::fs::write(path, page)
                .with_context(|| format!("Failed to write timeline page: {:?}", path))?;
            info!("Timeline written to {:?}", path);
        }
        None => print!("{}", page),
    }

    Ok(())
}
