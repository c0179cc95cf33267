use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pirescoin_core::dashboard::pipeline::run_pipeline;
use pirescoin_core::dashboard::view::DashboardSnapshot;
use pirescoin_core::ingest::provider::{MarketDataProvider, YahooChartProvider};
use pirescoin_core::render::text::render_report;
use pirescoin_core::time::window::resolve_window;

#[derive(Debug, Parser)]
#[command(name = "pirescoin")]
struct Args {
    /// Treat this date (YYYY-MM-DD) as "today". Defaults to the local date.
    #[arg(long)]
    date: Option<String>,

    /// Print the strategic entry recommendation for the best asset.
    #[arg(long)]
    suggest: bool,

    /// Emit the dashboard view as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = pirescoin_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if let Err(err) = run(&settings, &args).await {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "dashboard pass failed");
        return Err(err);
    }

    Ok(())
}

async fn run(settings: &pirescoin_core::config::Settings, args: &Args) -> anyhow::Result<()> {
    let window = resolve_window(args.date.as_deref())?;
    let assets = settings.asset_list()?;
    let provider = YahooChartProvider::from_settings(settings)?;

    tracing::info!(
        start = %window.start,
        end = %window.end,
        assets = assets.len(),
        provider = provider.provider_name(),
        "running dashboard pass"
    );

    let report = run_pipeline(&provider, &assets, window).await;
    let snapshot = DashboardSnapshot::new(&report, args.suggest);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_report(&snapshot.view));
    }

    Ok(())
}

fn init_sentry(settings: &pirescoin_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::parse_from(["pirescoin", "--date", "2026-10-14", "--suggest"]);
        assert_eq!(args.date.as_deref(), Some("2026-10-14"));
        assert!(args.suggest);
        assert!(!args.json);
    }

    #[test]
    fn defaults_to_local_date_without_suggestion() {
        let args = Args::parse_from(["pirescoin"]);
        assert!(args.date.is_none());
        assert!(!args.suggest);
    }
}
