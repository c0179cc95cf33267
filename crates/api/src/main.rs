use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pirescoin_core::dashboard::pipeline::{run_pipeline, DashboardReport};
use pirescoin_core::dashboard::view::{DashboardSnapshot, DashboardView};
use pirescoin_core::domain::asset::AssetList;
use pirescoin_core::ingest::provider::{MarketDataProvider, YahooChartProvider};
use pirescoin_core::render::html::{render_page, PageOptions};
use pirescoin_core::time::window::FetchWindow;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = pirescoin_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    // The page cannot render without its logo.
    let logo = load_logo(Path::new(settings.logo_path()))?;
    let assets = settings.asset_list()?;
    let provider = YahooChartProvider::from_settings(&settings)?;

    tracing::info!(
        assets = assets.len(),
        provider = provider.provider_name(),
        logo = settings.logo_path(),
        "dashboard configured"
    );

    let state = AppState {
        provider: Arc::new(provider),
        assets,
        logo: Arc::new(logo),
    };

    let app = router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/dashboard", get(dashboard_json))
        .route("/logo.png", get(logo))
        .route("/healthz", get(healthz))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Clone)]
struct AppState {
    provider: Arc<dyn MarketDataProvider>,
    assets: AssetList,
    logo: Arc<Logo>,
}

#[derive(Debug, Clone)]
struct Logo {
    bytes: Bytes,
    content_type: &'static str,
}

#[derive(Debug, Default, Deserialize)]
struct DashboardQuery {
    #[serde(default, deserialize_with = "flag")]
    suggest: bool,
}

/// Lenient query flag: `true`, `1`, `on` and `yes` enable it, anything else is off.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "on" | "yes"
    ))
}

async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, StatusCode> {
    let report = build_report(&state).await?;
    let view = DashboardView::build(&report, query.suggest);
    Ok(Html(render_page(&view, &PageOptions::default())))
}

async fn dashboard_json(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardSnapshot>, StatusCode> {
    let report = build_report(&state).await?;
    Ok(Json(DashboardSnapshot::new(&report, query.suggest)))
}

async fn logo(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, state.logo.content_type)],
        state.logo.bytes.clone(),
    )
}

/// Runs the whole fetch -> compute -> rank pass for this request.
async fn build_report(state: &AppState) -> Result<DashboardReport, StatusCode> {
    let window = FetchWindow::today_local().map_err(|e| {
        sentry_anyhow::capture_anyhow(&e);
        tracing::error!(error = %e, "failed to resolve fetch window");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(run_pipeline(state.provider.as_ref(), &state.assets, window).await)
}

fn load_logo(path: &Path) -> anyhow::Result<Logo> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read logo file {}", path.display()))?;
    anyhow::ensure!(!bytes.is_empty(), "logo file {} is empty", path.display());

    let content_type = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/png",
    };

    Ok(Logo {
        bytes: Bytes::from(bytes),
        content_type,
    })
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
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
