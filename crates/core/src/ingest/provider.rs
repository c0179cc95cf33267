use crate::config::Settings;
use crate::domain::series::PriceSeries;
use crate::ingest::types::ChartResponse;
use crate::time::window::FetchWindow;
use anyhow::{Context, Result};
use chrono::Local;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_INTERVAL: &str = "1d";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    async fn fetch_daily_series(&self, symbol: &str, window: FetchWindow) -> Result<PriceSeries>;
}

#[derive(Debug, Clone)]
pub struct YahooChartProvider {
    http: reqwest::Client,
    base_url: String,
    interval: String,
    timeout: Duration,
}

impl YahooChartProvider {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings
            .market_data_base_url
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let interval = settings
            .market_data_interval
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INTERVAL.to_string());

        let timeout = Duration::from_secs(
            settings
                .market_data_timeout_secs
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        );

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build market data http client")?;

        Ok(Self {
            http,
            base_url,
            interval,
            timeout,
        })
    }

    fn url(&self, symbol: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}",
            self.base_url.trim_end_matches('/'),
            symbol
        )
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooChartProvider {
    fn provider_name(&self) -> &'static str {
        "yahoo_chart"
    }

    async fn fetch_daily_series(&self, symbol: &str, window: FetchWindow) -> Result<PriceSeries> {
        let (period1, period2) = window.unix_bounds(&Local)?;

        let res = self
            .http
            .get(self.url(symbol))
            .headers(Self::headers())
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", self.interval.clone()),
            ])
            .send()
            .await
            .with_context(|| format!("market data request failed for {symbol}"))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .context("failed to read market data response")?;

        let parsed = serde_json::from_str::<ChartResponse>(&text);
        if !status.is_success() {
            // Unknown symbols come back as 404 with a chart.error body.
            let detail = parsed
                .ok()
                .and_then(|body| body.chart.error)
                .map(|e| format!("{}: {}", e.code, e.description))
                .unwrap_or(text);
            anyhow::bail!("market data HTTP {status} for {symbol}: {detail}");
        }

        let parsed = parsed
            .with_context(|| format!("market data response is not a chart payload: {text}"))?;
        parsed.into_series(symbol)
    }
}
