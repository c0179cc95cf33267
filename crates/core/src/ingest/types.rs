use crate::domain::series::{PricePoint, PriceSeries};
use anyhow::{bail, ensure, Context};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartResponse {
    /// Closing prices keyed by bar timestamp. Bars without a close are dropped.
    pub fn into_series(self, symbol: &str) -> anyhow::Result<PriceSeries> {
        if let Some(err) = self.chart.error {
            bail!("chart error for {symbol}: {} ({})", err.code, err.description);
        }

        let Some(result) = self.chart.result.and_then(|r| r.into_iter().next()) else {
            return Ok(PriceSeries::new(symbol, Vec::new()));
        };

        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();

        if result.timestamp.is_empty() {
            return Ok(PriceSeries::new(symbol, Vec::new()));
        }

        ensure!(
            closes.len() == result.timestamp.len(),
            "chart for {symbol} has {} timestamps but {} closes",
            result.timestamp.len(),
            closes.len()
        );

        let mut points = Vec::with_capacity(closes.len());
        for (ts, close) in result.timestamp.into_iter().zip(closes) {
            let Some(close) = close else {
                continue;
            };
            let timestamp = DateTime::from_timestamp(ts, 0)
                .with_context(|| format!("timestamp out of range: {ts}"))?;
            points.push(PricePoint { timestamp, close });
        }

        Ok(PriceSeries::new(symbol, points))
    }
}
