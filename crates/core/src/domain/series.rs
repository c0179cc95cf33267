use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// Closing prices for one symbol over the queried window, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first_close(&self) -> Option<f64> {
        self.points.first().map(|p| p.close)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }
}

/// Result of a single best-effort fetch for one asset.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Series(PriceSeries),
    Empty,
    Failed(String),
}

impl FetchOutcome {
    pub fn from_result(res: anyhow::Result<PriceSeries>) -> Self {
        match res {
            Ok(series) if series.is_empty() => Self::Empty,
            Ok(series) => Self::Series(series),
            Err(err) => Self::Failed(format!("{err:#}")),
        }
    }

    pub fn series(&self) -> Option<&PriceSeries> {
        match self {
            Self::Series(s) => Some(s),
            Self::Empty | Self::Failed(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Series(_) => "series",
            Self::Empty => "empty",
            Self::Failed(_) => "failed",
        }
    }
}
