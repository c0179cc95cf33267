use serde::{Deserialize, Serialize};

/// Best returns strictly above this are treated as a positive trend.
pub const POSITIVE_THRESHOLD: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Success,
    Info,
    Warning,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Positive,
    SlightGain,
    Declining,
}

impl Band {
    pub fn classify(r: f64) -> Self {
        if r > POSITIVE_THRESHOLD {
            Self::Positive
        } else if r > 0.0 {
            Self::SlightGain
        } else {
            Self::Declining
        }
    }

    pub fn level(&self) -> Level {
        match self {
            Self::Positive => Level::Success,
            Self::SlightGain => Level::Info,
            Self::Declining => Level::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub asset: String,
    pub value: f64,
    pub band: Band,
    pub level: Level,
    pub message: String,
}

impl Recommendation {
    pub fn for_return(asset: &str, value: f64) -> Self {
        let band = Band::classify(value);
        let message = match band {
            Band::Positive => {
                format!("The trend for {asset} is positive. Cautious entry recommended.")
            }
            Band::SlightGain => {
                format!("{asset} shows a slight gain. Await trend confirmation.")
            }
            Band::Declining => format!(
                "{asset} is declining over the last 24h. Entry not recommended right now."
            ),
        };

        Self {
            asset: asset.to_string(),
            value,
            band,
            level: band.level(),
            message,
        }
    }
}
