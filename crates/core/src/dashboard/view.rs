use crate::analysis::rank::{RankedReturn, RankedReturns};
use crate::analysis::returns::format_percent;
use crate::dashboard::pipeline::DashboardReport;
use crate::strategy::recommendation::Recommendation;
use crate::time::window::FetchWindow;
use serde::{Deserialize, Serialize};

pub const NO_ASSETS_MESSAGE: &str = "No cryptocurrency had data available in the last 24h.";
pub const NO_RETURNS_MESSAGE: &str = "No returns available. The data could not be loaded.";
pub const DETAILS_PLACEHOLDER: &str = "Chart simulation, risk and future trends (coming soon).";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardView {
    NoAssets {
        message: String,
    },
    NoReturns {
        message: String,
    },
    Ranked {
        best: RankedReturn,
        banner: String,
        ranked: RankedReturns,
        recommendation: Option<Recommendation>,
    },
}

impl DashboardView {
    /// `suggest` is the "suggest strategic entry" action for this request.
    pub fn build(report: &DashboardReport, suggest: bool) -> Self {
        if report.asset_count() == 0 {
            return Self::NoAssets {
                message: NO_ASSETS_MESSAGE.to_string(),
            };
        }

        let Some(best) = report.ranked.best().cloned() else {
            return Self::NoReturns {
                message: NO_RETURNS_MESSAGE.to_string(),
            };
        };

        let banner = format!(
            "Best crypto today: {} with a return of {}",
            best.name,
            format_percent(best.value)
        );
        let recommendation = suggest.then(|| Recommendation::for_return(&best.name, best.value));

        Self::Ranked {
            best,
            banner,
            ranked: report.ranked.clone(),
            recommendation,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::NoAssets { message } | Self::NoReturns { message } => Some(message),
            Self::Ranked { .. } => None,
        }
    }

    pub fn best(&self) -> Option<&RankedReturn> {
        match self {
            Self::Ranked { best, .. } => Some(best),
            Self::NoAssets { .. } | Self::NoReturns { .. } => None,
        }
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Self::Ranked { recommendation, .. } => recommendation.as_ref(),
            Self::NoAssets { .. } | Self::NoReturns { .. } => None,
        }
    }
}

/// JSON shape served by the API and printed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub window: FetchWindow,
    pub assets_requested: usize,
    pub view: DashboardView,
}

impl DashboardSnapshot {
    pub fn new(report: &DashboardReport, suggest: bool) -> Self {
        Self {
            window: report.window,
            assets_requested: report.asset_count(),
            view: DashboardView::build(report, suggest),
        }
    }
}
