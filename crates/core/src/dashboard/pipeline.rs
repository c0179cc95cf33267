use crate::analysis::rank::{RankedReturn, RankedReturns};
use crate::analysis::returns::compute_return;
use crate::domain::asset::{Asset, AssetList};
use crate::domain::series::FetchOutcome;
use crate::ingest::provider::MarketDataProvider;
use crate::time::window::FetchWindow;

#[derive(Debug, Clone)]
pub struct AssetReport {
    pub asset: Asset,
    pub outcome: FetchOutcome,
    pub value: Option<f64>,
}

/// Everything one render pass knows. Built fresh per request.
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub window: FetchWindow,
    pub assets: Vec<AssetReport>,
    pub ranked: RankedReturns,
}

impl DashboardReport {
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }
}

/// Fetches every asset one at a time, in mapping order, then ranks the
/// assets that produced a return. Fetch failures never abort the pass.
pub async fn run_pipeline(
    provider: &dyn MarketDataProvider,
    assets: &AssetList,
    window: FetchWindow,
) -> DashboardReport {
    let mut reports = Vec::with_capacity(assets.len());

    for asset in assets.iter() {
        let res = provider.fetch_daily_series(&asset.symbol, window).await;
        let outcome = FetchOutcome::from_result(res);

        let value = match &outcome {
            FetchOutcome::Series(series) => {
                let value = compute_return(series);
                if value.is_none() {
                    tracing::warn!(
                        symbol = %asset.symbol,
                        points = series.len(),
                        "return not computable (zero or non-finite start price); skipping asset"
                    );
                }
                value
            }
            FetchOutcome::Empty => {
                tracing::info!(symbol = %asset.symbol, window_start = %window.start, "no price data in window");
                None
            }
            FetchOutcome::Failed(err) => {
                tracing::warn!(
                    symbol = %asset.symbol,
                    provider = provider.provider_name(),
                    error = %err,
                    "market data fetch failed; skipping asset"
                );
                None
            }
        };

        reports.push(AssetReport {
            asset: asset.clone(),
            outcome,
            value,
        });
    }

    let ranked = RankedReturns::rank(reports.iter().filter_map(|r| {
        r.value.map(|value| RankedReturn {
            name: r.asset.name.clone(),
            symbol: r.asset.symbol.clone(),
            value,
        })
    }));

    tracing::info!(
        assets = reports.len(),
        ranked = ranked.len(),
        best = ranked.best().map(|b| b.name.as_str()).unwrap_or("-"),
        "dashboard pipeline finished"
    );

    DashboardReport {
        window,
        assets: reports,
        ranked,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::series::{PricePoint, PriceSeries};
    use anyhow::Result;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory provider keyed by symbol. Unknown symbols fail.
    pub(crate) struct FakeProvider {
        pub closes: HashMap<String, Vec<f64>>,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        pub(crate) fn new(entries: &[(&str, &[f64])]) -> Self {
            Self {
                closes: entries
                    .iter()
                    .map(|(s, c)| (s.to_string(), c.to_vec()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl MarketDataProvider for FakeProvider {
        fn provider_name(&self) -> &'static str {
            "fake"
        }

        async fn fetch_daily_series(
            &self,
            symbol: &str,
            _window: FetchWindow,
        ) -> Result<PriceSeries> {
            self.calls.lock().unwrap().push(symbol.to_string());
            let closes = self
                .closes
                .get(symbol)
                .ok_or_else(|| anyhow::anyhow!("unknown symbol {symbol}"))?;
            let t0 = Utc.with_ymd_and_hms(2026, 10, 13, 0, 0, 0).unwrap();
            let points = closes
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint {
                    timestamp: t0 + Duration::hours(i as i64),
                    close,
                })
                .collect();
            Ok(PriceSeries::new(symbol, points))
        }
    }

    pub(crate) fn window() -> FetchWindow {
        FetchWindow::ending_on(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn ranks_assets_with_data_and_keeps_order_of_calls() {
        let provider = FakeProvider::new(&[
            ("BTC-USD", &[100.0, 103.0]),
            ("ETH-USD", &[2000.0, 1980.0]),
            ("ADA-USD", &[0.5, 0.5]),
        ]);

        let report = run_pipeline(&provider, &AssetList::default(), window()).await;

        assert_eq!(
            *provider.calls.lock().unwrap(),
            ["BTC-USD", "ETH-USD", "ADA-USD"]
        );
        assert_eq!(report.ranked.len(), 3);
        let best = report.ranked.best().unwrap();
        assert_eq!(best.name, "Bitcoin (BTC)");
        assert!((best.value - 0.03).abs() < 1e-12);
        for w in report.ranked.entries().windows(2) {
            assert!(w[0].value >= w[1].value);
        }
    }

    #[tokio::test]
    async fn failed_empty_and_zero_start_assets_are_omitted() {
        let provider = FakeProvider::new(&[("BTC-USD", &[]), ("ADA-USD", &[0.0, 0.4])]);

        let report = run_pipeline(&provider, &AssetList::default(), window()).await;

        assert_eq!(report.asset_count(), 3);
        assert!(report.ranked.is_empty());
        assert_eq!(report.assets[0].outcome, FetchOutcome::Empty);
        assert!(matches!(report.assets[1].outcome, FetchOutcome::Failed(_)));
        assert!(report.assets[2].outcome.series().is_some());
        assert_eq!(report.assets[2].value, None);
    }

    #[tokio::test]
    async fn empty_asset_list_makes_no_calls() {
        let provider = FakeProvider::new(&[]);
        let report = run_pipeline(&provider, &AssetList::empty(), window()).await;
        assert!(provider.calls.lock().unwrap().is_empty());
        assert_eq!(report.asset_count(), 0);
    }
}
