pub mod analysis;
pub mod dashboard;
pub mod domain;
pub mod ingest;
pub mod render;
pub mod strategy;
pub mod time;

pub mod config {
    use crate::domain::asset::AssetList;
    use anyhow::Context;

    const DEFAULT_LOGO_PATH: &str = "logo.png";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        pub market_data_base_url: Option<String>,
        pub market_data_interval: Option<String>,
        pub market_data_timeout_secs: Option<u64>,
        pub assets: Option<String>,
        pub logo_path: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
                market_data_base_url: std::env::var("MARKET_DATA_BASE_URL").ok(),
                market_data_interval: std::env::var("MARKET_DATA_INTERVAL").ok(),
                market_data_timeout_secs: std::env::var("MARKET_DATA_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok()),
                assets: std::env::var("PIRES_ASSETS")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
                logo_path: std::env::var("PIRES_LOGO_PATH")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
            })
        }

        /// Configured asset mapping, or the built-in BTC/ETH/ADA list.
        pub fn asset_list(&self) -> anyhow::Result<AssetList> {
            match self.assets.as_deref() {
                Some(spec) => AssetList::parse(spec).context("PIRES_ASSETS is invalid"),
                None => Ok(AssetList::default()),
            }
        }

        pub fn logo_path(&self) -> &str {
            self.logo_path.as_deref().unwrap_or(DEFAULT_LOGO_PATH)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn empty() -> Settings {
            Settings {
                sentry_dsn: None,
                market_data_base_url: None,
                market_data_interval: None,
                market_data_timeout_secs: None,
                assets: None,
                logo_path: None,
            }
        }

        #[test]
        fn falls_back_to_default_assets_and_logo() {
            let s = empty();
            assert_eq!(s.asset_list().unwrap().len(), 3);
            assert_eq!(s.logo_path(), "logo.png");
        }

        #[test]
        fn rejects_malformed_asset_override() {
            let s = Settings {
                assets: Some("Bitcoin BTC-USD".to_string()),
                ..empty()
            };
            assert!(s.asset_list().is_err());
        }
    }
}
