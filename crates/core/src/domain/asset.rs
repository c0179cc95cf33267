use anyhow::ensure;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub symbol: String,
}

impl Asset {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Display name -> market symbol, kept in mapping order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetList {
    assets: Vec<Asset>,
}

impl Default for AssetList {
    fn default() -> Self {
        Self {
            assets: vec![
                Asset::new("Bitcoin (BTC)", "BTC-USD"),
                Asset::new("Ethereum (ETH)", "ETH-USD"),
                Asset::new("Cardano (ADA)", "ADA-USD"),
            ],
        }
    }
}

impl AssetList {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    pub fn empty() -> Self {
        Self { assets: Vec::new() }
    }

    /// Parses `Name=SYMBOL` pairs separated by `;`.
    pub fn parse(spec: &str) -> anyhow::Result<Self> {
        let mut assets: Vec<Asset> = Vec::new();
        for part in spec.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (name, symbol) = part
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("expected Name=SYMBOL, got {part:?}"))?;
            let name = name.trim();
            let symbol = symbol.trim();
            ensure!(!name.is_empty(), "asset name must be non-empty in {part:?}");
            ensure!(!symbol.is_empty(), "asset symbol must be non-empty in {part:?}");
            ensure!(
                !assets.iter().any(|a| a.name == name),
                "duplicate asset name: {name}"
            );

            assets.push(Asset::new(name, symbol));
        }

        Ok(Self { assets })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
