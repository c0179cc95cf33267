pub mod asset;
pub mod series;
