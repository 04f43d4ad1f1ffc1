use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_PRICE_PRECISION: usize = 6;

/// Presentation settings, read from an optional JSON file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MarketConfig {
    /// Fractional digits printed for prices
    #[serde(default = "default_price_precision")]
    pub price_precision: usize,

    /// Style error lines when stdout is a terminal
    #[serde(default = "default_color")]
    pub color: bool,

    /// Print the order log count and total after ordering
    #[serde(default)]
    pub summary: bool,
}

fn default_price_precision() -> usize {
    DEFAULT_PRICE_PRECISION
}

fn default_color() -> bool {
    true
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            price_precision: DEFAULT_PRICE_PRECISION,
            color: true,
            summary: false,
        }
    }
}

impl MarketConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: MarketConfig = serde_json::from_str(&content)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn format_price(&self, price: f64) -> String {
        format!("{:.*}", self.price_precision, price)
    }
}
