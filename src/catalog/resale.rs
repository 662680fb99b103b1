//! Historical sale values by brand, model and condition, plus the per-brand price tiers
//! used when a model is not listed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::condition::ConditionBucket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Stable,
    Down,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Self::Up, Self::Stable, Self::Down];

    /// Draw weights for items without sale history.
    pub const FALLBACK_WEIGHTS: [f64; 3] = [0.3, 0.5, 0.2];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Stable => "→",
            Self::Down => "↓",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Stable => "stable",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub value: u64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionPrices {
    pub excellent: SaleRecord,
    #[serde(rename = "very good")]
    pub very_good: SaleRecord,
    pub good: SaleRecord,
}

impl ConditionPrices {
    pub fn get(&self, bucket: ConditionBucket) -> SaleRecord {
        match bucket {
            ConditionBucket::Excellent => self.excellent,
            ConditionBucket::VeryGood => self.very_good,
            ConditionBucket::Good => self.good,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResaleModel {
    pub name: String,
    #[serde(flatten)]
    pub prices: ConditionPrices,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResaleBrand {
    pub brand: String,
    pub models: Vec<ResaleModel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    pub base: u64,
    pub range: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandTier {
    pub brand: String,
    #[serde(flatten)]
    pub tier: PriceTier,
}

fn default_tier() -> PriceTier {
    PriceTier {
        base: 300,
        range: 700,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResaleCatalog {
    pub brands: Vec<ResaleBrand>,
    #[serde(default)]
    pub fallback_tiers: Vec<BrandTier>,
    #[serde(default = "default_tier")]
    pub default_tier: PriceTier,
}

impl Default for ResaleCatalog {
    fn default() -> Self {
        Self {
            brands: Vec::new(),
            fallback_tiers: Vec::new(),
            default_tier: default_tier(),
        }
    }
}

impl ResaleCatalog {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let mut cat: ResaleCatalog = serde_json::from_str(raw)?;
        for b in &mut cat.brands {
            b.brand = b.brand.trim().to_lowercase();
            for m in &mut b.models {
                m.name = m.name.trim().to_lowercase();
            }
        }
        for t in &mut cat.fallback_tiers {
            t.brand = t.brand.trim().to_lowercase();
        }
        Ok(cat)
    }

    pub fn brand(&self, brand: &str) -> Option<&ResaleBrand> {
        self.brands.iter().find(|b| b.brand == brand)
    }

    /// Price tier for a brand, or the default tier for unlisted brands.
    pub fn tier_for(&self, brand: &str) -> PriceTier {
        self.fallback_tiers
            .iter()
            .find(|t| t.brand == brand)
            .map(|t| t.tier)
            .unwrap_or(self.default_tier)
    }
}
