//! Resale value estimate and market trend.
//!
//! Listed models read the catalog value for the condition bucket and jitter it by ±10%.
//! Everything else is priced from the brand's tier (`base + U(0, range)`) scaled by
//! condition, with a weighted random trend.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::catalog::{PriceTier, ResaleCatalog, ResaleModel, Trend};
use crate::condition::ConditionBucket;
use crate::random::RandomSource;
use crate::text::{format_usd, title_case, tokens_longer_than};

const MIN_KEY_TOKEN_LEN: usize = 3;
const VALUE_JITTER: (f64, f64) = (0.9, 1.1);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResaleEstimate {
    pub value: u64,
    /// `$` with thousands separators, e.g. "$5,500".
    pub formatted_value: String,
    pub trend: Trend,
    pub trend_symbol: &'static str,
    pub explanation: String,
    pub condition: ConditionBucket,
    /// Catalog model used for pricing; `None` when the brand tier was used.
    pub matched_model: Option<String>,
    pub market_tips: Vec<String>,
}

impl fmt::Display for ResaleEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Estimated resale value: {} {}",
            self.formatted_value, self.trend_symbol
        )?;
        writeln!(f, "{}", self.explanation)?;
        write!(f, "Market tips:")?;
        for tip in &self.market_tips {
            write!(f, "\n- {tip}")?;
        }
        Ok(())
    }
}

pub struct ResaleEstimator<'a> {
    catalog: &'a ResaleCatalog,
}

impl<'a> ResaleEstimator<'a> {
    pub fn new(catalog: &'a ResaleCatalog) -> Self {
        Self { catalog }
    }

    pub fn estimate(
        &self,
        brand: &str,
        item_name: &str,
        condition: &str,
        rng: &mut dyn RandomSource,
    ) -> ResaleEstimate {
        let brand = brand.trim().to_lowercase();
        let item = item_name.to_lowercase();
        let bucket = ConditionBucket::from_free_text(condition);

        let model = self
            .catalog
            .brand(&brand)
            .and_then(|b| match_model(&b.models, &item));

        let (value, trend, explanation, matched_model) = match model {
            Some(m) => {
                let record = m.prices.get(bucket);
                let value =
                    (record.value as f64 * rng.uniform(VALUE_JITTER.0, VALUE_JITTER.1)) as u64;
                debug!(
                    target: "advisor",
                    model = %m.name, bucket = %bucket, base = record.value, value,
                    "resale: catalog price"
                );
                (
                    value,
                    record.trend,
                    listed_explanation(&brand, &m.name, record.trend),
                    Some(m.name.clone()),
                )
            }
            None => {
                let tier = self.catalog.tier_for(&brand);
                let value = tier_value(tier, bucket, rng);
                let trend = Trend::ALL
                    .get(rng.weighted(&Trend::FALLBACK_WEIGHTS))
                    .copied()
                    .unwrap_or(Trend::Stable);
                debug!(
                    target: "advisor",
                    base = tier.base, range = tier.range, bucket = %bucket, value, trend = %trend,
                    "resale: brand tier estimate"
                );
                (value, trend, tier_explanation(&brand, trend), None)
            }
        };

        ResaleEstimate {
            value,
            formatted_value: format_usd(value),
            trend,
            trend_symbol: trend.symbol(),
            explanation,
            condition: bucket,
            matched_model,
            market_tips: market_tips(trend).iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// First model (catalog order) with a name token longer than 3 chars occurring in `item`.
fn match_model<'m>(models: &'m [ResaleModel], item: &str) -> Option<&'m ResaleModel> {
    models
        .iter()
        .find(|m| tokens_longer_than(&m.name, MIN_KEY_TOKEN_LEN).any(|t| item.contains(&t)))
}

fn tier_value(tier: PriceTier, bucket: ConditionBucket, rng: &mut dyn RandomSource) -> u64 {
    let raw = tier.base as f64 + rng.uniform(0.0, tier.range as f64);
    (raw * bucket.value_multiplier()) as u64
}

fn listed_explanation(brand: &str, model: &str, trend: Trend) -> String {
    let b = title_case(brand);
    match trend {
        Trend::Up => format!(
            "The resale market for {b} {model} is currently trending upward. Limited availability and \
             sustained demand from collectors are driving prices higher than retail in some cases."
        ),
        Trend::Stable => format!(
            "The {b} {model} holds its value well in the resale market. These pieces tend to remain \
             stable investments over time with minimal depreciation."
        ),
        Trend::Down => format!(
            "The market for {b} {model} is currently experiencing a downward trend. This may be due to \
             changing trends or increased availability of similar styles."
        ),
    }
}

fn tier_explanation(brand: &str, trend: Trend) -> String {
    let b = title_case(brand);
    match trend {
        Trend::Up => format!(
            "Based on similar {b} items, this piece appears to be appreciating in value. Limited \
             availability and growing interest in vintage {b} are contributing factors."
        ),
        Trend::Stable => format!(
            "This {b} item seems to maintain consistent value in the secondhand market. The classic \
             design and brand reputation help preserve its worth."
        ),
        Trend::Down => format!(
            "Similar {b} items have been declining slightly in resale value. This may be due to \
             changing fashion trends or increased market availability."
        ),
    }
}

/// Selling advice shown under the estimate.
pub fn market_tips(trend: Trend) -> [&'static str; 3] {
    match trend {
        Trend::Up => [
            "Consider holding this item if you're not in a rush to sell, as its value may continue to increase",
            "Research current listings to set a competitive but premium price point",
            "Highlight the investment potential in your listing description",
        ],
        Trend::Stable => [
            "This item has consistent demand and holds its value well",
            "Focus on highlighting condition and authenticity in your listing",
            "Standard pricing strategies apply; research comparable recent sales",
        ],
        Trend::Down => [
            "Consider selling sooner rather than later if you plan to part with this item",
            "Focus marketing on the item's versatility and timeless qualities rather than investment potential",
            "Competitive pricing is key; research recent comparable sales carefully",
        ],
    }
}
