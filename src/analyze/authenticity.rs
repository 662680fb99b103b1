//! Authenticity confidence from brand/model feature matching.
//!
//! Title tokens (longer than 2 chars) pick the first catalog model of the brand whose
//! name contains one of them. The share of that model's key features mentioned in the
//! description sets the base confidence, which is then jittered. Anything the catalog
//! does not know lands in a generic medium-confidence answer.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::catalog::{BrandReference, ModelReference, ReferenceCatalog};
use crate::condition::ConditionBucket;
use crate::random::RandomSource;
use crate::text::{contains_ci, percent, title_case, tokens_longer_than};

const MIN_TITLE_TOKEN_LEN: usize = 2;

pub const HIGH_THRESHOLD: f64 = 0.7;
pub const MEDIUM_THRESHOLD: f64 = 0.4;

const BASE_CONFIDENCE: f64 = 0.5;
const MAX_BASE_CONFIDENCE: f64 = 0.95;
const JITTER: f64 = 0.1;
const MIN_CONFIDENCE: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 0.99;
const NO_FEATURES_RANGE: (f64, f64) = (0.4, 0.6);
const GENERIC_RANGE: (f64, f64) = (0.3, 0.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > HIGH_THRESHOLD {
            Self::High
        } else if confidence > MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticityReport {
    pub tier: ConfidenceTier,
    pub confidence: f64,
    /// Whole-percent rendering of `confidence`, e.g. "87%".
    pub confidence_display: String,
    pub rationale: String,
    /// Catalog model the title resolved to; `None` on the generic path.
    pub matched_model: Option<String>,
    pub features_matched: usize,
    pub features_total: usize,
    /// Echoed for the UI; it does not influence the score.
    pub condition: ConditionBucket,
}

impl AuthenticityReport {
    pub fn is_generic(&self) -> bool {
        self.matched_model.is_none()
    }
}

impl fmt::Display for AuthenticityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Authenticity confidence: {} ({})",
            self.confidence_display,
            self.tier.as_str()
        )?;
        write!(f, "{}", self.rationale)
    }
}

pub struct AuthenticityScorer<'a> {
    catalog: &'a ReferenceCatalog,
}

impl<'a> AuthenticityScorer<'a> {
    pub fn new(catalog: &'a ReferenceCatalog) -> Self {
        Self { catalog }
    }

    pub fn score(
        &self,
        brand: &str,
        item_title: &str,
        description: &str,
        condition: &str,
        rng: &mut dyn RandomSource,
    ) -> AuthenticityReport {
        let brand = brand.trim().to_lowercase();
        let condition = ConditionBucket::from_free_text(condition);

        let matched = self
            .catalog
            .brand(&brand)
            .and_then(|b| match_model(b, item_title));

        let Some(model) = matched else {
            debug!(target: "advisor", "authenticity: no catalog model, generic answer");
            return generic_report(&brand, condition, rng);
        };

        let total = model.key_features.len();
        let found = model
            .key_features
            .iter()
            .filter(|feat| contains_ci(description, feat))
            .count();

        let confidence = if total == 0 {
            rng.uniform(NO_FEATURES_RANGE.0, NO_FEATURES_RANGE.1)
        } else {
            let base =
                (BASE_CONFIDENCE + found as f64 / total as f64 * 0.5).min(MAX_BASE_CONFIDENCE);
            (base + rng.uniform(-JITTER, JITTER)).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
        };
        let tier = ConfidenceTier::from_confidence(confidence);

        debug!(
            target: "advisor",
            model = %model.name, found, total, confidence, tier = tier.as_str(),
            "authenticity: catalog match"
        );

        let rationale = match tier {
            ConfidenceTier::High => high_rationale(&brand, model),
            ConfidenceTier::Medium => medium_rationale(&brand, model, rng),
            ConfidenceTier::Low => low_rationale(model),
        };

        AuthenticityReport {
            tier,
            confidence,
            confidence_display: percent(confidence),
            rationale,
            matched_model: Some(model.name.clone()),
            features_matched: found,
            features_total: total,
            condition,
        }
    }
}

/// First model (catalog order) whose name contains any title token. No ranking.
pub fn match_model<'b>(brand: &'b BrandReference, item_title: &str) -> Option<&'b ModelReference> {
    let tokens: Vec<String> = tokens_longer_than(item_title, MIN_TITLE_TOKEN_LEN).collect();
    brand
        .models
        .iter()
        .find(|m| tokens.iter().any(|t| m.name.contains(t.as_str())))
}

fn generic_report(
    brand: &str,
    condition: ConditionBucket,
    rng: &mut dyn RandomSource,
) -> AuthenticityReport {
    let confidence = rng.uniform(GENERIC_RANGE.0, GENERIC_RANGE.1);
    let b = title_case(brand);
    let rationale = [
        format!("There is limited reference information about this specific {b} item."),
        String::new(),
        "For a more accurate assessment:".to_string(),
        "- Request clear photos of logos, hardware and any serial numbers".to_string(),
        "- Ask for close-ups of stitching and materials".to_string(),
        "- Consider a professional authentication service for high-value items".to_string(),
        String::new(),
        format!("General authentication tips for {b}:"),
        "- Check the quality of materials and craftsmanship".to_string(),
        "- Verify serial numbers with the brand where possible".to_string(),
        "- Examine logo placement and hardware quality".to_string(),
    ]
    .join("\n");

    AuthenticityReport {
        tier: ConfidenceTier::Medium,
        confidence,
        confidence_display: percent(confidence),
        rationale,
        matched_model: None,
        features_matched: 0,
        features_total: 0,
        condition,
    }
}

fn leading(items: &[String], n: usize, fallback: &str) -> String {
    if items.is_empty() {
        return fallback.to_string();
    }
    items[..n.min(items.len())].join(", ")
}

fn high_rationale(brand: &str, model: &ModelReference) -> String {
    let b = title_case(brand);
    [
        "Based on the details provided, this item is likely authentic:".to_string(),
        format!(
            "- The description matches key authenticating features of a genuine {b} {}",
            model.name
        ),
        format!(
            "- The mentioned \"{}\" align with authentic product specifications",
            leading(&model.key_features, 2, "construction details")
        ),
        "- No obvious red flags pointing to a counterfeit".to_string(),
        String::new(),
        format!(
            "Key authenticating features for this item: {}",
            leading(&model.key_features, usize::MAX, "none documented")
        ),
    ]
    .join("\n")
}

fn medium_rationale(brand: &str, model: &ModelReference, rng: &mut dyn RandomSource) -> String {
    let b = title_case(brand);
    let check = if model.key_features.is_empty() {
        "the hardware and stitching".to_string()
    } else {
        model.key_features[rng.pick(model.key_features.len())].clone()
    };
    [
        "Based on the details provided, authenticity confidence is moderate:".to_string(),
        format!("- Some key features match an authentic {b} {}", model.name),
        format!(
            "- Detailed photos of {} would help confirm authenticity",
            leading(&model.key_features, 2, "logos and hardware")
        ),
        format!("- Check {check} more closely"),
        String::new(),
        format!(
            "Common counterfeits often get these wrong: {}",
            leading(&model.common_fakes, usize::MAX, "no documented patterns")
        ),
    ]
    .join("\n")
}

fn low_rationale(model: &ModelReference) -> String {
    [
        "Authenticity confidence is low:".to_string(),
        "- Few of the provided details match known authentic features".to_string(),
        "- Several key authenticating elements are missing or unverifiable".to_string(),
        "- Get a professional authentication before purchasing".to_string(),
        String::new(),
        format!(
            "Key concerns: cannot verify {}",
            leading(&model.key_features, 3, "any authenticating feature")
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::random::{FixedRandom, SeededRandom};

    fn catalogs() -> Catalogs {
        Catalogs::builtin().unwrap()
    }

    const ALL_FLAP_FEATURES: &str = "Quilted pattern with interlocking CC logo, chain strap with \
         leather woven through, burgundy interior";

    #[test]
    fn tiers_use_strict_thresholds() {
        assert_eq!(ConfidenceTier::from_confidence(0.71), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(0.7), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.41), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.4), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(0.1), ConfidenceTier::Low);
    }

    #[test]
    fn all_features_described_scores_high() {
        let c = catalogs();
        let s = AuthenticityScorer::new(&c.reference);
        for unit in [0.0, 0.5, 1.0] {
            let r = s.score(
                "Chanel",
                "Classic Flap Bag",
                ALL_FLAP_FEATURES,
                "Excellent",
                &mut FixedRandom { unit },
            );
            assert_eq!(r.matched_model.as_deref(), Some("classic flap bag"));
            assert_eq!((r.features_matched, r.features_total), (4, 4));
            assert_eq!(r.tier, ConfidenceTier::High);
            assert!((0.84..=0.99).contains(&r.confidence), "got {}", r.confidence);
        }
    }

    #[test]
    fn worked_example_matches_two_features() {
        let c = catalogs();
        let s = AuthenticityScorer::new(&c.reference);
        let r = s.score(
            "Chanel",
            "Classic Flap Bag",
            "Black lambskin, gold hardware, chain strap with leather woven through, burgundy interior",
            "Excellent",
            &mut FixedRandom::mid(),
        );
        assert_eq!(r.features_matched, 2);
        assert!((r.confidence - 0.75).abs() < 1e-9);
        assert_eq!(r.tier, ConfidenceTier::High);
        assert!(r.rationale.contains("Chanel classic flap bag"));
        assert!(r.rationale.contains("Quilted pattern, interlocking CC logo"));
        assert_eq!(r.condition, ConditionBucket::Excellent);
    }

    #[test]
    fn no_features_described_reads_low_at_bottom_of_jitter() {
        let c = catalogs();
        let s = AuthenticityScorer::new(&c.reference);
        let r = s.score("gucci", "Marmont", "nice bag", "Good", &mut FixedRandom::low());
        assert!((r.confidence - 0.4).abs() < 1e-9);
        assert_eq!(r.tier, ConfidenceTier::Low);
        assert!(r.rationale.contains("cannot verify Double G hardware, chevron pattern, antique gold-toned hardware"));
    }

    #[test]
    fn medium_rationale_names_one_feature_to_check() {
        let c = catalogs();
        let s = AuthenticityScorer::new(&c.reference);
        // 1 of 4 -> 0.625 at mid jitter; mid pick lands on the third feature
        let r = s.score(
            "Louis Vuitton",
            "LV Speedy 30",
            "rounded handles, some wear",
            "Very Good",
            &mut FixedRandom::mid(),
        );
        assert_eq!(r.matched_model.as_deref(), Some("speedy"));
        assert_eq!(r.tier, ConfidenceTier::Medium);
        assert!(r.rationale.contains("Louis Vuitton speedy"));
        assert!(r.rationale.contains("Check heat-stamped logo more closely"));
        assert!(r.rationale.contains("Incorrect handle patina"));
    }

    #[test]
    fn unknown_brand_goes_generic() {
        let c = catalogs();
        let s = AuthenticityScorer::new(&c.reference);
        let mut rng = SeededRandom::with_seed(5);
        for _ in 0..200 {
            let r = s.score("Unknown Brand", "Mystery Tote", "canvas", "Good", &mut rng);
            assert!(r.is_generic());
            assert_eq!(r.tier, ConfidenceTier::Medium);
            assert!((0.3..=0.5).contains(&r.confidence));
            assert!(r.rationale.contains("Unknown Brand"));
        }
    }

    #[test]
    fn known_brand_unknown_model_goes_generic() {
        let c = catalogs();
        let s = AuthenticityScorer::new(&c.reference);
        let r = s.score("Gucci", "Jackie 1961", "", "", &mut FixedRandom::high());
        assert!(r.is_generic());
        assert!((r.confidence - 0.5).abs() < 1e-9);
        assert_eq!(r.tier, ConfidenceTier::Medium);
    }

    #[test]
    fn short_title_tokens_do_not_match() {
        let c = catalogs();
        let brand = c.reference.brand("chanel").unwrap();
        // "a", "of" are too short; nothing else hits a model name.
        assert!(match_model(brand, "a of").is_none());
        // "bag" is long enough and hits the first model that contains it.
        assert_eq!(match_model(brand, "bag").unwrap().name, "classic flap bag");
        assert_eq!(match_model(brand, "Boy").unwrap().name, "boy bag");
    }

    #[test]
    fn catalog_path_stays_in_bounds() {
        let c = catalogs();
        let s = AuthenticityScorer::new(&c.reference);
        let mut rng = SeededRandom::with_seed(99);
        for desc in ["", "structured base", "Monogram canvas, structured base, parallel stitching, date code stamp"] {
            for _ in 0..200 {
                let r = s.score("louis vuitton", "neverfull mm", desc, "", &mut rng);
                assert!(!r.is_generic());
                assert!((0.1..=0.99).contains(&r.confidence));
                assert_eq!(r.tier, ConfidenceTier::from_confidence(r.confidence));
            }
        }
    }

    #[test]
    fn zero_feature_model_draws_without_dividing() {
        let cat = ReferenceCatalog::from_json(
            r#"{"brands":[{"brand":"celine","models":[{"name":"luggage"}]}]}"#,
        )
        .unwrap();
        let s = AuthenticityScorer::new(&cat);
        let mut rng = SeededRandom::with_seed(3);
        for _ in 0..200 {
            let r = s.score("Celine", "Luggage Micro", "anything", "Good", &mut rng);
            assert_eq!(r.features_total, 0);
            assert!((0.4..=0.6).contains(&r.confidence), "got {}", r.confidence);
            assert!(!r.rationale.is_empty());
        }
    }

    #[test]
    fn display_shows_percent_and_tier() {
        let c = catalogs();
        let s = AuthenticityScorer::new(&c.reference);
        let r = s.score("Chanel", "Classic Flap Bag", ALL_FLAP_FEATURES, "", &mut FixedRandom::mid());
        let text = r.to_string();
        assert!(text.starts_with("Authenticity confidence: 95% (high)"));
    }
}
