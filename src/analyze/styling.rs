//! Outfit suggestions for an item, optionally tailored by season/occasion context.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::catalog::{StylingCatalog, StylingEntry};
use crate::random::RandomSource;
use crate::text::{mentions_any, tokens_longer_than};

const MIN_KEY_TOKEN_LEN: usize = 3;
pub const SUGGESTION_COUNT: usize = 3;

const WARM_SEASONS: &[&str] = &["spring", "summer"];
const COLD_SEASONS: &[&str] = &["fall", "autumn", "winter"];
const WORK_OCCASIONS: &[&str] = &["work", "office", "business"];
const EVENING_OCCASIONS: &[&str] = &["date", "dinner", "evening"];
const CASUAL_OCCASIONS: &[&str] = &["casual", "weekend", "brunch"];

const BAG_WORDS: &[&str] = &["bag", "purse", "handbag", "tote", "clutch", "backpack", "satchel"];
const OUTERWEAR_WORDS: &[&str] = &["jacket", "blazer", "coat", "cardigan"];
const DRESS_WORDS: &[&str] = &["dress", "gown", "frock"];
const SHOE_WORDS: &[&str] = &[
    "shoe", "shoes", "heel", "heels", "boot", "boots", "sneaker", "sneakers",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleCategory {
    Bag,
    Outerwear,
    Dress,
    Shoes,
    Unclassified,
}

impl StyleCategory {
    /// First whitespace token that is a known garment word decides; otherwise unclassified.
    pub fn classify(item_name: &str) -> Self {
        item_name
            .split_whitespace()
            .map(str::to_lowercase)
            .find_map(|w| Self::of_word(&w))
            .unwrap_or(Self::Unclassified)
    }

    fn of_word(w: &str) -> Option<Self> {
        if BAG_WORDS.contains(&w) {
            Some(Self::Bag)
        } else if OUTERWEAR_WORDS.contains(&w) {
            Some(Self::Outerwear)
        } else if DRESS_WORDS.contains(&w) {
            Some(Self::Dress)
        } else if SHOE_WORDS.contains(&w) {
            Some(Self::Shoes)
        } else {
            None
        }
    }

    fn templates(self, item: &str) -> [String; SUGGESTION_COUNT] {
        match self {
            Self::Bag => [
                format!("Style your {item} with a monochromatic outfit to let the bag be the focal point"),
                format!("For casual outings, pair your {item} with premium denim, a crisp white tee, and minimal jewelry"),
                format!("Create an elegant evening look by carrying your {item} with a little black dress and statement heels"),
            ],
            Self::Outerwear => [
                format!("Layer your {item} over a silk slip dress with ankle boots for an elegant day-to-night transition"),
                format!("For a casual look, pair your {item} with a white tee, straight-leg jeans, and loafers"),
                format!("Create contrast by styling your structured {item} with relaxed wide-leg pants and a fitted top"),
            ],
            Self::Dress => [
                format!("Elevate your {item} with architectural heels and a structured designer handbag"),
                format!("For cooler weather, layer your {item} with a tailored blazer and knee-high boots"),
                format!("Keep it minimal with your {item} by adding just delicate jewelry and simple sandals"),
            ],
            Self::Shoes => [
                format!("Build an outfit around your {item} with neutral tones that highlight the footwear"),
                format!("Balance the look by pairing statement {item} with minimalist clothing pieces"),
                format!("For an unexpected twist, style your {item} with contrasting patterns in complementary colors"),
            ],
            Self::Unclassified => [
                format!("Create a monochromatic outfit incorporating your {item} for a sophisticated look"),
                format!("Balance your {item} with pieces of contrasting structure or texture"),
                format!("Use your {item} as a statement piece with minimal accessories for maximum impact"),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Warm,
    Cold,
}

impl Season {
    pub fn detect(context: &str) -> Option<Self> {
        if mentions_any(context, WARM_SEASONS) {
            Some(Self::Warm)
        } else if mentions_any(context, COLD_SEASONS) {
            Some(Self::Cold)
        } else {
            None
        }
    }

    fn suggestion(self, key: &str) -> String {
        match self {
            Self::Warm => format!(
                "For warm weather, pair your {key} with linen shorts, a lightweight blouse and strappy sandals"
            ),
            Self::Cold => format!(
                "For colder days, style your {key} with a chunky knit sweater, wool coat and knee-high boots"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Work,
    Evening,
    Casual,
}

impl Occasion {
    /// Buckets are checked in priority order; only the first hit counts.
    pub fn detect(context: &str) -> Option<Self> {
        if mentions_any(context, WORK_OCCASIONS) {
            Some(Self::Work)
        } else if mentions_any(context, EVENING_OCCASIONS) {
            Some(Self::Evening)
        } else if mentions_any(context, CASUAL_OCCASIONS) {
            Some(Self::Casual)
        } else {
            None
        }
    }

    fn suggestion(self, key: &str, context: &str) -> String {
        match self {
            Self::Work => format!(
                "For a professional setting, your {key} works beautifully with a tailored pencil skirt, silk blouse and pointed toe pumps"
            ),
            Self::Evening => format!(
                "For your {context}, pair the {key} with a sleek midi dress, statement earrings and strappy heels for an elegant look"
            ),
            Self::Casual => format!(
                "For a relaxed {context} vibe, style your {key} with premium denim, a cashmere tee and designer sneakers"
            ),
        }
    }
}

/// Where the suggestions came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StylingSource {
    Catalog {
        key: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        season: Option<Season>,
        #[serde(skip_serializing_if = "Option::is_none")]
        occasion: Option<Occasion>,
    },
    Generic {
        category: StyleCategory,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylingSuggestions {
    pub item_name: String,
    pub suggestions: Vec<String>,
    pub source: StylingSource,
}

impl fmt::Display for StylingSuggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Styling ideas for your {}", self.item_name)?;
        for (i, s) in self.suggestions.iter().enumerate() {
            write!(f, "\nLook {}: {}", i + 1, s)?;
        }
        Ok(())
    }
}

pub struct StylingRecommender<'a> {
    catalog: &'a StylingCatalog,
}

impl<'a> StylingRecommender<'a> {
    pub fn new(catalog: &'a StylingCatalog) -> Self {
        Self { catalog }
    }

    pub fn suggest(
        &self,
        item_name: &str,
        context: Option<&str>,
        rng: &mut dyn RandomSource,
    ) -> StylingSuggestions {
        let display_name = item_name.trim().to_string();
        let item = display_name.to_lowercase();

        let Some(entry) = self.match_entry(&item) else {
            let category = StyleCategory::classify(&item);
            debug!(target: "advisor", category = ?category, "styling: generic templates");
            return StylingSuggestions {
                item_name: display_name,
                suggestions: category.templates(&item).to_vec(),
                source: StylingSource::Generic { category },
            };
        };

        let mut pool = entry.suggestions.clone();
        let context = context.map(|c| c.trim().to_lowercase()).unwrap_or_default();
        let (mut season, mut occasion) = (None, None);
        if !context.is_empty() {
            season = Season::detect(&context);
            if let Some(s) = season {
                pool.push(s.suggestion(&entry.key));
            }
            occasion = Occasion::detect(&context);
            if let Some(o) = occasion {
                pool.push(o.suggestion(&entry.key, &context));
            }
        }

        let suggestions = rng
            .sample_indices(pool.len(), SUGGESTION_COUNT)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect();

        debug!(
            target: "advisor",
            key = %entry.key, pool = pool.len(), season = ?season, occasion = ?occasion,
            "styling: catalog match"
        );

        StylingSuggestions {
            item_name: display_name,
            suggestions,
            source: StylingSource::Catalog {
                key: entry.key.clone(),
                season,
                occasion,
            },
        }
    }

    /// First catalog key with a token longer than 3 chars occurring in `item` (lowercase).
    fn match_entry(&self, item: &str) -> Option<&'a StylingEntry> {
        self.catalog
            .items
            .iter()
            .find(|e| tokens_longer_than(&e.key, MIN_KEY_TOKEN_LEN).any(|t| item.contains(&t)))
    }
}
