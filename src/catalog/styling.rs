use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// Curated looks per catalog item. The recommender samples three of them.
pub const LOOKS_PER_ITEM: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylingEntry {
    /// Lowercase item key, e.g. "gucci blazer".
    pub key: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylingCatalog {
    pub items: Vec<StylingEntry>,
}

impl StylingCatalog {
    /// Parse and normalize keys. Every entry must carry exactly three non-blank looks.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let mut cat: StylingCatalog = serde_json::from_str(raw)?;
        for e in &mut cat.items {
            e.key = e.key.trim().to_lowercase();
            if e.suggestions.len() != LOOKS_PER_ITEM {
                return Err(serde_json::Error::custom(format!(
                    "styling item `{}` has {} suggestions, expected {LOOKS_PER_ITEM}",
                    e.key,
                    e.suggestions.len()
                )));
            }
            if e.suggestions.iter().any(|s| s.trim().is_empty()) {
                return Err(serde_json::Error::custom(format!(
                    "styling item `{}` has a blank suggestion",
                    e.key
                )));
            }
        }
        Ok(cat)
    }
}
