//! Free-text item condition -> one of the three priced condition buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionBucket {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "very good")]
    VeryGood,
    #[serde(rename = "good")]
    Good,
}

impl ConditionBucket {
    pub const ALL: [ConditionBucket; 3] = [Self::Excellent, Self::VeryGood, Self::Good];

    /// Keyword mapping, checked in order:
    /// `excellent`/`mint`/`new` -> excellent, `very good`/`great` -> very good, anything else -> good.
    ///
    /// "Fair" and "Poor" land in `Good` as well; there is no lower bucket to price them against.
    pub fn from_free_text(condition: &str) -> Self {
        let c = condition.to_lowercase();
        if ["excellent", "mint", "new"].iter().any(|k| c.contains(k)) {
            Self::Excellent
        } else if ["very good", "great"].iter().any(|k| c.contains(k)) {
            Self::VeryGood
        } else {
            Self::Good
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::VeryGood => "very good",
            Self::Good => "good",
        }
    }

    /// Scale applied to fallback tier prices.
    pub fn value_multiplier(self) -> f64 {
        match self {
            Self::Excellent => 1.0,
            Self::VeryGood => 0.8,
            Self::Good => 0.6,
        }
    }
}

impl fmt::Display for ConditionBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
