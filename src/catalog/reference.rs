//! Authenticating features per brand and model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReference {
    pub name: String,
    /// Features a genuine piece shows, most telling first.
    #[serde(default)]
    pub key_features: Vec<String>,
    /// Flaws typical of counterfeits of this model.
    #[serde(default)]
    pub common_fakes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandReference {
    pub brand: String,
    pub models: Vec<ModelReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    pub brands: Vec<BrandReference>,
}

impl ReferenceCatalog {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let mut cat: ReferenceCatalog = serde_json::from_str(raw)?;
        for b in &mut cat.brands {
            b.brand = b.brand.trim().to_lowercase();
            for m in &mut b.models {
                m.name = m.name.trim().to_lowercase();
            }
        }
        Ok(cat)
    }

    /// Exact lookup; `brand` must already be lowercase.
    pub fn brand(&self, brand: &str) -> Option<&BrandReference> {
        self.brands.iter().find(|b| b.brand == brand)
    }
}
