//! Read-only reference tables consulted by the scorers.
//!
//! The three catalogs ship embedded in the binary (`data/*.json`). A catalog directory
//! holding `reference.json`, `styling.json` and `resale.json` replaces the embedded
//! copies at startup. Once built, a `Catalogs` value is never mutated; it is shared
//! behind an `Arc`.

pub mod reference;
pub mod resale;
pub mod styling;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

pub use reference::{BrandReference, ModelReference, ReferenceCatalog};
pub use resale::{
    BrandTier, ConditionPrices, PriceTier, ResaleBrand, ResaleCatalog, ResaleModel, SaleRecord,
    Trend,
};
pub use styling::{StylingCatalog, StylingEntry};

const BUILTIN_REFERENCE: &str = include_str!("../../data/reference.json");
const BUILTIN_STYLING: &str = include_str!("../../data/styling.json");
const BUILTIN_RESALE: &str = include_str!("../../data/resale.json");

pub const REFERENCE_FILE: &str = "reference.json";
pub const STYLING_FILE: &str = "styling.json";
pub const RESALE_FILE: &str = "resale.json";

#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub reference: ReferenceCatalog,
    pub styling: StylingCatalog,
    pub resale: ResaleCatalog,
}

impl Catalogs {
    /// Catalogs compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            reference: ReferenceCatalog::from_json(BUILTIN_REFERENCE)
                .context("parsing built-in reference catalog")?,
            styling: StylingCatalog::from_json(BUILTIN_STYLING)
                .context("parsing built-in styling catalog")?,
            resale: ResaleCatalog::from_json(BUILTIN_RESALE)
                .context("parsing built-in resale catalog")?,
        })
    }

    /// Read all three catalogs from `dir`. Every file must be present and valid.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let reference = ReferenceCatalog::from_json(&read(dir, REFERENCE_FILE)?)
            .with_context(|| format!("parsing {}", dir.join(REFERENCE_FILE).display()))?;
        let styling = StylingCatalog::from_json(&read(dir, STYLING_FILE)?)
            .with_context(|| format!("parsing {}", dir.join(STYLING_FILE).display()))?;
        let resale = ResaleCatalog::from_json(&read(dir, RESALE_FILE)?)
            .with_context(|| format!("parsing {}", dir.join(RESALE_FILE).display()))?;
        Ok(Self {
            reference,
            styling,
            resale,
        })
    }

    /// `Some(dir)` -> files on disk, `None` -> built-in tables.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let cats = match dir {
            Some(d) => Self::load_from_dir(d)?,
            None => Self::builtin()?,
        };
        info!(
            source = %dir.map(|d| d.display().to_string()).unwrap_or_else(|| "builtin".into()),
            reference_brands = cats.reference.brands.len(),
            styling_items = cats.styling.items.len(),
            resale_brands = cats.resale.brands.len(),
            "catalogs loaded"
        );
        Ok(cats)
    }
}

fn read(dir: &Path, file: &str) -> Result<String> {
    let path = dir.join(file);
    fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}
