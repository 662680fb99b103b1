// src/config/advisor.rs
//! Service configuration from `config/advisor.toml` plus `ADVISOR_*` env overrides.
//!
//! ```toml
//! [advisor]
//! mode = "heuristic"        # or "ai_assisted" (not implemented, fails loudly)
//! simulated_delay_ms = 1500
//! seed = 42                 # optional: reproducible random draws
//!
//! [catalogs]
//! dir = "config/catalogs"   # optional: replaces the built-in tables
//!
//! [ai]
//! provider = "openai"
//! api_key = "ENV"
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

use super::ai::AiConfig;

// --- env defaults & names ---
pub const DEFAULT_ADVISOR_CONFIG_PATH: &str = "config/advisor.toml";
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;

pub const ENV_ADVISOR_CONFIG_PATH: &str = "ADVISOR_CONFIG_PATH";
pub const ENV_ADVISOR_MODE: &str = "ADVISOR_MODE";
pub const ENV_ADVISOR_DELAY_MS: &str = "ADVISOR_DELAY_MS";
pub const ENV_ADVISOR_SEED: &str = "ADVISOR_SEED";
pub const ENV_ADVISOR_CATALOG_DIR: &str = "ADVISOR_CATALOG_DIR";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Catalog lookups and randomized ranges.
    #[default]
    Heuristic,
    /// Model-backed analysis. Reserved; requests fail with `ModeUnavailable`.
    AiAssisted,
}

impl AnalysisMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heuristic => "heuristic",
            Self::AiAssisted => "ai_assisted",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "heuristic" => Ok(Self::Heuristic),
            "ai_assisted" | "ai" => Ok(Self::AiAssisted),
            other => bail!("unknown analysis mode: {other}"),
        }
    }
}

fn default_delay_ms() -> u64 {
    DEFAULT_SIMULATED_DELAY_MS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorSection {
    #[serde(default)]
    pub mode: AnalysisMode,
    #[serde(default = "default_delay_ms")]
    pub simulated_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AdvisorSection {
    fn default() -> Self {
        Self {
            mode: AnalysisMode::default(),
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub advisor: AdvisorSection,
    #[serde(default)]
    pub catalogs: CatalogSection,
    #[serde(default)]
    pub ai: AiConfig,
}

impl AdvisorConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("parsing advisor config")
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading advisor config from {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Resolve the config path (`ADVISOR_CONFIG_PATH` or the default), load it if it exists,
    /// then apply `ADVISOR_*` overrides. A missing file means defaults; a broken one is an error.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var(ENV_ADVISOR_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ADVISOR_CONFIG_PATH));

        let mut cfg = if path.exists() {
            Self::load_from_file(&path)?
        } else {
            info!(path = %path.display(), "advisor config not found, using defaults");
            Self::default()
        };
        cfg.apply_overrides(|k| std::env::var(k).ok())?;
        Ok(cfg)
    }

    /// Apply `ADVISOR_*` overrides read through `lookup`.
    /// An unknown mode is an error; unparsable numbers are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(m) = lookup(ENV_ADVISOR_MODE) {
            self.advisor.mode = m
                .parse()
                .with_context(|| format!("{ENV_ADVISOR_MODE}={m}"))?;
        }
        if let Some(raw) = lookup(ENV_ADVISOR_DELAY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.advisor.simulated_delay_ms = ms,
                Err(_) => warn!(value = %raw, "ignoring invalid {ENV_ADVISOR_DELAY_MS}"),
            }
        }
        if let Some(raw) = lookup(ENV_ADVISOR_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.advisor.seed = Some(seed),
                Err(_) => warn!(value = %raw, "ignoring invalid {ENV_ADVISOR_SEED}"),
            }
        }
        if let Some(dir) = lookup(ENV_ADVISOR_CATALOG_DIR) {
            let dir = dir.trim();
            if !dir.is_empty() {
                self.catalogs.dir = Some(PathBuf::from(dir));
            }
        }
        Ok(())
    }
}
