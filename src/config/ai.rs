// src/config/ai.rs
//! Optional AI credential. Its presence only flips the cosmetic "AI-enhanced" badge;
//! no scorer reads it.

use serde::{Deserialize, Serialize};
use std::env;

fn default_provider() -> String {
    "openai".to_string()
}
fn default_api_key() -> String {
    "ENV".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// "openai" | "claude" (case-insensitive)
    #[serde(default = "default_provider")]
    pub provider: String,
    /// "ENV" means: read from OPENAI_API_KEY / CLAUDE_API_KEY (by provider)
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: default_api_key(),
        }
    }
}

impl AiConfig {
    fn env_var_for(provider: &str) -> Option<&'static str> {
        match provider {
            "openai" => Some("OPENAI_API_KEY"),
            "claude" => Some("CLAUDE_API_KEY"),
            _ => None,
        }
    }

    /// Resolve the credential. `lookup` stands in for `std::env::var` so tests stay hermetic.
    pub fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let provider = self.provider.trim().to_lowercase();
        let key = if self.api_key.trim().eq_ignore_ascii_case("env") {
            Self::env_var_for(&provider).and_then(&lookup)?
        } else {
            self.api_key.clone()
        };
        let key = key.trim().to_string();
        (!key.is_empty()).then_some(key)
    }

    /// True when a non-empty credential can be resolved from config or environment.
    pub fn available(&self) -> bool {
        self.resolve_with(|k| env::var(k).ok()).is_some()
    }
}
