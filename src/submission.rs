//! One form submission per panel. Ephemeral: built from the request, validated, scored, dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Authenticity,
    Styling,
    Resale,
}

impl Panel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authenticity => "authenticity",
            Self::Styling => "styling",
            Self::Resale => "resale",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Submission {
    const PANEL: Panel;

    /// Names of required fields that are empty or whitespace-only.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Text identifying the submission in logs (hashed before it is logged).
    fn fingerprint(&self) -> String;

    fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn collect_missing(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, v)| blank(v))
        .map(|(name, _)| *name)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticitySubmission {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub condition: String,
}

impl Submission for AuthenticitySubmission {
    const PANEL: Panel = Panel::Authenticity;

    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("title", self.title.as_str()),
            ("brand", self.brand.as_str()),
            ("description", self.description.as_str()),
        ])
    }

    fn fingerprint(&self) -> String {
        format!("{}|{}|{}", self.brand, self.title, self.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylingSubmission {
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub context: Option<String>,
}

impl Submission for StylingSubmission {
    const PANEL: Panel = Panel::Styling;

    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[("item_name", self.item_name.as_str())])
    }

    fn fingerprint(&self) -> String {
        format!(
            "{}|{}",
            self.item_name,
            self.context.as_deref().unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResaleSubmission {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub condition: String,
}

impl Submission for ResaleSubmission {
    const PANEL: Panel = Panel::Resale;

    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[("item_name", self.item_name.as_str()), ("brand", self.brand.as_str())])
    }

    fn fingerprint(&self) -> String {
        format!("{}|{}|{}", self.brand, self.item_name, self.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticity_requires_title_brand_description() {
        let s = AuthenticitySubmission {
            title: "Classic Flap".into(),
            brand: "  ".into(),
            description: String::new(),
            condition: "Excellent".into(),
        };
        let err = s.validate().unwrap_err();
        assert_eq!(err.missing, vec!["brand", "description"]);
        assert_eq!(
            err.to_string(),
            "Please fill out all required fields: brand, description"
        );
    }

    #[test]
    fn condition_and_context_are_optional() {
        let a = AuthenticitySubmission {
            title: "t".into(),
            brand: "b".into(),
            description: "d".into(),
            condition: String::new(),
        };
        assert!(a.validate().is_ok());

        let s = StylingSubmission {
            item_name: "Gucci Blazer".into(),
            context: None,
        };
        assert!(s.validate().is_ok());

        let r = ResaleSubmission {
            brand: "Chanel".into(),
            item_name: "Boy Bag".into(),
            condition: String::new(),
        };
        assert!(r.validate().is_ok());
    }

    #[test]
    fn resale_requires_item_and_brand() {
        let r = ResaleSubmission::default();
        assert_eq!(r.missing_fields(), vec!["item_name", "brand"]);
    }

    #[test]
    fn missing_json_fields_deserialize_as_empty() {
        let s: StylingSubmission = serde_json::from_str(r#"{"context":"fall"}"#).unwrap();
        assert_eq!(s.missing_fields(), vec!["item_name"]);
        assert_eq!(StylingSubmission::PANEL, Panel::Styling);
    }
}
