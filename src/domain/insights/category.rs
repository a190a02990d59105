//! Insight categories shown as bubbles on the insights screen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ColorToken, ValidationError};

/// Stable key of an insight category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategoryKey {
    Physical,
    Nutrition,
    Sleep,
    Mood,
    Cycle,
    Energy,
}

impl InsightCategoryKey {
    /// All keys in display order.
    pub const ALL: [InsightCategoryKey; 6] = [
        InsightCategoryKey::Physical,
        InsightCategoryKey::Nutrition,
        InsightCategoryKey::Sleep,
        InsightCategoryKey::Mood,
        InsightCategoryKey::Cycle,
        InsightCategoryKey::Energy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategoryKey::Physical => "physical",
            InsightCategoryKey::Nutrition => "nutrition",
            InsightCategoryKey::Sleep => "sleep",
            InsightCategoryKey::Mood => "mood",
            InsightCategoryKey::Cycle => "cycle",
            InsightCategoryKey::Energy => "energy",
        }
    }
}

impl fmt::Display for InsightCategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsightCategoryKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("category", format!("unknown category '{}'", s))
            })
    }
}

/// A category of canned insights with its bubble gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCategory {
    pub key: InsightCategoryKey,
    pub name: String,
    pub gradient: (ColorToken, ColorToken),
    pub insights: Vec<String>,
}

impl InsightCategory {
    /// First gradient stop, used for icons and headings in the detail view.
    pub fn accent(&self) -> &ColorToken {
        &self.gradient.0
    }

    /// Closing recommendation shown under the insight list.
    pub fn recommendation(&self) -> String {
        format!(
            "Based on your data patterns, we recommend adjusting your {} habits during \
             different phases of your cycle for optimal wellbeing.",
            self.name.to_lowercase()
        )
    }

    /// Heading of the patterns chart.
    pub fn patterns_title(&self) -> String {
        format!("Your {} Patterns", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sleep() -> InsightCategory {
        InsightCategory {
            key: InsightCategoryKey::Sleep,
            name: "Sleep".into(),
            gradient: (
                ColorToken::from_static("#6366F1"),
                ColorToken::from_static("#4F46E5"),
            ),
            insights: vec!["Try going to bed 30 minutes earlier.".into()],
        }
    }

    #[test]
    fn key_parses_case_insensitively() {
        assert_eq!("Sleep".parse::<InsightCategoryKey>().unwrap(), InsightCategoryKey::Sleep);
        assert_eq!(" energy ".parse::<InsightCategoryKey>().unwrap(), InsightCategoryKey::Energy);
        assert!("weather".parse::<InsightCategoryKey>().is_err());
    }

    #[test]
    fn key_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&InsightCategoryKey::Physical).unwrap(),
            "\"physical\""
        );
    }

    #[test]
    fn accent_is_first_gradient_stop() {
        assert_eq!(sleep().accent().as_str(), "#6366F1");
    }

    #[test]
    fn recommendation_lowercases_category_name() {
        let text = sleep().recommendation();
        assert!(text.contains("adjusting your sleep habits"));
        assert!(text.ends_with("optimal wellbeing."));
    }

    #[test]
    fn patterns_title_uses_display_name() {
        assert_eq!(sleep().patterns_title(), "Your Sleep Patterns");
    }
}
