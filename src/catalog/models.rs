//! Catalog data models
//!
//! This module defines the application record and the closed category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment a catalog entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Production tools
    Prod,
    /// User acceptance testing tools
    Uat,
    /// Development tools
    Dev,
}

impl Category {
    /// Every category in display order
    pub const VARIANTS: [Self; 3] = [Self::Prod, Self::Uat, Self::Dev];

    /// Uppercase token used in the catalog file, the UI and text search
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prod => "PROD",
            Self::Uat => "UAT",
            Self::Dev => "DEV",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Category selection applied to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only records of the given category
    Only(Category),
}

impl CategoryFilter {
    /// Selector choices in display order: `ALL` followed by every category
    pub const ALL_CHOICES: [Self; 4] = [
        Self::All,
        Self::Only(Category::Prod),
        Self::Only(Category::Uat),
        Self::Only(Category::Dev),
    ];

    /// Label shown on the selector
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Only(category) => category.as_str(),
        }
    }

    /// Parse a selector label back into a filter
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL_CHOICES
            .into_iter()
            .find(|choice| choice.label() == label)
    }

    /// Whether a record of `category` passes this filter
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    /// Unique identifier, also the favorites key
    pub id: String,
    /// Display name
    pub name: String,
    /// Environment the tool belongs to
    pub category: Category,
    /// One-line summary shown on the card
    #[serde(default)]
    pub description: String,
    /// Link opened when the card is activated
    #[serde(default)]
    pub url: String,
    /// Short glyph rendered as the card icon
    #[serde(default)]
    pub icon: String,
}

impl AppRecord {
    /// Create a record with empty display metadata
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            url: String::new(),
            icon: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tokens() {
        for category in Category::VARIANTS {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("prod".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Uat).unwrap();
        assert_eq!(json, "\"UAT\"");
        let parsed: Category = serde_json::from_str("\"DEV\"").unwrap();
        assert_eq!(parsed, Category::Dev);
    }

    #[test]
    fn test_filter_choices_start_with_all() {
        assert_eq!(CategoryFilter::ALL_CHOICES[0], CategoryFilter::All);
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
        let labels: Vec<_> = CategoryFilter::ALL_CHOICES
            .iter()
            .map(|choice| choice.label())
            .collect();
        assert_eq!(labels, ["ALL", "PROD", "UAT", "DEV"]);
    }

    #[test]
    fn test_filter_from_label() {
        assert_eq!(CategoryFilter::from_label("ALL"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_label("UAT"),
            Some(CategoryFilter::Only(Category::Uat))
        );
        assert_eq!(CategoryFilter::from_label("QA"), None);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Dev));
        assert!(CategoryFilter::Only(Category::Dev).matches(Category::Dev));
        assert!(!CategoryFilter::Only(Category::Prod).matches(Category::Dev));
    }

    #[test]
    fn test_record_metadata_defaults() {
        let record: AppRecord =
            serde_json::from_str(r#"{"id":"a","name":"Payroll","category":"PROD"}"#).unwrap();
        assert_eq!(record, AppRecord::new("a", "Payroll", Category::Prod));
    }
}
