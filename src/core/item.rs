use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single purchasable item in the parts catalog.
///
/// The article is the unique identifier; the display name is the main
/// substrate for heuristic matching and is searched case-insensitively.
/// Category, kind, and diameter are optional tags carried over from the
/// source spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique article number (primary key)
    pub article: String,

    /// Display name as printed in the price list
    pub name: String,

    /// Category tag, e.g. "section", "membrane", "breaker"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Sub-kind tag within a category, e.g. "base" for plain sections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Diameter tag; string-typed in the source data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<String>,

    /// Unit price
    pub price: Decimal,
}

impl CatalogItem {
    pub fn new(article: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            article: article.into(),
            name: name.into(),
            category: None,
            kind: None,
            diameter: None,
            price: Decimal::ZERO,
        }
    }

    /// Case-insensitive substring check against the display name
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Whether the category tag equals `category` (case-insensitive)
    pub fn has_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category))
    }

    /// Whether the kind tag equals `kind` (case-insensitive)
    pub fn has_kind(&self, kind: &str) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|k| k.eq_ignore_ascii_case(kind))
    }

    /// Whether the diameter tag matches `diameter_mm`
    pub fn has_diameter(&self, diameter_mm: u16) -> bool {
        self.diameter
            .as_deref()
            .is_some_and(|d| d.trim() == diameter_mm.to_string())
    }

    #[cfg(test)]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[cfg(test)]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[cfg(test)]
    pub fn with_diameter(mut self, diameter: impl Into<String>) -> Self {
        self.diameter = Some(diameter.into());
        self
    }
}
