//! Product entity, its category enumeration, validated input and list filters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of product categories. Stored and serialized by upper-case name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }

    /// Comma separated list of every category name, in declaration order.
    pub fn names() -> String {
        Category::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Case-sensitive: `"tools"` is not a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A persisted product row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Field-wise comparison with a draft, ignoring server-assigned id and timestamps.
    pub fn matches_draft(&self, draft: &ProductDraft) -> bool {
        self.name == draft.name
            && self.description == draft.description
            && self.price == draft.price
            && self.available == draft.available
            && self.category == draft.category
    }
}

/// Mutable product fields that passed validation. Only `ProductValidator` builds one,
/// so every draft handed to a store already satisfies the entity invariants.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) price: Decimal,
    pub(crate) available: bool,
    pub(crate) category: Category,
}

impl ProductDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Category predicate of a list query. A name outside the enumeration is kept
/// as-is; such a filter matches no product.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    Known(Category),
    Unrecognized(String),
}

impl CategoryFilter {
    pub fn parse(s: &str) -> Self {
        match s.parse::<Category>() {
            Ok(c) => CategoryFilter::Known(c),
            Err(ParseCategoryError(raw)) => CategoryFilter::Unrecognized(raw),
        }
    }
}

/// Optional predicates for listing products. All present predicates must hold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name.
    pub name: Option<String>,
    pub available: Option<bool>,
    pub category: Option<CategoryFilter>,
}

impl ProductFilter {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = Some(category);
        self
    }

    /// True when no product can match (category outside the enumeration).
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self.category, Some(CategoryFilter::Unrecognized(_)))
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if !product.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(available) = self.available {
            if product.available != available {
                return false;
            }
        }
        match &self.category {
            Some(CategoryFilter::Known(c)) => product.category == *c,
            Some(CategoryFilter::Unrecognized(_)) => false,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, available: bool, category: Category) -> Product {
        let now = Utc::now();
        Product {
            id: 1,
            name: name.to_string(),
            description: "test".to_string(),
            price: Decimal::new(1250, 2),
            available,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn category_parse_is_case_sensitive() {
        assert_eq!("TOOLS".parse::<Category>(), Ok(Category::Tools));
        assert!("tools".parse::<Category>().is_err());
        assert!("BOGUS".parse::<Category>().is_err());
    }

    #[test]
    fn category_names_in_order() {
        assert_eq!(
            Category::names(),
            "UNKNOWN, CLOTHS, FOOD, HOUSEWARES, AUTOMOTIVE, TOOLS"
        );
        assert_eq!(Category::default(), Category::Unknown);
    }

    #[test]
    fn category_serializes_upper_case() {
        assert_eq!(
            serde_json::to_value(Category::Housewares).unwrap(),
            serde_json::json!("HOUSEWARES")
        );
        assert!(serde_json::from_value::<Category>(serde_json::json!("Food")).is_err());
    }

    #[test]
    fn product_price_serializes_as_number() {
        let p = product("Fedora", true, Category::Cloths);
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["price"], serde_json::json!(12.5));
        assert_eq!(v["category"], serde_json::json!("CLOTHS"));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let f = ProductFilter::default();
        assert!(f.matches(&product("Hat", false, Category::Unknown)));
        assert!(!f.is_unsatisfiable());
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let f = ProductFilter::default().with_name("HAT");
        assert!(f.matches(&product("Top hat", true, Category::Cloths)));
        assert!(!f.matches(&product("Shirt", true, Category::Cloths)));
    }

    #[test]
    fn filters_are_anded() {
        let f = ProductFilter::default()
            .with_available(true)
            .with_category(CategoryFilter::Known(Category::Food));
        assert!(f.matches(&product("Apple", true, Category::Food)));
        assert!(!f.matches(&product("Apple", false, Category::Food)));
        assert!(!f.matches(&product("Hammer", true, Category::Tools)));
    }

    #[test]
    fn unrecognized_category_matches_nothing() {
        let f = ProductFilter::default().with_category(CategoryFilter::parse("BOGUS"));
        assert!(f.is_unsatisfiable());
        assert!(!f.matches(&product("Hat", true, Category::Unknown)));
    }
}
