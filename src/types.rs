use crate::constants;
use crate::error::{ListingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of property categories a record can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Apartment,
    Hotel,
    Lodge,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Apartment, Category::Hotel, Category::Lodge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Apartment => constants::APARTMENT,
            Category::Hotel => constants::HOTEL,
            Category::Lodge => constants::LODGE,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            constants::APARTMENT => Some(Category::Apartment),
            constants::HOTEL => Some(Category::Hotel),
            constants::LODGE => Some(Category::Lodge),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a category-selection event asks for.
///
/// Parsing never fails: values outside the enumeration are kept verbatim as
/// `Unrecognized` and filter to an empty result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelector {
    #[default]
    All,
    Only(Category),
    Unrecognized(String),
}

impl CategorySelector {
    pub fn parse(raw: &str) -> Self {
        if raw == constants::ALL_SELECTOR {
            return CategorySelector::All;
        }
        match Category::from_name(raw) {
            Some(category) => CategorySelector::Only(category),
            None => CategorySelector::Unrecognized(raw.to_string()),
        }
    }

    /// Like `parse`, but reports values outside the enumeration as an error
    pub fn parse_strict(raw: &str) -> Result<Self> {
        match Self::parse(raw) {
            CategorySelector::Unrecognized(value) => Err(ListingError::UnrecognizedCategory(value)),
            selector => Ok(selector),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategorySelector::All => constants::ALL_SELECTOR,
            CategorySelector::Only(category) => category.as_str(),
            CategorySelector::Unrecognized(value) => value,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, CategorySelector::Unrecognized(_))
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One property listing as declared in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "type", alias = "category")]
    pub category: Category,
    /// Display string such as "$120/night"; never parsed
    pub price: String,
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub location: String,
    /// "name - distance" display text
    #[serde(default)]
    pub attractions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parses_known_values() {
        assert_eq!(CategorySelector::parse("all"), CategorySelector::All);
        assert_eq!(
            CategorySelector::parse("hotel"),
            CategorySelector::Only(Category::Hotel)
        );
        assert_eq!(
            CategorySelector::parse("Hotel"),
            CategorySelector::Unrecognized("Hotel".to_string())
        );
    }

    #[test]
    fn test_strict_selector_rejects_unknown_values() {
        let err = CategorySelector::parse_strict("castle").unwrap_err();
        assert!(matches!(err, ListingError::UnrecognizedCategory(ref v) if v == "castle"));
        assert!(CategorySelector::parse_strict("lodge").is_ok());
    }

    #[test]
    fn test_selector_round_trips_through_display() {
        for raw in constants::get_supported_selectors() {
            assert_eq!(CategorySelector::parse(raw).to_string(), raw);
        }
        assert_eq!(CategorySelector::parse("nonexistent").as_str(), "nonexistent");
    }
}
