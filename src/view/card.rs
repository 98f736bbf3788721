use crate::catalog::AmenityOverrides;
use crate::constants;
use crate::filter::resolve_amenities;
use crate::types::{Category, CategorySelector, PropertyRecord};
use serde::Serialize;

/// View-model for one rendered property card.
///
/// Text is copied verbatim from the record; markup encoding happens in the
/// templates that render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: String,
    pub image_url: String,
    pub location: String,
    pub amenities: Vec<String>,
    pub attractions: Vec<String>,
}

impl CardView {
    pub fn project(record: &PropertyRecord, overrides: &AmenityOverrides) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            description: record.description.clone(),
            category: record.category,
            price: record.price.clone(),
            image_url: record.image_url.clone(),
            location: record.location.clone(),
            amenities: resolve_amenities(record, overrides).to_vec(),
            attractions: record.attractions.clone(),
        }
    }
}

/// One of the category buttons above the card list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryControl {
    pub selector: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl CategoryControl {
    /// The four controls in display order, marking the one matching `active`.
    /// An unrecognized selection leaves every control inactive.
    pub fn all(active: &CategorySelector) -> Vec<Self> {
        [
            (constants::ALL_SELECTOR, constants::ALL_LABEL),
            (constants::APARTMENT, constants::APARTMENT_LABEL),
            (constants::HOTEL, constants::HOTEL_LABEL),
            (constants::LODGE, constants::LODGE_LABEL),
        ]
        .into_iter()
        .map(|(selector, label)| Self {
            selector,
            label,
            active: active.is_recognized() && active.as_str() == selector,
        })
        .collect()
    }
}
