//! Category filtering and amenity resolution. Both functions are pure.

use crate::catalog::AmenityOverrides;
use crate::types::{CategorySelector, PropertyRecord};

/// Select the records matching `selector`, preserving catalog order.
///
/// `All` yields every record, `Only(c)` the subsequence whose category is `c`,
/// and `Unrecognized` yields nothing.
pub fn filter<'a>(records: &'a [PropertyRecord], selector: &CategorySelector) -> Vec<&'a PropertyRecord> {
    match selector {
        CategorySelector::All => records.iter().collect(),
        CategorySelector::Only(category) => records
            .iter()
            .filter(|record| record.category == *category)
            .collect(),
        CategorySelector::Unrecognized(_) => Vec::new(),
    }
}

/// Amenities to display for `record`: the category override when one exists,
/// otherwise the record's own list.
pub fn resolve_amenities<'a>(record: &'a PropertyRecord, overrides: &'a AmenityOverrides) -> &'a [String] {
    overrides
        .get(record.category)
        .unwrap_or(record.amenities.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::Category;

    fn ids(records: &[&PropertyRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_all_returns_full_catalog_in_order() {
        let catalog = Catalog::seed();
        let result = filter(catalog.list_all(), &CategorySelector::All);
        let expected: Vec<&PropertyRecord> = catalog.list_all().iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_single_category_is_ordered_subsequence() {
        let catalog = Catalog::seed();
        let all = catalog.list_all();

        for category in Category::ALL {
            let result = filter(all, &CategorySelector::Only(category));
            assert!(!result.is_empty());
            assert!(result.iter().all(|r| r.category == category));

            // Positions in the full catalog must be strictly increasing
            let positions: Vec<usize> = result
                .iter()
                .map(|r| all.iter().position(|a| a.id == r.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        assert_eq!(ids(&filter(all, &CategorySelector::Only(Category::Apartment))), vec![1, 4]);
        assert_eq!(ids(&filter(all, &CategorySelector::Only(Category::Hotel))), vec![2, 5]);
        assert_eq!(ids(&filter(all, &CategorySelector::Only(Category::Lodge))), vec![3, 6]);
    }

    #[test]
    fn test_unrecognized_category_yields_nothing() {
        let catalog = Catalog::seed();
        let selector = CategorySelector::parse("nonexistent");
        assert!(filter(catalog.list_all(), &selector).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::seed();
        let selector = CategorySelector::Only(Category::Lodge);
        assert_eq!(
            filter(catalog.list_all(), &selector),
            filter(catalog.list_all(), &selector)
        );
    }

    #[test]
    fn test_override_replaces_record_amenities() {
        let catalog = Catalog::seed();
        let hotel = catalog.find_by_id(2).unwrap();
        let resolved = resolve_amenities(hotel, catalog.overrides());
        assert_eq!(resolved, catalog.overrides().get(Category::Hotel).unwrap());
        assert_ne!(resolved, hotel.amenities.as_slice());
    }

    #[test]
    fn test_missing_override_falls_back_to_record_amenities() {
        let seed = Catalog::seed();
        let mut overrides = AmenityOverrides::default();
        overrides.insert(Category::Hotel, vec!["Pool".to_string()]);
        let catalog = Catalog::new(seed.list_all().to_vec(), overrides).unwrap();

        for record in catalog.list_all() {
            let resolved = resolve_amenities(record, catalog.overrides());
            if record.category == Category::Hotel {
                assert_eq!(resolved, ["Pool".to_string()]);
            } else {
                assert_eq!(resolved, record.amenities.as_slice());
            }
        }
    }
}
