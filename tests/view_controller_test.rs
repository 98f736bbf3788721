use stay_listings::{filter, resolve_amenities, Catalog, CategorySelector, ViewController};
use std::sync::Arc;

fn ids(view: &ViewController) -> Vec<u32> {
    view.cards().iter().map(|c| c.id).collect()
}

#[test]
fn test_category_round_trip_scenario() {
    let catalog = Arc::new(Catalog::seed());
    let mut view = ViewController::new(catalog.clone());

    view.render_initial();
    assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6]);

    view.select("apartment");
    assert_eq!(ids(&view), vec![1, 4]);

    view.select("all");
    assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6]);
    let titles: Vec<&str> = view.cards().iter().map(|c| c.title.as_str()).collect();
    let declared: Vec<&str> = catalog.list_all().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, declared);
}

#[test]
fn test_booking_scenario() {
    let mut view = ViewController::new(Arc::new(Catalog::seed()));
    view.render_initial();

    let confirmation = view.book(3);
    assert!(confirmation.is_confirmed());
    assert!(confirmation.message().contains("Wilderness Safari Lodge"));
    assert!(confirmation.message().contains("$180/night"));

    let missing = view.book(99);
    assert!(!missing.is_confirmed());
    assert_eq!(missing.property_id(), 99);
    // View keeps working after an unknown id
    assert_eq!(view.select("lodge").len(), 2);
}

#[test]
fn test_cards_use_resolved_amenities() {
    let catalog = Arc::new(Catalog::seed());
    let mut view = ViewController::new(catalog.clone());
    view.render_initial();

    for card in view.cards() {
        let record = catalog.find_by_id(card.id).unwrap();
        assert_eq!(card.amenities, resolve_amenities(record, catalog.overrides()));
    }
}

#[test]
fn test_filter_matches_view_for_every_selector() {
    let catalog = Arc::new(Catalog::seed());
    let mut view = ViewController::new(catalog.clone());

    for raw in ["all", "apartment", "hotel", "lodge", "nonexistent"] {
        view.select(raw);
        let expected: Vec<u32> = filter(catalog.list_all(), &CategorySelector::parse(raw))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids(&view), expected, "selector {}", raw);
    }
}
