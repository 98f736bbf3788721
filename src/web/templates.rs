use askama::Template;

use crate::view::{CardView, CategoryControl, Notification, ViewController};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub active: String,
    pub controls: Vec<CategoryControl>,
    pub cards: Vec<CardView>,
    pub notification: Option<Notification>,
}

impl IndexTemplate {
    pub fn from_view(view: &ViewController, notification: Option<Notification>) -> Self {
        Self {
            active: view.active_category().to_string(),
            controls: view.category_controls(),
            cards: view.cards().to_vec(),
            notification,
        }
    }
}

#[derive(Template)]
#[template(path = "property_list.html")]
pub struct PropertyListTemplate {
    pub active: String,
    pub cards: Vec<CardView>,
}

impl PropertyListTemplate {
    pub fn from_view(view: &ViewController) -> Self {
        Self {
            active: view.active_category().to_string(),
            cards: view.cards().to_vec(),
        }
    }
}

#[derive(Template)]
#[template(path = "notification.html")]
pub struct NotificationTemplate {
    pub notification: Notification,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AmenityOverrides, Catalog};
    use crate::types::{Category, PropertyRecord};
    use std::sync::Arc;

    fn hostile_catalog() -> Catalog {
        let record = PropertyRecord {
            id: 1,
            title: "<script>alert('x')</script>".to_string(),
            description: "Tom & Jerry's \"place\"".to_string(),
            category: Category::Apartment,
            price: "$1".to_string(),
            image_url: "\" onerror=\"alert(1)".to_string(),
            amenities: vec!["<b>Pool</b>".to_string()],
            location: "Lusaka".to_string(),
            attractions: vec!["<i>Market</i> - 1km".to_string()],
        };
        Catalog::new(vec![record], AmenityOverrides::default()).unwrap()
    }

    #[test]
    fn test_catalog_text_is_escaped() {
        let mut view = ViewController::new(Arc::new(hostile_catalog()));
        view.render_initial();
        let html = PropertyListTemplate::from_view(&view).render().unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>Pool</b>"));
        assert!(!html.contains("<i>Market</i>"));
        assert!(!html.contains("\" onerror=\""));
        assert!(html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_index_marks_active_control() {
        let mut view = ViewController::new(Arc::new(Catalog::seed()));
        view.select("lodge");
        let html = IndexTemplate::from_view(&view, None).render().unwrap();

        assert!(html.contains(r#"data-category="lodge" class="category-btn active""#));
        assert!(html.contains(r#"data-category="hotel" class="category-btn""#));
        assert!(html.contains("Wilderness Safari Lodge"));
        assert!(html.contains("Riverside Eco-Lodge"));
        assert!(!html.contains("Grand Hotel Lusaka"));
    }

    #[test]
    fn test_notification_fragment() {
        let template = NotificationTemplate {
            notification: Notification::unavailable(99),
        };
        let html = template.render().unwrap();
        assert!(html.contains("notification unavailable"));
        assert!(html.contains("Listing 99 is no longer available."));
    }
}
