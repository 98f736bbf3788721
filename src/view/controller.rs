use crate::catalog::Catalog;
use crate::filter::filter;
use crate::metrics::ViewMetrics;
use crate::types::CategorySelector;
use crate::view::{CardView, CategoryControl, Notification};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns the active category and the rendered card list for one page.
///
/// Starts unrendered with `all` active. Every selection replaces the whole
/// card list before returning, so there is never a partially rendered state.
#[derive(Debug, Clone)]
pub struct ViewController {
    catalog: Arc<Catalog>,
    active: CategorySelector,
    cards: Vec<CardView>,
    rendered: bool,
}

impl ViewController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            active: CategorySelector::All,
            cards: Vec::new(),
            rendered: false,
        }
    }

    /// First render, before any selection event
    pub fn render_initial(&mut self) -> &[CardView] {
        self.select_category(CategorySelector::All)
    }

    /// Handle a category-selection event. Total: unknown values are accepted
    /// and render zero cards.
    pub fn select(&mut self, raw: &str) -> &[CardView] {
        self.select_category(CategorySelector::parse(raw))
    }

    pub fn select_category(&mut self, selector: CategorySelector) -> &[CardView] {
        if !selector.is_recognized() {
            warn!("Unrecognized category '{}' selected, rendering no cards", selector);
        }

        let overrides = self.catalog.overrides();
        let cards: Vec<CardView> = filter(self.catalog.list_all(), &selector)
            .into_iter()
            .map(|record| CardView::project(record, overrides))
            .collect();

        debug!("Rendered {} cards for category '{}'", cards.len(), selector);
        ViewMetrics::record_selection(cards.len());

        self.active = selector;
        self.cards = cards;
        self.rendered = true;
        &self.cards
    }

    /// Handle a book request. Never fails: an unknown id yields an
    /// `Unavailable` notification and leaves the view untouched.
    pub fn book(&self, id: u32) -> Notification {
        match self.catalog.find_by_id(id) {
            Some(record) => {
                info!("Booking requested for '{}' ({})", record.title, id);
                ViewMetrics::record_booking_confirmed();
                Notification::confirmed(id, &record.title, &record.price)
            }
            None => {
                warn!("Booking requested for unknown listing {}", id);
                ViewMetrics::record_booking_unavailable();
                Notification::unavailable(id)
            }
        }
    }

    pub fn active_category(&self) -> &CategorySelector {
        &self.active
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    pub fn category_controls(&self) -> Vec<CategoryControl> {
        CategoryControl::all(&self.active)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
