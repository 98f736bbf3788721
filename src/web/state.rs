use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::CategorySelector;
use crate::view::ViewController;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub strict_categories: bool,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, strict_categories: bool) -> Self {
        Self {
            catalog,
            strict_categories,
        }
    }

    /// Parse a requested category, honouring strict mode
    pub fn selector(&self, raw: Option<&str>) -> Result<CategorySelector> {
        let raw = raw.unwrap_or(crate::constants::ALL_SELECTOR);
        if self.strict_categories {
            CategorySelector::parse_strict(raw)
        } else {
            Ok(CategorySelector::parse(raw))
        }
    }

    /// A fresh controller per request, rendered for `selector`
    pub fn view_for(&self, selector: CategorySelector) -> ViewController {
        let mut view = ViewController::new(self.catalog.clone());
        view.select_category(selector);
        view
    }
}
