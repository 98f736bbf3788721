/// Selector values accepted from category controls and query strings.
/// `all` is a filter meta-value only, never a record's own category.
pub const ALL_SELECTOR: &str = "all";
pub const APARTMENT: &str = "apartment";
pub const HOTEL: &str = "hotel";
pub const LODGE: &str = "lodge";

// Labels shown on the category controls, in display order
pub const ALL_LABEL: &str = "All";
pub const APARTMENT_LABEL: &str = "Apartments";
pub const HOTEL_LABEL: &str = "Hotels";
pub const LODGE_LABEL: &str = "Lodges";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Get all recognized category selectors, `all` first
pub fn get_supported_selectors() -> Vec<&'static str> {
    vec![ALL_SELECTOR, APARTMENT, HOTEL, LODGE]
}
