pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod logging;
pub mod metrics;
pub mod types;
pub mod view;
pub mod web;

pub use catalog::{AmenityOverrides, Catalog};
pub use error::{ListingError, Result};
pub use filter::{filter, resolve_amenities};
pub use types::{Category, CategorySelector, PropertyRecord};
pub use view::{CardView, CategoryControl, Notification, ViewController};
