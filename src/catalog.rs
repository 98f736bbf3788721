use crate::error::{ListingError, Result};
use crate::types::{Category, PropertyRecord};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Category-level amenity lists shown instead of a record's own amenities.
///
/// Keys are typed as `Category`, so the key set is always a subset of the
/// enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmenityOverrides(BTreeMap<Category, Vec<String>>);

impl AmenityOverrides {
    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.0.get(&category).map(Vec::as_slice)
    }

    pub fn insert(&mut self, category: Category, amenities: Vec<String>) {
        self.0.insert(category, amenities);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read-only collection of property listings plus the amenity overrides.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PropertyRecord>,
    overrides: AmenityOverrides,
}

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    properties: Vec<PropertyRecord>,
    #[serde(default)]
    amenity_overrides: BTreeMap<String, Vec<String>>,
}

impl AmenityOverrides {
    fn from_named(named: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut overrides = Self::default();
        for (name, amenities) in named {
            let category = Category::from_name(&name).ok_or_else(|| {
                ListingError::InvalidCatalog(format!("amenity override for unknown category '{}'", name))
            })?;
            overrides.insert(category, amenities);
        }
        Ok(overrides)
    }
}

impl Catalog {
    /// Build a catalog, rejecting empty input and duplicate ids
    pub fn new(records: Vec<PropertyRecord>, overrides: AmenityOverrides) -> Result<Self> {
        if records.is_empty() {
            return Err(ListingError::InvalidCatalog(
                "catalog contains no properties".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(ListingError::DuplicateId(record.id));
            }
        }

        debug!(
            "Built catalog with {} properties and {} amenity overrides",
            records.len(),
            overrides.len()
        );
        Ok(Self { records, overrides })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let overrides = AmenityOverrides::from_named(file.amenity_overrides)?;
        Self::new(file.properties, overrides)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ListingError::Config(format!(
                "Failed to read catalog file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!("Loaded {} properties from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Every record in declaration order
    pub fn list_all(&self) -> &[PropertyRecord] {
        &self.records
    }

    /// The record with `id`, or `None` when the catalog has no such listing
    pub fn find_by_id(&self, id: u32) -> Option<&PropertyRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Like `find_by_id`, but absence is reported as `ListingError::NotFound`
    pub fn require(&self, id: u32) -> Result<&PropertyRecord> {
        self.find_by_id(id).ok_or(ListingError::NotFound(id))
    }

    pub fn overrides(&self) -> &AmenityOverrides {
        &self.overrides
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The built-in ZamStay catalog: six listings and an override per category
    pub fn seed() -> Self {
        let records = vec![
            seed_record(
                1,
                "Modern City Apartment",
                "Luxury 2-bedroom apartment in city center",
                Category::Apartment,
                "$120/night",
                "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                &["Kitchen", "Laundry", "Parking", "WiFi", "Air Conditioning"],
                "Lusaka CBD",
                &["Manda Hill Mall - 2km", "Levy Junction - 3km", "Zambia National Museum - 1.5km"],
            ),
            seed_record(
                2,
                "Grand Hotel Lusaka",
                "5-star luxury hotel with premium amenities",
                Category::Hotel,
                "$220/night",
                "https://images.unsplash.com/photo-1566073771259-6a8506099945?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                &["Spa", "Pool", "Restaurant", "Conference Room", "24/7 Room Service"],
                "Longacres, Lusaka",
                &["Arcades Shopping Mall - 0.5km", "Levy Golf Course - 2km", "Zambia National Assembly - 3km"],
            ),
            seed_record(
                3,
                "Wilderness Safari Lodge",
                "Authentic lodge in the heart of nature",
                Category::Lodge,
                "$180/night",
                "https://images.unsplash.com/photo-1552733407-5d5c46c3bb3b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                &["Fireplace", "Guided Tours", "Wildlife Viewing", "Restaurant", "Bar"],
                "South Luangwa National Park",
                &["Luangwa River - 0.2km", "Game Drive Starting Point - 1km", "Local Village - 5km"],
            ),
            seed_record(
                4,
                "Cozy Studio Apartment",
                "Compact studio perfect for solo travelers",
                Category::Apartment,
                "$85/night",
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                &["Kitchenette", "WiFi", "Parking", "TV", "Workspace"],
                "Woodlands, Lusaka",
                &["East Park Mall - 1.5km", "University of Zambia - 3km", "Kalimba Reptile Park - 10km"],
            ),
            seed_record(
                5,
                "Business Hotel Suite",
                "Executive suite for business travelers",
                Category::Hotel,
                "$190/night",
                "https://images.unsplash.com/photo-1584132967334-10e028bd69f7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                &["Business Center", "Gym", "Airport Shuttle", "Breakfast Included", "Meeting Rooms"],
                "Kabulonga, Lusaka",
                &["Dutch Reformed Church - 0.5km", "Kalimba Farms - 4km", "Lusaka Golf Club - 2km"],
            ),
            seed_record(
                6,
                "Riverside Eco-Lodge",
                "Sustainable lodge with river views",
                Category::Lodge,
                "$150/night",
                "https://images.unsplash.com/photo-1571003123894-1f0594d2b5d9?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                &["Solar Power", "Organic Garden", "Canoeing", "Bird Watching", "Campfire Area"],
                "Kafue River",
                &["Kafue National Park - 15km", "Fishing Spots - 0.1km", "Local Craft Market - 3km"],
            ),
        ];

        let mut overrides = AmenityOverrides::default();
        overrides.insert(
            Category::Apartment,
            strings(&["Kitchen", "Laundry", "Parking", "WiFi", "Living Area"]),
        );
        overrides.insert(
            Category::Hotel,
            strings(&["Pool", "Spa", "Restaurant", "24/7 Concierge", "Room Service"]),
        );
        overrides.insert(
            Category::Lodge,
            strings(&["Nature Views", "Guided Tours", "Campfire", "Wildlife", "Restaurant"]),
        );

        Self { records, overrides }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn seed_record(
    id: u32,
    title: &str,
    description: &str,
    category: Category,
    price: &str,
    image_url: &str,
    amenities: &[&str],
    location: &str,
    attractions: &[&str],
) -> PropertyRecord {
    PropertyRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category,
        price: price.to_string(),
        image_url: image_url.to_string(),
        amenities: strings(amenities),
        location: location.to_string(),
        attractions: strings(attractions),
    }
}
