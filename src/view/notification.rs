use serde::Serialize;
use std::fmt;

/// Single message produced by the book action, delivered by whatever
/// notification surface the host provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Notification {
    Confirmed { property_id: u32, message: String },
    Unavailable { property_id: u32, message: String },
}

impl Notification {
    pub fn confirmed(property_id: u32, title: &str, price: &str) -> Self {
        Notification::Confirmed {
            property_id,
            message: format!(
                "Booking {} for {}! In a real app, this would redirect to a booking page.",
                title, price
            ),
        }
    }

    pub fn unavailable(property_id: u32) -> Self {
        Notification::Unavailable {
            property_id,
            message: format!("Listing {} is no longer available.", property_id),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notification::Confirmed { message, .. } | Notification::Unavailable { message, .. } => message,
        }
    }

    pub fn property_id(&self) -> u32 {
        match self {
            Notification::Confirmed { property_id, .. }
            | Notification::Unavailable { property_id, .. } => *property_id,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Notification::Confirmed { .. })
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
