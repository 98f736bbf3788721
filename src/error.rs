use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Listing {0} not found")]
    NotFound(u32),

    #[error("Unrecognized category: {0}")]
    UnrecognizedCategory(String),

    #[error("Duplicate listing id: {0}")]
    DuplicateId(u32),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ListingError>;
