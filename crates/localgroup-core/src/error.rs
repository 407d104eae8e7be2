//! Error types for the Local Group catalog

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    // Coordinate errors
    #[error("Malformed {field} coordinate '{value}': {reason}")]
    MalformedCoordinate {
        field: String,
        value: String,
        reason: String,
    },

    // Table errors
    #[error("Invalid distance for {name}: {value} (must be finite and non-negative)")]
    InvalidDistance { name: String, value: f64 },

    #[error("Duplicate galaxy id '{id}' in catalog table")]
    DuplicateId { id: String },

    // Lookup errors
    #[error("Galaxy not found: {query}")]
    GalaxyNotFound { query: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CatalogError {
    pub fn malformed(field: &str, value: &str, reason: impl Into<String>) -> Self {
        CatalogError::MalformedCoordinate {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
