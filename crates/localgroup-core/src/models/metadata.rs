use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Descriptive record for the catalog as a whole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Dataset version tag
    pub version: String,

    /// Fixed creation date, serialized as `YYYY-MM-DD`
    pub created: NaiveDate,

    /// Number of galaxies in the accompanying galaxy list
    pub galaxy_count: usize,

    /// Literature sources, in citation order
    pub sources: Vec<SourceEntry>,

    pub coordinate_system: String,

    pub notes: String,
}

impl Metadata {
    /// Replace the galaxy count with the number of records actually produced
    pub fn with_galaxy_count(mut self, count: usize) -> Self {
        self.galaxy_count = count;
        self
    }
}

/// A literature source; carries a URL, a citation, or both
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,

    pub description: String,
}

impl SourceEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), url: None, citation: None, description: description.into() }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = Some(citation.into());
        self
    }
}
