//! Local Group Core - Domain models, errors, and configuration
//!
//! This crate contains the value types shared by the coordinate, catalog, and
//! CLI crates of the Local Group catalog builder.

pub mod config;
pub mod error;
pub mod models;
pub mod numeric;

pub use error::{CatalogError, Result};
