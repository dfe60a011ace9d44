//! Pharmacy Direction - nearest-pharmacy lookup service
//!
//! Given an input coordinate, ranks pharmacies by great-circle distance,
//! keeps those within a radius and returns the nearest few.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{great_circle_distance, DirectionRanker};
pub use models::{Direction, DirectionOptions, InputLocation, Location, Pharmacy};
pub use services::{DirectionService, InMemoryPharmacySearch, PharmacySearch, SearchError};
