use serde::{Deserialize, Serialize};

use crate::models::domain::Direction;

/// A direction as presented to clients, with map links for the target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionView {
    #[serde(flatten)]
    pub direction: Direction,
    #[serde(rename = "mapUrl")]
    pub map_url: String,
    #[serde(rename = "roadViewUrl")]
    pub road_view_url: String,
}

/// Response for the direction search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionSearchResponse {
    pub directions: Vec<DirectionView>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
