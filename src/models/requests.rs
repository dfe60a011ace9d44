use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::InputLocation;

/// Request to find the nearest pharmacies
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DirectionSearchRequest {
    #[serde(alias = "address_name", rename = "addressName", default)]
    pub address_name: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl From<DirectionSearchRequest> for InputLocation {
    fn from(req: DirectionSearchRequest) -> Self {
        InputLocation::new(req.address_name, req.latitude, req.longitude)
    }
}
