use serde::{Deserialize, Serialize};

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// The point a user searches from, usually the result of an address lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLocation {
    #[serde(rename = "addressName")]
    pub address_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl InputLocation {
    pub fn new(address_name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            address_name: address_name.into(),
            latitude,
            longitude,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}

/// Pharmacy record as returned by a candidate source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pharmacy {
    #[serde(rename = "pharmacyName")]
    pub pharmacy_name: String,
    #[serde(rename = "pharmacyAddress")]
    pub pharmacy_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Pharmacy {
    pub fn new(
        pharmacy_name: impl Into<String>,
        pharmacy_address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            pharmacy_name: pharmacy_name.into(),
            pharmacy_address: pharmacy_address.into(),
            latitude,
            longitude,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}

/// A ranked pharmacy relative to the input point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    #[serde(rename = "inputAddress")]
    pub input_address: String,
    #[serde(rename = "inputLatitude")]
    pub input_latitude: f64,
    #[serde(rename = "inputLongitude")]
    pub input_longitude: f64,
    #[serde(rename = "targetPharmacyName")]
    pub target_pharmacy_name: String,
    #[serde(rename = "targetAddress")]
    pub target_address: String,
    #[serde(rename = "targetLatitude")]
    pub target_latitude: f64,
    #[serde(rename = "targetLongitude")]
    pub target_longitude: f64,
    /// Great-circle distance in kilometers
    pub distance: f64,
}

/// Ranking limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionOptions {
    pub max_search_count: usize,
    pub radius_km: f64,
}

impl Default for DirectionOptions {
    fn default() -> Self {
        Self {
            max_search_count: 3,
            radius_km: 10.0,
        }
    }
}
