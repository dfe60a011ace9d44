// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Direction, DirectionOptions, InputLocation, Location, Pharmacy};
pub use requests::DirectionSearchRequest;
pub use responses::{DirectionSearchResponse, DirectionView, ErrorResponse, HealthResponse};
