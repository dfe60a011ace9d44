// Core algorithm exports
pub mod direction;
pub mod distance;
pub mod links;

pub use direction::DirectionRanker;
pub use distance::great_circle_distance;
pub use links::{map_url, road_view_url};
