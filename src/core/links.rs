use crate::models::{Direction, DirectionView};

const MAP_BASE_URL: &str = "https://map.kakao.com/link/map/";
const ROAD_VIEW_BASE_URL: &str = "https://map.kakao.com/link/roadview/";

/// Map link that drops a named pin on the given point
pub fn map_url(name: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "{}{},{},{}",
        MAP_BASE_URL,
        urlencoding::encode(name),
        latitude,
        longitude
    )
}

/// Road view link for the given point
pub fn road_view_url(latitude: f64, longitude: f64) -> String {
    format!("{}{},{}", ROAD_VIEW_BASE_URL, latitude, longitude)
}

impl From<Direction> for DirectionView {
    fn from(direction: Direction) -> Self {
        let map_url = map_url(
            &direction.target_pharmacy_name,
            direction.target_latitude,
            direction.target_longitude,
        );
        let road_view_url = road_view_url(direction.target_latitude, direction.target_longitude);

        Self {
            direction,
            map_url,
            road_view_url,
        }
    }
}
