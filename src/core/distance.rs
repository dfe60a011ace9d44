use crate::models::Location;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers
///
/// Uses the spherical law of cosines:
/// `d = R * acos(sin(lat1)·sin(lat2) + cos(lat1)·cos(lat2)·cos(lon1 − lon2))`
///
/// The `acos` argument is clamped to [-1, 1]; for identical or nearly
/// identical points rounding can push it just past 1.0.
///
/// NaN coordinates yield a NaN distance.
#[inline]
pub fn great_circle_distance(from: &Location, to: &Location) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lon2 = to.longitude.to_radians();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos();

    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_great_circle_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london = Location::new(51.5074, -0.1278);
        let paris = Location::new(48.8566, 2.3522);

        let distance = great_circle_distance(&london, &paris);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_same_point_is_zero() {
        let p = Location::new(37.5, 127.0);
        assert_eq!(great_circle_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_nearly_identical_points_are_finite() {
        let a = Location::new(37.566_535_7, 126.977_969_2);
        let b = Location::new(37.566_535_8, 126.977_969_2);

        let distance = great_circle_distance(&a, &b);
        assert!(distance.is_finite());
        assert!(distance < 0.001);
    }

    #[test]
    fn test_antipodal_points() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(0.0, 180.0);

        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((great_circle_distance(&a, &b) - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric() {
        let a = Location::new(37.5, 127.0);
        let b = Location::new(37.51, 127.0);

        let ab = great_circle_distance(&a, &b);
        let ba = great_circle_distance(&b, &a);
        assert!((ab - ba).abs() < 1e-9);
        assert!((ab - 1.112).abs() < 0.01, "Expected ~1.11km, got {}", ab);
    }

    #[test]
    fn test_nan_propagates() {
        let a = Location::new(f64::NAN, 127.0);
        let b = Location::new(37.5, 127.0);

        assert!(great_circle_distance(&a, &b).is_nan());
    }
}
