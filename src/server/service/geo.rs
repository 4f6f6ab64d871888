//! Great-circle distance helpers.
//!
//! Pure functions with no validation; callers are responsible for passing
//! coordinates in range.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate meters per degree of latitude, used to convert a radius in
/// meters into a bounding-box delta for candidate pre-filtering.
const METERS_PER_DEGREE: f64 = 111_000.0;

/// Haversine distance between two points in kilometers.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Half-width in degrees of a square bounding box that is guaranteed to
/// contain every point within `radius_meters`. Deliberately coarse; the
/// exact haversine check runs on whatever the box lets through.
pub fn bounding_box_delta_degrees(radius_meters: f64) -> f64 {
    radius_meters / METERS_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance_km(38.7223, -9.1393, 38.7223, -9.1393), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = distance_km(38.7223, -9.1393, 41.1579, -8.6291);
        let b = distance_km(41.1579, -8.6291, 38.7223, -9.1393);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = distance_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.19).abs() / 111.19 < 0.01, "got {}", d);
    }

    #[test]
    fn longitude_shrinks_with_latitude() {
        let at_equator = distance_km(0.0, 0.0, 0.0, 1.0);
        let at_60_north = distance_km(60.0, 0.0, 60.0, 1.0);
        assert!(at_60_north < at_equator / 1.9);
    }
}
