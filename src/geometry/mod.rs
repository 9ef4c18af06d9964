use num_traits::Float;


/// Earth's mean radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two (latitude, longitude) pairs
/// using the haversine formula
/// https://en.wikipedia.org/wiki/Haversine_formula
/// Inputs are in degrees; the result is in the unit of `radius`.
pub fn great_circle_distance<T>(lat1: T, lon1: T, lat2: T, lon2: T, radius: T) -> T
where
    T: Float,
    {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (lon2 - lon1).to_radians();

    let two = T::one() + T::one();
    let a = (delta_lat / two).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / two).sin().powi(2);

    radius * two * a.sqrt().asin()
}

/// Haversine distance in miles, the heuristic metric for geographic graphs
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    great_circle_distance(lat1, lon1, lat2, lon2, EARTH_RADIUS_MILES)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // Portland, OR to Salem, OR
        let dist = haversine_miles(45.5152, -122.6784, 44.9429, -123.0351);
        assert!((dist - 43.186).abs() < 0.01, "got {dist}");
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let dist = haversine_miles(45.0, -122.0, 45.0, -122.0);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_haversine_symmetric() {
        let ab = haversine_miles(45.5152, -122.6784, 44.0521, -123.0868);
        let ba = haversine_miles(44.0521, -123.0868, 45.5152, -122.6784);
        assert!((ab - ba).abs() < 1e-9);
    }
}
