//! Haversine great-circle distance

use super::Coordinate;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in meters.
///
/// Haversine formula against a sphere of radius [`EARTH_RADIUS_M`]. The
/// result is zero for identical points, never negative, and exactly
/// symmetric in its operands.
///
/// The central angle uses `atan2` rather than `asin`, so antipodal points
/// where the haversine term reaches 1 stay inside the function's domain.
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Sum of the distances between consecutive coordinates in meters
pub fn path_length(points: &[Coordinate]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOKYO_STATION: Coordinate = Coordinate::new(35.681236, 139.767125);
    const NEAR_TOKYO_STATION: Coordinate = Coordinate::new(35.681300, 139.767200);
    const SHINJUKU_STATION: Coordinate = Coordinate::new(35.658034, 139.701636);

    #[test]
    fn test_identical_points() {
        assert!(distance(&TOKYO_STATION, &TOKYO_STATION).abs() < 1e-6);

        let pole = Coordinate::new(90.0, 0.0);
        assert!(distance(&pole, &pole).abs() < 1e-6);
    }

    #[test]
    fn test_close_points() {
        let d = distance(&TOKYO_STATION, &NEAR_TOKYO_STATION);
        assert!(d > 0.0);
        assert!(d < 100.0, "expected ~10 m, got {:.1} m", d);
    }

    #[test]
    fn test_distant_points() {
        let d = distance(&TOKYO_STATION, &SHINJUKU_STATION);
        assert!(d > 5000.0, "expected ~6-7 km, got {:.0} m", d);
        assert!(d < 8000.0, "expected ~6-7 km, got {:.0} m", d);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            (TOKYO_STATION, SHINJUKU_STATION),
            (TOKYO_STATION, NEAR_TOKYO_STATION),
            (Coordinate::new(-33.8688, 151.2093), Coordinate::new(51.5074, -0.1278)),
            (Coordinate::new(10.0, 179.9), Coordinate::new(-10.0, -179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(&a, &b), distance(&b, &a));
        }
    }

    #[test]
    fn test_one_degree_latitude() {
        // One degree along a meridian is R * pi / 180
        let d = distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(1.0, 0.0));
        assert_relative_eq!(d, EARTH_RADIUS_M * std::f64::consts::PI / 180.0, epsilon = 1e-6);
    }

    #[test]
    fn test_antipodal_points() {
        let d = distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 180.0));
        assert!(d.is_finite());
        assert_relative_eq!(d, EARTH_RADIUS_M * std::f64::consts::PI, epsilon = 1e-3);
    }

    #[test]
    fn test_date_line_crossing() {
        // 0.2 degrees of longitude at the equator, not 359.8
        let d = distance(&Coordinate::new(0.0, 179.9), &Coordinate::new(0.0, -179.9));
        assert_relative_eq!(d, EARTH_RADIUS_M * 0.2_f64.to_radians(), max_relative = 1e-9);
    }

    #[test]
    fn test_out_of_range_input_is_accepted() {
        let d = distance(&Coordinate::new(95.0, 200.0), &Coordinate::new(-95.0, -200.0));
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn test_path_length() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[TOKYO_STATION]), 0.0);

        let track = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0), Coordinate::new(0.0, 2.0)];
        let one_degree = EARTH_RADIUS_M * 1.0_f64.to_radians();
        assert_relative_eq!(path_length(&track), 2.0 * one_degree, max_relative = 1e-9);
    }
}
