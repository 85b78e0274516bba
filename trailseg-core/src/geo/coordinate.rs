//! Latitude/longitude pair

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the Earth's surface in decimal degrees.
///
/// Serialises as `{"lat": .., "lng": ..}`, the shape map widgets and the
/// trail-sharing backend exchange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, nominally -90 to 90
    pub lat: f64,
    /// Longitude in degrees, nominally -180 to 180
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Coordinate { lat, lng }
    }

    /// Great-circle distance to another coordinate in meters
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        super::distance(self, other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Coordinate::new(lat, lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        let c: Coordinate = (35.681236, 139.767125).into();
        assert_eq!(c, Coordinate::new(35.681236, 139.767125));
    }

    #[test]
    fn test_json_shape() {
        let c = Coordinate::new(35.5, 139.25);
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 35.5, "lng": 139.25 }));

        let back: Coordinate = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_display() {
        let c = Coordinate::new(35.681236, 139.767125);
        assert_eq!(format!("{}", c), "(35.681236, 139.767125)");
    }
}
