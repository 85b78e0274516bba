//! Geographic Primitives
//!
//! Coordinate type and great-circle distance on a spherical Earth.
//!
//! Coordinates come straight from a GPS receiver or from stored trails and
//! are never validated or clamped here. Out-of-range values still produce a
//! number; deciding whether that number is meaningful is up to the caller.

mod coordinate;
mod haversine;

pub use coordinate::Coordinate;
pub use haversine::{distance, path_length, EARTH_RADIUS_M};
