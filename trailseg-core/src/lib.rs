//! Trailseg Core - GPS trail distance and segmentation
//!
//! This crate contains the platform-independent part of the trail recorder:
//! great-circle distance between GPS fixes, and the segmentation that splits a
//! recorded trail into polylines that can be drawn without connecting wildly
//! displaced fixes.
//!
//! It performs no I/O. Front ends (the `trailseg` CLI, a map widget, a WASM
//! plugin) supply the coordinates and render the segments.
//!
//! # Modules
//!
//! - [`geo`]: coordinate type and haversine distance
//! - [`trails`]: segmentation engine and fix recorder
//! - [`config`]: validated configuration for both
//!
//! # Example
//!
//! ```rust
//! use trailseg_core::{Coordinate, PathSegmenter, SegmenterConfig};
//!
//! let config = SegmenterConfig::new(100.0).unwrap();
//! let segmenter = PathSegmenter::new(config);
//!
//! let trail = [
//!     Coordinate::new(35.681236, 139.767125),
//!     Coordinate::new(35.681300, 139.767200),
//!     Coordinate::new(35.691236, 139.767125),
//!     Coordinate::new(35.691300, 139.767200),
//! ];
//!
//! let segments = segmenter.segment(&trail);
//! assert_eq!(segments.len(), 2);
//! ```

pub mod config;
pub mod geo;
pub mod trails;

pub use config::{ConfigError, RecorderConfig, SegmenterConfig};
pub use geo::{distance, path_length, Coordinate, EARTH_RADIUS_M};
pub use trails::{segment, Fix, FixOutcome, PathSegmenter, Segment, TrailRecorder};
