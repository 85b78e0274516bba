//! Trail Segmentation
//!
//! This module turns a recorded GPS trail into polylines for drawing, and
//! accumulates raw receiver fixes into a trail.
//!
//! # Features
//!
//! - Haversine step distances between consecutive fixes
//! - Configurable break threshold (inclusive)
//! - Isolated fixes hidden from drawing without touching the trail data
//! - Fix recorder with duplicate and accuracy filtering
//!
//! # Example
//!
//! ```rust
//! use trailseg_core::trails::{Fix, FixOutcome, TrailRecorder};
//! use trailseg_core::{Coordinate, RecorderConfig, SegmenterConfig};
//!
//! let segmenter = SegmenterConfig::new(1000.0).unwrap();
//! let mut recorder = TrailRecorder::new(segmenter, RecorderConfig::default());
//!
//! // Record a fix
//! let outcome = recorder.push(Fix::new(Coordinate::new(35.681236, 139.767125), 8.0));
//! assert_eq!(outcome, FixOutcome::Appended);
//!
//! // Get drawable segments
//! let segments = recorder.segments();
//! assert!(segments.is_empty());
//! ```

mod recorder;
mod segmentation;

pub use recorder::*;
pub use segmentation::*;
