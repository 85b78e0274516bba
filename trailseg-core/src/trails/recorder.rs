//! Fix recorder
//!
//! Accumulates receiver fixes into a trail in recording order. Two kinds of
//! fix are refused: exact repeats of the last recorded point, and fixes whose
//! reported accuracy is too poor to trust. Long jumps are kept, since the
//! segmenter already hides them from drawing, but they are logged.

use serde::{Deserialize, Serialize};

use crate::config::{RecorderConfig, SegmenterConfig};
use crate::geo::Coordinate;

use super::segmentation::{PathSegmenter, Segment};

/// A single position report from a GPS receiver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fix {
    pub coordinate: Coordinate,
    /// Reported horizontal accuracy radius in meters
    pub accuracy_m: f64,
}

impl Fix {
    pub fn new(coordinate: Coordinate, accuracy_m: f64) -> Self {
        Fix {
            coordinate,
            accuracy_m,
        }
    }
}

/// What the recorder did with a fix
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FixOutcome {
    /// Added to the trail
    Appended,
    /// Added to the trail, but farther than the break threshold from the
    /// previous point
    Jump { distance_m: f64 },
    /// Same coordinate as the last recorded point; ignored
    Duplicate,
    /// Accuracy worse than the configured limit; ignored
    LowAccuracy,
}

impl FixOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, FixOutcome::Appended | FixOutcome::Jump { .. })
    }
}

/// Trail under construction
#[derive(Debug, Clone)]
pub struct TrailRecorder {
    segmenter: PathSegmenter,
    config: RecorderConfig,
    trail: Vec<Coordinate>,
}

impl TrailRecorder {
    pub fn new(segmenter: SegmenterConfig, config: RecorderConfig) -> Self {
        TrailRecorder {
            segmenter: PathSegmenter::new(segmenter),
            config,
            trail: Vec::new(),
        }
    }

    /// Continue an existing trail, e.g. one restored from storage.
    ///
    /// The points are taken as-is; acceptance rules only apply to new fixes.
    pub fn with_trail(
        segmenter: SegmenterConfig,
        config: RecorderConfig,
        trail: Vec<Coordinate>,
    ) -> Self {
        TrailRecorder {
            segmenter: PathSegmenter::new(segmenter),
            config,
            trail,
        }
    }

    /// Offer a fix to the trail
    pub fn push(&mut self, fix: Fix) -> FixOutcome {
        let point = fix.coordinate;
        let last = self.trail.last().copied();

        if last == Some(point) {
            log::trace!("ignoring repeated fix at {}", point);
            return FixOutcome::Duplicate;
        }

        if fix.accuracy_m > self.config.max_accuracy_m() {
            log::warn!(
                "ignoring fix at {}: accuracy {:.0} m exceeds {} m",
                point,
                fix.accuracy_m,
                self.config.max_accuracy_m()
            );
            return FixOutcome::LowAccuracy;
        }

        let outcome = match last.map(|last| self.segmenter.distance(&last, &point)) {
            Some(distance_m) if self.segmenter.exceeds_threshold(distance_m) => {
                log::warn!(
                    "recording fix {:.0} m from the previous point (threshold {} m)",
                    distance_m,
                    self.segmenter.threshold_m()
                );
                FixOutcome::Jump { distance_m }
            }
            _ => FixOutcome::Appended,
        };

        self.trail.push(point);
        outcome
    }

    pub fn trail(&self) -> &[Coordinate] {
        &self.trail
    }

    pub fn last(&self) -> Option<&Coordinate> {
        self.trail.last()
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    pub fn clear(&mut self) {
        self.trail.clear();
    }

    /// Hand over the recorded points, leaving the recorder empty
    pub fn take_trail(&mut self) -> Vec<Coordinate> {
        std::mem::take(&mut self.trail)
    }

    /// Drawable segments of the current trail, recomputed on every call
    pub fn segments(&self) -> Vec<Segment> {
        self.segmenter.segment(&self.trail)
    }
}
