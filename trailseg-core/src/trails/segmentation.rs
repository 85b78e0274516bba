//! Distance-based trail segmentation
//!
//! GPS receivers occasionally report a fix far away from the real position:
//! signal loss indoors, multipath, or a stale cached fix reused after the
//! device slept. A straight line to or from such a fix misrepresents the path
//! that was travelled. Segmentation breaks continuity at every step longer
//! than the threshold so the renderer draws each run as its own polyline.
//! Nothing is removed from the trail itself.

use serde::Serialize;
use std::cmp::Ordering;

use crate::config::SegmenterConfig;
use crate::geo::{self, Coordinate};

/// One continuously drawable polyline of at least two points.
///
/// Only the segmenter creates segments, so the length invariant always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    points: Vec<Coordinate>,
}

impl Segment {
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Number of points, always >= 2
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> &Coordinate {
        &self.points[0]
    }

    pub fn last(&self) -> &Coordinate {
        &self.points[self.points.len() - 1]
    }

    /// Drawn length of the polyline in meters
    pub fn length_m(&self) -> f64 {
        geo::path_length(&self.points)
    }
}

/// Split a trail into drawable segments.
///
/// Single left-to-right pass. Consecutive points at most `threshold_m`
/// apart stay in the same run. A longer step closes the current run and the
/// far point seeds the next one. Runs that end with a single point are
/// dropped: a lone fix bracketed by two jumps cannot be drawn as a line.
///
/// Total over its input. Empty and single-point trails give no segments. A
/// NaN threshold never compares as within range, so nothing is connected.
pub fn segment(points: &[Coordinate], threshold_m: f64) -> Vec<Segment> {
    let mut segments = Vec::new();
    let Some((first, rest)) = points.split_first() else {
        return segments;
    };

    let mut run = vec![*first];
    let mut previous = first;
    for point in rest {
        let d = geo::distance(previous, point);
        if d <= threshold_m {
            run.push(*point);
        } else {
            log::trace!(
                "segment break: {} -> {} is {:.0} m (threshold {} m)",
                previous,
                point,
                d,
                threshold_m
            );
            let finished = std::mem::replace(&mut run, vec![*point]);
            push_run(&mut segments, finished);
        }
        previous = point;
    }
    push_run(&mut segments, run);

    log::debug!(
        "segmented {} points into {} segments",
        points.len(),
        segments.len()
    );
    segments
}

fn push_run(segments: &mut Vec<Segment>, run: Vec<Coordinate>) {
    if run.len() >= 2 {
        segments.push(Segment { points: run });
    }
}

/// Segmentation engine bound to a configured threshold.
///
/// Holds no state besides its configuration; every call is independent, so
/// one segmenter can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegmenter {
    config: SegmenterConfig,
}

impl PathSegmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        PathSegmenter { config }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    pub fn threshold_m(&self) -> f64 {
        self.config.threshold_m()
    }

    /// Great-circle distance in meters, see [`geo::distance`]
    pub fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        geo::distance(a, b)
    }

    /// Whether a step between two consecutive fixes would break the line
    pub fn is_break(&self, a: &Coordinate, b: &Coordinate) -> bool {
        self.exceeds_threshold(geo::distance(a, b))
    }

    /// Whether a step of `distance_m` meters would break the line.
    /// NaN distances break, as they do in [`segment`].
    pub fn exceeds_threshold(&self, distance_m: f64) -> bool {
        matches!(
            distance_m.partial_cmp(&self.config.threshold_m()),
            Some(Ordering::Greater) | None
        )
    }

    /// Split a trail into drawable segments, see [`segment`]
    pub fn segment(&self, points: &[Coordinate]) -> Vec<Segment> {
        segment(points, self.config.threshold_m())
    }
}
