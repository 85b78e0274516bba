//! Trailseg CLI support
//!
//! File handling and reporting for the `trailseg` binary. The segmentation
//! itself lives in `trailseg-core`.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use trailseg_core::{Coordinate, PathSegmenter, Segment};

/// Path argument meaning "read standard input"
pub const STDIN_PATH: &str = "-";

/// Parse a trail from a JSON array of `{"lat": .., "lng": ..}` objects.
///
/// `null` entries are skipped; shared trails exported by the backend
/// contain them where a fix was lost.
pub fn parse_trail<R: Read>(reader: R) -> Result<Vec<Coordinate>> {
    let raw: Vec<Option<Coordinate>> =
        serde_json::from_reader(reader).context("Trail is not a JSON array of coordinates")?;
    let total = raw.len();
    let trail: Vec<Coordinate> = raw.into_iter().flatten().collect();
    if trail.len() != total {
        log::debug!("skipped {} null entries", total - trail.len());
    }
    Ok(trail)
}

/// Load a trail from a file, or from stdin when `path` is `-`
pub fn load_trail(path: &Path) -> Result<Vec<Coordinate>> {
    if path.as_os_str() == STDIN_PATH {
        log::debug!("reading trail from stdin");
        return parse_trail(io::stdin().lock());
    }

    let file = File::open(path).with_context(|| format!("Unable to open {}", path.display()))?;
    let trail = parse_trail(BufReader::new(file))
        .with_context(|| format!("Unable to read trail from {}", path.display()))?;
    log::info!("{}: loaded {} points", path.display(), trail.len());
    Ok(trail)
}

/// Summary of how a trail segments at a given threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailStats {
    pub threshold_m: f64,
    pub points: usize,
    pub segments: usize,
    /// Points hidden from drawing because they formed no line
    pub dropped_points: usize,
    /// Sum of all segment lengths in meters
    pub drawn_length_m: f64,
    /// Length of the trail if every point were connected, in meters
    pub raw_length_m: f64,
}

impl TrailStats {
    pub fn new(segmenter: &PathSegmenter, trail: &[Coordinate]) -> Self {
        let segments = segmenter.segment(trail);
        let drawn: usize = segments.iter().map(Segment::num_points).sum();
        TrailStats {
            threshold_m: segmenter.threshold_m(),
            points: trail.len(),
            segments: segments.len(),
            dropped_points: trail.len() - drawn,
            drawn_length_m: segments.iter().map(Segment::length_m).sum(),
            raw_length_m: trailseg_core::path_length(trail),
        }
    }
}

/// Serialise to a JSON string, optionally pretty-printed
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
