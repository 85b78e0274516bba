//! Segmenter and Recorder Configuration
//!
//! Both structs are (de)serialisable so front ends can load them from their
//! own settings files. Values are checked both by `new` and on
//! deserialisation, so a constructed config is always valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Horizontal accuracy limit used by the recorder unless configured
pub const DEFAULT_MAX_ACCURACY_M: f64 = 100.0;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("distance threshold must be a finite, non-negative number of meters, got {0}")]
    InvalidThreshold(f64),
    #[error("accuracy limit must be a finite, positive number of meters, got {0}")]
    InvalidAccuracyLimit(f64),
}

/// Segmentation settings
///
/// There is no default threshold: callers pick the distance that fits their
/// recording interval and mode of travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SegmenterConfigFields")]
pub struct SegmenterConfig {
    threshold_m: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SegmenterConfigFields {
    threshold_m: f64,
}

impl TryFrom<SegmenterConfigFields> for SegmenterConfig {
    type Error = ConfigError;

    fn try_from(fields: SegmenterConfigFields) -> Result<Self, Self::Error> {
        SegmenterConfig::new(fields.threshold_m)
    }
}

impl SegmenterConfig {
    pub fn new(threshold_m: f64) -> Result<Self, ConfigError> {
        if threshold_m.is_finite() && threshold_m >= 0.0 {
            Ok(SegmenterConfig { threshold_m })
        } else {
            Err(ConfigError::InvalidThreshold(threshold_m))
        }
    }

    /// Maximum distance in meters between two consecutive points that are
    /// still drawn connected. Inclusive.
    pub fn threshold_m(&self) -> f64 {
        self.threshold_m
    }
}

/// Fix acceptance settings for [`TrailRecorder`](crate::TrailRecorder)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RecorderConfigFields")]
pub struct RecorderConfig {
    max_accuracy_m: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecorderConfigFields {
    #[serde(default = "default_max_accuracy")]
    max_accuracy_m: f64,
}

fn default_max_accuracy() -> f64 {
    DEFAULT_MAX_ACCURACY_M
}

impl TryFrom<RecorderConfigFields> for RecorderConfig {
    type Error = ConfigError;

    fn try_from(fields: RecorderConfigFields) -> Result<Self, Self::Error> {
        RecorderConfig::new(fields.max_accuracy_m)
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        RecorderConfig {
            max_accuracy_m: DEFAULT_MAX_ACCURACY_M,
        }
    }
}

impl RecorderConfig {
    pub fn new(max_accuracy_m: f64) -> Result<Self, ConfigError> {
        if max_accuracy_m.is_finite() && max_accuracy_m > 0.0 {
            Ok(RecorderConfig { max_accuracy_m })
        } else {
            Err(ConfigError::InvalidAccuracyLimit(max_accuracy_m))
        }
    }

    /// Fixes reporting a horizontal accuracy worse than this are ignored
    pub fn max_accuracy_m(&self) -> f64 {
        self.max_accuracy_m
    }
}
