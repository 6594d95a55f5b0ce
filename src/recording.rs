//! Recorded pose / measurement cycles loaded from YAML.
//!
//! A recording replays what the localizer and the camera pipeline delivered:
//!
//! ```yaml
//! name: corridor
//! cycles:
//!   - pose: { x: 0.0, y: 0.0, theta: 0.0 }
//!     measurements:
//!       - { angle: 0.0, distance: 0.5 }
//!   - measurements: []          # no new pose, empty batch
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigLoadError;
use crate::core::{Measurement, Pose2D};

/// A sequence of mapping cycles
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recording {
    /// Human-readable name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Cycles in arrival order
    pub cycles: Vec<Cycle>,
}

/// One cycle: an optional pose update followed by a measurement batch
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cycle {
    /// Pose received before this batch (None = keep previous pose)
    #[serde(default)]
    pub pose: Option<Pose2D>,

    /// Measurements in the robot frame
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

impl Recording {
    /// Load a recording from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Total number of measurements across all cycles
    pub fn measurement_count(&self) -> usize {
        self.cycles.iter().map(|c| c.measurements.len()).sum()
    }
}
