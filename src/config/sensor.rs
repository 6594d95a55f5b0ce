//! Sensor model and camera configuration sections.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{LogOddsConfig, probability_to_log_odds};
use crate::sensor::CameraModel;

use super::defaults;

/// Sensor configuration section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SensorSection {
    /// Inverse sensor model
    #[serde(default)]
    pub model: SensorModelSettings,

    /// Camera projection
    #[serde(default)]
    pub camera: CameraSettings,
}

/// Inverse sensor model, expressed as probabilities
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SensorModelSettings {
    /// Probability that the ray tip is occupied
    #[serde(default = "defaults::p_occupied")]
    pub p_occupied: f32,

    /// Probability that a cell the ray crosses is occupied
    #[serde(default = "defaults::p_free")]
    pub p_free: f32,

    /// Lower log-odds saturation bound
    #[serde(default = "defaults::l_min")]
    pub l_min: f32,

    /// Upper log-odds saturation bound
    #[serde(default = "defaults::l_max")]
    pub l_max: f32,
}

impl Default for SensorModelSettings {
    fn default() -> Self {
        Self {
            p_occupied: 0.7,
            p_free: 0.3,
            l_min: -10.0,
            l_max: 10.0,
        }
    }
}

impl SensorModelSettings {
    /// Convert to LogOddsConfig
    pub fn to_log_odds_config(&self) -> LogOddsConfig {
        LogOddsConfig {
            l_occ: probability_to_log_odds(self.p_occupied),
            l_free: probability_to_log_odds(self.p_free),
            l_min: self.l_min,
            l_max: self.l_max,
        }
    }
}

/// Camera projection settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Horizontal field of view (degrees)
    #[serde(default = "defaults::horizontal_fov_deg")]
    pub horizontal_fov_deg: f32,

    /// Distance at the bottom image row (meters)
    #[serde(default = "defaults::min_distance")]
    pub min_distance: f32,

    /// Distance at the top image row (meters)
    #[serde(default = "defaults::max_distance")]
    pub max_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            horizontal_fov_deg: 62.0,
            min_distance: 0.5,
            max_distance: 5.0,
        }
    }
}

impl CameraSettings {
    /// Convert to a validated CameraModel
    pub fn to_camera_model(&self) -> Result<CameraModel> {
        CameraModel::new(
            self.horizontal_fov_deg.to_radians(),
            self.min_distance,
            self.max_distance,
        )
    }
}
