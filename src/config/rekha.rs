//! Main RekhaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::MapConfig;
use crate::sensor::CameraModel;

use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::publish::PublishSection;
use super::sensor::SensorSection;

/// Full RekhaMap configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RekhaConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Sensor model and camera settings
    #[serde(default)]
    pub sensor: SensorSection,

    /// Publication settings
    #[serde(default)]
    pub publish: PublishSection,
}

impl RekhaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to MapConfig for GridMap
    pub fn to_map_config(&self) -> MapConfig {
        MapConfig {
            grid: self.grid.to_grid_config(),
            log_odds: self.sensor.model.to_log_odds_config(),
        }
    }

    /// Get the camera projection model
    pub fn camera_model(&self) -> Result<CameraModel> {
        self.sensor.camera.to_camera_model()
    }

    /// Check every section that has constraints
    pub fn validate(&self) -> Result<()> {
        self.to_map_config().validate()?;
        self.camera_model()?;
        Ok(())
    }
}
