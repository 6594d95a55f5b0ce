//! Grid configuration section.

use serde::{Deserialize, Serialize};

use crate::grid::GridConfig;

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Mapped area width (meters)
    #[serde(default = "defaults::extent")]
    pub width: f32,

    /// Mapped area height (meters)
    #[serde(default = "defaults::extent")]
    pub height: f32,

    /// Cell resolution (meters)
    #[serde(default = "defaults::resolution")]
    pub resolution: f32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 2.0,
            resolution: 0.02,
        }
    }
}

impl GridSection {
    /// Convert to GridConfig
    pub fn to_grid_config(&self) -> GridConfig {
        GridConfig::for_area(self.width, self.height, self.resolution)
    }
}
