//! Publication settings section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Publication settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublishSection {
    /// Probability above which a published cell is occupied
    #[serde(default = "defaults::occupied_threshold")]
    pub occupied_threshold: f32,

    /// Frame id stamped on published grids
    #[serde(default = "defaults::frame_id")]
    pub frame_id: String,
}

impl Default for PublishSection {
    fn default() -> Self {
        Self {
            occupied_threshold: 0.5,
            frame_id: "map".to_string(),
        }
    }
}
