//! Unified configuration loading for RekhaMap.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rekha_map::config::RekhaConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = RekhaConfig::load_default()?;
//!
//! // Convert to runtime configs
//! let map_config = config.to_map_config();
//! let camera = config.camera_model()?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Mapped area and resolution |
//! | [`SensorSection`] | Inverse sensor model and camera projection |
//! | [`PublishSection`] | Occupancy threshold and frame id |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   width: 2.0        # meters
//!   height: 2.0
//!   resolution: 0.02  # 2cm cells
//!
//! sensor:
//!   model:
//!     p_occupied: 0.7
//!     p_free: 0.3
//!     l_min: -10.0    # saturation
//!     l_max: 10.0
//!   camera:
//!     horizontal_fov_deg: 62.0
//!     min_distance: 0.5
//!     max_distance: 5.0
//!
//! publish:
//!   occupied_threshold: 0.5
//!   frame_id: map
//! ```

mod defaults;
mod error;
mod grid;
mod publish;
mod rekha;
mod sensor;

// Re-export main types
pub use error::ConfigLoadError;
pub use rekha::RekhaConfig;

// Re-export section types
pub use grid::GridSection;
pub use publish::PublishSection;
pub use sensor::{CameraSettings, SensorModelSettings, SensorSection};
