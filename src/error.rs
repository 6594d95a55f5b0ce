//! Error types for RekhaMap

/// Result type alias
pub type Result<T> = std::result::Result<T, MapError>;

/// RekhaMap error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    /// Geometry or sensor model parameters that cannot build a map
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Pose with NaN or infinite components
    #[error("Invalid pose: ({x}, {y}, {theta})")]
    InvalidPose {
        /// X position
        x: f32,
        /// Y position
        y: f32,
        /// Heading
        theta: f32,
    },

    /// Measurement with a negative or non-finite range
    #[error("Invalid measurement: angle={angle}, distance={distance}")]
    InvalidMeasurement {
        /// Ray angle
        angle: f32,
        /// Ray distance
        distance: f32,
    },
}
