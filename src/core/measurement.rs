//! Polar range measurements in the robot frame.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

/// A single range-like observation along a ray.
///
/// `angle` is relative to the robot heading (radians, CCW positive) and
/// `distance` is the range along that ray in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Ray angle relative to robot heading (radians)
    pub angle: f32,
    /// Range along the ray (meters, >= 0)
    pub distance: f32,
}

impl Measurement {
    /// Create a measurement, rejecting non-finite values and negative ranges.
    pub fn new(angle: f32, distance: f32) -> Result<Self> {
        if !angle.is_finite() || !distance.is_finite() || distance < 0.0 {
            return Err(MapError::InvalidMeasurement { angle, distance });
        }
        Ok(Self { angle, distance })
    }

    /// Check a measurement that was built directly or deserialized.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.angle, self.distance).map(|_| ())
    }
}
