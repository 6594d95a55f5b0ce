//! 2D pose type for robot position and orientation.
//!
//! Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left, Z-up (right-handed)
//! - Counter-clockwise positive rotation

use serde::{Deserialize, Serialize};

use super::point::WorldPoint;
use crate::error::{MapError, Result};

/// A 2D pose representing position and orientation in the map frame.
///
/// Supplied once per cycle by the pose source. The mapper never mutates it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters.
    pub x: f32,
    /// Y position in meters.
    pub y: f32,
    /// Heading angle in radians, CCW positive from X-axis.
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose without validation.
    #[inline]
    pub const fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Create a pose, rejecting NaN or infinite components.
    pub fn try_new(x: f32, y: f32, theta: f32) -> Result<Self> {
        if !(x.is_finite() && y.is_finite() && theta.is_finite()) {
            return Err(MapError::InvalidPose { x, y, theta });
        }
        Ok(Self::new(x, y, theta))
    }

    /// Create a pose from a position and a unit quaternion orientation.
    ///
    /// Only the yaw is kept; roll and pitch are assumed zero on a planar floor.
    pub fn from_quaternion(x: f32, y: f32, quat: Quaternion) -> Result<Self> {
        Self::try_new(x, y, quat.yaw())
    }

    /// Create an identity pose (origin, facing forward).
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Get the position as a WorldPoint.
    #[inline]
    pub fn position(self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }
}

/// Orientation quaternion as delivered by the pose source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W (scalar) component
    pub w: f32,
}

impl Quaternion {
    /// Create a new quaternion.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation about the Z axis in radians, in (-π, π].
    pub fn yaw(&self) -> f32 {
        let siny_cosp = 2.0 * (self.w * self.z + self.x * self.y);
        let cosy_cosp = 1.0 - 2.0 * (self.y * self.y + self.z * self.z);
        siny_cosp.atan2(cosy_cosp)
    }
}
