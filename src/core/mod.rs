//! Core types for the RekhaMap library.
//!
//! All types follow the ROS REP-103 coordinate convention:
//! - **X-axis**: Forward (positive ahead of robot)
//! - **Y-axis**: Left (positive to robot's left)
//! - **Theta**: Counter-clockwise rotation from +X axis (radians)
//!
//! ## Type Categories
//!
//! - [`GridCoord`]: Integer cell indices for occupancy grid access
//! - [`WorldPoint`]: Floating-point world coordinates in meters
//! - [`Pose2D`]: Robot position (x, y) and heading (theta)
//! - [`Quaternion`]: Orientation as delivered by the pose source
//! - [`Measurement`]: Polar (angle, distance) observation in the robot frame

mod measurement;
mod point;
mod pose;

pub use measurement::Measurement;
pub use point::{GridCoord, WorldPoint};
pub use pose::{Pose2D, Quaternion};
