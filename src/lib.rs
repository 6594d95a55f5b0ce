//! # RekhaMap
//!
//! 2D log-odds occupancy grid mapping from camera-derived street line
//! measurements.
//!
//! ## Overview
//!
//! Each processing cycle the localizer supplies a robot pose and the camera
//! pipeline supplies polar `(angle, distance)` measurements to detected
//! street lines. For every measurement the cells between the robot and the
//! line receive "free" evidence and the cell at the line receives "occupied"
//! evidence, accumulated as log-odds in a fixed grid centered on the origin.
//!
//! - [`grid::GridMap`]: log-odds storage, coordinate transforms, probabilities
//! - [`grid::raycaster`]: Bresenham rasterization between two cells
//! - [`grid::update`]: inverse sensor model over a batch of measurements
//! - [`StreetMapper`]: per-cycle driver with pose caching and snapshots
//!
//! ## Quick Start
//!
//! ```rust
//! use rekha_map::{GridCoord, Measurement, Pose2D, RekhaConfig, StreetMapper};
//!
//! let mut mapper = StreetMapper::new(&RekhaConfig::default())?;
//! mapper.on_pose(Pose2D::new(0.0, 0.0, 0.0))?;
//!
//! let output = mapper
//!     .on_measurements(&[Measurement::new(0.0, 0.5)?])
//!     .expect("pose and measurements present");
//!
//! assert_eq!(output.result.cells_occupied, 1);
//! assert!(mapper.map().probability(GridCoord::new(75, 50)).unwrap() > 0.5);
//! # Ok::<(), rekha_map::MapError>(())
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of robot)
//! - Y: Left (positive to robot's left)
//! - Theta: Rotation in radians, CCW positive from +X axis
//!
//! ## Concurrency
//!
//! All operations are synchronous. [`grid::GridMap`] mutation takes
//! `&mut self`; share a mapper between threads through [`SharedMapper`].

#![warn(missing_docs)]

// Core types
pub mod core;

// Error types
pub mod error;

// Grid storage, ray casting and updates
pub mod grid;

// Camera projection
pub mod sensor;

// Unified configuration
pub mod config;

// Per-cycle driver
pub mod mapper;

// Thread-safe handle
pub mod shared;

// Thresholded output
pub mod publish;

// Recorded cycles for replay
pub mod recording;

// Re-export commonly used types
pub use crate::core::{GridCoord, Measurement, Pose2D, Quaternion, WorldPoint};

pub use error::{MapError, Result};

pub use grid::{GridConfig, GridMap, LogOddsConfig, MapConfig, ObserveResult, ProbabilityMap};

pub use config::{ConfigLoadError, RekhaConfig};

pub use mapper::{CycleOutput, MapperStats, StreetMapper};

pub use publish::OccupancyGridSnapshot;

pub use recording::{Cycle, Recording};

pub use sensor::{CameraModel, FrameSize, LineSegment};

pub use shared::SharedMapper;
