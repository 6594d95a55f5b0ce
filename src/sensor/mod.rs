//! Sensor-side adapters that produce [`Measurement`](crate::core::Measurement)s.

pub mod camera;

pub use camera::{CameraModel, FrameSize, LineSegment};
