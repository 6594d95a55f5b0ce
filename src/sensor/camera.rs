//! Projection of detected street-line segments to polar measurements.
//!
//! Line detection itself (color threshold, edges, Hough) happens upstream.
//! This model only turns a segment in pixel coordinates into the
//! `(angle, distance)` pair the mapper consumes:
//!
//! ```text
//!            image_width
//!   ┌───────────────────────────┐  row 0      → max_distance
//!   │                           │
//!   │         cx   mid          │
//!   │          │────●           │  angle = (mid_x - cx) / cx * fov/2
//!   │                           │
//!   └───────────────────────────┘  row height → min_distance
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Measurement;
use crate::error::{MapError, Result};

/// A detected line segment in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// First endpoint column
    pub x1: f32,
    /// First endpoint row
    pub y1: f32,
    /// Second endpoint column
    pub x2: f32,
    /// Second endpoint row
    pub y2: f32,
}

impl LineSegment {
    /// Create a new segment.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Segment midpoint `(column, row)`.
    pub fn midpoint(&self) -> (f32, f32) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Size of the camera frame the segments were detected in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl FrameSize {
    /// Create a new frame size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Monocular camera model with a linear row-to-distance mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraModel {
    /// Horizontal field of view (radians)
    pub horizontal_fov: f32,
    /// Distance for features on the bottom image row (meters)
    pub min_distance: f32,
    /// Distance for features on the top image row (meters)
    pub max_distance: f32,
}

impl Default for CameraModel {
    fn default() -> Self {
        Self {
            horizontal_fov: 62.0_f32.to_radians(), // Duckiebot camera
            min_distance: 0.5,
            max_distance: 5.0,
        }
    }
}

impl CameraModel {
    /// Create a validated camera model.
    pub fn new(horizontal_fov: f32, min_distance: f32, max_distance: f32) -> Result<Self> {
        let model = Self {
            horizontal_fov,
            min_distance,
            max_distance,
        };
        model.validate()?;
        Ok(model)
    }

    /// Reject a field of view outside (0, π) or an empty distance range.
    pub fn validate(&self) -> Result<()> {
        if !(self.horizontal_fov > 0.0 && self.horizontal_fov < std::f32::consts::PI) {
            return Err(MapError::InvalidConfig(format!(
                "horizontal_fov must be in (0, pi), got {}",
                self.horizontal_fov
            )));
        }
        if !(self.min_distance >= 0.0 && self.min_distance < self.max_distance)
            || !self.max_distance.is_finite()
        {
            return Err(MapError::InvalidConfig(format!(
                "distance range [{}, {}] is empty or negative",
                self.min_distance, self.max_distance
            )));
        }
        Ok(())
    }

    /// Bearing of an image column relative to the optical axis.
    ///
    /// Linear in the pixel offset from the image center: the left edge maps
    /// to `-fov/2`, the right edge to `+fov/2`.
    pub fn column_to_angle(&self, column: f32, frame: FrameSize) -> f32 {
        let center_x = frame.width as f32 / 2.0;
        let dx = column - center_x;
        (dx / center_x) * (self.horizontal_fov / 2.0)
    }

    /// Ground distance of an image row, linear between the bottom row
    /// (`min_distance`) and the top row (`max_distance`).
    pub fn row_to_distance(&self, row: f32, frame: FrameSize) -> f32 {
        let height = frame.height as f32;
        self.min_distance + (self.max_distance - self.min_distance) * ((height - row) / height)
    }

    /// Project a segment's midpoint to a measurement.
    pub fn project(&self, segment: &LineSegment, frame: FrameSize) -> Result<Measurement> {
        if frame.width == 0 || frame.height == 0 {
            return Err(MapError::InvalidConfig(format!(
                "empty camera frame {}x{}",
                frame.width, frame.height
            )));
        }
        let (mid_x, mid_y) = segment.midpoint();
        Measurement::new(
            self.column_to_angle(mid_x, frame),
            self.row_to_distance(mid_y, frame),
        )
    }

    /// Project every segment, dropping the ones that yield an invalid
    /// measurement (e.g. midpoints below the frame).
    pub fn project_all(&self, segments: &[LineSegment], frame: FrameSize) -> Vec<Measurement> {
        segments
            .iter()
            .filter_map(|segment| match self.project(segment, frame) {
                Ok(m) => Some(m),
                Err(e) => {
                    log::debug!("Dropping segment {:?}: {}", segment, e);
                    None
                }
            })
            .collect()
    }
}
