//! Occupancy grid snapshot for publication.
//!
//! Mirrors the layout of a `nav_msgs/OccupancyGrid`: row-major cells starting
//! at the grid origin, `100` for occupied and `0` for free. The transport that
//! actually sends it is outside this crate.

use crate::core::WorldPoint;
use crate::grid::GridMap;

/// Cell value for occupied cells
pub const OCCUPIED: i8 = 100;

/// Cell value for free cells
pub const FREE: i8 = 0;

/// Thresholded snapshot of a [`GridMap`].
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGridSnapshot {
    /// Frame the grid is expressed in
    pub frame_id: String,
    /// Meters per cell
    pub resolution: f32,
    /// Cells along X
    pub width: u32,
    /// Cells along Y
    pub height: u32,
    /// World position of the corner of cell (0, 0)
    pub origin: WorldPoint,
    /// Row-major occupancy values
    pub data: Vec<i8>,
}

impl OccupancyGridSnapshot {
    /// Threshold the map's probabilities: `p > threshold` is occupied.
    pub fn from_map(map: &GridMap, threshold: f32, frame_id: &str) -> Self {
        let data = map
            .probability_map()
            .as_slice()
            .iter()
            .map(|&p| if p > threshold { OCCUPIED } else { FREE })
            .collect();

        Self {
            frame_id: frame_id.to_string(),
            resolution: map.resolution(),
            width: map.nx() as u32,
            height: map.ny() as u32,
            origin: map.origin(),
            data,
        }
    }

    /// Value at `(ix, iy)`, `None` outside the grid.
    pub fn get(&self, ix: u32, iy: u32) -> Option<i8> {
        if ix < self.width && iy < self.height {
            Some(self.data[(iy * self.width + ix) as usize])
        } else {
            None
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == OCCUPIED).count()
    }
}
