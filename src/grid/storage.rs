//! Log-odds grid storage.
//!
//! Cells live in one contiguous buffer indexed by `iy * nx + ix`:
//!
//! ```text
//! row 0:    [L L L L ... L]   iy = 0, ix = 0..nx
//! row 1:    [L L L L ... L]
//! ...
//! row ny-1: [L L L L ... L]
//! ```
//!
//! The map is exclusively owned; every mutation goes through `&mut self`.

use crate::core::{GridCoord, WorldPoint};
use crate::error::Result;

use super::config::{LogOddsConfig, MapConfig, log_odds_to_probability};

/// Coordinates further than this many cells from the grid are saturated.
///
/// Keeps ray rasterization bounded and overflow free for far-away or
/// degenerate world points. Any coordinate at the limit is outside the map.
pub const COORD_LIMIT: i32 = 1 << 24;

/// Fixed-size occupancy grid centered at the world origin.
///
/// The grid uses a coordinate system where:
/// - World (0, 0) is the geometric center of the grid
/// - Positive X is to the right, positive Y is up
/// - Cell (ix, iy) covers `[ix*res - width/2, (ix+1)*res - width/2)` in X
#[derive(Clone, Debug)]
pub struct GridMap {
    log_odds: Vec<f32>,

    // === Geometry ===
    width: f32,
    height: f32,
    resolution: f32,
    nx: usize,
    ny: usize,

    sensor_model: LogOddsConfig,
}

impl GridMap {
    // === Constructors ===

    /// Create a grid from a validated configuration.
    ///
    /// Fails with [`MapError::InvalidConfig`](crate::MapError::InvalidConfig)
    /// for non-positive extents or resolution, or an inconsistent sensor model.
    pub fn new(config: &MapConfig) -> Result<Self> {
        config.validate()?;

        let (nx, ny) = config.grid.cell_counts();

        log::debug!(
            "Creating {}x{} grid ({:.2}m x {:.2}m at {:.3}m)",
            nx,
            ny,
            config.grid.width,
            config.grid.height,
            config.grid.resolution
        );

        Ok(Self {
            log_odds: vec![0.0; nx * ny],
            width: config.grid.width,
            height: config.grid.height,
            resolution: config.grid.resolution,
            nx,
            ny,
            sensor_model: config.log_odds.clone(),
        })
    }

    /// Create a grid for a metric area with the default sensor model.
    pub fn with_area(width: f32, height: f32, resolution: f32) -> Result<Self> {
        let mut config = MapConfig::default();
        config.grid.width = width;
        config.grid.height = height;
        config.grid.resolution = resolution;
        Self::new(&config)
    }

    // === Basic Properties ===

    /// Resolution in meters per cell.
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Metric width in meters.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Metric height in meters.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Number of cells along X.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of cells along Y.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.log_odds.len()
    }

    /// World coordinates of the corner of cell (0, 0).
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        WorldPoint::new(-self.width / 2.0, -self.height / 2.0)
    }

    /// The sensor model applied by [`update_cell`](Self::update_cell).
    #[inline]
    pub fn sensor_model(&self) -> &LogOddsConfig {
        &self.sensor_model
    }

    // === Coordinate Conversion ===

    /// Convert world coordinates to grid coordinates.
    ///
    /// `ix = floor((x + width/2) / resolution)`, likewise for `iy`. No bounds
    /// clamping is applied, so the result may lie outside the grid; callers
    /// treat such cells as outside the mapped area.
    #[inline]
    pub fn world_to_map(&self, point: WorldPoint) -> GridCoord {
        GridCoord::new(
            floor_index((point.x + self.width / 2.0) / self.resolution),
            floor_index((point.y + self.height / 2.0) / self.resolution),
        )
    }

    /// Convert grid coordinates to world coordinates (cell center).
    #[inline]
    pub fn map_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            (coord.x as f32 + 0.5) * self.resolution - self.width / 2.0,
            (coord.y as f32 + 0.5) * self.resolution - self.height / 2.0,
        )
    }

    /// Check if grid coordinates are within `[0, nx) x [0, ny)`.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < self.nx && (coord.y as usize) < self.ny
    }

    /// Convert grid coordinates to flat buffer index.
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.nx + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert flat buffer index to grid coordinates.
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.nx) as i32, (index / self.nx) as i32)
    }

    // === Log-Odds Updates ===

    /// Add one observation of evidence to a cell.
    ///
    /// Occupied adds `l_occ`, free adds `l_free`; the sum
    /// saturates at `[l_min, l_max]`. Out-of-range coordinates are discarded
    /// without error. Returns whether the update was applied.
    #[inline]
    pub fn update_cell(&mut self, coord: GridCoord, occupied: bool) -> bool {
        let Some(i) = self.coord_to_index(coord) else {
            return false;
        };

        let increment = if occupied {
            self.sensor_model.occupied_increment()
        } else {
            self.sensor_model.free_increment()
        };
        self.log_odds[i] =
            (self.log_odds[i] + increment).clamp(self.sensor_model.l_min, self.sensor_model.l_max);
        true
    }

    /// Reset every cell to unknown (P = 0.5).
    pub fn clear(&mut self) {
        self.log_odds.fill(0.0);
    }

    // === Queries ===

    /// Log-odds value at grid coordinates.
    #[inline]
    pub fn log_odds(&self, coord: GridCoord) -> Option<f32> {
        self.coord_to_index(coord).map(|i| self.log_odds[i])
    }

    /// Occupancy probability at grid coordinates.
    #[inline]
    pub fn probability(&self, coord: GridCoord) -> Option<f32> {
        self.log_odds(coord).map(log_odds_to_probability)
    }

    /// Raw row-major log-odds buffer.
    #[inline]
    pub fn log_odds_raw(&self) -> &[f32] {
        &self.log_odds
    }

    /// Number of cells whose log-odds differ from unknown (0).
    pub fn observed_cells(&self) -> usize {
        self.log_odds.iter().filter(|&&l| l != 0.0).count()
    }

    /// Derive the full probability map from the current log-odds.
    ///
    /// Recomputed from scratch on every call.
    pub fn probability_map(&self) -> ProbabilityMap {
        ProbabilityMap {
            nx: self.nx,
            ny: self.ny,
            data: self
                .log_odds
                .iter()
                .map(|&l| log_odds_to_probability(l))
                .collect(),
        }
    }
}

/// `floor(v)` as a cell index, saturated to `±COORD_LIMIT`. NaN maps outside
/// the grid.
#[inline]
fn floor_index(v: f32) -> i32 {
    if v.is_nan() {
        return -COORD_LIMIT;
    }
    let limit = COORD_LIMIT as f32;
    v.floor().clamp(-limit, limit) as i32
}

/// Row-major occupancy probabilities derived from a [`GridMap`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityMap {
    nx: usize,
    ny: usize,
    data: Vec<f32>,
}

impl ProbabilityMap {
    /// Number of columns.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of rows.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Probability at `(ix, iy)`, `None` outside the grid.
    pub fn get(&self, ix: usize, iy: usize) -> Option<f32> {
        if ix < self.nx && iy < self.ny {
            Some(self.data[iy * self.nx + ix])
        } else {
            None
        }
    }

    /// Iterate rows from `iy = 0` upward.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.nx)
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
