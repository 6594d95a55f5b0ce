//! Configuration types for the occupancy grid.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

/// Upper bound on the number of cells a grid may allocate.
pub const MAX_CELLS: usize = 16_000_000;

/// Largest saturation magnitude for which the f32 logistic stays strictly
/// inside (0, 1).
pub const LOG_ODDS_LIMIT: f32 = 16.0;

/// Grid geometry.
///
/// The grid is always centered at the world origin, so `width` and `height`
/// are the full metric extents and the map spans `[-width/2, width/2)` by
/// `[-height/2, height/2)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Metric width of the mapped area (meters)
    pub width: f32,

    /// Metric height of the mapped area (meters)
    pub height: f32,

    /// Meters per cell (e.g., 0.02 = 2cm cells)
    pub resolution: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 2.0,       // 2m x 2m local street patch
            height: 2.0,
            resolution: 0.02, // 100 x 100 cells
        }
    }
}

impl GridConfig {
    /// Create a configuration for a specific area size (in meters)
    pub fn for_area(width: f32, height: f32, resolution: f32) -> Self {
        Self {
            width,
            height,
            resolution,
        }
    }

    /// Reject geometry that cannot produce a non-empty grid.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("resolution", self.resolution),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MapError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        let (nx, ny) = self.cell_counts();
        match nx.checked_mul(ny) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(MapError::InvalidConfig(format!(
                "{nx}x{ny} grid exceeds {MAX_CELLS} cell limit"
            ))),
        }
    }

    /// Cell counts `(nx, ny)` = `(ceil(width / resolution), ceil(height / resolution))`.
    pub fn cell_counts(&self) -> (usize, usize) {
        (
            cell_count(self.width, self.resolution),
            cell_count(self.height, self.resolution),
        )
    }

    /// Calculate memory usage in bytes for the log-odds buffer
    pub fn memory_bytes(&self) -> usize {
        let (nx, ny) = self.cell_counts();
        nx * ny * std::mem::size_of::<f32>()
    }
}

/// `ceil(extent / resolution)`, treating ratios within f32 representation
/// error of an integer as that integer (2.0 / 0.02 is 100 cells, not 101).
fn cell_count(extent: f32, resolution: f32) -> usize {
    let ratio = f64::from(extent) / f64::from(resolution);
    let nearest = ratio.round();
    let tolerance = 4.0 * f64::from(f32::EPSILON) * nearest.max(1.0);
    let cells = if (ratio - nearest).abs() <= tolerance {
        nearest
    } else {
        ratio.ceil()
    };
    cells.max(1.0) as usize
}

/// Inverse sensor model and saturation bounds, in natural log-odds.
///
/// - Log-odds: L(x) = ln(P(x) / (1 - P(x)))
/// - Bayesian update: L_new = L_old + L_observation
///
/// Unobserved cells hold 0 (P = 0.5). `l_min` / `l_max` saturate a cell so
/// that repeated observations cannot drive the logistic transform to exactly
/// 0 or 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogOddsConfig {
    /// Log-odds evidence for the cell at the ray tip (P = 0.7), positive
    pub l_occ: f32,

    /// Log-odds evidence for cells the ray passes through (P = 0.3), negative
    pub l_free: f32,

    /// Minimum log-odds value (clamping). P ≈ 4.5e-5
    pub l_min: f32,

    /// Maximum log-odds value (clamping). P ≈ 0.99995
    pub l_max: f32,
}

impl Default for LogOddsConfig {
    fn default() -> Self {
        Self {
            l_occ: probability_to_log_odds(0.7),
            l_free: probability_to_log_odds(0.3),
            l_min: -10.0,
            l_max: 10.0,
        }
    }
}

impl LogOddsConfig {
    /// Build the sensor model from hit / miss probabilities.
    pub fn from_probability(p_occupied: f32, p_free: f32) -> Self {
        Self {
            l_occ: probability_to_log_odds(p_occupied),
            l_free: probability_to_log_odds(p_free),
            ..Default::default()
        }
    }

    /// Increment applied to a cell observed as occupied.
    #[inline]
    pub fn occupied_increment(&self) -> f32 {
        self.l_occ
    }

    /// Increment applied to a cell observed as free.
    #[inline]
    pub fn free_increment(&self) -> f32 {
        self.l_free
    }

    /// Reject non-finite or wrongly signed evidence and saturation bounds
    /// that are inverted or would let the probability reach 0 or 1.
    pub fn validate(&self) -> Result<()> {
        let values = [self.l_occ, self.l_free, self.l_min, self.l_max];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MapError::InvalidConfig(format!(
                "log-odds parameters must be finite: {self:?}"
            )));
        }
        if self.l_occ <= 0.0 || self.l_free >= 0.0 {
            return Err(MapError::InvalidConfig(format!(
                "l_occ ({}) must be positive and l_free ({}) negative",
                self.l_occ, self.l_free
            )));
        }
        let min_ok = (-LOG_ODDS_LIMIT..0.0).contains(&self.l_min);
        let max_ok = self.l_max > 0.0 && self.l_max <= LOG_ODDS_LIMIT;
        if !(min_ok && max_ok) {
            return Err(MapError::InvalidConfig(format!(
                "saturation bounds [{}, {}] outside [-{LOG_ODDS_LIMIT}, 0) / (0, {LOG_ODDS_LIMIT}]",
                self.l_min, self.l_max
            )));
        }
        Ok(())
    }
}

/// Convert a probability to natural log-odds.
#[inline]
pub fn probability_to_log_odds(p: f32) -> f32 {
    (p / (1.0 - p)).ln()
}

/// Convert natural log-odds to probability.
///
/// Evaluated on the side of the logistic that cannot overflow, so the result
/// is well defined for any finite input.
#[inline]
pub fn log_odds_to_probability(log_odds: f32) -> f32 {
    if log_odds >= 0.0 {
        1.0 / (1.0 + (-log_odds).exp())
    } else {
        let odds = log_odds.exp();
        odds / (1.0 + odds)
    }
}

/// Full map configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Grid geometry (size, resolution)
    pub grid: GridConfig,
    /// Log-odds sensor model
    #[serde(default)]
    pub log_odds: LogOddsConfig,
}

impl MapConfig {
    /// Validate both sections.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.log_odds.validate()
    }
}
