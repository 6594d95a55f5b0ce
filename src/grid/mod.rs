//! Log-odds occupancy grid and its update pipeline.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │   Pose2D + [Measurement]  (once a cycle) │
//! └────────────────────┬─────────────────────┘
//!                      ▼
//!            ┌───────────────────┐
//!            │      update       │  world → cell, sensor model
//!            └─────────┬─────────┘
//!                      ▼
//!            ┌───────────────────┐
//!            │     raycaster     │  Bresenham path between cells
//!            └─────────┬─────────┘
//!                      ▼
//!            ┌───────────────────┐
//!            │      GridMap      │  contiguous log-odds buffer
//!            └─────────┬─────────┘
//!                      ▼
//!              probability_map()
//! ```
//!
//! ## Log-Odds Model
//!
//! ```text
//! L(x) = ln(P(x) / (1 - P(x)))          # Log-odds conversion
//! L_new = L_old + (L_obs - L_prior)     # Bayesian update
//! P(x) = odds / (1 + odds), odds = e^L  # Consumer view
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rekha_map::core::{GridCoord, Measurement, Pose2D};
//! use rekha_map::grid::{GridMap, update};
//!
//! let mut map = GridMap::with_area(2.0, 2.0, 0.02)?;
//! let rays = [Measurement::new(0.0, 0.5)?];
//! update::apply_observation(&mut map, Pose2D::identity(), &rays);
//!
//! let p = map.probability(GridCoord::new(75, 50)).unwrap();
//! assert!(p > 0.5);
//! # Ok::<(), rekha_map::MapError>(())
//! ```

mod config;
pub mod raycaster;
mod storage;
pub mod update;

pub use config::{
    GridConfig, LOG_ODDS_LIMIT, LogOddsConfig, MAX_CELLS, MapConfig,
    log_odds_to_probability, probability_to_log_odds,
};
pub use storage::{COORD_LIMIT, GridMap, ProbabilityMap};
pub use update::ObserveResult;
