//! Per-cycle street mapping driver.
//!
//! Holds the latest pose from the localizer and applies each incoming batch
//! of measurements at that pose:
//!
//! ```text
//!   pose source ──on_pose()──────────┐
//!                                    ▼
//!   camera ──segments──► CameraModel ──► on_measurements() ──► GridMap
//!                                                  │
//!                                                  ▼
//!                                     OccupancyGridSnapshot
//! ```
//!
//! A cycle is skipped (no map change, no snapshot) until a pose has been
//! received, and whenever the measurement batch is empty.

use crate::config::RekhaConfig;
use crate::core::{Measurement, Pose2D};
use crate::error::Result;
use crate::grid::{GridMap, ObserveResult, update};
use crate::publish::OccupancyGridSnapshot;
use crate::sensor::{CameraModel, FrameSize, LineSegment};

/// Output of one applied cycle.
#[derive(Clone, Debug)]
pub struct CycleOutput {
    /// Update statistics for the cycle
    pub result: ObserveResult,
    /// Grid to publish
    pub snapshot: OccupancyGridSnapshot,
}

/// Running totals over the mapper's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapperStats {
    /// Cycles that updated the map
    pub cycles_applied: u64,
    /// Cycles dropped because no pose was known yet
    pub cycles_without_pose: u64,
    /// Cycles dropped because they carried no measurements
    pub cycles_empty: u64,
    /// Accumulated update statistics
    pub totals: ObserveResult,
}

/// Owns the grid and turns pose / measurement streams into map updates.
pub struct StreetMapper {
    map: GridMap,
    camera: CameraModel,
    current_pose: Option<Pose2D>,
    occupied_threshold: f32,
    frame_id: String,
    stats: MapperStats,
}

impl StreetMapper {
    /// Create a mapper from a full configuration.
    pub fn new(config: &RekhaConfig) -> Result<Self> {
        let map = GridMap::new(&config.to_map_config())?;
        let camera = config.camera_model()?;

        log::info!(
            "Street mapper ready: {}x{} cells at {:.3}m",
            map.nx(),
            map.ny(),
            map.resolution()
        );

        Ok(Self {
            map,
            camera,
            current_pose: None,
            occupied_threshold: config.publish.occupied_threshold,
            frame_id: config.publish.frame_id.clone(),
            stats: MapperStats::default(),
        })
    }

    /// The grid being built
    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// Latest pose, if any
    pub fn current_pose(&self) -> Option<Pose2D> {
        self.current_pose
    }

    /// Lifetime statistics
    pub fn stats(&self) -> &MapperStats {
        &self.stats
    }

    /// Record the latest pose; later cycles are applied at this pose.
    pub fn on_pose(&mut self, pose: Pose2D) -> Result<()> {
        self.current_pose = Some(Pose2D::try_new(pose.x, pose.y, pose.theta)?);
        Ok(())
    }

    /// Apply a batch of measurements at the current pose.
    ///
    /// Returns `None` when the cycle is skipped.
    pub fn on_measurements(&mut self, measurements: &[Measurement]) -> Option<CycleOutput> {
        let Some(pose) = self.current_pose else {
            log::debug!("No pose yet, dropping {} measurements", measurements.len());
            self.stats.cycles_without_pose += 1;
            return None;
        };
        if measurements.is_empty() {
            self.stats.cycles_empty += 1;
            return None;
        }

        let result = update::apply_observation(&mut self.map, pose, measurements);
        self.stats.cycles_applied += 1;
        self.stats.totals.merge(&result);

        log::debug!(
            "Cycle {}: {} rays, {} cells updated, {} discarded",
            self.stats.cycles_applied,
            result.rays,
            result.cells_updated(),
            result.cells_discarded
        );

        Some(CycleOutput {
            result,
            snapshot: self.snapshot(),
        })
    }

    /// Project detected line segments through the camera model and apply them.
    pub fn on_line_segments(
        &mut self,
        segments: &[LineSegment],
        frame: FrameSize,
    ) -> Option<CycleOutput> {
        let measurements = self.camera.project_all(segments, frame);
        self.on_measurements(&measurements)
    }

    /// Thresholded view of the current map.
    pub fn snapshot(&self) -> OccupancyGridSnapshot {
        OccupancyGridSnapshot::from_map(&self.map, self.occupied_threshold, &self.frame_id)
    }

    /// Forget all evidence and the current pose.
    pub fn reset(&mut self) {
        log::info!("Resetting street map");
        self.map.clear();
        self.current_pose = None;
        self.stats = MapperStats::default();
    }
}
