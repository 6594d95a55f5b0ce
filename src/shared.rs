//! Shared mapper for multi-threaded callers.
//!
//! When the pose source and the camera pipeline run on different threads,
//! both hand their data to a [`SharedMapper`]. A single lock guards the whole
//! mapper, so a pose update, an observation, or a snapshot never interleaves
//! with another.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{Measurement, Pose2D};
use crate::error::Result;
use crate::mapper::{CycleOutput, MapperStats, StreetMapper};
use crate::publish::OccupancyGridSnapshot;

/// Cloneable handle to a mutex-guarded [`StreetMapper`].
#[derive(Clone)]
pub struct SharedMapper {
    inner: Arc<Mutex<StreetMapper>>,
}

impl SharedMapper {
    /// Wrap a mapper for shared access.
    pub fn new(mapper: StreetMapper) -> Self {
        Self {
            inner: Arc::new(Mutex::new(mapper)),
        }
    }

    /// Record the latest pose.
    pub fn on_pose(&self, pose: Pose2D) -> Result<()> {
        self.inner.lock().on_pose(pose)
    }

    /// Apply a measurement batch at the current pose.
    pub fn on_measurements(&self, measurements: &[Measurement]) -> Option<CycleOutput> {
        self.inner.lock().on_measurements(measurements)
    }

    /// Thresholded view of the current map.
    pub fn snapshot(&self) -> OccupancyGridSnapshot {
        self.inner.lock().snapshot()
    }

    /// Lifetime statistics.
    pub fn stats(&self) -> MapperStats {
        self.inner.lock().stats().clone()
    }

    /// Run a read-only closure against the mapper while holding the lock.
    pub fn with_mapper<R>(&self, f: impl FnOnce(&StreetMapper) -> R) -> R {
        f(&self.inner.lock())
    }
}
