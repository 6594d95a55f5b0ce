//! Test utilities for RekhaMap integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use rekha_map::{GridMap, Measurement, Pose2D, RekhaConfig, StreetMapper};

/// 2m x 2m map at 2cm resolution (100 x 100 cells).
pub fn street_map() -> GridMap {
    GridMap::with_area(2.0, 2.0, 0.02).expect("valid geometry")
}

/// Mapper with the default configuration.
pub fn default_mapper() -> StreetMapper {
    StreetMapper::new(&RekhaConfig::default()).expect("default config is valid")
}

/// Build a measurement batch from (angle, distance) pairs.
pub fn measurements(pairs: &[(f32, f32)]) -> Vec<Measurement> {
    pairs
        .iter()
        .map(|&(angle, distance)| Measurement::new(angle, distance).expect("valid measurement"))
        .collect()
}

/// Poses along +X at a fixed spacing.
pub fn straight_trajectory(n: usize, start_x: f32, spacing: f32) -> Vec<Pose2D> {
    (0..n)
        .map(|i| Pose2D::new(start_x + i as f32 * spacing, 0.0, 0.0))
        .collect()
}

/// Path to a file under the crate root.
pub fn crate_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Initialize logging once for the test binary.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}
