//! Observation update for the occupancy grid.
//!
//! Applies the inverse sensor model to each polar measurement:
//! - Cells the ray passes through receive "free" evidence
//! - The cell at the ray tip receives "occupied" evidence
//!
//! Every cell update goes through [`GridMap::update_cell`], which discards
//! evidence outside the grid. Rays are processed one after another and each
//! ray's updates complete before the next ray starts, so a cell revisited by
//! a later ray accumulates both contributions.

use crate::core::{GridCoord, Measurement, Pose2D, WorldPoint};
use crate::grid::raycaster::BresenhamLine;
use crate::grid::storage::GridMap;

/// Result of applying one observation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObserveResult {
    /// Rays traced
    pub rays: usize,
    /// Measurements skipped because they failed validation
    pub rays_rejected: usize,
    /// Free updates applied inside the grid
    pub cells_free: usize,
    /// Occupied updates applied inside the grid
    pub cells_occupied: usize,
    /// Updates discarded because the cell was outside the grid
    pub cells_discarded: usize,
}

impl ObserveResult {
    /// Total cell updates applied to the grid
    pub fn cells_updated(&self) -> usize {
        self.cells_free + self.cells_occupied
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: &ObserveResult) {
        self.rays += other.rays;
        self.rays_rejected += other.rays_rejected;
        self.cells_free += other.cells_free;
        self.cells_occupied += other.cells_occupied;
        self.cells_discarded += other.cells_discarded;
    }
}

/// Update the grid with one observation: a pose plus its measurements.
///
/// For each measurement:
/// 1. The hit point is `position + distance * (cos, sin)(theta + angle)`
/// 2. Robot position and hit point are mapped to cells
/// 3. Cells along the Bresenham path except the last are marked free
/// 4. The last cell is marked occupied
///
/// An empty measurement list is a no-op. A non-finite pose rejects the whole
/// observation; an invalid measurement rejects only its own ray.
pub fn apply_observation(
    map: &mut GridMap,
    pose: Pose2D,
    measurements: &[Measurement],
) -> ObserveResult {
    let mut result = ObserveResult::default();

    if Pose2D::try_new(pose.x, pose.y, pose.theta).is_err() {
        log::warn!("Rejecting observation with non-finite pose {:?}", pose);
        result.rays_rejected = measurements.len();
        return result;
    }

    let sensor_pos = pose.position();
    let sensor_coord = map.world_to_map(sensor_pos);

    for measurement in measurements {
        if let Err(e) = measurement.validate() {
            log::warn!("Skipping ray: {}", e);
            result.rays_rejected += 1;
            continue;
        }

        let world_angle = pose.theta + measurement.angle;
        let endpoint = sensor_pos.point_at(world_angle, measurement.distance);
        let endpoint_coord = map.world_to_map(endpoint);

        let ray = trace_ray(map, sensor_coord, endpoint_coord);
        result.merge(&ray);
    }

    log::trace!(
        "Observation at ({:.3}, {:.3}, {:.3}): {} rays, {} free, {} occupied, {} discarded",
        pose.x,
        pose.y,
        pose.theta,
        result.rays,
        result.cells_free,
        result.cells_occupied,
        result.cells_discarded
    );

    result
}

/// Update the grid with a single ray given in world coordinates.
///
/// Lower-level entry point for callers that already have the sensor position
/// and the global ray angle.
pub fn apply_ray(map: &mut GridMap, sensor_pos: WorldPoint, angle: f32, range: f32) -> ObserveResult {
    let sensor_coord = map.world_to_map(sensor_pos);
    let endpoint_coord = map.world_to_map(sensor_pos.point_at(angle, range));
    trace_ray(map, sensor_coord, endpoint_coord)
}

/// Free along the path, occupied at the tip. Each cell of a Bresenham path is
/// distinct, so the tip is the only cell equal to `end`.
///
/// Once the walk is outside the grid and heading away from it, the remaining
/// cells are counted as discarded without being visited.
fn trace_ray(map: &mut GridMap, start: GridCoord, end: GridCoord) -> ObserveResult {
    let mut result = ObserveResult {
        rays: 1,
        ..Default::default()
    };

    let mut line = BresenhamLine::new(start, end);
    let direction = line.direction();

    while let Some(coord) = line.next() {
        let occupied = coord == end;
        if map.update_cell(coord, occupied) {
            if occupied {
                result.cells_occupied += 1;
            } else {
                result.cells_free += 1;
            }
            continue;
        }

        result.cells_discarded += 1;
        if leaving_grid(map, coord, direction) {
            result.cells_discarded += line.len();
            break;
        }
    }

    result
}

/// True if `coord` lies beyond a grid edge on an axis whose step never moves
/// back toward the grid.
fn leaving_grid(map: &GridMap, coord: GridCoord, (x_inc, y_inc): (i32, i32)) -> bool {
    let beyond = |v: i32, inc: i32, len: usize| {
        (v < 0 && inc <= 0) || (i64::from(v) >= len as i64 && inc >= 0)
    };
    beyond(coord.x, x_inc, map.nx()) || beyond(coord.y, y_inc, map.ny())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::raycaster::cast_ray;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn street_map() -> GridMap {
        GridMap::with_area(2.0, 2.0, 0.02).unwrap()
    }

    fn measurement(angle: f32, distance: f32) -> Measurement {
        Measurement::new(angle, distance).unwrap()
    }

    #[test]
    fn test_ray_along_x() {
        let mut map = street_map();
        let result = apply_observation(&mut map, Pose2D::identity(), &[measurement(0.0, 0.5)]);

        assert_eq!(result.rays, 1);
        assert_eq!(result.cells_free, 25);
        assert_eq!(result.cells_occupied, 1);
        assert_eq!(result.cells_discarded, 0);

        let l_free = map.sensor_model().free_increment();
        for ix in 50..75 {
            assert_relative_eq!(map.log_odds(GridCoord::new(ix, 50)).unwrap(), l_free);
        }
        assert_relative_eq!(map.probability(GridCoord::new(75, 50)).unwrap(), 0.7, epsilon = 1e-4);
        assert_relative_eq!(map.probability(GridCoord::new(76, 50)).unwrap(), 0.5);
        assert_eq!(map.observed_cells(), 26);
    }

    #[test]
    fn test_hit_on_map_edge_is_discarded() {
        let mut map = street_map();
        let result = apply_observation(&mut map, Pose2D::identity(), &[measurement(0.0, 1.0)]);

        // Tip maps to ix = 100, one past the last column
        assert_eq!(result.cells_occupied, 0);
        assert_eq!(result.cells_discarded, 1);
        assert_eq!(result.cells_free, 50);
        assert!(map.log_odds_raw().iter().all(|&l| l <= 0.0));
    }

    #[test]
    fn test_zero_distance_marks_robot_cell_occupied() {
        let mut map = street_map();
        let result = apply_observation(&mut map, Pose2D::identity(), &[measurement(1.0, 0.0)]);

        assert_eq!(result.cells_occupied, 1);
        assert_eq!(result.cells_free, 0);
        assert_relative_eq!(map.probability(GridCoord::new(50, 50)).unwrap(), 0.7, epsilon = 1e-4);
    }

    #[test]
    fn test_far_hit_counts_every_cell_outside() {
        let mut map = street_map();
        let result = apply_observation(&mut map, Pose2D::identity(), &[measurement(0.0, 1e7)]);

        // Endpoint saturates at COORD_LIMIT; path spans ix 50..=COORD_LIMIT
        let path_len = (crate::grid::COORD_LIMIT - 50 + 1) as usize;
        assert_eq!(result.cells_free, 50);
        assert_eq!(result.cells_occupied, 0);
        assert_eq!(result.cells_discarded, path_len - 50);
        assert_eq!(map.observed_cells(), 50);
    }

    #[test]
    fn test_ray_leaving_grid_matches_full_walk() {
        let start = GridCoord::new(-25, 50);
        let end = GridCoord::new(-50, 40);

        let mut map = street_map();
        let result = trace_ray(&mut map, start, end);
        assert_eq!(result.cells_discarded, cast_ray(start, end).len());
        assert_eq!(result.cells_updated(), 0);

        // Starts outside but heads into the grid: cells inside still update
        let result = trace_ray(&mut map, GridCoord::new(-5, 50), GridCoord::new(10, 50));
        assert_eq!(result.cells_discarded, 5);
        assert_eq!(result.cells_free, 10);
        assert_eq!(result.cells_occupied, 1);
    }

    #[test]
    fn test_heading_rotates_rays() {
        let mut map = street_map();
        let pose = Pose2D::new(0.0, 0.0, FRAC_PI_2);
        apply_observation(&mut map, pose, &[measurement(0.0, 0.5)]);

        // Facing +Y, the tip lands at (0, 0.5)
        assert!(map.probability(GridCoord::new(50, 75)).unwrap() > 0.5);
        assert!(map.probability(GridCoord::new(50, 60)).unwrap() < 0.5);
    }

    #[test]
    fn test_revisited_cells_accumulate() {
        let mut map = street_map();
        let rays = [measurement(0.0, 0.5), measurement(0.0, 0.3)];
        apply_observation(&mut map, Pose2D::identity(), &rays);

        // (65, 50) is free for the first ray, occupied tip for the second
        let model = map.sensor_model().clone();
        assert_relative_eq!(
            map.log_odds(GridCoord::new(65, 50)).unwrap(),
            model.free_increment() + model.occupied_increment(),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            map.log_odds(GridCoord::new(55, 50)).unwrap(),
            2.0 * model.free_increment(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_empty_observation_is_noop() {
        let mut map = street_map();
        let result = apply_observation(&mut map, Pose2D::new(0.3, -0.2, 1.0), &[]);
        assert_eq!(result, ObserveResult::default());
        assert_eq!(map.observed_cells(), 0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut map = street_map();
        let bad = Measurement {
            angle: 0.0,
            distance: -1.0,
        };
        let result = apply_observation(&mut map, Pose2D::identity(), &[bad, measurement(0.0, 0.1)]);
        assert_eq!(result.rays_rejected, 1);
        assert_eq!(result.rays, 1);

        let result = apply_observation(
            &mut map,
            Pose2D::new(f32::NAN, 0.0, 0.0),
            &[measurement(0.0, 0.1)],
        );
        assert_eq!(result.rays_rejected, 1);
        assert_eq!(result.rays, 0);
    }

    #[test]
    fn test_robot_outside_map() {
        let mut map = street_map();
        // Robot 0.5m left of the map, looking into it
        let pose = Pose2D::new(-1.5, 0.0, 0.0);
        let result = apply_observation(&mut map, pose, &[measurement(0.0, 1.0)]);

        assert_eq!(result.cells_discarded, 25);
        assert_eq!(result.cells_free, 25);
        assert_eq!(result.cells_occupied, 1);
        assert!(map.probability(GridCoord::new(25, 50)).unwrap() > 0.5);
    }

    #[test]
    fn test_apply_ray() {
        let mut map = street_map();
        let result = apply_ray(&mut map, WorldPoint::new(-0.5, -0.5), 0.0, 0.2);
        assert_eq!(result.cells_free, 10);
        assert_eq!(result.cells_occupied, 1);
        assert!(map.probability(GridCoord::new(35, 25)).unwrap() > 0.5);
    }
}
