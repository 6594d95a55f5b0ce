//! End-to-end mapping scenarios on the 2m street patch.

mod common;

use approx::assert_relative_eq;
use rekha_map::grid::raycaster::cast_ray;
use rekha_map::grid::update::apply_observation;
use rekha_map::{GridCoord, Pose2D, WorldPoint};

use common::{init_logging, measurements, street_map, straight_trajectory};

#[test]
fn single_occupied_update_gives_point_seven() {
    let mut map = street_map();
    assert_eq!((map.nx(), map.ny()), (100, 100));

    map.update_cell(GridCoord::new(50, 50), true);

    assert_relative_eq!(
        map.log_odds(GridCoord::new(50, 50)).unwrap(),
        (0.7f32 / 0.3).ln(),
        epsilon = 1e-5
    );
    assert_relative_eq!(
        map.probability(GridCoord::new(50, 50)).unwrap(),
        0.700,
        epsilon = 1e-4
    );
}

#[test]
fn hit_at_half_extent_is_dropped() {
    init_logging();
    let mut map = street_map();

    assert_eq!(map.world_to_map(WorldPoint::ZERO), GridCoord::new(50, 50));
    assert_eq!(
        map.world_to_map(WorldPoint::new(1.0, 0.0)),
        GridCoord::new(100, 50)
    );

    let result = apply_observation(&mut map, Pose2D::identity(), &measurements(&[(0.0, 1.0)]));

    assert_eq!(result.cells_occupied, 0);
    assert_eq!(result.cells_discarded, 1);
    // Nothing on the grid received occupied evidence
    assert!(map.probability_map().as_slice().iter().all(|&p| p <= 0.5));
}

#[test]
fn half_meter_hit_frees_path_and_occupies_tip() {
    let mut map = street_map();
    apply_observation(&mut map, Pose2D::identity(), &measurements(&[(0.0, 0.5)]));

    let path = cast_ray(GridCoord::new(50, 50), GridCoord::new(75, 50));
    let (tip, free) = path.split_last().unwrap();

    assert_eq!(*tip, GridCoord::new(75, 50));
    for cell in free {
        assert!(map.probability(*cell).unwrap() < 0.5, "{:?} not free", cell);
    }
    assert!(map.probability(*tip).unwrap() > 0.5);
    assert_eq!(map.observed_cells(), path.len());
}

#[test]
fn driving_past_a_line_builds_a_wall() {
    init_logging();
    let mut map = street_map();

    // Line 0.4m to the left of a robot driving along +X
    for pose in straight_trajectory(30, -0.6, 0.04) {
        apply_observation(&mut map, pose, &measurements(&[(std::f32::consts::FRAC_PI_2, 0.4)]));
    }

    let wall_row = map.world_to_map(WorldPoint::new(0.0, 0.4)).y;
    let line_cells: Vec<_> = (20..78)
        .map(|ix| GridCoord::new(ix, wall_row))
        .filter(|&c| map.probability(c).unwrap() > 0.5)
        .collect();
    assert!(line_cells.len() >= 25, "only {} wall cells", line_cells.len());

    // Space between the robot and the line is free
    let between_row = map.world_to_map(WorldPoint::new(0.0, 0.2)).y;
    let free_cells = (20..78)
        .map(|ix| GridCoord::new(ix, between_row))
        .filter(|&c| map.probability(c).unwrap() < 0.5)
        .count();
    assert!(free_cells >= 25, "only {} free cells", free_cells);
}

#[test]
fn probability_map_is_stable_between_updates() {
    let mut map = street_map();
    apply_observation(
        &mut map,
        Pose2D::new(0.1, -0.2, 0.3),
        &measurements(&[(0.0, 0.4), (0.5, 0.6), (-0.5, 0.2)]),
    );

    let first = map.probability_map();
    let second = map.probability_map();
    assert_eq!(first, second);
    assert!(first.as_slice().iter().all(|&p| p > 0.0 && p < 1.0));
}

#[test]
fn ray_cast_reverse_and_connectivity() {
    let pairs = [
        (GridCoord::new(50, 50), GridCoord::new(75, 61)),
        (GridCoord::new(0, 99), GridCoord::new(99, 0)),
        (GridCoord::new(-10, 3), GridCoord::new(12, -40)),
        (GridCoord::new(7, 7), GridCoord::new(7, 7)),
    ];

    for (a, b) in pairs {
        let forward = cast_ray(a, b);
        let mut backward = cast_ray(b, a);
        backward.reverse();

        assert_eq!(forward, backward);
        assert_eq!(forward.first(), Some(&a));
        assert_eq!(forward.last(), Some(&b));
        assert!(
            forward
                .windows(2)
                .all(|w| w[0].chebyshev_distance(&w[1]) == 1)
        );
    }
}
