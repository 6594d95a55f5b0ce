//! Bresenham ray casting for occupancy grid updates.
//!
//! Enumerates the 8-connected cells on the digital line between two grid
//! cells. Used to mark cells along a sensing ray as free and the tip as
//! occupied.
//!
//! ```text
//! From (0,0) to (7,3):
//!
//!     3 │            ● ●
//!     2 │        ● ●
//!     1 │    ● ●
//!     0 │● ●
//!       └────────────────
//!        0 1 2 3 4 5 6 7
//! ```
//!
//! At every step along the major axis the minor coordinate is the nearest
//! cell to the ideal line. When the line passes exactly between two cells
//! the tie is broken by the lexicographic order of the endpoints rather than
//! by the walking direction, so tracing `b → a` yields the exact reverse of
//! `a → b`.
//!
//! ## Usage
//!
//! ```rust
//! use rekha_map::core::GridCoord;
//! use rekha_map::grid::raycaster::{BresenhamLine, cast_ray};
//!
//! let start = GridCoord::new(0, 0);
//! let end = GridCoord::new(5, 2);
//!
//! // Lazily iterate cells along a ray
//! for cell in BresenhamLine::new(start, end) {
//!     assert!(cell.x <= 5);
//! }
//!
//! // Or collect the whole path
//! let cells = cast_ray(start, end);
//! assert_eq!(cells.first(), Some(&start));
//! assert_eq!(cells.last(), Some(&end));
//! ```

use crate::core::GridCoord;

/// Bresenham line iterator.
///
/// Yields `max(|dx|, |dy|) + 1` cells from `start` to `end`, both inclusive.
/// A zero-length line yields `start` once.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    start: GridCoord,
    x_inc: i64,
    y_inc: i64,
    /// Steps along the major axis
    major: i64,
    /// Total displacement along the minor axis
    minor: i64,
    steep: bool,
    /// Round exact half-cell ties up (walking in lexicographic order)
    ties_up: bool,
    step: i64,
}

impl BresenhamLine {
    /// Create a new Bresenham line iterator from start to end coordinates.
    pub fn new(start: GridCoord, end: GridCoord) -> Self {
        let dx = i64::from(end.x) - i64::from(start.x);
        let dy = i64::from(end.y) - i64::from(start.y);
        let steep = dy.abs() > dx.abs();

        let (major, minor) = if steep {
            (dy.abs(), dx.abs())
        } else {
            (dx.abs(), dy.abs())
        };

        Self {
            start,
            x_inc: dx.signum(),
            y_inc: dy.signum(),
            major,
            minor,
            steep,
            ties_up: (start.x, start.y) <= (end.x, end.y),
            step: 0,
        }
    }

    /// Step direction `(sign(dx), sign(dy))`. Coordinates never move against
    /// it, so the walk is monotone on both axes.
    pub fn direction(&self) -> (i32, i32) {
        (self.x_inc as i32, self.y_inc as i32)
    }

    /// Minor-axis offset from `start` at major step `i`.
    #[inline]
    fn minor_offset(&self, i: i64) -> i64 {
        if self.major == 0 {
            return 0;
        }
        // round(i * minor / major) with integer arithmetic
        let numerator = 2 * i * self.minor + self.major;
        let denominator = 2 * self.major;
        if self.ties_up {
            numerator / denominator
        } else {
            (numerator - 1) / denominator
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = GridCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step > self.major {
            return None;
        }

        let i = self.step;
        let j = self.minor_offset(i);
        self.step += 1;

        let (ox, oy) = if self.steep { (j, i) } else { (i, j) };
        Some(GridCoord::new(
            (i64::from(self.start.x) + ox * self.x_inc) as i32,
            (i64::from(self.start.y) + oy * self.y_inc) as i32,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.major + 1 - self.step).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}

/// Collect all cells along a ray from start to end, both inclusive.
pub fn cast_ray(start: GridCoord, end: GridCoord) -> Vec<GridCoord> {
    BresenhamLine::new(start, end).collect()
}

/// Collect all cells along a ray, excluding the endpoint.
pub fn cells_along_ray_excluding_end(start: GridCoord, end: GridCoord) -> Vec<GridCoord> {
    let mut cells = cast_ray(start, end);
    cells.pop();
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_connected(cells: &[GridCoord]) {
        for pair in cells.windows(2) {
            assert_eq!(
                pair[0].chebyshev_distance(&pair[1]),
                1,
                "gap between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_bresenham_horizontal() {
        let start = GridCoord::new(0, 0);
        let end = GridCoord::new(5, 0);
        let cells = cast_ray(start, end);

        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], GridCoord::new(0, 0));
        assert_eq!(cells[5], GridCoord::new(5, 0));
        assert!(cells.iter().all(|c| c.y == 0));
    }

    #[test]
    fn test_bresenham_vertical() {
        let start = GridCoord::new(0, 0);
        let end = GridCoord::new(0, -5);
        let cells = cast_ray(start, end);

        assert_eq!(cells.len(), 6);
        assert_eq!(cells[5], GridCoord::new(0, -5));
        assert!(cells.iter().all(|c| c.x == 0));
    }

    #[test]
    fn test_bresenham_diagonal() {
        let cells = cast_ray(GridCoord::new(0, 0), GridCoord::new(5, 5));

        assert_eq!(cells.len(), 6);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(*cell, GridCoord::new(i as i32, i as i32));
        }
    }

    #[test]
    fn test_bresenham_steep() {
        let cells = cast_ray(GridCoord::new(0, 0), GridCoord::new(2, 5));

        // Should have 6 cells (max of dx, dy + 1)
        assert_eq!(
            cells,
            vec![
                GridCoord::new(0, 0),
                GridCoord::new(0, 1),
                GridCoord::new(1, 2),
                GridCoord::new(1, 3),
                GridCoord::new(2, 4),
                GridCoord::new(2, 5),
            ]
        );
    }

    #[test]
    fn test_degenerate_ray() {
        let a = GridCoord::new(50, 50);
        assert_eq!(cast_ray(a, a), vec![a]);
        assert!(cells_along_ray_excluding_end(a, a).is_empty());
    }

    #[test]
    fn test_reverse_symmetry() {
        let origin = GridCoord::new(3, -2);
        for dx in -9..=9 {
            for dy in -9..=9 {
                let end = origin + GridCoord::new(dx, dy);
                let forward = cast_ray(origin, end);
                let mut backward = cast_ray(end, origin);
                backward.reverse();
                assert_eq!(forward, backward, "asymmetric for {:?} -> {:?}", origin, end);
            }
        }
    }

    #[test]
    fn test_connected_with_endpoints() {
        let origin = GridCoord::new(0, 0);
        for dx in -12..=12 {
            for dy in -12..=12 {
                let end = GridCoord::new(dx, dy);
                let cells = cast_ray(origin, end);
                assert_eq!(cells.first(), Some(&origin));
                assert_eq!(cells.last(), Some(&end));
                assert_eq!(cells.len() as i32, origin.chebyshev_distance(&end) + 1);
                assert_connected(&cells);
            }
        }
    }

    #[test]
    fn test_exact_size() {
        let line = BresenhamLine::new(GridCoord::new(0, 0), GridCoord::new(7, 3));
        assert_eq!(line.len(), 8);
    }

    #[test]
    fn test_cells_excluding_end() {
        let start = GridCoord::new(50, 50);
        let end = GridCoord::new(75, 50);
        let cells = cells_along_ray_excluding_end(start, end);

        assert_eq!(cells.len(), 25);
        assert!(!cells.contains(&end));
        assert_eq!(cells[0], start);
    }

    #[test]
    fn test_far_endpoints_do_not_overflow() {
        let start = GridCoord::new(i32::MAX - 2, i32::MIN + 2);
        let end = GridCoord::new(i32::MAX, i32::MIN);
        let cells = cast_ray(start, end);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2], end);
    }
}
