use glam::DVec2;

use crate::grid::OccupancyGrid;
use crate::raycast::traversal::{Advance, Traversal};
use crate::raycast::utils::is_solid;
use crate::types::CastError;

/// Line-of-sight test: whether any solid cell lies on the straight line from
/// `start` to `target`.
///
/// A target sitting exactly on a lattice corner is only touched, never
/// entered: a ray ending on the corner (diagonally, or dead-on along a
/// positive axis) stops there without consulting the cells meeting at that
/// corner. Everywhere else the corner rule applies in full, so a diagonal
/// crossing past a wall still blocks.
pub fn is_line_blocked(
    grid: &OccupancyGrid,
    start: DVec2,
    target: DVec2,
) -> Result<bool, CastError> {
    if !start.is_finite() || !target.is_finite() {
        return Err(CastError::NonFinite(format!(
            "start {}, target {}",
            start, target
        )));
    }

    let start_cell = start.as_ivec2();
    let target_cell = target.as_ivec2();

    if start_cell == target_cell {
        return Ok(is_solid(grid, target_cell));
    }

    let dir = target - start;
    let mut ray = Traversal::new(start, dir);
    let step = ray.step();

    let target_is_corner = target.x.trunc() == target.x && target.y.trunc() == target.y;
    let horizontal_positive = step.x == 1 && dir.y == 0.0;
    let vertical_positive = step.y == 1 && dir.x == 0.0;

    while ray.inside(grid.width(), grid.height()) {
        match ray.advance() {
            Advance::Single(cell) => {
                let target_reached = cell == target_cell;

                // Axis-aligned ray ending dead on a lattice corner: touched,
                // not entered.
                if target_is_corner
                    && target_reached
                    && (horizontal_positive || vertical_positive)
                {
                    return Ok(false);
                }
                if is_solid(grid, cell) {
                    return Ok(true);
                }
                if target_reached {
                    return Ok(false);
                }
            }
            Advance::Corner {
                side_x,
                side_y,
                corner,
                diagonal,
            } => {
                // The ray ends exactly on this corner: none of the four cells
                // meeting here counts as entered.
                if target_is_corner && corner == target_cell {
                    return Ok(false);
                }
                if is_solid(grid, side_x) {
                    return Ok(true);
                }
                if side_x == target_cell {
                    return Ok(false);
                }
                if is_solid(grid, side_y) {
                    return Ok(true);
                }
                if side_y == target_cell {
                    return Ok(false);
                }
                if is_solid(grid, diagonal) {
                    return Ok(true);
                }
                if diagonal == target_cell {
                    return Ok(false);
                }
            }
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: u32, height: u32, solid: &[(u32, u32)]) -> OccupancyGrid {
        let mut grid = OccupancyGrid::open(width, height);
        for &(x, y) in solid {
            grid.set(x, y, true).expect("cell in bounds");
        }
        grid
    }

    #[test]
    fn same_cell_reports_that_cells_occupancy() {
        let grid = grid_with(8, 8, &[(2, 2)]);
        let blocked = is_line_blocked(&grid, DVec2::new(2.2, 2.7), DVec2::new(2.9, 2.1))
            .expect("valid input");
        assert!(blocked);
        let open = is_line_blocked(&grid, DVec2::new(3.2, 3.7), DVec2::new(3.9, 3.1))
            .expect("valid input");
        assert!(!open);
    }

    #[test]
    fn open_line_is_not_blocked() {
        let grid = OccupancyGrid::open(8, 8);
        let blocked = is_line_blocked(&grid, DVec2::new(1.5, 1.5), DVec2::new(6.5, 4.5))
            .expect("valid input");
        assert!(!blocked);
    }

    #[test]
    fn wall_across_the_line_blocks() {
        let solid: Vec<(u32, u32)> = (0..8).map(|y| (4, y)).collect();
        let grid = grid_with(8, 8, &solid);
        let blocked = is_line_blocked(&grid, DVec2::new(1.5, 2.5), DVec2::new(6.5, 3.5))
            .expect("valid input");
        assert!(blocked);
    }

    #[test]
    fn corner_target_is_touched_not_entered() {
        // (2, 1) is solid and touches the corner at (2.0, 2.0); ending the
        // ray exactly on the corner must not count as passing it.
        let grid = grid_with(3, 3, &[(2, 1)]);
        let blocked = is_line_blocked(&grid, DVec2::new(0.5, 0.5), DVec2::new(2.0, 2.0))
            .expect("valid input");
        assert!(!blocked);
    }

    #[test]
    fn passing_through_the_corner_is_checked_against_both_sides() {
        let grid = grid_with(3, 3, &[(2, 1)]);
        let blocked = is_line_blocked(&grid, DVec2::new(0.5, 0.5), DVec2::new(2.5, 2.5))
            .expect("valid input");
        assert!(blocked);

        let grid = grid_with(3, 3, &[(1, 2)]);
        let blocked = is_line_blocked(&grid, DVec2::new(0.5, 0.5), DVec2::new(2.5, 2.5))
            .expect("valid input");
        assert!(blocked);
    }

    #[test]
    fn horizontal_ray_ending_on_a_lattice_corner_does_not_block() {
        let grid = grid_with(5, 5, &[(3, 2)]);
        let blocked = is_line_blocked(&grid, DVec2::new(0.5, 2.0), DVec2::new(3.0, 2.0))
            .expect("valid input");
        assert!(!blocked);
    }

    #[test]
    fn vertical_ray_ending_on_a_lattice_corner_does_not_block() {
        let grid = grid_with(5, 5, &[(2, 3)]);
        let blocked = is_line_blocked(&grid, DVec2::new(2.0, 0.5), DVec2::new(2.0, 3.0))
            .expect("valid input");
        assert!(!blocked);
    }

    #[test]
    fn exit_through_the_grid_edge_is_not_blocked() {
        let grid = OccupancyGrid::open(4, 4);
        let blocked = is_line_blocked(&grid, DVec2::new(1.5, 1.5), DVec2::new(10.5, 1.5))
            .expect("valid input");
        assert!(!blocked);
    }

    #[test]
    fn rejects_non_finite_input() {
        let grid = OccupancyGrid::open(8, 8);
        let result = is_line_blocked(&grid, DVec2::new(f64::NAN, 1.5), DVec2::new(2.5, 2.5));
        assert!(matches!(result, Err(CastError::NonFinite(_))));
    }
}
