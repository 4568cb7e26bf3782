use glam::DVec2;

use crate::grid::OccupancyGrid;
use crate::raycast::StepPath;
use crate::raycast::traversal::{Advance, Traversal};
use crate::raycast::utils::{in_grid, is_solid};
use crate::types::CastError;

/// Walk the cells from `start` toward `target`, recording them in visitation
/// order starting with the start cell.
///
/// The walk ends when a solid cell is entered (it is appended, so the path
/// includes the blocking cell), when the target's cell is reached, or when
/// the ray leaves the grid (the accumulated path is returned as-is). The last
/// cell tells the caller which case occurred.
pub fn cast_step_path(
    grid: &OccupancyGrid,
    start: DVec2,
    target: DVec2,
) -> Result<StepPath, CastError> {
    if !start.is_finite() || !target.is_finite() {
        return Err(CastError::NonFinite(format!(
            "start {}, target {}",
            start, target
        )));
    }

    let start_cell = start.as_ivec2();
    let target_cell = target.as_ivec2();

    let mut path = vec![start_cell];
    if start_cell == target_cell {
        return Ok(path);
    }

    let mut ray = Traversal::new(start, target - start);

    while ray.inside(grid.width(), grid.height()) {
        match ray.advance() {
            Advance::Single(cell) => {
                if !in_grid(grid, cell) {
                    return Ok(path);
                }
                path.push(cell);
                if is_solid(grid, cell) || cell == target_cell {
                    return Ok(path);
                }
            }
            Advance::Corner {
                side_x,
                side_y,
                diagonal,
                ..
            } => {
                // A side cell only enters the path when it ends the walk; a
                // clean corner crossing records just the diagonal cell.
                for side in [side_x, side_y] {
                    if is_solid(grid, side) || side == target_cell {
                        path.push(side);
                        return Ok(path);
                    }
                }
                if !in_grid(grid, diagonal) {
                    return Ok(path);
                }
                path.push(diagonal);
                if is_solid(grid, diagonal) || diagonal == target_cell {
                    return Ok(path);
                }
            }
        }
    }

    Ok(path)
}
