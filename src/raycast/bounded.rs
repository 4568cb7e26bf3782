use glam::DVec2;

use crate::grid::OccupancyGrid;
use crate::raycast::CastOutcome;
use crate::raycast::traversal::{Advance, Traversal};
use crate::raycast::utils::is_solid;
use crate::types::CastError;

/// Cast from `start` along `dir`, counting cells entered until a solid cell
/// blocks the ray, the grid is left, or the step budget runs out.
///
/// The budget is checked before each step is evaluated, so `max_steps = 1`
/// exhausts immediately even when the next cell is open. The start cell
/// itself is never tested.
pub fn cast_bounded_steps(
    grid: &OccupancyGrid,
    start: DVec2,
    dir: DVec2,
    max_steps: u32,
) -> Result<CastOutcome, CastError> {
    if !start.is_finite() || !dir.is_finite() {
        return Err(CastError::NonFinite(format!(
            "start {}, direction {}",
            start, dir
        )));
    }
    if dir == DVec2::ZERO {
        return Err(CastError::ZeroDirection);
    }

    let mut ray = Traversal::new(start, dir);
    let mut steps = 0u32;

    while ray.inside(grid.width(), grid.height()) {
        steps += 1;
        if steps >= max_steps {
            return Ok(CastOutcome::BudgetExceeded);
        }

        match ray.advance() {
            Advance::Single(cell) => {
                if is_solid(grid, cell) {
                    return Ok(CastOutcome::Blocked(steps));
                }
            }
            Advance::Corner {
                side_x,
                side_y,
                diagonal,
                ..
            } => {
                // A corner crossing must not slip past a wall touching the
                // corner: both side cells block as well as the cell entered.
                if is_solid(grid, side_x) || is_solid(grid, side_y) || is_solid(grid, diagonal) {
                    return Ok(CastOutcome::Blocked(steps));
                }
            }
        }
    }

    Ok(CastOutcome::NoHit)
}
