use glam::IVec2;

use crate::grid::OccupancyGrid;

/// equivalent to (x >= 0 && x < width) for signed x
#[inline]
pub(crate) fn in_grid(grid: &OccupancyGrid, cell: IVec2) -> bool {
    (cell.x as u32) < grid.width() && (cell.y as u32) < grid.height()
}

/// Occupancy of a traversal cell. Cells outside the grid read as open.
#[inline]
pub(crate) fn is_solid(grid: &OccupancyGrid, cell: IVec2) -> bool {
    if cell.x < 0 || cell.y < 0 {
        return false;
    }
    grid.get(cell.x as u32, cell.y as u32).unwrap_or(false)
}
