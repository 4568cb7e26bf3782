use approx::relative_eq;
use glam::{DVec2, IVec2};

/// Tolerance for the corner tie test on the per-axis boundary distances.
/// Symmetric casts produce bitwise-equal accumulators; the tolerance absorbs
/// the rounding left over when the direction components are uneven.
const TIE_EPSILON: f64 = 1e-12;

/// Transient DDA state for one traversal. Rebuilt from the query arguments on
/// every call and discarded afterwards.
pub(crate) struct Traversal {
    /// Continuous position, advanced by whole cells from the unsnapped start.
    pos: DVec2,
    /// Step direction along each axis.
    step: IVec2,
    /// Ray parameter remaining to the next cell boundary along each axis.
    t_max: DVec2,
    /// Ray parameter spanning one full cell along each axis.
    t_delta: DVec2,
}

/// One advance of the traversal.
pub(crate) enum Advance {
    /// A single axis advanced; the newly entered cell.
    Single(IVec2),
    /// Both boundary distances tied: the ray passed through a cell corner and
    /// both axes advanced at once.
    Corner {
        /// Cell reached by the x-step alone, from the pre-advance position.
        /// Must be checked before the diagonal move is accepted.
        side_x: IVec2,
        /// Cell reached by the y-step alone, likewise.
        side_y: IVec2,
        /// The corner cell in the direction of travel, for lattice-corner
        /// targets.
        corner: IVec2,
        /// Cell entered by the combined move.
        diagonal: IVec2,
    },
}

impl Traversal {
    pub fn new(start: DVec2, dir: DVec2) -> Self {
        // A zero component steps positively; its t_max becomes infinite and
        // the axis never advances.
        let step = IVec2::new(
            if dir.x < 0.0 { -1 } else { 1 },
            if dir.y < 0.0 { -1 } else { 1 },
        );

        let t_max = DVec2::new(
            axis_t_max(start.x, dir.x, step.x),
            axis_t_max(start.y, dir.y, step.y),
        );
        let t_delta = DVec2::new(f64::from(step.x) / dir.x, f64::from(step.y) / dir.y);

        Self {
            pos: start,
            step,
            t_max,
            t_delta,
        }
    }

    pub fn step(&self) -> IVec2 {
        self.step
    }

    /// Strictly-open bounds test: touching a boundary coordinate counts as
    /// having left the grid.
    pub fn inside(&self, width: u32, height: u32) -> bool {
        self.pos.x > 0.0
            && self.pos.x < f64::from(width)
            && self.pos.y > 0.0
            && self.pos.y < f64::from(height)
    }

    /// Advance to the next cell boundary, committing position and
    /// accumulators, and report the cells entered.
    pub fn advance(&mut self) -> Advance {
        let t_x = self.t_max.x.abs();
        let t_y = self.t_max.y.abs();

        if relative_eq!(t_x, t_y, epsilon = TIE_EPSILON, max_relative = TIE_EPSILON) {
            // Side cells are keyed off the pre-advance position.
            let side_x = IVec2::new(
                (self.pos.x + f64::from(self.step.x)) as i32,
                self.pos.y as i32,
            );
            let side_y = IVec2::new(
                self.pos.x as i32,
                (self.pos.y + f64::from(self.step.y)) as i32,
            );
            let corner = corner_cell(self.pos, self.step);

            self.t_max += self.t_delta;
            self.pos += DVec2::new(f64::from(self.step.x), f64::from(self.step.y));

            Advance::Corner {
                side_x,
                side_y,
                corner,
                diagonal: self.cell(),
            }
        } else if t_x < t_y {
            self.t_max.x += self.t_delta.x;
            self.pos.x += f64::from(self.step.x);
            Advance::Single(self.cell())
        } else {
            self.t_max.y += self.t_delta.y;
            self.pos.y += f64::from(self.step.y);
            Advance::Single(self.cell())
        }
    }

    /// Cell containing the current position.
    fn cell(&self) -> IVec2 {
        self.pos.as_ivec2()
    }
}

/// Parametric distance from `start` to the first cell boundary along one axis.
fn axis_t_max(start: f64, dir: f64, step: i32) -> f64 {
    let boundary = if step > 0 {
        next_boundary_up(start)
    } else {
        start.floor()
    };
    ((boundary - start) / dir).abs()
}

/// Next integer strictly above `n`. The pre-ceil nudge makes an exact integer
/// coordinate advance to the next integer instead of ceiling to itself.
fn next_boundary_up(n: f64) -> f64 {
    n.next_up().ceil()
}

/// Cell touched when the ray passes exactly through a lattice corner, keyed
/// by the step sign on each axis: a positive axis selects the cell past the
/// corner, a negative axis the cell before it.
pub(crate) fn corner_cell(pos: DVec2, step: IVec2) -> IVec2 {
    IVec2::new(
        if step.x > 0 {
            (pos.x + 1.0) as i32
        } else {
            pos.x as i32
        },
        if step.y > 0 {
            (pos.y + 1.0) as i32
        } else {
            pos.y as i32
        },
    )
}
