use glam::{DVec2, IVec2};

use crate::grid::OccupancyGrid;
use crate::types::CastError;

pub mod bounded;
pub mod path;
pub mod sight;
mod traversal;
mod utils;

pub use bounded::cast_bounded_steps;
pub use path::cast_step_path;
pub use sight::is_line_blocked;

/// Cells visited by a cast, in visitation order.
pub type StepPath = Vec<IVec2>;

/// Result of a bounded cast.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastOutcome {
    /// The ray entered a solid cell after this many steps (1-based).
    Blocked(u32),
    /// The ray left the grid without entering a solid cell.
    NoHit,
    /// The step budget ran out before any solid cell was entered.
    BudgetExceeded,
}

impl CastOutcome {
    /// Extract the step count, or `None` if nothing was hit.
    pub fn steps(self) -> Option<u32> {
        match self {
            Self::Blocked(steps) => Some(steps),
            _ => None,
        }
    }

    pub fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

impl OccupancyGrid {
    /// See [`cast_bounded_steps`].
    pub fn cast_bounded_steps(
        &self,
        start: DVec2,
        dir: DVec2,
        max_steps: u32,
    ) -> Result<CastOutcome, CastError> {
        cast_bounded_steps(self, start, dir, max_steps)
    }

    /// See [`cast_step_path`].
    pub fn cast_step_path(&self, start: DVec2, target: DVec2) -> Result<StepPath, CastError> {
        cast_step_path(self, start, target)
    }

    /// See [`is_line_blocked`].
    pub fn is_line_blocked(&self, start: DVec2, target: DVec2) -> Result<bool, CastError> {
        is_line_blocked(self, start, target)
    }
}
