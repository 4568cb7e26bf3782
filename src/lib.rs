pub mod grid;
pub mod raycast;
pub mod types;

pub use grid::OccupancyGrid;
pub use raycast::{CastOutcome, StepPath, cast_bounded_steps, cast_step_path, is_line_blocked};
pub use types::CastError;
