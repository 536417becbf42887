mod cell;
mod grid;
mod patterns;
mod algorithm;
pub mod transition;

pub use cell::Cell;
pub use grid::{Grid, GridError};
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
pub use transition::{next_generation, next_generation_parallel};
