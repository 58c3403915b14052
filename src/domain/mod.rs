mod cell;
mod error;
mod patterns;
mod seed;
mod strategy;
mod universe;

pub use cell::Cell;
pub use error::UniverseError;
pub use patterns::{Pattern, presets};
pub use seed::{RANDOM_DENSITY, Seed};
pub use strategy::{PARALLEL_THRESHOLD, StepStrategy};
pub use universe::{MAX_DIMENSION, Universe};
