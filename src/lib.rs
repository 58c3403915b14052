// Domain layer - the simulation engine
pub mod domain;

// Application layer - session context, scheduling, surface geometry
pub mod application;
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, MAX_DIMENSION, Pattern, Seed, StepStrategy, Universe, UniverseError, presets};
pub use application::{CanvasLayout, GameState, Scheduler};
pub use config::Config;
