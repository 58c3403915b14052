use tracing::info;

use super::{CanvasLayout, Scheduler};
use crate::config::Config;
use crate::domain::{Pattern, Universe, UniverseError};

/// GameState orchestrates the simulation.
/// It is the one long-lived context the driver passes around: the universe,
/// its cadence and its on-screen geometry.
pub struct GameState {
    pub universe: Universe,
    pub scheduler: Scheduler,
    pub layout: CanvasLayout,
    pub generation: u64,
    /// Index into `presets::all_patterns()` awaiting placement (None = toggle mode)
    pub pending_pattern: Option<usize>,
}

impl GameState {
    /// Create a session from startup parameters
    pub fn new(config: &Config) -> Result<Self, UniverseError> {
        let universe = Universe::with_seed(config.width, config.height, config.seed)?;
        let mut scheduler = Scheduler::new(config.ticks_per_second);
        if !config.start_paused {
            scheduler.play();
        }

        Ok(Self {
            universe,
            scheduler,
            layout: CanvasLayout::new(config.width, config.height, config.cell_size),
            generation: 0,
            pending_pattern: None,
        })
    }

    pub const fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.scheduler.toggle();
        info!(running = self.scheduler.is_running(), generation = self.generation, "toggled playback");
        self
    }

    /// Advance exactly one generation, regardless of playback
    pub fn step_once(mut self) -> Self {
        self.universe.step();
        self.generation += 1;
        self
    }

    /// Restore the seed pattern and reset generation counter
    pub fn reset(mut self) -> Self {
        self.universe.reset();
        self.generation = 0;
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.universe.clear();
        self.generation = 0;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        let rate = self.scheduler.ticks_per_second() + delta;
        self.scheduler.set_ticks_per_second(rate);
        self
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        for _ in 0..self.scheduler.poll(delta_time) {
            self.universe.step();
            self.generation += 1;
        }
        self
    }

    /// Toggle the cell under a pointer on a surface drawn at `scale`.
    /// Returns whether a cell was hit.
    pub fn toggle_at(&mut self, x: f32, y: f32, scale: f32) -> bool {
        let Some((row, col)) = self.layout.pointer_to_cell(x, y, scale) else {
            return false;
        };
        self.universe.toggle(row as i64, col as i64).is_ok()
    }

    /// Stamp a pattern centred on the cell under the pointer
    pub fn stamp_at(&mut self, pattern: &Pattern, x: f32, y: f32, scale: f32) -> bool {
        let Some((row, col)) = self.layout.pointer_to_cell(x, y, scale) else {
            return false;
        };
        let (top, left) = pattern.centred_origin(&self.universe, row, col);
        pattern.place_on(&mut self.universe, top, left);
        true
    }
}
