use crate::domain::Seed;

/// Startup parameters for a session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Side of a cell in surface pixels, excluding the separator line
    pub cell_size: u32,
    pub ticks_per_second: f32,
    pub seed: Seed,
    pub start_paused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            cell_size: 8,
            ticks_per_second: 60.0,
            seed: Seed::Modulus,
            start_paused: false,
        }
    }
}
