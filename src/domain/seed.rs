//! Deterministic seed patterns used at construction and on reset.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Cell;

/// Probability of a cell starting alive under [`Seed::Random`].
pub const RANDOM_DENSITY: f64 = 0.3;

/// Policy for the initial grid contents.
///
/// Every variant is a pure function of the dimensions, so repeated resets
/// reproduce the same generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Seed {
    /// Alive iff the row-major index is divisible by 2 or by 7
    #[default]
    Modulus,
    /// 30% density from a `StdRng` seeded with the given value
    Random(u64),
    /// Every cell dead
    Empty,
}

impl Seed {
    /// Fill `cells` (row-major, any length) according to this policy
    pub fn fill(self, cells: &mut [Cell]) {
        match self {
            Seed::Modulus => cells
                .iter_mut()
                .enumerate()
                .for_each(|(i, cell)| *cell = Cell::from(i % 2 == 0 || i % 7 == 0)),
            Seed::Random(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                cells
                    .iter_mut()
                    .for_each(|cell| *cell = Cell::from(rng.random_bool(RANDOM_DENSITY)));
            }
            Seed::Empty => cells.fill(Cell::Dead),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Seed::Modulus => "Modulus",
            Seed::Random(_) => "Random",
            Seed::Empty => "Empty",
        }
    }
}
