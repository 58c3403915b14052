//! Property-based tests for the universe.
//!
//! Uses proptest to check the engine's contracts over arbitrary dimensions,
//! seeds and edit sequences.

use life_universe::{Cell, Seed, StepStrategy, Universe, UniverseError};
use proptest::prelude::*;

fn dims() -> impl Strategy<Value = (usize, usize)> {
    (1usize..40, 1usize..40)
}

fn seeds() -> impl Strategy<Value = Seed> {
    prop_oneof![
        Just(Seed::Modulus),
        Just(Seed::Empty),
        any::<u64>().prop_map(Seed::Random),
    ]
}

// =============================================================================
// Buffer shape
// =============================================================================

proptest! {
    /// cells() always has width*height entries, each 0 or 1
    #[test]
    fn prop_buffer_shape((w, h) in dims(), seed in seeds(), steps in 0usize..5) {
        let mut universe = Universe::with_seed(w, h, seed).unwrap();
        for _ in 0..steps {
            universe.step();
        }
        prop_assert_eq!(universe.cells().len(), w * h);
        prop_assert_eq!(universe.cell_bytes().len(), w * h);
        prop_assert!(universe.cell_bytes().iter().all(|&b| b <= 1));
    }
}

// =============================================================================
// Reset and clear
// =============================================================================

proptest! {
    /// reset() reproduces the construction grid after any history
    #[test]
    fn prop_reset_is_deterministic(
        (w, h) in dims(),
        seed in seeds(),
        edits in prop::collection::vec((0i64..40, 0i64..40), 0..20),
        steps in 0usize..6,
    ) {
        let mut universe = Universe::with_seed(w, h, seed).unwrap();
        let initial = universe.cells().to_vec();

        for (row, col) in edits {
            let _ = universe.toggle(row, col);
        }
        for _ in 0..steps {
            universe.step();
        }

        universe.reset();
        prop_assert_eq!(universe.cells(), initial.as_slice());
        universe.reset();
        prop_assert_eq!(universe.cells(), initial.as_slice());
    }

    /// clear() twice equals clear() once: all dead
    #[test]
    fn prop_clear_is_idempotent((w, h) in dims(), seed in seeds()) {
        let mut universe = Universe::with_seed(w, h, seed).unwrap();
        universe.clear();
        let once = universe.cells().to_vec();
        universe.clear();
        prop_assert_eq!(universe.cells(), once.as_slice());
        prop_assert!(once.iter().all(|&c| c == Cell::Dead));
    }
}

// =============================================================================
// Toggle
// =============================================================================

proptest! {
    /// Toggling the same in-range cell twice restores the grid
    #[test]
    fn prop_toggle_is_involution((w, h) in dims(), seed in seeds(), r in 0usize..40, c in 0usize..40) {
        let mut universe = Universe::with_seed(w, h, seed).unwrap();
        let (row, col) = ((r % h) as i64, (c % w) as i64);
        let before = universe.cells().to_vec();

        universe.toggle(row, col).unwrap();
        let changed = universe
            .cells()
            .iter()
            .zip(&before)
            .filter(|(a, b)| a != b)
            .count();
        prop_assert_eq!(changed, 1);

        universe.toggle(row, col).unwrap();
        prop_assert_eq!(universe.cells(), before.as_slice());
    }

    /// Out-of-range toggles fail and change nothing
    #[test]
    fn prop_out_of_bounds_is_noop((w, h) in dims(), row in -50i64..50, col in -50i64..50) {
        prop_assume!(row < 0 || col < 0 || row >= h as i64 || col >= w as i64);
        let mut universe = Universe::new(w, h).unwrap();
        let before = universe.cells().to_vec();

        let result = universe.toggle(row, col);
        prop_assert_eq!(result, Err(UniverseError::OutOfBounds { row, col, width: w, height: h }));
        prop_assert_eq!(universe.cells(), before.as_slice());
    }
}

// =============================================================================
// Step strategies
// =============================================================================

proptest! {
    /// Serial and parallel stepping compute the same generations
    #[test]
    fn prop_strategies_agree((w, h) in dims(), seed in any::<u64>(), steps in 1usize..6) {
        let mut serial = Universe::with_seed(w, h, Seed::Random(seed)).unwrap();
        let mut parallel = serial.clone();
        for _ in 0..steps {
            serial.step_with(StepStrategy::Serial);
            parallel.step_with(StepStrategy::Parallel);
        }
        prop_assert_eq!(serial.cells(), parallel.cells());
    }

    /// Shifting a grid around the torus commutes with stepping
    #[test]
    fn prop_step_is_translation_invariant(
        (w, h) in dims(),
        seed in any::<u64>(),
        dr in 0usize..40,
        dc in 0usize..40,
    ) {
        let original = Universe::with_seed(w, h, Seed::Random(seed)).unwrap();
        let mut shifted = Universe::with_seed(w, h, Seed::Empty).unwrap();
        for (row, col, cell) in original.iter_cells() {
            shifted.set_wrapping(row + dr, col + dc, cell);
        }

        let mut stepped = original.clone();
        stepped.step();
        shifted.step();

        for (row, col, cell) in stepped.iter_cells() {
            prop_assert_eq!(shifted.get((row + dr) % h, (col + dc) % w), Some(cell));
        }
    }
}
