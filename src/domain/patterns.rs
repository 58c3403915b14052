use super::{Cell, Universe};

/// Represents a pattern that can be stamped onto the universe
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Set the pattern's cells alive with its top-left corner at (row, col).
    /// Cells past an edge wrap around the torus.
    pub fn place_on(&self, universe: &mut Universe, row: usize, col: usize) {
        for (dr, dc) in &self.cells {
            universe.set_wrapping(row + dr, col + dc, Cell::Alive);
        }
    }

    /// Top-left corner that centres the pattern on (row, col), wrapping
    pub fn centred_origin(&self, universe: &Universe, row: usize, col: usize) -> (usize, usize) {
        let (h, w) = (universe.height(), universe.width());
        (
            (row + h * self.height - self.height / 2) % h,
            (col + w * self.width - self.width / 2) % w,
        )
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        let arms = [2, 3, 4, 8, 9, 10];
        let bars = [0, 5, 7, 12];
        let cells = bars
            .iter()
            .flat_map(|&r| arms.iter().map(move |&c| (r, c)))
            .chain(arms.iter().flat_map(|&r| bars.iter().map(move |&c| (r, c))))
            .collect();
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            pulsar(),
            r_pentomino(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Seed;

    fn empty(width: usize, height: usize) -> Universe {
        Universe::with_seed(width, height, Seed::Empty).unwrap()
    }

    fn run(universe: &mut Universe, steps: usize) {
        (0..steps).for_each(|_| universe.step());
    }

    #[test]
    fn test_dimensions_from_offsets() {
        let lwss = presets::lwss();
        assert_eq!((lwss.height, lwss.width), (4, 5));
        assert_eq!(presets::pulsar().cells.len(), 48);
    }

    #[test]
    fn test_oscillators_return_to_start() {
        for (pattern, period) in [
            (presets::blinker(), 2),
            (presets::toad(), 2),
            (presets::beacon(), 2),
            (presets::pulsar(), 3),
        ] {
            let mut universe = empty(20, 20);
            pattern.place_on(&mut universe, 3, 3);
            let start = universe.cells().to_vec();
            run(&mut universe, 1);
            assert_ne!(universe.cells(), start.as_slice(), "{}", pattern.name);
            run(&mut universe, period - 1);
            assert_eq!(universe.cells(), start.as_slice(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_place_wraps_at_edges() {
        let mut universe = empty(6, 6);
        presets::block().place_on(&mut universe, 5, 5);
        for (row, col) in [(5, 5), (5, 0), (0, 5), (0, 0)] {
            assert_eq!(universe.get(row, col), Some(Cell::Alive));
        }
        assert_eq!(universe.population(), 4);
    }

    #[test]
    fn test_centred_origin_wraps() {
        let universe = empty(10, 10);
        let glider = presets::glider();
        assert_eq!(glider.centred_origin(&universe, 5, 5), (4, 4));
        assert_eq!(glider.centred_origin(&universe, 0, 0), (9, 9));
    }
}
