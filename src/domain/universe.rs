use rayon::prelude::*;
use tracing::{debug, trace};

use super::{Cell, Seed, StepStrategy, UniverseError};

/// Largest accepted width or height.
pub const MAX_DIMENSION: usize = 16_384;

/// Universe owns a fixed-size toroidal grid and advances it under B3/S23.
///
/// Cells are stored row-major (`row * width + col`). Stepping reads the
/// current generation and writes into a scratch buffer, then the two are
/// swapped, so callers never observe a half-updated grid.
#[derive(Clone, Debug)]
pub struct Universe {
    width: usize,
    height: usize,
    seed: Seed,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Universe {
    /// Create a universe filled with the default [`Seed::Modulus`] pattern
    pub fn new(width: usize, height: usize) -> Result<Self, UniverseError> {
        Self::with_seed(width, height, Seed::default())
    }

    /// Create a universe whose initial and reset state follows `seed`
    pub fn with_seed(width: usize, height: usize, seed: Seed) -> Result<Self, UniverseError> {
        let valid = |side: usize| (1..=MAX_DIMENSION).contains(&side);
        if !valid(width) || !valid(height) {
            return Err(UniverseError::InvalidDimension {
                width,
                height,
                max: MAX_DIMENSION,
            });
        }

        let len = width * height;
        let mut cells = vec![Cell::Dead; len];
        seed.fill(&mut cells);
        debug!(width, height, seed = seed.name(), "created universe");

        Ok(Self {
            width,
            height,
            seed,
            cells,
            scratch: vec![Cell::Dead; len],
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Read-only view of the current generation, row-major.
    ///
    /// The borrow ends before any mutating call, so a view can never
    /// observe a step in progress.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The current generation as raw bytes, each `0` (dead) or `1` (alive)
    pub fn cell_bytes(&self) -> &[u8] {
        // SAFETY: Cell is #[repr(u8)] with discriminants 0 and 1, so a
        // [Cell] has the same size, alignment and valid values as a [u8].
        unsafe { std::slice::from_raw_parts(self.cells.as_ptr().cast::<u8>(), self.cells.len()) }
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Map signed coordinates to an index without wrapping
    fn checked_index(&self, row: i64, col: i64) -> Result<usize, UniverseError> {
        let in_range = |v: i64, limit: usize| usize::try_from(v).ok().filter(|&v| v < limit);
        match (in_range(row, self.height), in_range(col, self.width)) {
            (Some(r), Some(c)) => Ok(self.index(r, c)),
            _ => Err(UniverseError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.index(row, col)])
    }

    /// Overwrite a single cell
    pub fn set(&mut self, row: i64, col: i64, cell: Cell) -> Result<(), UniverseError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Overwrite a cell, wrapping coordinates around the torus
    pub fn set_wrapping(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row % self.height, col % self.width);
        self.cells[idx] = cell;
    }

    /// Flip the cell at (row, col). Out-of-range coordinates leave the grid untouched.
    pub fn toggle(&mut self, row: i64, col: i64) -> Result<(), UniverseError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / width, i % width, cell))
    }

    /// Advance one generation, choosing serial or parallel by grid size
    pub fn step(&mut self) {
        self.step_with(StepStrategy::Auto);
    }

    /// Advance one generation with an explicit strategy
    pub fn step_with(&mut self, strategy: StepStrategy) {
        let (width, height) = (self.width, self.height);
        let current = &self.cells;

        if strategy.is_parallel_for(current.len()) {
            self.scratch
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(row, out)| evolve_row(current, width, height, row, out));
        } else {
            self.scratch
                .chunks_mut(width)
                .enumerate()
                .for_each(|(row, out)| evolve_row(current, width, height, row, out));
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        trace!(strategy = strategy.name(), "stepped universe");
    }

    /// Restore the seed pattern chosen at construction
    pub fn reset(&mut self) {
        self.seed.fill(&mut self.cells);
        debug!(seed = self.seed.name(), "reset universe");
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        debug!("cleared universe");
    }
}

/// Compute one row of the next generation from an untouched snapshot.
///
/// Sums the 3x3 toroidal block and subtracts the centre. On 1-wide or
/// 1-tall grids a wrapped offset can land on the cell itself, and it is
/// counted once per offset.
fn evolve_row(current: &[Cell], width: usize, height: usize, row: usize, out: &mut [Cell]) {
    let above = (row + height - 1) % height * width;
    let here = row * width;
    let below = (row + 1) % height * width;

    for (col, slot) in out.iter_mut().enumerate() {
        let left = (col + width - 1) % width;
        let right = (col + 1) % width;

        let centre = current[here + col];
        let block: u8 = [above, here, below]
            .into_iter()
            .flat_map(|base| [base + left, base + col, base + right])
            .map(|i| current[i] as u8)
            .sum();

        *slot = centre.evolve(block - centre as u8);
    }
}
