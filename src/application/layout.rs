/// CanvasLayout maps between grid coordinates and surface pixels.
///
/// Each cell is `cell_size` pixels wide with a 1px separator before it,
/// plus one closing separator line on the far edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasLayout {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
}

impl CanvasLayout {
    pub const fn new(width: usize, height: usize, cell_size: u32) -> Self {
        Self { width, height, cell_size }
    }

    /// Distance between the origins of adjacent cells
    pub fn pitch(&self) -> f32 {
        (self.cell_size + 1) as f32
    }

    /// Surface size in pixels: `(cell + 1) * n + 1` on each axis
    pub fn surface_size(&self) -> (f32, f32) {
        (
            self.pitch() * self.width as f32 + 1.0,
            self.pitch() * self.height as f32 + 1.0,
        )
    }

    /// Top-left pixel of the cell at (row, col)
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            col as f32 * self.pitch() + 1.0,
            row as f32 * self.pitch() + 1.0,
        )
    }

    /// Map a pointer position on a surface drawn at `scale` to (row, col).
    /// Returns None when the pointer is off the grid.
    pub fn pointer_to_cell(&self, x: f32, y: f32, scale: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || scale <= 0.0 {
            return None;
        }
        let col = (x / scale / self.pitch()).floor() as usize;
        let row = (y / scale / self.pitch()).floor() as usize;
        (row < self.height && col < self.width).then_some((row, col))
    }

    /// Largest scale at which the surface fits inside (max_width, max_height)
    pub fn fit_scale(&self, max_width: f32, max_height: f32) -> f32 {
        let (w, h) = self.surface_size();
        (max_width / w).min(max_height / h).max(f32::MIN_POSITIVE)
    }
}
