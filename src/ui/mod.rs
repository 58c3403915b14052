mod button;

pub use button::{Button, ControlAction};

use macroquad::prelude::{Color, screen_height, screen_width};

use crate::application::CanvasLayout;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 10.0;
pub const MARGIN: f32 = 10.0;

pub const GRID_COLOR: Color = Color::new(0x30 as f32 / 255.0, 0x36 as f32 / 255.0, 0x3d as f32 / 255.0, 1.0);
pub const DEAD_COLOR: Color = Color::new(0x0d as f32 / 255.0, 0x11 as f32 / 255.0, 0x17 as f32 / 255.0, 1.0);
pub const ALIVE_COLOR: Color = Color::new(0x3f as f32 / 255.0, 0xb9 as f32 / 255.0, 0x50 as f32 / 255.0, 1.0);

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Where the surface is drawn on screen and at what scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub scale: f32,
}

impl Viewport {
    /// Fit the surface inside the grid area, keeping a margin
    pub fn fit(layout: &CanvasLayout) -> Self {
        let scale = layout.fit_scale(
            grid_area_width() - 2.0 * MARGIN,
            grid_area_height() - 2.0 * MARGIN,
        );
        Self { origin_x: MARGIN, origin_y: MARGIN, scale }
    }

    /// Screen position relative to the surface's top-left corner
    pub fn to_surface(&self, mouse_pos: (f32, f32)) -> (f32, f32) {
        (mouse_pos.0 - self.origin_x, mouse_pos.1 - self.origin_y)
    }
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    [
        ("Play/Pause", ControlAction::PlayPause),
        ("Step", ControlAction::Step),
        ("Reset", ControlAction::Reset),
        ("Clear", ControlAction::Clear),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, action))| {
        let y = 20.0 + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
        Button::new(px, y, PANEL_WIDTH - MARGIN, BUTTON_HEIGHT, label, action)
    })
    .collect()
}
