use macroquad::prelude::*;

/// What a control button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    PlayPause,
    Step,
    Reset,
    Clear,
}

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: &'static str,
    action: ControlAction,
}

impl Button {
    const COLOR: Color = Color::new(0.13, 0.16, 0.2, 1.0);
    const HOVER_COLOR: Color = Color::new(0.19, 0.23, 0.28, 1.0);

    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        label: &'static str,
        action: ControlAction,
    ) -> Self {
        Self { x, y, width, height, label, action }
    }

    pub const fn action(&self) -> ControlAction {
        self.action
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        (self.x..=self.x + self.width).contains(&mouse_pos.0)
            && (self.y..=self.y + self.height).contains(&mouse_pos.1)
    }

    /// Draw button, swapping "Play/Pause" for the action it would take
    pub fn draw(&self, mouse_pos: (f32, f32), running: bool) {
        let color = if self.is_hovered(mouse_pos) { Self::HOVER_COLOR } else { Self::COLOR };
        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 1.0, super::GRID_COLOR);

        let label = match (self.action, running) {
            (ControlAction::PlayPause, true) => "Pause",
            (ControlAction::PlayPause, false) => "Play",
            _ => self.label,
        };
        let text_size = measure_text(label, None, 20, 1.0);
        draw_text(
            label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
