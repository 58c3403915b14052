use macroquad::prelude::*;

use crate::application::{CanvasLayout, GameState};
use crate::domain::{Cell, Pattern, Universe};
use crate::ui::{ALIVE_COLOR, Button, DEAD_COLOR, GRID_COLOR, Viewport, panel_x, PANEL_WIDTH};

/// Draw separator lines around every cell
pub fn draw_grid_lines(layout: &CanvasLayout, viewport: &Viewport) {
    let (surface_w, surface_h) = layout.surface_size();
    let s = viewport.scale;
    let (ox, oy) = (viewport.origin_x, viewport.origin_y);
    let thickness = s.max(1.0);

    for i in 0..=layout.width {
        let x = ox + (i as f32 * layout.pitch() + 0.5) * s;
        draw_line(x, oy, x, oy + surface_h * s, thickness, GRID_COLOR);
    }
    for j in 0..=layout.height {
        let y = oy + (j as f32 * layout.pitch() + 0.5) * s;
        draw_line(ox, y, ox + surface_w * s, y, thickness, GRID_COLOR);
    }
}

/// Paint every cell from the current generation.
/// Reads the buffer once; the borrow ends before any mutation.
pub fn draw_cells(universe: &Universe, layout: &CanvasLayout, viewport: &Viewport) {
    let size = layout.cell_size as f32 * viewport.scale;

    for (row, col, cell) in universe.iter_cells() {
        let (x, y) = layout.cell_origin(row, col);
        let color = match cell {
            Cell::Alive => ALIVE_COLOR,
            Cell::Dead => DEAD_COLOR,
        };
        draw_rectangle(
            viewport.origin_x + x * viewport.scale,
            viewport.origin_y + y * viewport.scale,
            size,
            size,
            color,
        );
    }
}

/// Draw a semi-transparent preview of a pattern centred on the pointer
pub fn draw_pattern_preview(
    pattern: &Pattern,
    state: &GameState,
    viewport: &Viewport,
    mouse_pos: (f32, f32),
) {
    let (sx, sy) = viewport.to_surface(mouse_pos);
    let Some((row, col)) = state.layout.pointer_to_cell(sx, sy, viewport.scale) else {
        return;
    };
    let (top, left) = pattern.centred_origin(&state.universe, row, col);
    let size = state.layout.cell_size as f32 * viewport.scale;
    let ghost = Color::new(ALIVE_COLOR.r, ALIVE_COLOR.g, ALIVE_COLOR.b, 0.45);

    for &(dr, dc) in &pattern.cells {
        let r = (top + dr) % state.layout.height;
        let c = (left + dc) % state.layout.width;
        let (x, y) = state.layout.cell_origin(r, c);
        draw_rectangle(
            viewport.origin_x + x * viewport.scale,
            viewport.origin_y + y * viewport.scale,
            size,
            size,
            ghost,
        );
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), DEAD_COLOR);
    draw_line(panel_x(), 0.0, panel_x(), screen_height(), 1.0, GRID_COLOR);
}

/// Draw the control panel with buttons and info
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32), stamp: Option<&Pattern>) {
    draw_panel_background();

    let running = state.is_running();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos, running));

    let px = panel_x() + 4.0;
    let info = [
        (format!("Grid: {}x{}", state.universe.width(), state.universe.height()), 250.0),
        (format!("Generation: {}", state.generation), 270.0),
        (format!("Population: {}", state.universe.population()), 290.0),
        (format!("Speed: {:.0} gen/s", state.scheduler.ticks_per_second()), 310.0),
        (format!("Seed: {}", state.universe.seed().name()), 330.0),
        (format!("Stamp: {}", stamp.map_or("-", |p| p.name)), 350.0),
        (format!("FPS: {}", get_fps()), 370.0),
    ];
    info.iter().for_each(|(text, y)| {
        draw_text(text, px, *y, 16.0, WHITE);
    });

    let controls = [
        "LMB: Toggle cell",
        "Space: Play/Pause",
        "N: Step  R: Reset",
        "C: Clear",
        "Up/Down: Speed",
        "1-8: Pick stamp",
        "RMB/Esc: Cancel stamp",
    ];
    controls
        .iter()
        .enumerate()
        .for_each(|(i, text)| {
            draw_text(text, px, 410.0 + i as f32 * 15.0, 13.0, GRAY);
        });
}
