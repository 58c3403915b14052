use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Pattern;
use crate::ui::{Button, ControlAction, Viewport, grid_area_width};

/// Digit keys that pick a preset for stamping, in `all_patterns()` order
const STAMP_KEYS: [KeyCode; 8] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
];

/// Left click toggles a cell, or places the pending stamp.
/// Right click cancels a pending stamp.
pub fn handle_pointer(
    state: &mut GameState,
    patterns: &[Pattern],
    viewport: &Viewport,
    mouse_pos: (f32, f32),
) {
    if mouse_pos.0 >= grid_area_width() {
        return;
    }

    if state.pending_pattern.is_some() && is_mouse_button_pressed(MouseButton::Right) {
        state.pending_pattern = None;
        return;
    }
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    let (x, y) = viewport.to_surface(mouse_pos);
    match state.pending_pattern.and_then(|idx| patterns.get(idx)) {
        Some(pattern) => {
            if state.stamp_at(pattern, x, y, viewport.scale) {
                state.pending_pattern = None;
            }
        }
        None => {
            state.toggle_at(x, y, viewport.scale);
        }
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step_once),
        (KeyCode::R, GameState::reset),
        (KeyCode::C, GameState::clear),
        (KeyCode::Up, |s| s.adjust_speed(5.0)),
        (KeyCode::Down, |s| s.adjust_speed(-5.0)),
    ];

    let mut new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if let Some(idx) = STAMP_KEYS.iter().position(|key| is_key_pressed(*key)) {
        new_state.pending_pattern = Some(idx);
    }
    if is_key_pressed(KeyCode::Escape) {
        new_state.pending_pattern = None;
    }

    new_state
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons.iter().fold(state, |s, btn| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match btn.action() {
            ControlAction::PlayPause => s.toggle_running(),
            ControlAction::Step => s.step_once(),
            ControlAction::Reset => s.reset(),
            ControlAction::Clear => s.clear(),
        }
    })
}
