use crate::application::Session;
use crate::domain::{Cell, Seed};
use macroquad::prelude::*;

/// Route pointer input to the session.
/// While running, a left click stamps a glider at the cursor. While
/// paused, holding the left button paints cells alive and the right
/// button erases them.
pub fn handle_pointer(session: &mut Session) {
    let (x, y) = mouse_position();

    if session.is_running() {
        if is_mouse_button_pressed(MouseButton::Left) {
            session.stamp_at(x, y);
        }
        return;
    }

    if is_mouse_button_down(MouseButton::Left) {
        session.paint_at(x, y, Cell::Alive);
    } else if is_mouse_button_down(MouseButton::Right) {
        session.paint_at(x, y, Cell::Dead);
    }
}

/// Route keyboard input to the session
pub fn handle_keyboard(session: &mut Session) {
    type KeyAction = (KeyCode, fn(&mut Session));

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, Session::toggle_running),
        (KeyCode::C, Session::clear),
        (KeyCode::R, |s| s.reseed(&Seed::default())),
        (KeyCode::L, |s| s.reseed(&Seed::lightweight_spaceship())),
        (KeyCode::S, Session::step_once),
    ];

    for (key, action) in actions {
        if is_key_pressed(key) {
            action(session);
        }
    }
}
