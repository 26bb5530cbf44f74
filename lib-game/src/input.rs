use macroquad::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct InputModel {
    /// Position of a left mouse button press this frame.
    pub click: Option<Vec2>,
    pub menu_toggle_requested: bool,
    pub confirmation_detected: bool,
    pub respawn_requested: bool,
    pub fullscreen_toggle_requested: bool,
    pub dump_toggle_requested: bool,
}

impl InputModel {
    pub fn capture() -> Self {
        let click = is_mouse_button_pressed(MouseButton::Left).then(|| Vec2::from(mouse_position()));
        let menu_toggle_requested = is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::Right);
        let confirmation_detected =
            is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter);
        let respawn_requested = is_key_pressed(KeyCode::R);
        let fullscreen_toggle_requested = is_key_pressed(KeyCode::F11);
        let dump_toggle_requested = is_key_pressed(KeyCode::F3);

        Self {
            click,
            menu_toggle_requested,
            confirmation_detected,
            respawn_requested,
            fullscreen_toggle_requested,
            dump_toggle_requested,
        }
    }
}
