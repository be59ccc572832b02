//! Keyboard polling.
//!
//! [`update_input_state`] reads raylib's keyboard once per frame and writes the
//! snapshot into [`InputState`]. Bindings:
//!
//! | Action | Key |
//! |--------|-----|
//! | move   | arrow keys |
//! | jump   | Space |
//! | quit   | Q |
//! | reset  | R |
//! | debug  | F11 |
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;
use raylib::RaylibHandle;

use crate::resources::input::InputState;

pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<RaylibHandle>) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);

    input.left.update(is_key_down(KeyboardKey::KEY_LEFT));
    input.right.update(is_key_down(KeyboardKey::KEY_RIGHT));
    input.up.update(is_key_down(KeyboardKey::KEY_UP));
    input.down.update(is_key_down(KeyboardKey::KEY_DOWN));
    input.jump.update(is_key_down(KeyboardKey::KEY_SPACE));
    input.quit.update(is_key_down(KeyboardKey::KEY_Q));
    input.reset.update(is_key_down(KeyboardKey::KEY_R));
    input.debug.update(is_key_down(KeyboardKey::KEY_F11));
    input.close_requested = rl.window_should_close();
}
