use bridge_engine::{keys, InputEvent};
use macroquad::input::{get_keys_pressed, get_keys_released, KeyCode};

/// Engine key code for a macroquad key, if the engine knows it.
pub fn key_code(key: KeyCode) -> Option<u32> {
    match key {
        KeyCode::Space => Some(keys::SPACE),
        KeyCode::Enter => Some(keys::ENTER),
        KeyCode::Escape => Some(keys::ESCAPE),
        _ => None,
    }
}

/// Key transitions since the previous frame, as engine events.
pub fn poll_keys() -> Vec<InputEvent> {
    let pressed = get_keys_pressed()
        .into_iter()
        .filter_map(key_code)
        .map(|key_code| InputEvent::KeyDown { key_code });
    let released = get_keys_released()
        .into_iter()
        .filter_map(key_code)
        .map(|key_code| InputEvent::KeyUp { key_code });
    pressed.chain(released).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_keys_only() {
        assert_eq!(key_code(KeyCode::Space), Some(32));
        assert_eq!(key_code(KeyCode::Escape), Some(27));
        assert_eq!(key_code(KeyCode::A), None);
    }
}
