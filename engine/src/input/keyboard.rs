//! Keyboard Input Module
//!
//! Key codes and a held/edge tracker. Decoupled from any windowing system:
//! the host translates its own key events into [`KeyCode`] and calls
//! [`KeyboardState::handle_key`].

use std::collections::HashSet;

/// Generic key codes, independent of the windowing system.
///
/// Mouse buttons are included so that "Fire1" can be bound like any key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys (alternate movement bindings)
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    // Misc
    C,
    E,
    Q,
    R,
    Escape,

    // Mouse buttons
    MouseLeft,
    MouseRight,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Held-key tracker with per-frame press and release latches.
///
/// `handle_key` may be called any number of times between frames. Edges are
/// latched as events arrive, so a key pressed and released within one frame
/// still reports both edges. The host calls [`KeyboardState::end_frame`] once
/// per frame to clear the latches.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
    released: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release event.
    ///
    /// OS key repeat (a press for a key already down) does not latch a new edge.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if key == KeyCode::Unknown {
            return;
        }
        if pressed {
            if self.held.insert(key) {
                self.pressed.insert(key);
            }
        } else if self.held.remove(&key) {
            self.released.insert(key);
        }
    }

    /// Whether the key is currently held down.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether the key went down since the last [`end_frame`](Self::end_frame).
    pub fn was_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether the key went up since the last [`end_frame`](Self::end_frame).
    pub fn was_released(&self, key: KeyCode) -> bool {
        self.released.contains(&key)
    }

    /// Close the current frame and clear the edge latches.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    /// Release every key without producing release edges.
    pub fn reset(&mut self) {
        self.held.clear();
        self.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_default_nothing_held() {
        let keys = KeyboardState::new();
        assert!(!keys.is_held(KeyCode::W));
        assert!(!keys.was_pressed(KeyCode::W));
        assert!(!keys.was_released(KeyCode::W));
    }

    #[test]
    fn test_press_edge_only_on_first_frame() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::Space, true);
        assert!(keys.was_pressed(KeyCode::Space));
        assert!(keys.is_held(KeyCode::Space));

        keys.end_frame();
        // Still held, but no new edge
        assert!(keys.is_held(KeyCode::Space));
        assert!(!keys.was_pressed(KeyCode::Space));
    }

    #[test]
    fn test_release_edge() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::ControlLeft, true);
        keys.end_frame();
        keys.handle_key(KeyCode::ControlLeft, false);

        assert!(keys.was_released(KeyCode::ControlLeft));
        assert!(!keys.is_held(KeyCode::ControlLeft));

        keys.end_frame();
        assert!(!keys.was_released(KeyCode::ControlLeft));
    }

    #[test]
    fn test_tap_within_one_frame_latches_both_edges() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::Space, true);
        keys.handle_key(KeyCode::Space, false);
        assert!(keys.was_pressed(KeyCode::Space));
        assert!(keys.was_released(KeyCode::Space));
        assert!(!keys.is_held(KeyCode::Space));

        keys.end_frame();
        assert!(!keys.was_pressed(KeyCode::Space));
        assert!(!keys.was_released(KeyCode::Space));
    }

    #[test]
    fn test_key_repeat_does_not_latch_again() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::MouseLeft, true);
        keys.end_frame();
        keys.handle_key(KeyCode::MouseLeft, true);
        assert!(keys.is_held(KeyCode::MouseLeft));
        assert!(!keys.was_pressed(KeyCode::MouseLeft));
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::Unknown, true);
        assert!(!keys.is_held(KeyCode::Unknown));
    }

    #[test]
    fn test_reset_clears_without_release_edge() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::W, true);
        keys.end_frame();
        keys.reset();
        assert!(!keys.is_held(KeyCode::W));
        assert!(!keys.was_released(KeyCode::W));
    }
}
