//! Input Bindings Module
//!
//! Maps logical actions to physical keys so gameplay code never mentions a
//! concrete key. Unlike a strict one-to-one map, several actions may share a
//! key: the default layout uses left control for both crouch and fast-fall.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Jump (default: Space)
    Jump,
    /// Sprint modifier (default: Shift)
    Sprint,
    /// Crouch toggle on press/release (default: Left Ctrl)
    Crouch,
    /// Fast-fall while airborne (default: Left Ctrl)
    FastFall,
    /// Slide trigger, needs sprint held (default: Left Alt)
    Slide,
    /// Fire the weapon (default: left mouse button)
    Fire,
}

impl InputAction {
    /// Every action, in a stable order.
    pub const ALL: [InputAction; 10] = [
        InputAction::MoveForward,
        InputAction::MoveBack,
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::Jump,
        InputAction::Sprint,
        InputAction::Crouch,
        InputAction::FastFall,
        InputAction::Slide,
        InputAction::Fire,
    ];
}

/// Maps logical actions to physical keys.
///
/// Serializes as a plain `{ "Jump": "Space", ... }` object so bindings can
/// live in the game's JSON tuning file; unbound actions are written as `null`.
/// Deserializing applies the object as overrides on top of
/// [`KeyBindings::new`]: listed actions are rebound, a `null` key unbinds the
/// action, and unlisted actions keep their default.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - W/S/A/D = movement
    /// - Space = Jump
    /// - Shift (Left) = Sprint
    /// - Ctrl (Left) = Crouch and FastFall
    /// - Alt (Left) = Slide
    /// - Mouse (Left) = Fire
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::ShiftLeft, InputAction::Sprint);
        bindings.bind(KeyCode::ControlLeft, InputAction::Crouch);
        bindings.bind(KeyCode::ControlLeft, InputAction::FastFall);
        bindings.bind(KeyCode::AltLeft, InputAction::Slide);
        bindings.bind(KeyCode::MouseLeft, InputAction::Fire);

        bindings
    }

    /// Create a binding table with nothing bound.
    pub fn empty() -> Self {
        Self {
            action_to_key: HashMap::new(),
        }
    }

    /// Bind an action to a physical key, replacing the action's previous key.
    ///
    /// Other actions already on `key` keep their binding.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.action_to_key.insert(action, key);
    }

    /// Remove the binding for a specific action.
    pub fn unbind_action(&mut self, action: InputAction) {
        self.action_to_key.remove(&action);
    }

    /// Remove every action bound to `key`.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.action_to_key.retain(|_, bound| *bound != key);
    }

    /// Get the key bound to a logical action, if any.
    pub fn get_key(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }

    /// Iterate the actions bound to a physical key.
    pub fn actions_for(&self, key: KeyCode) -> impl Iterator<Item = InputAction> + '_ {
        self.action_to_key
            .iter()
            .filter(move |(_, bound)| **bound == key)
            .map(|(action, _)| *action)
    }
}

impl Serialize for KeyBindings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(InputAction::ALL.len()))?;
        for action in InputAction::ALL {
            map.serialize_entry(&action, &self.get_key(action))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let overrides = HashMap::<InputAction, Option<KeyCode>>::deserialize(deserializer)?;

        let mut bindings = KeyBindings::new();
        for (action, key) in overrides {
            match key {
                Some(key) => bindings.bind(key, action),
                None => bindings.unbind_action(action),
            }
        }
        Ok(bindings)
    }
}
