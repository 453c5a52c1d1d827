//! Input Module
//!
//! Platform-agnostic input handling. The host feeds raw key and mouse events
//! into an [`InputSampler`]; once per tick the sampler produces an immutable
//! [`InputSnapshot`] that every gameplay component reads. Nothing in the
//! engine polls global input state.
//!
//! # Example
//!
//! ```rust,ignore
//! use wallrun_engine::input::{InputSampler, KeyCode};
//!
//! let mut sampler = InputSampler::default();
//!
//! // In the event loop:
//! sampler.handle_key(KeyCode::W, true);
//! sampler.accumulate_mouse(12.0, -3.0);
//!
//! // Once per tick:
//! let input = sampler.snapshot();
//! controller.tick(dt, &input, &mut body, &mut camera, &world);
//! ```

pub mod bindings;
pub mod keyboard;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{KeyCode, KeyboardState};

/// Held state plus edges of one logical button during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Button is down this tick.
    pub held: bool,
    /// Button went down this tick.
    pub pressed: bool,
    /// Button went up this tick.
    pub released: bool,
}

/// Immutable per-tick input.
///
/// Axes follow the usual FPS convention: `move_x` is strafe (+right),
/// `move_z` is forward (+forward), `mouse_x` turns right, `mouse_y` looks up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Strafe axis in [-1, 1].
    pub move_x: f32,
    /// Forward axis in [-1, 1].
    pub move_z: f32,
    /// Horizontal look delta in axis units.
    pub mouse_x: f32,
    /// Vertical look delta in axis units (positive = look up).
    pub mouse_y: f32,
    buttons: [ButtonState; InputAction::ALL.len()],
}

static_assertions::assert_impl_all!(InputSnapshot: Copy, Send, Sync);

impl InputSnapshot {
    /// Snapshot with no input at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a logical button.
    #[inline]
    pub fn button(&self, action: InputAction) -> ButtonState {
        self.buttons[action as usize]
    }

    /// Whether the action's button is down this tick.
    #[inline]
    pub fn held(&self, action: InputAction) -> bool {
        self.button(action).held
    }

    /// Whether the action's button went down this tick.
    #[inline]
    pub fn pressed(&self, action: InputAction) -> bool {
        self.button(action).pressed
    }

    /// Whether the action's button went up this tick.
    #[inline]
    pub fn released(&self, action: InputAction) -> bool {
        self.button(action).released
    }

    /// Set the movement axes.
    pub fn with_axes(mut self, move_x: f32, move_z: f32) -> Self {
        self.move_x = move_x;
        self.move_z = move_z;
        self
    }

    /// Set the look deltas.
    pub fn with_mouse(mut self, mouse_x: f32, mouse_y: f32) -> Self {
        self.mouse_x = mouse_x;
        self.mouse_y = mouse_y;
        self
    }

    /// Mark the action as held without an edge.
    pub fn holding(mut self, action: InputAction) -> Self {
        self.buttons[action as usize].held = true;
        self
    }

    /// Mark the action as pressed this tick (held + press edge).
    pub fn pressing(mut self, action: InputAction) -> Self {
        let button = &mut self.buttons[action as usize];
        button.held = true;
        button.pressed = true;
        self
    }

    /// Mark the action as released this tick.
    pub fn releasing(mut self, action: InputAction) -> Self {
        let button = &mut self.buttons[action as usize];
        button.held = false;
        button.released = true;
        self
    }

    /// Replace the state of one button.
    pub fn with_button(mut self, action: InputAction, state: ButtonState) -> Self {
        self.buttons[action as usize] = state;
        self
    }
}

/// Collects raw key and mouse events between ticks and turns them into
/// [`InputSnapshot`]s through a [`KeyBindings`] table.
///
/// Mouse motion accumulates until the next snapshot, so several motion
/// events within one frame add up instead of overwriting each other.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    keyboard: KeyboardState,
    bindings: KeyBindings,
    mouse_dx: f32,
    mouse_dy: f32,
}

impl InputSampler {
    /// Create a sampler with the given bindings.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    /// Current binding table.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Record a key press or release.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        self.keyboard.handle_key(key, pressed);
    }

    /// Accumulate raw look motion (`dy` positive = look up).
    #[inline]
    pub fn accumulate_mouse(&mut self, dx: f32, dy: f32) {
        self.mouse_dx += dx;
        self.mouse_dy += dy;
    }

    /// Build this tick's snapshot and start a new frame.
    ///
    /// Consumes the accumulated mouse delta and the latched key edges, so the
    /// next snapshot only reports edges that arrive after this call.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let mut snapshot = InputSnapshot::new();

        for action in InputAction::ALL {
            if let Some(key) = self.bindings.get_key(action) {
                snapshot = snapshot.with_button(
                    action,
                    ButtonState {
                        held: self.keyboard.is_held(key),
                        pressed: self.keyboard.was_pressed(key),
                        released: self.keyboard.was_released(key),
                    },
                );
            }
        }

        let axis = |positive: InputAction, negative: InputAction| -> f32 {
            let pos = if snapshot.held(positive) { 1.0 } else { 0.0 };
            let neg = if snapshot.held(negative) { 1.0 } else { 0.0 };
            pos - neg
        };
        let move_x = axis(InputAction::MoveRight, InputAction::MoveLeft);
        let move_z = axis(InputAction::MoveForward, InputAction::MoveBack);

        snapshot = snapshot
            .with_axes(move_x, move_z)
            .with_mouse(self.mouse_dx, self.mouse_dy);

        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
        self.keyboard.end_frame();

        snapshot
    }

    /// Drop all held keys and pending motion (e.g. when focus is lost).
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
    }
}
