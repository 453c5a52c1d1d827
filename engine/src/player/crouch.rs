//! Player Stance System
//!
//! Crouching and sliding both lower the character collider.
//!
//! # Stances
//!
//! - Standing: `standing_height` (2.0m by default)
//! - Crouching: `crouch_height` (1.0m), held while the crouch button is down
//! - Sliding: `crouch_height` for `slide_duration` seconds, then back to standing
//!
//! Height changes are instantaneous. A slide ending restores the standing
//! height even while crouch is held; the next crouch press lowers it again.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wallrun_engine::player::StanceController;
//!
//! let mut stance = StanceController::new();
//!
//! // Each tick:
//! if let Some(height) = stance.handle_crouch(&input, &config) {
//!     body.set_collider_height(height);
//! }
//! let slide = stance.update_slide(dt, now, &input, body.is_grounded(), &config);
//! if let Some(height) = slide.height {
//!     body.set_collider_height(height);
//! }
//! ```

use crate::input::{InputAction, InputSnapshot};

use super::movement_controller::LocomotionConfig;

/// Player stance states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    /// Standing upright at full height
    #[default]
    Standing,
    /// Crouched at reduced height
    Crouching,
    /// Sliding at reduced height, overrides crouching
    Sliding,
}

impl Stance {
    /// Collider height for this stance.
    pub fn height(&self, config: &LocomotionConfig) -> f32 {
        match self {
            Stance::Standing => config.standing_height,
            Stance::Crouching | Stance::Sliding => config.crouch_height,
        }
    }
}

/// What the slide timer did during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlideStep {
    /// An active slide ran out this tick
    pub ended: bool,
    /// A new slide began this tick
    pub started: bool,
    /// Collider height to apply, if it changed
    pub height: Option<f32>,
}

/// Crouch flag plus the slide timer and its cooldown.
#[derive(Debug, Clone)]
pub struct StanceController {
    /// Crouch button is being held (set on press edge, cleared on release edge)
    crouching: bool,

    /// A slide is in progress
    sliding: bool,

    /// Seconds left in the current slide
    slide_time_left: f32,

    /// Controller clock time the last slide began (-1 = never)
    last_slide_time: f32,
}

impl Default for StanceController {
    fn default() -> Self {
        Self {
            crouching: false,
            sliding: false,
            slide_time_left: 0.0,
            last_slide_time: -1.0,
        }
    }
}

impl StanceController {
    /// Create a standing, non-sliding stance controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the crouch flag is set.
    #[inline]
    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    /// Whether a slide is in progress.
    #[inline]
    pub fn is_sliding(&self) -> bool {
        self.sliding
    }

    /// Seconds left in the current slide (meaningless when not sliding).
    #[inline]
    pub fn slide_time_left(&self) -> f32 {
        self.slide_time_left
    }

    /// Clock time the last slide began, or -1 if none has.
    #[inline]
    pub fn last_slide_time(&self) -> f32 {
        self.last_slide_time
    }

    /// Current stance, sliding taking precedence over crouching.
    pub fn stance(&self) -> Stance {
        if self.sliding {
            Stance::Sliding
        } else if self.crouching {
            Stance::Crouching
        } else {
            Stance::Standing
        }
    }

    /// Apply crouch edges. Returns the new collider height on a transition.
    ///
    /// A press edge wins over a release edge in the same snapshot.
    pub fn handle_crouch(
        &mut self,
        input: &InputSnapshot,
        config: &LocomotionConfig,
    ) -> Option<f32> {
        if input.pressed(InputAction::Crouch) {
            self.crouching = true;
            Some(config.crouch_height)
        } else if input.released(InputAction::Crouch) {
            self.crouching = false;
            Some(config.standing_height)
        } else {
            None
        }
    }

    /// Whether a slide may begin at `now`.
    ///
    /// Needs the slide press edge, sprint held, ground contact, and the
    /// cooldown since the last slide start to have strictly elapsed.
    pub fn can_start_slide(
        &self,
        now: f32,
        input: &InputSnapshot,
        grounded: bool,
        config: &LocomotionConfig,
    ) -> bool {
        input.pressed(InputAction::Slide)
            && input.held(InputAction::Sprint)
            && grounded
            && now > self.last_slide_time + config.slide_cooldown
    }

    /// Advance the slide timer and possibly start a new slide.
    pub fn update_slide(
        &mut self,
        dt: f32,
        now: f32,
        input: &InputSnapshot,
        grounded: bool,
        config: &LocomotionConfig,
    ) -> SlideStep {
        let mut step = SlideStep::default();

        if self.sliding {
            self.slide_time_left -= dt;
            if self.slide_time_left <= 0.0 {
                self.sliding = false;
                step.ended = true;
                step.height = Some(config.standing_height);
            }
        }

        if self.can_start_slide(now, input, grounded, config) {
            self.sliding = true;
            self.slide_time_left = config.slide_duration;
            self.last_slide_time = now;
            step.started = true;
            step.height = Some(config.crouch_height);
            log::debug!("Slide started at t={now:.3}s");
        }

        step
    }
}
