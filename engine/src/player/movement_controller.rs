//! Player Locomotion Controller
//!
//! First-person movement for a character body owned by the host.
//! Movement direction is relative to the body's yaw.
//!
//! # Tick Order
//!
//! 1. Look: mouse deltas turn the body and pitch the camera
//! 2. Movement: speed selection, ground or air handling, then a single move
//! 3. Crouch: collider height follows the crouch edges
//! 4. FOV: the camera eases toward the stance's field of view
//! 5. Slide: timer and slide start
//!
//! # Physics Model
//!
//! - Walk speed: 8.0 m/s, sprint 12.0 m/s, crouch 2.5 m/s, slide 12.0 m/s
//! - Gravity: 11.5 m/s^2, 2.5x while fast-falling
//! - Horizontal velocity has no inertia: it is rebuilt from input each tick
//!
//! # Usage
//!
//! ```rust,ignore
//! use wallrun_engine::player::{LocomotionConfig, LocomotionController};
//!
//! let mut controller = LocomotionController::new(LocomotionConfig::default(), &mut camera)?;
//!
//! // Each frame:
//! let report = controller.tick(delta_time, &input, &mut body, &mut camera, &physics);
//! if report.jump.is_some() {
//!     audio.play_jump();
//! }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraRig, DEFAULT_PITCH_LIMIT, FovTween, FpsLook};
use crate::error::{
    ConfigError, require_finite, require_fov, require_non_negative, require_positive,
};
use crate::input::{InputAction, InputSnapshot};
use crate::physics::{LayerMask, PhysicsPort};

use super::crouch::StanceController;
use super::wall::{WallContact, WallState, probe_wall};

/// Character body owned by the host (a capsule controller, a kinematic box...).
pub trait CharacterBody {
    /// Whether the body touched the ground during its last move.
    fn is_grounded(&self) -> bool;

    /// World position of the body; wall probes are cast from here.
    fn position(&self) -> Vec3;

    /// Move by `displacement`, resolving collisions as the host sees fit.
    fn move_by(&mut self, displacement: Vec3);

    /// Resize the collider (crouch/slide).
    fn set_collider_height(&mut self, height: f32);
}

/// Immutable locomotion tuning.
///
/// Every field has a default, so partial JSON files are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Base walking speed in m/s
    pub move_speed: f32,
    /// Speed while sprinting on the ground in m/s
    pub sprint_speed: f32,
    /// Speed while crouched in m/s
    pub crouch_speed: f32,
    /// Speed while sliding in m/s
    pub slide_speed: f32,
    /// Degrees of rotation per mouse axis unit
    pub mouse_sensitivity: f32,
    /// Upward velocity of every jump in m/s
    pub jump_force: f32,
    /// Fraction of `move_speed` added along forward when jumping while sprinting
    pub sprint_jump_boost: f32,
    /// Horizontal push away from the wall on a wall-jump
    pub wall_jump_force: f32,
    /// Nominal wall-jump cooldown in seconds
    pub wall_jump_cooldown: f32,
    /// Constant descent speed while wall-sliding in m/s
    pub wall_slide_speed: f32,
    /// Length of the wall probes in meters
    pub wall_probe_distance: f32,
    /// Layers that count as walls for the probes
    pub wall_layers: LayerMask,
    pub normal_fov: f32,
    pub sprint_fov: f32,
    pub crouch_fov: f32,
    /// Fraction of the remaining FOV distance covered per second
    pub fov_change_speed: f32,
    /// Gravity in m/s^2
    pub gravity: f32,
    /// Gravity multiplier while fast-falling
    pub fast_fall_multiplier: f32,
    pub crouch_height: f32,
    pub standing_height: f32,
    /// Grace period after leaving the ground during which a jump still counts
    pub coyote_time: f32,
    pub slide_duration: f32,
    pub slide_cooldown: f32,
    /// Symmetric camera pitch limit in degrees
    pub pitch_limit: f32,
}

static_assertions::assert_impl_all!(LocomotionConfig: Copy, Send, Sync);

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            sprint_speed: 12.0,
            crouch_speed: 2.5,
            slide_speed: 12.0,
            mouse_sensitivity: 1.5,
            jump_force: 5.0,
            sprint_jump_boost: 0.5,
            wall_jump_force: 12.0,
            wall_jump_cooldown: 1.0,
            wall_slide_speed: 1.0,
            wall_probe_distance: 0.8,
            wall_layers: LayerMask::ALL,
            normal_fov: 60.0,
            sprint_fov: 75.0,
            crouch_fov: 50.0,
            fov_change_speed: 5.0,
            gravity: 11.5,
            fast_fall_multiplier: 2.5,
            crouch_height: 1.0,
            standing_height: 2.0,
            coyote_time: 0.1,
            slide_duration: 0.8,
            slide_cooldown: 1.0,
            pitch_limit: DEFAULT_PITCH_LIMIT,
        }
    }
}

impl LocomotionConfig {
    /// Check every field; the first offending field is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("move_speed", self.move_speed)?;
        require_positive("sprint_speed", self.sprint_speed)?;
        require_positive("crouch_speed", self.crouch_speed)?;
        require_positive("slide_speed", self.slide_speed)?;
        require_finite("mouse_sensitivity", self.mouse_sensitivity)?;
        require_positive("jump_force", self.jump_force)?;
        require_non_negative("sprint_jump_boost", self.sprint_jump_boost)?;
        require_non_negative("wall_jump_force", self.wall_jump_force)?;
        require_non_negative("wall_jump_cooldown", self.wall_jump_cooldown)?;
        require_non_negative("wall_slide_speed", self.wall_slide_speed)?;
        require_positive("wall_probe_distance", self.wall_probe_distance)?;
        require_fov("normal_fov", self.normal_fov)?;
        require_fov("sprint_fov", self.sprint_fov)?;
        require_fov("crouch_fov", self.crouch_fov)?;
        require_positive("fov_change_speed", self.fov_change_speed)?;
        require_non_negative("gravity", self.gravity)?;
        require_non_negative("fast_fall_multiplier", self.fast_fall_multiplier)?;
        require_positive("crouch_height", self.crouch_height)?;
        require_positive("standing_height", self.standing_height)?;
        if self.crouch_height > self.standing_height {
            return Err(ConfigError::CrouchTallerThanStanding {
                crouch: self.crouch_height,
                standing: self.standing_height,
            });
        }
        require_non_negative("coyote_time", self.coyote_time)?;
        require_positive("slide_duration", self.slide_duration)?;
        require_non_negative("slide_cooldown", self.slide_cooldown)?;
        require_positive("pitch_limit", self.pitch_limit)?;
        Ok(())
    }
}

/// Which horizontal speed a tick used, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedTier {
    #[default]
    Walk,
    Sprint,
    Crouch,
    Slide,
}

/// How a jump was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Jump from the ground
    Ground,
    /// Jump shortly after leaving the ground
    Coyote,
    /// Jump off a wall
    Wall,
}

/// What happened during one tick, for audio/animation hooks and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionReport {
    /// Body reported ground contact at the start of the tick
    pub grounded: bool,
    /// Speed tier used for the horizontal move
    pub speed_tier: SpeedTier,
    /// Jump triggered this tick, if any. A wall-jump wins over a coyote jump.
    pub jump: Option<JumpKind>,
    /// Wall-slide flag after this tick
    pub wall_sliding: bool,
    pub slide_started: bool,
    pub slide_ended: bool,
    /// Displacement handed to [`CharacterBody::move_by`]
    pub displacement: Vec3,
    /// Camera field of view after the tween
    pub field_of_view: f32,
}

/// First-person locomotion state machine.
///
/// Owns look orientation, vertical velocity, stance and wall state. Nothing
/// is read from global state: input arrives as an [`InputSnapshot`] and the
/// world is reached only through the ports passed to [`tick`](Self::tick).
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,

    /// Body yaw and camera pitch
    look: FpsLook,

    fov: FovTween,

    /// Crouch flag and slide timer
    stance: StanceController,

    /// Wall-slide and wall-jump flags
    wall: WallState,

    /// Vertical velocity in m/s (positive = upward)
    vertical_velocity: f32,

    /// Runtime bonus added to walk and sprint speed by pickups
    speed_bonus: f32,

    /// Seconds accumulated from tick deltas
    clock: f32,

    /// Clock time of the last tick that started on the ground
    last_grounded_time: f32,
}

impl LocomotionController {
    /// Create a controller and put the camera in its initial state.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the tuning is invalid.
    pub fn new<C: CameraRig + ?Sized>(
        config: LocomotionConfig,
        camera: &mut C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        camera.set_field_of_view(config.normal_fov);
        camera.set_pitch(0.0);

        Ok(Self {
            config,
            look: FpsLook::with_pitch_limit(config.mouse_sensitivity, config.pitch_limit),
            fov: FovTween::new(config.fov_change_speed),
            stance: StanceController::new(),
            wall: WallState::default(),
            vertical_velocity: 0.0,
            speed_bonus: 0.0,
            clock: 0.0,
            last_grounded_time: 0.0,
        })
    }

    /// Advance the controller by `dt` seconds.
    pub fn tick<B, C, P>(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        body: &mut B,
        camera: &mut C,
        physics: &P,
    ) -> LocomotionReport
    where
        B: CharacterBody + ?Sized,
        C: CameraRig + ?Sized,
        P: PhysicsPort + ?Sized,
    {
        self.clock += dt;
        let now = self.clock;
        let mut report = LocomotionReport::default();

        self.handle_look(input, camera);
        self.handle_movement(dt, now, input, body, physics, &mut report);

        if let Some(height) = self.stance.handle_crouch(input, &self.config) {
            body.set_collider_height(height);
        }

        report.field_of_view = self.fov.apply(camera, self.target_fov(input), dt);

        let slide = self
            .stance
            .update_slide(dt, now, input, body.is_grounded(), &self.config);
        if let Some(height) = slide.height {
            body.set_collider_height(height);
        }
        report.slide_started = slide.started;
        report.slide_ended = slide.ended;
        report.wall_sliding = self.wall.wall_sliding;

        report
    }

    fn handle_look<C: CameraRig + ?Sized>(&mut self, input: &InputSnapshot, camera: &mut C) {
        self.look.apply_mouse_delta(input.mouse_x, input.mouse_y);
        camera.set_pitch(self.look.pitch());
    }

    fn handle_movement<B, P>(
        &mut self,
        dt: f32,
        now: f32,
        input: &InputSnapshot,
        body: &mut B,
        physics: &P,
        report: &mut LocomotionReport,
    ) where
        B: CharacterBody + ?Sized,
        P: PhysicsPort + ?Sized,
    {
        let grounded = body.is_grounded();
        let forward = self.look.body_forward();
        let right = self.look.body_right();

        let tier = self.select_speed(input, grounded);
        let mut movement = (right * input.move_x + forward * input.move_z) * self.speed_for(tier);
        let jump_pressed = input.pressed(InputAction::Jump);

        report.grounded = grounded;
        report.speed_tier = tier;

        if grounded {
            self.last_grounded_time = now;
            self.wall.land();
            self.vertical_velocity = -self.config.gravity * dt;

            if jump_pressed && !self.stance.is_crouching() {
                self.vertical_velocity = self.config.jump_force;
                report.jump = Some(JumpKind::Ground);

                if input.held(InputAction::Sprint) {
                    movement += forward * (self.move_speed() * self.config.sprint_jump_boost);
                }
            }
        } else {
            let contact = self.probe_wall(physics, body.position(), forward, right);

            // Wall-slide
            if contact.is_some() && self.vertical_velocity < 0.0 {
                self.wall.wall_sliding = true;
                self.vertical_velocity = -self.config.wall_slide_speed;
            } else {
                self.wall.wall_sliding = false;
            }

            // Coyote jump
            if jump_pressed && now - self.last_grounded_time <= self.config.coyote_time {
                self.vertical_velocity = self.config.jump_force;
                report.jump = Some(JumpKind::Coyote);
            }

            if self.wall.wall_sliding {
                // Descent speed is pinned while sliding down a wall
            } else if input.held(InputAction::FastFall) {
                self.vertical_velocity -=
                    self.config.gravity * self.config.fast_fall_multiplier * dt;
            } else {
                self.vertical_velocity -= self.config.gravity * dt;
            }

            // Wall-jump
            match contact {
                None => self.wall.off_wall = true,
                Some(contact) if self.wall.off_wall && jump_pressed => {
                    movement += contact.normal * self.config.wall_jump_force;
                    self.vertical_velocity = self.config.jump_force;
                    self.wall.record_jump(now);
                    report.jump = Some(JumpKind::Wall);
                    log::debug!("Wall jump off {} at t={now:.3}s", contact.hit.entity);
                }
                Some(_) => {}
            }
        }

        movement.y = self.vertical_velocity;
        let displacement = movement * dt;
        body.move_by(displacement);
        report.displacement = displacement;
    }

    fn probe_wall<P: PhysicsPort + ?Sized>(
        &self,
        physics: &P,
        origin: Vec3,
        forward: Vec3,
        right: Vec3,
    ) -> Option<WallContact> {
        probe_wall(
            physics,
            origin,
            forward,
            right,
            self.config.wall_probe_distance,
            self.config.wall_layers,
        )
    }

    /// Speed tier for this tick: slide > crouch > sprint (on the ground) > walk.
    pub fn select_speed(&self, input: &InputSnapshot, grounded: bool) -> SpeedTier {
        if self.stance.is_sliding() {
            SpeedTier::Slide
        } else if self.stance.is_crouching() {
            SpeedTier::Crouch
        } else if input.held(InputAction::Sprint) && grounded {
            SpeedTier::Sprint
        } else {
            SpeedTier::Walk
        }
    }

    /// Horizontal speed in m/s for a tier, including any pickup bonus.
    pub fn speed_for(&self, tier: SpeedTier) -> f32 {
        match tier {
            SpeedTier::Walk => self.move_speed(),
            SpeedTier::Sprint => self.sprint_speed(),
            SpeedTier::Crouch => self.config.crouch_speed,
            SpeedTier::Slide => self.config.slide_speed,
        }
    }

    fn target_fov(&self, input: &InputSnapshot) -> f32 {
        if input.held(InputAction::Sprint) {
            self.config.sprint_fov
        } else if self.stance.is_crouching() {
            self.config.crouch_fov
        } else {
            self.config.normal_fov
        }
    }

    /// Permanently raise walk and sprint speed by `bonus` m/s.
    pub fn apply_speed_pickup(&mut self, bonus: f32) {
        self.speed_bonus += bonus;
        log::info!(
            "Speed pickup +{bonus}: walk {:.2} m/s, sprint {:.2} m/s",
            self.move_speed(),
            self.sprint_speed()
        );
    }

    /// Walking speed including pickups.
    pub fn move_speed(&self) -> f32 {
        self.config.move_speed + self.speed_bonus
    }

    /// Sprint speed including pickups.
    pub fn sprint_speed(&self) -> f32 {
        self.config.sprint_speed + self.speed_bonus
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn look(&self) -> &FpsLook {
        &self.look
    }

    /// Turn the body to face `yaw` degrees (e.g. at spawn).
    pub fn set_yaw(&mut self, yaw: f32) {
        self.look.set_yaw(yaw);
    }

    /// Body yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.look.yaw()
    }

    /// Camera pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.look.pitch()
    }

    /// Full view direction, for aiming.
    pub fn view_direction(&self) -> Vec3 {
        self.look.view_forward()
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn is_crouching(&self) -> bool {
        self.stance.is_crouching()
    }

    pub fn is_sliding(&self) -> bool {
        self.stance.is_sliding()
    }

    pub fn slide_time_left(&self) -> f32 {
        self.stance.slide_time_left()
    }

    pub fn last_slide_time(&self) -> f32 {
        self.stance.last_slide_time()
    }

    pub fn is_wall_sliding(&self) -> bool {
        self.wall.wall_sliding
    }

    pub fn wall_state(&self) -> &WallState {
        &self.wall
    }

    pub fn last_grounded_time(&self) -> f32 {
        self.last_grounded_time
    }

    pub fn speed_bonus(&self) -> f32 {
        self.speed_bonus
    }

    /// Seconds of simulated time since creation.
    pub fn clock(&self) -> f32 {
        self.clock
    }
}
