//! FPS Look Controller Module
//!
//! Mouse look for a first-person character. Yaw belongs to the body and
//! accumulates without bound; pitch belongs to the camera and is clamped so
//! the view never flips over the top.
//!
//! Angles are in degrees: mouse axis units multiplied by the sensitivity are
//! degrees, the same convention the locomotion tuning uses.
//!
//! - Direct mouse input -> rotation (no smoothing)
//! - Pitch clamped to ±90 degrees by default

use glam::Vec3;

/// Default pitch limit in degrees.
pub const DEFAULT_PITCH_LIMIT: f32 = 90.0;

/// First-person look state.
///
/// ## Usage
/// ```rust,ignore
/// let mut look = FpsLook::new(1.5);
///
/// // Once per tick with the snapshot's look deltas
/// look.apply_mouse_delta(input.mouse_x, input.mouse_y);
///
/// let forward = look.body_forward();
/// let right = look.body_right();
/// camera.set_pitch(look.pitch());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FpsLook {
    /// Body heading in degrees - unrestricted, wraps around
    yaw: f32,
    /// Camera pitch in degrees - clamped to ±pitch_limit
    pitch: f32,
    /// Degrees per mouse axis unit
    sensitivity: f32,
    /// Symmetric pitch limit in degrees
    pitch_limit: f32,
}

impl Default for FpsLook {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 1.5,
            pitch_limit: DEFAULT_PITCH_LIMIT,
        }
    }
}

impl FpsLook {
    /// Create a look controller with the given sensitivity.
    pub fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Default::default()
        }
    }

    /// Create a look controller with a custom symmetric pitch limit.
    pub fn with_pitch_limit(sensitivity: f32, pitch_limit: f32) -> Self {
        Self {
            sensitivity,
            pitch_limit: pitch_limit.abs(),
            ..Default::default()
        }
    }

    /// Body yaw in degrees.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Camera pitch in degrees (positive = looking up).
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Mouse sensitivity in degrees per axis unit.
    #[inline]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Pitch limit in degrees.
    #[inline]
    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit
    }

    /// Set the yaw directly (degrees).
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Set the pitch directly (degrees, clamped to the limit).
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Apply one tick of look input.
    ///
    /// # Arguments
    /// * `mouse_x` - Horizontal axis. Positive = turn right (increase yaw)
    /// * `mouse_y` - Vertical axis. Positive = look up (increase pitch)
    ///
    /// The camera's local X rotation is the negated pitch; that is what
    /// [`camera_rotation_x`](Self::camera_rotation_x) reports.
    pub fn apply_mouse_delta(&mut self, mouse_x: f32, mouse_y: f32) {
        self.yaw += mouse_x * self.sensitivity;

        // Camera X rotation decreases with upward mouse motion; pitch is its negation
        let rotation_x = (-self.pitch - mouse_y * self.sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
        self.pitch = -rotation_x;
    }

    /// The camera's local X-axis rotation in degrees (positive = looking down).
    #[inline]
    pub fn camera_rotation_x(&self) -> f32 {
        -self.pitch
    }

    /// Horizontal forward direction of the body.
    ///
    /// # Coordinate System
    /// - +X = right
    /// - +Y = up
    /// - -Z = forward at yaw 0
    #[inline]
    pub fn body_forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.sin(), 0.0, -yaw.cos())
    }

    /// Horizontal right direction of the body.
    #[inline]
    pub fn body_right(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    /// Full view direction including pitch (used to aim hitscan weapons).
    #[inline]
    pub fn view_forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
        .normalize()
    }

    /// Reset orientation to the default (looking toward -Z, level).
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}
