//! Field of view
//!
//! The [`CameraRig`] port the host implements for the first-person camera,
//! and the frame-rate scaled tween that eases the field of view toward a
//! target.

/// Writable first-person camera owned by the host.
///
/// Gameplay code only touches the vertical field of view and the camera's
/// pitch; yaw lives on the character body.
pub trait CameraRig {
    /// Current vertical field of view in degrees.
    fn field_of_view(&self) -> f32;

    /// Set the vertical field of view in degrees.
    fn set_field_of_view(&mut self, degrees: f32);

    /// Set the camera pitch in degrees (positive = looking up).
    fn set_pitch(&mut self, degrees: f32);
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp_clamped(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Eases a field of view toward a target at a fixed rate per second.
///
/// Each step covers `clamp01(speed * dt)` of the remaining distance, so the
/// value converges exponentially and never overshoots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovTween {
    /// Fraction of the remaining distance covered per second
    pub speed: f32,
}

impl FovTween {
    /// Create a tween with the given rate.
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Next field of view after `dt` seconds.
    #[inline]
    pub fn step(&self, current: f32, target: f32, dt: f32) -> f32 {
        lerp_clamped(current, target, self.speed * dt)
    }

    /// Step the rig's field of view toward `target`.
    pub fn apply<C: CameraRig + ?Sized>(&self, camera: &mut C, target: f32, dt: f32) -> f32 {
        let fov = self.step(camera.field_of_view(), target, dt);
        camera.set_field_of_view(fov);
        fov
    }
}
