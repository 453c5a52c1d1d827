//! Kinematic body and camera for the reference host.
//!
//! The body stands on an infinite flat floor. The only collision response is
//! "stop at the floor"; walls are detected by the wall probes but never block
//! movement.

use glam::Vec3;

use crate::camera::CameraRig;
use crate::player::CharacterBody;

/// Tolerance for ground contact in meters.
pub const GROUND_EPSILON: f32 = 1e-3;

/// Eye height as a fraction of the collider height.
pub const EYE_HEIGHT_FRACTION: f32 = 0.9;

/// Box-shaped character on a flat floor.
///
/// `position` is the center of the collider, matching where a capsule
/// controller's transform sits.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    position: Vec3,
    height: f32,
    floor_y: f32,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::standing_at(Vec3::ZERO, 2.0, 0.0)
    }
}

impl KinematicBody {
    /// Place a body of `height` with its feet on the floor at `floor_y`,
    /// horizontally at `spot` (the Y of `spot` is ignored).
    pub fn standing_at(spot: Vec3, height: f32, floor_y: f32) -> Self {
        Self {
            position: Vec3::new(spot.x, floor_y + height * 0.5, spot.z),
            height,
            floor_y,
        }
    }

    /// Place a body with its center at `position`, possibly in the air.
    pub fn floating_at(position: Vec3, height: f32, floor_y: f32) -> Self {
        let mut body = Self {
            position,
            height,
            floor_y,
        };
        body.clamp_to_floor();
        body
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn floor_y(&self) -> f32 {
        self.floor_y
    }

    /// Lowest point of the collider.
    pub fn feet_y(&self) -> f32 {
        self.position.y - self.height * 0.5
    }

    /// Camera position.
    pub fn eye_position(&self) -> Vec3 {
        Vec3::new(
            self.position.x,
            self.feet_y() + self.height * EYE_HEIGHT_FRACTION,
            self.position.z,
        )
    }

    fn clamp_to_floor(&mut self) {
        let min_center = self.floor_y + self.height * 0.5;
        if self.position.y < min_center {
            self.position.y = min_center;
        }
    }
}

impl CharacterBody for KinematicBody {
    fn is_grounded(&self) -> bool {
        self.feet_y() <= self.floor_y + GROUND_EPSILON
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn move_by(&mut self, displacement: Vec3) {
        self.position += displacement;
        self.clamp_to_floor();
    }

    /// Resize around the feet so crouching never lifts the body off the floor.
    fn set_collider_height(&mut self, height: f32) {
        let feet = self.feet_y();
        self.height = height;
        self.position.y = feet + height * 0.5;
    }
}

/// Camera state the host would hand to its renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimCamera {
    pub field_of_view: f32,
    pub pitch: f32,
}

impl Default for SimCamera {
    fn default() -> Self {
        Self {
            field_of_view: 60.0,
            pitch: 0.0,
        }
    }
}

impl CameraRig for SimCamera {
    fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    fn set_field_of_view(&mut self, degrees: f32) {
        self.field_of_view = degrees;
    }

    fn set_pitch(&mut self, degrees: f32) {
        self.pitch = degrees;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_body_stands_on_floor() {
        let body = KinematicBody::default();
        assert!(body.is_grounded());
        assert_eq!(body.position(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(body.feet_y(), 0.0);
    }

    #[test]
    fn test_move_stops_at_floor() {
        let mut body = KinematicBody::default();
        body.move_by(Vec3::new(1.0, -5.0, 0.0));
        assert_eq!(body.position(), Vec3::new(1.0, 1.0, 0.0));
        assert!(body.is_grounded());
    }

    #[test]
    fn test_upward_move_leaves_ground() {
        let mut body = KinematicBody::default();
        body.move_by(Vec3::new(0.0, 0.1, 0.0));
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_resize_keeps_feet_planted() {
        let mut body = KinematicBody::default();
        body.set_collider_height(1.0);
        assert_eq!(body.feet_y(), 0.0);
        assert_eq!(body.position().y, 0.5);
        assert!(body.is_grounded());
    }

    #[test]
    fn test_floating_body_is_airborne() {
        let body = KinematicBody::floating_at(Vec3::new(0.0, 5.0, 0.0), 2.0, 0.0);
        assert!(!body.is_grounded());

        let sunk = KinematicBody::floating_at(Vec3::new(0.0, -3.0, 0.0), 2.0, 0.0);
        assert!(sunk.is_grounded());
    }

    #[test]
    fn test_eye_height() {
        let body = KinematicBody::default();
        assert!((body.eye_position().y - 1.8).abs() < 1e-6);
    }
}
