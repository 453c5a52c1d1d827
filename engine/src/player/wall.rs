//! Wall Contact Probes
//!
//! Short horizontal raycasts used for wall-slide and wall-jump.
//!
//! The probes are cast from the body position in a fixed order: right, left,
//! forward. The first one that hits supplies the wall normal; there is no
//! backward probe, so a wall directly behind the player is never detected.

use glam::Vec3;

use crate::physics::{LayerMask, PhysicsPort, Ray, RaycastHit};

/// Result of probing for a nearby wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallContact {
    /// Outward surface normal of the wall (points toward the player)
    pub normal: Vec3,
    /// The underlying raycast hit
    pub hit: RaycastHit,
}

/// Probe right, left and forward for a wall within `distance`.
///
/// # Arguments
/// * `origin` - Probe origin, usually the body position
/// * `forward` - Horizontal body forward
/// * `right` - Horizontal body right
/// * `distance` - Probe length in meters
/// * `mask` - Layers that count as walls
pub fn probe_wall<P: PhysicsPort + ?Sized>(
    physics: &P,
    origin: Vec3,
    forward: Vec3,
    right: Vec3,
    distance: f32,
    mask: LayerMask,
) -> Option<WallContact> {
    [right, -right, forward]
        .into_iter()
        .find_map(|direction| physics.raycast(Ray::new(origin, direction), distance, mask))
        .map(|hit| WallContact {
            normal: hit.normal,
            hit,
        })
}

/// Per-character wall interaction flags.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallState {
    /// Controlled slow descent against a wall
    pub wall_sliding: bool,
    /// The player has been away from any wall since the last wall-jump.
    /// A wall-jump is only allowed while this is set. Starts cleared, so the
    /// first wall-jump also needs an airborne tick away from walls.
    pub off_wall: bool,
    /// Set by a wall-jump, cleared on landing
    pub cooldown_active: bool,
    /// Controller clock time of the last wall-jump (0 = never / reset on landing)
    pub last_wall_jump_time: f32,
}

impl WallState {
    /// Reset flags on landing.
    pub fn land(&mut self) {
        self.cooldown_active = false;
        self.wall_sliding = false;
        self.last_wall_jump_time = 0.0;
    }

    /// Record a wall-jump at `now`.
    pub fn record_jump(&mut self, now: f32) {
        self.off_wall = false;
        self.cooldown_active = true;
        self.last_wall_jump_time = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Aabb, CollisionScene, EntityId};

    fn scene_with_wall(center: Vec3, half: Vec3) -> CollisionScene {
        let mut scene = CollisionScene::new();
        scene.insert(EntityId(1), Aabb::from_center(center, half), LayerMask::WORLD);
        scene
    }

    /// Probe from eye height at the origin, facing -Z.
    fn probe(scene: &CollisionScene, mask: LayerMask) -> Option<WallContact> {
        probe_wall(scene, Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z, Vec3::X, 0.8, mask)
    }

    #[test]
    fn test_probe_hits_wall_on_right() {
        // Wall face at x = 0.5
        let scene = scene_with_wall(Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.5, 2.0, 5.0));
        let contact = probe(&scene, LayerMask::ALL).expect("wall within reach");
        assert_eq!(contact.normal, Vec3::NEG_X);
        assert!((contact.hit.distance - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_probe_hits_wall_on_left() {
        let scene = scene_with_wall(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(0.5, 2.0, 5.0));
        let contact = probe(&scene, LayerMask::ALL).expect("wall within reach");
        assert_eq!(contact.normal, Vec3::X);
    }

    #[test]
    fn test_probe_hits_wall_in_front() {
        let scene = scene_with_wall(Vec3::new(0.0, 1.0, -1.0), Vec3::new(5.0, 2.0, 0.5));
        let contact = probe(&scene, LayerMask::ALL).expect("wall within reach");
        assert_eq!(contact.normal, Vec3::Z);
    }

    #[test]
    fn test_probe_ignores_wall_behind() {
        let scene = scene_with_wall(Vec3::new(0.0, 1.0, 1.0), Vec3::new(5.0, 2.0, 0.5));
        assert!(probe(&scene, LayerMask::ALL).is_none());
    }

    #[test]
    fn test_probe_respects_distance_and_mask() {
        let scene = scene_with_wall(Vec3::new(2.0, 1.0, 0.0), Vec3::new(0.5, 2.0, 5.0));
        // Face at 1.5 m, beyond the 0.8 m probe
        assert!(probe(&scene, LayerMask::ALL).is_none());

        let near = scene_with_wall(Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.5, 2.0, 5.0));
        assert!(probe(&near, LayerMask::ENEMY).is_none());
    }

    #[test]
    fn test_wall_state_land_and_jump() {
        let mut state = WallState::default();
        assert!(!state.off_wall);
        state.off_wall = true;

        state.record_jump(3.0);
        assert!(!state.off_wall);
        assert!(state.cooldown_active);
        assert_eq!(state.last_wall_jump_time, 3.0);

        state.wall_sliding = true;
        state.land();
        assert!(!state.cooldown_active);
        assert!(!state.wall_sliding);
        assert_eq!(state.last_wall_jump_time, 0.0);
    }
}
