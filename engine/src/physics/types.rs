//! Physics types
//!
//! Core value types for physics queries: entity handles, layer masks and rays.
//! Math types are re-exported from glam.

use serde::{Deserialize, Serialize};

pub use glam::{Quat, Vec3};

/// Opaque handle for an entity owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// Bit set of collision layers used to filter raycasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: LayerMask = LayerMask(0);
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    /// Static level geometry (floors, walls).
    pub const WORLD: LayerMask = LayerMask(1 << 0);
    /// Damageable enemies.
    pub const ENEMY: LayerMask = LayerMask(1 << 1);
    /// The player's own collider.
    pub const PLAYER: LayerMask = LayerMask(1 << 2);

    /// Whether the two masks share at least one layer.
    #[inline]
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Union of two masks.
    #[inline]
    pub fn with(self, other: LayerMask) -> LayerMask {
        LayerMask(self.0 | other.0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

/// A ray with an origin and a direction.
///
/// The direction is not required to be normalized on construction;
/// raycast implementations normalize it before measuring distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at distance `t` along the normalized direction.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction.normalize_or_zero() * t
    }
}
