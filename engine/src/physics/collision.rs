//! Collision detection module
//!
//! Ray queries for gameplay code. The [`PhysicsPort`] trait is the capability
//! the host hands to the weapon and to the locomotion wall probes; the
//! [`CollisionScene`] is a small AABB-based implementation of it used by the
//! reference host and the tests.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use wallrun_engine::physics::{Aabb, CollisionScene, EntityId, LayerMask, PhysicsPort, Ray};
//! use glam::Vec3;
//!
//! let mut scene = CollisionScene::new();
//! let target = Aabb::from_center(Vec3::new(0.0, 1.0, -10.0), Vec3::splat(0.5));
//! scene.insert(EntityId(1), target, LayerMask::ENEMY);
//!
//! let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z);
//! if let Some(hit) = scene.raycast(ray, 50.0, LayerMask::ENEMY) {
//!     println!("Hit {} at distance {}", hit.entity, hit.distance);
//! }
//! ```

use glam::Vec3;

use super::types::{EntityId, LayerMask, Ray};

/// Result of a successful raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Distance from the ray origin to the hit point
    pub distance: f32,
    /// World-space position where the collision occurred
    pub point: Vec3,
    /// Outward surface normal at the hit point (normalized)
    pub normal: Vec3,
    /// Entity owning the collider that was hit
    pub entity: EntityId,
}

/// Physics query capability supplied by the host.
///
/// A miss is a normal outcome and is reported as `None`.
pub trait PhysicsPort {
    /// Cast `ray` up to `max_distance`, considering only colliders on `mask`.
    ///
    /// Returns the nearest hit, if any.
    fn raycast(&self, ray: Ray, max_distance: f32, mask: LayerMask) -> Option<RaycastHit>;
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Create a box from its center and half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Whether `point` lies inside or on the surface of the box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Performs ray-AABB (Axis-Aligned Bounding Box) intersection test using the slab method.
///
/// The slab method works by finding the intersection of the ray with each pair of
/// axis-aligned planes that make up the AABB. If the ray enters and exits the AABB
/// at valid times (t_enter < t_exit and t_exit > 0), there is an intersection.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0).
///   A ray starting inside the box reports its exit point.
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let dir = ray_dir[axis];
        let lo = aabb_min[axis];
        let hi = aabb_max[axis];

        if dir.abs() < 1e-10 {
            // Parallel to this slab: must already be inside it
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let t1 = (lo - origin) * inv;
        let t2 = (hi - origin) * inv;

        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 {
            Some(t_min)
        } else {
            // Ray starts inside the AABB
            Some(t_max)
        }
    } else {
        None
    }
}

/// Computes the surface normal for a point on an AABB surface.
///
/// Determines which face of the AABB the point is on and returns the outward normal.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = ((aabb_max - aabb_min) * 0.5).max(Vec3::splat(1e-6));
    let local = point - center;

    // Normalize to unit cube space
    let normalized = local / half_extents;

    // Find which face we're closest to (highest absolute normalized coordinate)
    let abs_normalized = normalized.abs();

    if abs_normalized.x >= abs_normalized.y && abs_normalized.x >= abs_normalized.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs_normalized.y >= abs_normalized.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

/// A collider registered in a [`CollisionScene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub entity: EntityId,
    pub bounds: Aabb,
    pub layers: LayerMask,
}

/// Flat list of AABB colliders answering nearest-hit raycasts.
///
/// Colliders that contain the ray origin are skipped, so a ray cast from
/// inside a wall reports what lies beyond it.
///
/// Linear scan; intended for test arenas with a handful of walls and targets.
#[derive(Debug, Clone, Default)]
pub struct CollisionScene {
    colliders: Vec<Collider>,
}

impl CollisionScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collider for `entity`.
    pub fn insert(&mut self, entity: EntityId, bounds: Aabb, layers: LayerMask) {
        self.colliders.push(Collider {
            entity,
            bounds,
            layers,
        });
    }

    /// Remove every collider owned by `entity`. Returns how many were removed.
    pub fn remove_entity(&mut self, entity: EntityId) -> usize {
        let before = self.colliders.len();
        self.colliders.retain(|c| c.entity != entity);
        before - self.colliders.len()
    }

    /// Whether `entity` owns any collider.
    pub fn contains(&self, entity: EntityId) -> bool {
        self.colliders.iter().any(|c| c.entity == entity)
    }

    /// Number of registered colliders.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether the scene has no colliders.
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Iterate registered colliders.
    pub fn colliders(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter()
    }
}

impl PhysicsPort for CollisionScene {
    fn raycast(&self, ray: Ray, max_distance: f32, mask: LayerMask) -> Option<RaycastHit> {
        let dir = ray.direction.normalize_or_zero();
        if dir == Vec3::ZERO || max_distance < 0.0 {
            return None;
        }

        self.colliders
            .iter()
            .filter(|c| c.layers.intersects(mask) && !c.bounds.contains(ray.origin))
            .filter_map(|c| {
                let t = ray_aabb_intersect(ray.origin, dir, c.bounds.min, c.bounds.max)?;
                (t <= max_distance).then(|| {
                    let point = ray.origin + dir * t;
                    RaycastHit {
                        distance: t,
                        point,
                        normal: aabb_surface_normal(point, c.bounds.min, c.bounds.max),
                        entity: c.entity,
                    }
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
