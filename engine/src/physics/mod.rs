//! Physics module
//!
//! Only the queries gameplay code needs: rays, layer masks, and a raycast
//! capability. Collision response, rigid bodies and character sweeps are the
//! host's job.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in m/s, angles in degrees at the API
//! surface.
//!
//! # Submodules
//!
//! - [`types`] - Entity handles, layer masks, rays; glam math re-exports
//! - [`collision`] - Ray-AABB slab test, the [`PhysicsPort`] trait and [`CollisionScene`]

pub mod collision;
pub mod types;

pub use collision::{
    Aabb, Collider, CollisionScene, PhysicsPort, RaycastHit, aabb_surface_normal,
    ray_aabb_intersect,
};
pub use types::{EntityId, LayerMask, Quat, Ray, Vec3};
