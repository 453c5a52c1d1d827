//! Wallrun Engine Library
//!
//! Headless gameplay core for a first-person shooter prototype: player
//! locomotion (look, sprint, crouch, slide, coyote jumps, wall-slide and
//! wall-jump), a hitscan weapon with distance falloff, and hit-point tracking.
//!
//! Everything here is driven by a host-owned loop. The host supplies ports
//! for the pieces it owns (physics queries, the character body, the camera,
//! entity destruction) and feeds an immutable [`input::InputSnapshot`] into
//! each tick.
//!
//! # Modules
//!
//! - [`input`] - Key codes, edge tracking, action bindings and per-tick snapshots
//! - [`camera`] - First-person look and field-of-view tweening
//! - [`physics`] - Rays, layer masks, ray-AABB intersection and the raycast port
//! - [`player`] - The locomotion controller and its stance/wall helpers
//! - [`combat`] - Health, hitscan weapon and damage delivery
//! - [`world`] - A minimal reference host used by the demo and the tests
//!
//! # Example
//!
//! ```ignore
//! use wallrun_engine::input::InputSnapshot;
//! use wallrun_engine::player::{LocomotionConfig, LocomotionController};
//! use wallrun_engine::world::{KinematicBody, SimCamera, World};
//!
//! let mut camera = SimCamera::default();
//! let mut body = KinematicBody::default();
//! let world = World::new();
//! let mut player = LocomotionController::new(LocomotionConfig::default(), &mut camera)?;
//!
//! // Each frame:
//! let report = player.tick(dt, &InputSnapshot::default(), &mut body, &mut camera, &world);
//! ```

pub mod camera;
pub mod combat;
pub mod error;
pub mod input;
pub mod logging;
pub mod physics;
pub mod player;
pub mod world;

// Game-level glue (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use combat::{DamageOutcome, DamageSink, HealthComponent, WeaponComponent, WeaponConfig};
pub use error::ConfigError;
pub use input::{InputAction, InputSnapshot, KeyCode};
pub use physics::{EntityId, LayerMask, PhysicsPort, Ray, RaycastHit};
pub use player::{LocomotionConfig, LocomotionController, LocomotionReport};
