//! Player Module
//!
//! First-person character locomotion.
//!
//! # Components
//!
//! - [`LocomotionController`] - Look, walk/sprint/crouch/slide speeds, jumps and wall movement
//!   - Ground jumps, coyote jumps and wall-jumps, reported through [`LocomotionReport`]
//!   - Field-of-view easing per stance
//! - [`StanceController`] - Crouch flag, slide timer and slide cooldown
//! - [`probe_wall`] - Right/left/forward wall probes through a
//!   [`PhysicsPort`](crate::physics::PhysicsPort)
//! - [`CharacterBody`] - Port for the host-owned body

pub mod crouch;
pub mod movement_controller;
pub mod wall;

pub use crouch::{SlideStep, Stance, StanceController};
pub use movement_controller::{
    CharacterBody, JumpKind, LocomotionConfig, LocomotionController, LocomotionReport,
    SpeedTier,
};
pub use wall::{WallContact, WallState, probe_wall};
