//! World Module
//!
//! A minimal host for the gameplay components: an entity roster with
//! colliders and health, a kinematic body on a flat floor, and a camera.
//! Used by the demo binary and the integration tests.

pub mod body;
pub mod roster;

pub use body::{EYE_HEIGHT_FRACTION, GROUND_EPSILON, KinematicBody, SimCamera};
pub use roster::{Roster, World};
