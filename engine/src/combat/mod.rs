//! Combat Module
//!
//! Hit points and hitscan shooting.
//!
//! The weapon never looks up health components itself: hits are handed to a
//! [`DamageSink`] supplied by the caller, usually the entity roster.

pub mod health;
pub mod weapon;

pub use health::{DamageOutcome, HealthComponent};
pub use weapon::{DamageSink, FireCue, ShotReport, WeaponComponent, WeaponConfig};
