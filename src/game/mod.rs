//! Game Module
//!
//! Contains game-specific glue that builds on top of the engine: session
//! configuration and the headless arena loop.

pub mod arena;
pub mod config;

pub use arena::{Arena, ENEMY_HALF_EXTENTS, LoggedMuzzleFlash, StepReport};
pub use config::GameConfig;
